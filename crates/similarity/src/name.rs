//! Identifier normalization for similarity comparison
//!
//! Strips naming-convention noise from identifiers so that two
//! differently-decorated names referring to the same concept compare
//! equitably: `getUserName`, `user_name` and `UserNameDto` all normalize
//! to `user name`.

/// Leading words that mark an accessor role rather than domain meaning.
const ROLE_PREFIXES: &[&str] = &["get", "set", "is"];

/// Trailing words that mark a type convention rather than domain meaning.
const TYPE_SUFFIXES: &[&str] = &["dto", "entity", "model", "impl", "bean"];

/// Normalize an identifier to its comparable base form.
///
/// Splits on separators and camelCase boundaries, lowercases, strips
/// role prefixes and type suffixes (never consuming the last remaining
/// word), and joins the survivors with single spaces. Deterministic and
/// total; already-bare input passes through lowercased.
pub fn normalize(raw: &str) -> String {
    let mut words = split_words(raw);

    while words.len() > 1 && ROLE_PREFIXES.contains(&words[0].as_str()) {
        words.remove(0);
    }
    while words.len() > 1
        && words
            .last()
            .is_some_and(|w| TYPE_SUFFIXES.contains(&w.as_str()))
    {
        words.pop();
    }

    words.join(" ")
}

/// Split an identifier into lowercase words.
///
/// Splits on any non-alphanumeric separator, then on camelCase boundaries
/// including acronym runs (`HTTPResponse` splits as `http` + `response`).
fn split_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();

    for chunk in raw.split(|c: char| !c.is_alphanumeric()) {
        if chunk.is_empty() {
            continue;
        }
        for part in split_camel_case(chunk) {
            words.push(part.to_lowercase());
        }
    }

    words
}

/// Split a camelCase or PascalCase string into components.
fn split_camel_case(s: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();
    let mut prev_char: Option<char> = None;

    while let Some(ch) = chars.next() {
        let should_split = if let Some(prev) = prev_char {
            // lowercase → uppercase transition (camelCase)
            (prev.is_lowercase() && ch.is_uppercase())
                // uppercase run followed by lowercase (HTTPResponse)
                || (prev.is_uppercase()
                    && ch.is_uppercase()
                    && chars.peek().is_some_and(|next| next.is_lowercase()))
        } else {
            false
        };

        if should_split && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }

        current.push(ch);
        prev_char = Some(ch);
    }

    if !current.is_empty() {
        result.push(current);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_getter_prefix() {
        assert_eq!(normalize("getUserName"), "user name");
        assert_eq!(normalize("setAmount"), "amount");
        assert_eq!(normalize("isActive"), "active");
    }

    #[test]
    fn strips_type_suffix() {
        assert_eq!(normalize("OrderDto"), "order");
        assert_eq!(normalize("CustomerEntity"), "customer");
        assert_eq!(normalize("user_model"), "user");
    }

    #[test]
    fn splits_snake_and_camel_case() {
        assert_eq!(normalize("order_total"), "order total");
        assert_eq!(normalize("orderTotal"), "order total");
        assert_eq!(normalize("OrderTotal"), "order total");
    }

    #[test]
    fn handles_acronym_runs() {
        assert_eq!(normalize("HTTPResponse"), "http response");
        assert_eq!(normalize("customerID"), "customer id");
    }

    #[test]
    fn bare_input_passes_through_lowercased() {
        assert_eq!(normalize("id"), "id");
        assert_eq!(normalize("Amount"), "amount");
    }

    #[test]
    fn never_strips_the_last_word() {
        assert_eq!(normalize("get"), "get");
        assert_eq!(normalize("entity"), "entity");
        assert_eq!(normalize("getDto"), "dto");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("___"), "");
    }
}

use derive_builder::Builder;
use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use strum_macros::{Display, EnumString};

/// Kind of data entity recovered from source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    Record,
    Struct,
    Table,
    Document,
}

/// Source location information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start_line: usize,
    pub end_line: usize,
    pub start_column: usize,
    pub end_column: usize,
}

/// A named field of a data entity.
///
/// Type information is carried along when the extractor can recover it,
/// but similarity scoring operates on field names only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityField {
    /// Field name as declared in source
    pub name: String,

    /// Declared type, if the extractor recovered one
    pub type_name: Option<String>,
}

impl EntityField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
        }
    }

    pub fn with_type(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: Some(type_name.into()),
        }
    }
}

/// A structured data entity recovered from source code.
///
/// Entities are produced and owned by the extraction layer and handed to
/// downstream components by reference; nothing downstream mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct DataEntity {
    /// Simple name of the entity (e.g. the class or table name)
    pub name: String,

    /// Declared fields, in declaration order
    #[builder(default = "Vec::new()")]
    pub fields: Vec<EntityField>,

    /// Kind of source construct the entity was recovered from
    #[builder(default = "EntityKind::Class")]
    pub kind: EntityKind,

    /// Source file the entity was extracted from
    #[builder(default = "None")]
    pub file_path: Option<PathBuf>,

    /// Source location in the file
    #[builder(default = "None")]
    pub location: Option<SourceLocation>,

    /// Extractor-attached hints (ORM annotations, schema names, ...)
    #[builder(default = "ImHashMap::new()")]
    pub attributes: ImHashMap<String, String>,
}

impl DataEntity {
    /// Convenience constructor for an entity with name and fields only.
    pub fn new(name: impl Into<String>, fields: Vec<EntityField>) -> Self {
        Self {
            name: name.into(),
            fields,
            kind: EntityKind::Class,
            file_path: None,
            location: None,
            attributes: ImHashMap::new(),
        }
    }
}

/// Shared handle to a [`DataEntity`].
///
/// Entity identity is handle identity: two handles name the same entity
/// only if they point at the same allocation. Use [`same_entity`] rather
/// than comparing contents.
pub type EntityRef = Arc<DataEntity>;

/// Compare two entity handles for identity (not structural equality).
pub fn same_entity(one: &EntityRef, two: &EntityRef) -> bool {
    Arc::ptr_eq(one, two)
}

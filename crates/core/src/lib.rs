//! Core types for the archmap architecture-recovery tool
//!
//! This crate provides the shared data model handed between archmap
//! components:
//!
//! - **Entities**: structured data entities recovered from source code
//! - **Error handling**: unified error types
//!
//! Extraction (parsing source into entities) and reporting live in other
//! components; this crate only defines what they exchange.

pub mod entities;
pub mod error;

// Re-export main types for convenience
pub use entities::{
    same_entity, DataEntity, DataEntityBuilder, EntityField, EntityKind, EntityRef, SourceLocation,
};
pub use error::{Error, Result, ResultExt};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entities::{DataEntity, EntityField, EntityRef};
    pub use crate::error::{Result, ResultExt};
}

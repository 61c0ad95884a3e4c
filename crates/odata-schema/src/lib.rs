//! Document schema description model for odata-mongo
//!
//! The types here describe what a persistence collaborator declares about a
//! collection: an ordered set of field paths with kinds and options. They are
//! the immutable input of the metadata compiler in `odata-edm`.

pub mod field;
pub mod schema;

pub use field::{ElementDeclaration, FieldKind, FieldOptions, SchemaField};
pub use schema::{DocumentSchema, SchemaPartition, PATH_SEPARATOR};

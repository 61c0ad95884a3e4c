//! # odata-mongo
//!
//! An OData 4.0 metadata layer for MongoDB-style document stores.
//!
//! The crate compiles declared document schemas into a CSDL JSON Entity Data
//! Model description: entity types with a seeded `id` key, complex types
//! synthesized for embedded structures and dotted field paths, bound action
//! and function descriptors, and one entity container tying it together. The
//! HTTP pipeline, hook chains, query translation, and persistence itself are
//! collaborator layers; this crate produces what they consume, the metadata
//! document and the per-resource name-mapping tables.
//!
//! ## Quick Start
//!
//! ```
//! use odata_mongo::resources::{EntityResource, ResourceRegistry};
//! use odata_mongo::schema::{DocumentSchema, FieldKind, SchemaField};
//!
//! let schema = DocumentSchema::new()
//!     .with(SchemaField::new("title", FieldKind::String))
//!     .with(SchemaField::new("price", FieldKind::Number));
//!
//! let mut registry = ResourceRegistry::new();
//! registry.register_entity(EntityResource::new("book", schema)).unwrap();
//!
//! let document = registry.metadata_document().unwrap();
//! assert_eq!(document.keys().next(), Some("$Version"));
//! assert!(document.get("book").is_some());
//! ```

pub use odata_edm as edm;
pub use odata_resources as resources;
pub use odata_schema as schema;

/// Commonly used types, re-exported for glob import.
pub mod prelude {
	pub use odata_edm::{
		CompiledEntity, EdmError, EdmProperty, PropertyMappingTable, SchemaCompiler,
	};
	pub use odata_resources::{
		BindingKind, EntityResource, FunctionParameter, FunctionResource, MetadataDocument,
		ResourceError, ResourceRegistry,
	};
	pub use odata_schema::{DocumentSchema, ElementDeclaration, FieldKind, SchemaField};
}

//! EDM metadata compilation for odata-mongo
//!
//! Turns a declared [`odata_schema::DocumentSchema`] into the typed pieces of
//! a CSDL JSON document: an entity type descriptor, the complex types
//! synthesized for embedded structures, and the property mapping table the
//! query translator resolves exposed names through.
//!
//! Compilation is synchronous, CPU-bound recursion with no ambient state; a
//! [`CompiledEntity`] is immutable once returned.

pub mod compiler;
pub mod descriptor;
pub mod error;
pub mod identifier;
pub mod mapping;
pub mod property;
pub mod registry;
pub mod types;

pub use compiler::{CompileContext, CompiledEntity, SchemaCompiler};
pub use descriptor::{
	object_id_definition, ComplexTypeDescriptor, EntityTypeDescriptor, TypeDefinitionDescriptor,
};
pub use error::{EdmError, Result};
pub use identifier::{
	is_valid_identifier, sanitize_path_segment, validate_identifier, validate_qualified_name,
	MAX_IDENTIFIER_LENGTH,
};
pub use mapping::{MappingEntry, PropertyMappingTable};
pub use property::EdmProperty;
pub use registry::ComplexTypeRegistry;
pub use types::{
	object_id_type, primitive_type, EDM_BOOLEAN, EDM_DATE_TIME_OFFSET, EDM_DOUBLE, EDM_STRING,
	ID_PROPERTY, ID_STORAGE_PATH, OBJECT_ID_MAX_LENGTH, OBJECT_ID_TYPE,
};

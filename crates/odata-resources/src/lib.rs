//! Resource registry and metadata document assembly for odata-mongo
//!
//! Entity and function resources register here in exposure order; entity
//! schemas compile eagerly at registration, and
//! [`ResourceRegistry::metadata_document`] folds everything into the CSDL
//! JSON document an HTTP collaborator serves at `$metadata`.

pub mod action;
pub mod error;
pub mod function;
pub mod metadata;
pub mod registry;
pub mod resource;

pub use action::{ActionDescriptor, ActionParameter, BindingKind, BoundAction};
pub use error::{ResourceError, Result};
pub use function::{FunctionDescriptor, FunctionParameter, FunctionResource, ReturnType};
pub use metadata::{MetadataAssembler, MetadataDocument, EDM_VERSION};
pub use registry::{RegisteredResource, ResourceRegistry, DEFAULT_NAMESPACE};
pub use resource::{
	EntityResource, RegisteredEntity, ResourceOptions, DEFAULT_MAX_SKIP, DEFAULT_MAX_TOP,
};

use odata_edm::EdmError;
use thiserror::Error;

/// Errors raised while registering resources or assembling the metadata
/// document.
#[derive(Debug, Error)]
pub enum ResourceError {
	/// A resource name was registered twice
	#[error("Resource '{0}' is already registered")]
	DuplicateResource(String),

	/// A lookup referenced a name no resource was registered under
	#[error("Resource '{0}' is not registered")]
	UnknownResource(String),

	/// A bound action was declared twice on the same resource
	#[error("Action '{action}' is already declared on resource '{resource}'")]
	DuplicateAction { resource: String, action: String },

	/// A compilation error surfaced during registration or assembly
	#[error(transparent)]
	Edm(#[from] EdmError),

	/// A descriptor could not be serialized into the document
	#[error("Failed to serialize metadata document: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for resource registration and document assembly.
pub type Result<T> = std::result::Result<T, ResourceError>;

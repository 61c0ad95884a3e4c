use thiserror::Error;

/// Errors raised while compiling a schema into EDM metadata.
///
/// All variants are fatal: compilation either fully succeeds or fully fails,
/// and nothing is retried. Unsupported field kinds are not represented here;
/// such fields are omitted from the output, not rejected.
#[derive(Debug, Error)]
pub enum EdmError {
	/// A declared or synthesized name fails the identifier grammar
	#[error("Identifier '{0}' is not a valid OData simple identifier")]
	InvalidIdentifier(String),

	/// Two complex types synthesized to the same name
	#[error("Complex type with name {0} already exists")]
	NameCollision(String),

	/// Two storage paths would expose the same name
	#[error("Mapping for property '{0}' is already set")]
	DuplicateMapping(String),
}

/// Result type for EDM compilation.
pub type Result<T> = std::result::Result<T, EdmError>;

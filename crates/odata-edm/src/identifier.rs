//! OData simple-identifier grammar

use crate::error::{EdmError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of an OData simple identifier.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

static SIMPLE_IDENTIFIER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,127}$").expect("identifier pattern"));

/// Whether a name conforms to the simple-identifier grammar: a leading
/// letter or underscore followed by letters, digits, or underscores, at
/// most [`MAX_IDENTIFIER_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// use odata_edm::is_valid_identifier;
///
/// assert!(is_valid_identifier("publish_date"));
/// assert!(is_valid_identifier("_private"));
/// assert!(!is_valid_identifier("2fast"));
/// assert!(!is_valid_identifier("no-dashes"));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
	SIMPLE_IDENTIFIER.is_match(name)
}

/// Validates a name against the simple-identifier grammar.
///
/// # Errors
///
/// Returns [`EdmError::InvalidIdentifier`] if the name does not conform.
pub fn validate_identifier(name: &str) -> Result<()> {
	if is_valid_identifier(name) {
		Ok(())
	} else {
		Err(EdmError::InvalidIdentifier(name.to_string()))
	}
}

/// Validates a dotted qualified name (e.g. a namespace or a namespace-
/// qualified type): every `.`-separated segment must be a simple identifier.
///
/// # Errors
///
/// Returns [`EdmError::InvalidIdentifier`] carrying the full name if any
/// segment does not conform.
pub fn validate_qualified_name(name: &str) -> Result<()> {
	if !name.is_empty() && name.split('.').all(is_valid_identifier) {
		Ok(())
	} else {
		Err(EdmError::InvalidIdentifier(name.to_string()))
	}
}

/// Maps an arbitrary storage path segment onto the identifier grammar by
/// substituting `_` for every disallowed character. A leading digit gets an
/// underscore prefix; the result is truncated to the identifier length
/// limit.
///
/// A field whose sanitized name differs from its storage path must register
/// a property mapping entry so the query translator can resolve it back.
///
/// # Examples
///
/// ```
/// use odata_edm::sanitize_path_segment;
///
/// assert_eq!(sanitize_path_segment("publish_date"), "publish_date");
/// assert_eq!(sanitize_path_segment("publish-date"), "publish_date");
/// assert_eq!(sanitize_path_segment("3d"), "_3d");
/// ```
pub fn sanitize_path_segment(segment: &str) -> String {
	let mut sanitized: String = segment
		.chars()
		.map(|ch| {
			if ch == '_' || ch.is_ascii_alphanumeric() {
				ch
			} else {
				'_'
			}
		})
		.collect();

	if sanitized
		.chars()
		.next()
		.is_none_or(|first| first.is_ascii_digit())
	{
		sanitized.insert(0, '_');
	}
	sanitized.truncate(MAX_IDENTIFIER_LENGTH);
	sanitized
}

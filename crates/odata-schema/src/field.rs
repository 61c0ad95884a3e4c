//! Field kinds and per-field options for document schemas

use crate::schema::DocumentSchema;
use serde_json::Value;

/// Storage-level kind of a declared field.
///
/// This is a closed set: every declaration the store can produce maps onto
/// exactly one variant, and `Unsupported` captures declarations the protocol
/// cannot express. The compiler matches exhaustively, so an unsupported field
/// is an explicit omission rather than a default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
	/// Storage object identifier (24-character hex string).
	ObjectId,
	/// Boolean flag.
	Boolean,
	/// Numeric value; the store does not distinguish integer widths.
	Number,
	/// Timestamp with offset.
	Date,
	/// UTF-8 string, optionally length-bounded.
	String,
	/// Array whose elements are a single primitive kind.
	ArrayOfPrimitive,
	/// Array whose elements follow a nested document schema.
	ArrayOfEmbedded,
	/// Embedded sub-document declared with its own schema.
	Embedded,
	/// Declaration the protocol has no representation for.
	Unsupported,
}

impl FieldKind {
	/// Whether a declared default value is carried into the compiled
	/// property. Arrays and object identifiers never expose defaults.
	pub fn propagates_default(self) -> bool {
		!matches!(
			self,
			Self::ObjectId | Self::ArrayOfPrimitive | Self::ArrayOfEmbedded | Self::Unsupported
		)
	}
}

/// Element declaration for an array field.
///
/// Enumerated declarations wrap an underlying primitive kind; the compiler
/// only ever sees the underlying kind.
///
/// # Examples
///
/// ```
/// use odata_schema::{ElementDeclaration, FieldKind};
///
/// let plain = ElementDeclaration::Kind(FieldKind::String);
/// let wrapped = ElementDeclaration::Enum(FieldKind::String);
/// assert_eq!(plain.underlying(), FieldKind::String);
/// assert_eq!(wrapped.underlying(), FieldKind::String);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementDeclaration {
	/// Plain element kind.
	Kind(FieldKind),
	/// Enumeration over values of the wrapped kind.
	Enum(FieldKind),
}

impl ElementDeclaration {
	/// Unwraps the declaration to the element's underlying kind.
	pub fn underlying(self) -> FieldKind {
		match self {
			Self::Kind(kind) | Self::Enum(kind) => kind,
		}
	}
}

/// Declaration-time options of a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
	/// Maximum length for string fields.
	pub max_length: Option<u64>,
	/// Declared default value.
	pub default_value: Option<Value>,
	/// Element declaration for array fields.
	pub element: Option<ElementDeclaration>,
}

/// One declared field: a storage path (possibly dotted), its kind, options,
/// and a nested schema for embedded declarations.
///
/// # Examples
///
/// ```
/// use odata_schema::{FieldKind, SchemaField};
///
/// let field = SchemaField::new("title", FieldKind::String).max_length(256);
/// assert_eq!(field.path, "title");
/// assert_eq!(field.options.max_length, Some(256));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
	/// Storage field path; nested fields use `.` separators.
	pub path: String,
	/// Declared kind.
	pub kind: FieldKind,
	/// Declaration options.
	pub options: FieldOptions,
	/// Nested schema for `Embedded` and `ArrayOfEmbedded` declarations.
	pub nested: Option<DocumentSchema>,
}

impl SchemaField {
	/// Creates a field declaration with empty options.
	pub fn new(path: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			path: path.into(),
			kind,
			options: FieldOptions::default(),
			nested: None,
		}
	}

	/// Sets the maximum length for a string field.
	pub fn max_length(mut self, max_length: u64) -> Self {
		self.options.max_length = Some(max_length);
		self
	}

	/// Sets the declared default value.
	pub fn default_value(mut self, value: impl Into<Value>) -> Self {
		self.options.default_value = Some(value.into());
		self
	}

	/// Sets the element declaration of an array field.
	pub fn element(mut self, element: ElementDeclaration) -> Self {
		self.options.element = Some(element);
		self
	}

	/// Attaches the nested schema of an embedded declaration.
	pub fn nested(mut self, schema: DocumentSchema) -> Self {
		self.nested = Some(schema);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_element_declaration_unwraps_enum_wrapper() {
		assert_eq!(
			ElementDeclaration::Enum(FieldKind::String).underlying(),
			FieldKind::String
		);
		assert_eq!(
			ElementDeclaration::Kind(FieldKind::Number).underlying(),
			FieldKind::Number
		);
	}

	#[test]
	fn test_default_propagation_excludes_arrays_and_object_ids() {
		assert!(FieldKind::String.propagates_default());
		assert!(FieldKind::Number.propagates_default());
		assert!(FieldKind::Boolean.propagates_default());
		assert!(FieldKind::Date.propagates_default());
		assert!(FieldKind::Embedded.propagates_default());

		assert!(!FieldKind::ObjectId.propagates_default());
		assert!(!FieldKind::ArrayOfPrimitive.propagates_default());
		assert!(!FieldKind::ArrayOfEmbedded.propagates_default());
		assert!(!FieldKind::Unsupported.propagates_default());
	}

	#[test]
	fn test_field_builder_collects_options() {
		let field = SchemaField::new("price", FieldKind::Number).default_value(0);
		assert_eq!(field.options.default_value, Some(serde_json::json!(0)));
		assert_eq!(field.options.max_length, None);
	}
}

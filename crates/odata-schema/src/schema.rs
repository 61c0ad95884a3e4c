//! Ordered document schemas and dotted-path grouping

use crate::field::SchemaField;
use indexmap::IndexMap;

/// Separator between path segments of nested storage fields.
pub const PATH_SEPARATOR: char = '.';

/// Bookkeeping path the storage engine injects into every document; never
/// part of the exposed schema.
const VERSION_KEY: &str = "__v";

/// An ordered set of field declarations, keyed by storage path.
///
/// Declaration order is preserved and fixes the property order of the
/// compiled metadata.
///
/// # Examples
///
/// ```
/// use odata_schema::{DocumentSchema, FieldKind, SchemaField};
///
/// let schema = DocumentSchema::new()
///     .with(SchemaField::new("title", FieldKind::String))
///     .with(SchemaField::new("price", FieldKind::Number));
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSchema {
	fields: IndexMap<String, SchemaField>,
}

/// Result of splitting a schema into flat fields and dotted groups.
///
/// `groups` maps each first path segment to the pseudo-schema of its
/// suffix paths; the compiler turns every group into a synthesized
/// complex type.
#[derive(Debug)]
pub struct SchemaPartition<'a> {
	/// Fields whose path has no separator, in declaration order.
	pub simple: Vec<&'a SchemaField>,
	/// Dotted fields grouped by first path segment, suffix paths keeping
	/// their original declaration.
	pub groups: IndexMap<String, DocumentSchema>,
}

impl DocumentSchema {
	/// Creates an empty schema.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field declaration, consuming and returning the schema.
	///
	/// A redeclared path replaces the earlier declaration in place. The
	/// storage engine's version key is never part of the schema and is
	/// dropped here.
	pub fn with(mut self, field: SchemaField) -> Self {
		self.insert(field);
		self
	}

	/// Adds a field declaration in place. See [`DocumentSchema::with`].
	pub fn insert(&mut self, field: SchemaField) {
		if field.path == VERSION_KEY {
			tracing::trace!(path = %field.path, "dropped storage bookkeeping path");
			return;
		}
		self.fields.insert(field.path.clone(), field);
	}

	/// Looks up a declaration by storage path.
	pub fn get(&self, path: &str) -> Option<&SchemaField> {
		self.fields.get(path)
	}

	/// Iterates declarations in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = &SchemaField> {
		self.fields.values()
	}

	/// Number of declared fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the schema has no declarations.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Splits the schema into simple fields and dotted groups.
	///
	/// Each dotted field lands in the group of its first path segment; the
	/// suffix past the separator becomes the field's path inside the group's
	/// pseudo-schema, options and nested schemas preserved.
	///
	/// # Examples
	///
	/// ```
	/// use odata_schema::{DocumentSchema, FieldKind, SchemaField};
	///
	/// let schema = DocumentSchema::new()
	///     .with(SchemaField::new("title", FieldKind::String))
	///     .with(SchemaField::new("address.street", FieldKind::String))
	///     .with(SchemaField::new("address.city", FieldKind::String));
	/// let partition = schema.partition();
	/// assert_eq!(partition.simple.len(), 1);
	/// assert_eq!(partition.groups.len(), 1);
	/// assert_eq!(partition.groups["address"].len(), 2);
	/// ```
	pub fn partition(&self) -> SchemaPartition<'_> {
		let mut simple = Vec::new();
		let mut groups: IndexMap<String, DocumentSchema> = IndexMap::new();

		for field in self.fields.values() {
			match field.path.split_once(PATH_SEPARATOR) {
				None => simple.push(field),
				Some((prefix, suffix)) => {
					let mut nested = field.clone();
					nested.path = suffix.to_string();
					groups.entry(prefix.to_string()).or_default().insert(nested);
				}
			}
		}

		SchemaPartition { simple, groups }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldKind;

	#[test]
	fn test_declaration_order_is_preserved() {
		let schema = DocumentSchema::new()
			.with(SchemaField::new("b", FieldKind::String))
			.with(SchemaField::new("a", FieldKind::Number));
		let paths: Vec<&str> = schema.fields().map(|f| f.path.as_str()).collect();
		assert_eq!(paths, ["b", "a"]);
	}

	#[test]
	fn test_version_key_is_dropped() {
		let schema = DocumentSchema::new()
			.with(SchemaField::new("__v", FieldKind::Number))
			.with(SchemaField::new("title", FieldKind::String));
		assert_eq!(schema.len(), 1);
		assert!(schema.get("__v").is_none());
	}

	#[test]
	fn test_redeclared_path_replaces_in_place() {
		let schema = DocumentSchema::new()
			.with(SchemaField::new("title", FieldKind::Number))
			.with(SchemaField::new("price", FieldKind::Number))
			.with(SchemaField::new("title", FieldKind::String));
		assert_eq!(schema.len(), 2);
		assert_eq!(schema.get("title").unwrap().kind, FieldKind::String);
		let paths: Vec<&str> = schema.fields().map(|f| f.path.as_str()).collect();
		assert_eq!(paths, ["title", "price"]);
	}

	#[test]
	fn test_partition_groups_by_first_segment() {
		let schema = DocumentSchema::new()
			.with(SchemaField::new("address.street", FieldKind::String))
			.with(SchemaField::new("title", FieldKind::String))
			.with(SchemaField::new("address.geo.lat", FieldKind::Number));
		let partition = schema.partition();

		assert_eq!(partition.simple.len(), 1);
		assert_eq!(partition.simple[0].path, "title");

		let address = &partition.groups["address"];
		assert!(address.get("street").is_some());
		assert!(address.get("geo.lat").is_some());
	}

	#[test]
	fn test_partition_preserves_options() {
		let schema = DocumentSchema::new()
			.with(SchemaField::new("meta.note", FieldKind::String).max_length(64));
		let partition = schema.partition();
		let note = partition.groups["meta"].get("note").unwrap();
		assert_eq!(note.options.max_length, Some(64));
	}
}

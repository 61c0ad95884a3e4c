//! Bidirectional exposed-name / storage-path mapping

use crate::error::{EdmError, Result};
use crate::property::EdmProperty;
use crate::types::{object_id_type, ID_PROPERTY, ID_STORAGE_PATH};
use indexmap::IndexMap;

/// One exposed-name binding: the storage path it resolves to and, for the
/// seeded key entry, the fixed attributes of the exposed property.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingEntry {
	storage_path: String,
	attributes: Option<EdmProperty>,
}

impl MappingEntry {
	/// The storage path this exposed name resolves to.
	pub fn storage_path(&self) -> &str {
		&self.storage_path
	}

	/// Fixed property attributes, present only on the seeded key entry.
	pub fn attributes(&self) -> Option<&EdmProperty> {
		self.attributes.as_ref()
	}
}

/// Per-entity registry of exposed-name ↔ storage-path bindings.
///
/// Populated only for fields whose storage path cannot be used verbatim as an
/// exposed identifier. The `id → _id` entry is pre-seeded at construction and
/// immutable; the external query translator resolves `$filter`/`$orderby`
/// targets through [`PropertyMappingTable::lookup`].
///
/// # Examples
///
/// ```
/// use odata_edm::PropertyMappingTable;
///
/// let mut mapping = PropertyMappingTable::new("mongo.odata");
/// mapping.add("publish-date", "publish_date").unwrap();
/// assert_eq!(mapping.lookup("publish_date"), Some("publish-date"));
/// assert_eq!(mapping.lookup("id"), Some("_id"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyMappingTable {
	entries: IndexMap<String, MappingEntry>,
}

impl PropertyMappingTable {
	/// Creates a table with the immutable `id → _id` entry pre-seeded.
	pub fn new(namespace: &str) -> Self {
		let mut entries = IndexMap::new();
		entries.insert(
			ID_PROPERTY.to_string(),
			MappingEntry {
				storage_path: ID_STORAGE_PATH.to_string(),
				attributes: Some(EdmProperty::new(object_id_type(namespace)).nullable(false)),
			},
		);
		Self { entries }
	}

	/// Binds an exposed name to a storage path.
	///
	/// # Errors
	///
	/// Returns [`EdmError::DuplicateMapping`] if the exposed name is already
	/// bound (including the seeded `id` entry).
	pub fn add(&mut self, storage_path: &str, exposed_name: &str) -> Result<()> {
		if self.entries.contains_key(exposed_name) {
			return Err(EdmError::DuplicateMapping(exposed_name.to_string()));
		}
		tracing::debug!(storage_path, exposed_name, "registered property mapping");
		self.entries.insert(
			exposed_name.to_string(),
			MappingEntry {
				storage_path: storage_path.to_string(),
				attributes: None,
			},
		);
		Ok(())
	}

	/// Resolves an exposed name to its storage path.
	pub fn lookup(&self, exposed_name: &str) -> Option<&str> {
		self.entries
			.get(exposed_name)
			.map(|entry| entry.storage_path.as_str())
	}

	/// Resolves a storage path back to its exposed name.
	pub fn reverse(&self, storage_path: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(_, entry)| entry.storage_path == storage_path)
			.map(|(exposed, _)| exposed.as_str())
	}

	/// Fixed attributes bound to an exposed name, if any.
	pub fn attributes(&self, exposed_name: &str) -> Option<&EdmProperty> {
		self.entries
			.get(exposed_name)
			.and_then(|entry| entry.attributes.as_ref())
	}

	/// Whether an exposed name is bound.
	pub fn contains(&self, exposed_name: &str) -> bool {
		self.entries.contains_key(exposed_name)
	}

	/// Iterates entries in insertion order, seeded `id` first.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
		self.entries
			.iter()
			.map(|(exposed, entry)| (exposed.as_str(), entry))
	}

	/// Number of bound names (the seed included).
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the table is empty; never true, the seed is always present.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_id_entry_is_seeded_with_attributes() {
		let mapping = PropertyMappingTable::new("mongo.odata");
		assert_eq!(mapping.lookup("id"), Some("_id"));
		assert_eq!(mapping.reverse("_id"), Some("id"));

		let attributes = mapping.attributes("id").unwrap();
		assert_eq!(attributes.edm_type, "mongo.odata.ObjectId");
		assert_eq!(attributes.nullable, Some(false));
	}

	#[test]
	fn test_seeded_id_entry_is_immutable() {
		let mut mapping = PropertyMappingTable::new("mongo.odata");
		assert!(matches!(
			mapping.add("something", "id"),
			Err(EdmError::DuplicateMapping(name)) if name == "id"
		));
	}

	#[test]
	fn test_duplicate_exposed_name_fails() {
		let mut mapping = PropertyMappingTable::new("mongo.odata");
		mapping.add("a-b", "a_b").unwrap();
		assert!(matches!(
			mapping.add("a.b", "a_b"),
			Err(EdmError::DuplicateMapping(name)) if name == "a_b"
		));
		// the first binding survives
		assert_eq!(mapping.lookup("a_b"), Some("a-b"));
	}

	#[test]
	fn test_added_entries_carry_no_attributes() {
		let mut mapping = PropertyMappingTable::new("mongo.odata");
		mapping.add("publish-date", "publish_date").unwrap();
		assert!(mapping.attributes("publish_date").is_none());
	}
}

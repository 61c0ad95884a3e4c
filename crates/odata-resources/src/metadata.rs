//! Metadata document assembly
//!
//! Folds every registered resource (compiled entity types, synthesized
//! complex types, bound actions, functions) plus the built-in
//! object-identifier type definition and the entity container into one CSDL
//! JSON document. Assembly is eager and whole-document: any fatal error
//! aborts the entire document.

use crate::error::Result;
use crate::registry::{RegisteredResource, ResourceRegistry};
use indexmap::IndexMap;
use odata_edm::{object_id_definition, EdmError, OBJECT_ID_TYPE};
use serde::Serialize;
use serde_json::{json, Value};

/// Protocol version of the emitted document.
pub const EDM_VERSION: &str = "4.0";

/// The assembled CSDL JSON document, members in emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetadataDocument {
	entries: IndexMap<String, Value>,
}

impl MetadataDocument {
	/// Looks up a top-level member.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.entries.get(name)
	}

	/// Iterates top-level member names in emission order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Number of top-level members.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the document has no members; never true for an assembled
	/// document.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// The document as a JSON value.
	pub fn to_value(&self) -> Value {
		Value::Object(
			self.entries
				.iter()
				.map(|(name, value)| (name.clone(), value.clone()))
				.collect(),
		)
	}
}

/// Folds a [`ResourceRegistry`] into a [`MetadataDocument`].
#[derive(Debug)]
pub struct MetadataAssembler<'a> {
	registry: &'a ResourceRegistry,
}

impl<'a> MetadataAssembler<'a> {
	/// Creates an assembler over a registry.
	pub fn new(registry: &'a ResourceRegistry) -> Self {
		Self { registry }
	}

	/// Assembles the whole document.
	///
	/// # Errors
	///
	/// Returns [`EdmError::NameCollision`] (wrapped) if two descriptors land
	/// on the same document member, or a serialization error if a descriptor
	/// cannot be converted; either aborts the document.
	pub fn assemble(&self) -> Result<MetadataDocument> {
		let namespace = self.registry.namespace();
		let mut entries = IndexMap::new();
		let mut container = IndexMap::new();

		entries.insert("$Version".to_string(), json!(EDM_VERSION));
		entries.insert(
			OBJECT_ID_TYPE.to_string(),
			serde_json::to_value(object_id_definition())?,
		);
		container.insert("$Kind".to_string(), json!("EntityContainer"));

		for (name, resource) in self.registry.iter() {
			match resource {
				RegisteredResource::Entity(entity) => {
					Self::insert_unique(
						&mut entries,
						name,
						serde_json::to_value(entity.metadata())?,
					)?;
					for (type_name, complex_type) in entity.complex_types().iter() {
						Self::insert_unique(
							&mut entries,
							type_name,
							serde_json::to_value(complex_type)?,
						)?;
					}
					for action in entity.actions() {
						Self::insert_unique(
							&mut entries,
							action.name(),
							serde_json::to_value(action.descriptor(name, namespace))?,
						)?;
					}
					container.insert(
						name.to_string(),
						json!({ "$Collection": true, "$Type": format!("{namespace}.{name}") }),
					);
				}
				RegisteredResource::Function(function) => {
					Self::insert_unique(
						&mut entries,
						name,
						serde_json::to_value(function.descriptor())?,
					)?;
					container.insert(
						name.to_string(),
						json!({ "$Function": format!("{namespace}.{name}") }),
					);
				}
			}
		}

		entries.insert("$EntityContainer".to_string(), json!(namespace));
		Self::insert_unique(
			&mut entries,
			namespace,
			Value::Object(container.into_iter().collect()),
		)?;

		tracing::debug!(members = entries.len(), "assembled metadata document");
		Ok(MetadataDocument { entries })
	}

	fn insert_unique(
		entries: &mut IndexMap<String, Value>,
		name: &str,
		value: Value,
	) -> Result<()> {
		if entries.contains_key(name) {
			return Err(EdmError::NameCollision(name.to_string()).into());
		}
		entries.insert(name.to_string(), value);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_registry_still_emits_the_document_skeleton() {
		let registry = ResourceRegistry::new();
		let document = MetadataAssembler::new(&registry).assemble().unwrap();

		let keys: Vec<&str> = document.keys().collect();
		assert_eq!(
			keys,
			["$Version", "ObjectId", "$EntityContainer", "mongo.odata"]
		);
		assert_eq!(document.get("$Version"), Some(&json!("4.0")));
		assert_eq!(
			document.get("mongo.odata"),
			Some(&json!({ "$Kind": "EntityContainer" }))
		);
	}
}

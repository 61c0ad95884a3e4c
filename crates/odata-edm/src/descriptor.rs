//! Structured-type descriptors of the compiled metadata

use crate::property::EdmProperty;
use crate::types::{object_id_type, EDM_STRING, ID_PROPERTY, OBJECT_ID_MAX_LENGTH};
use indexmap::IndexMap;
use serde::Serialize;

/// A named scalar type definition, e.g. the document object-identifier type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDefinitionDescriptor {
	#[serde(rename = "$Kind")]
	kind: &'static str,
	/// Scalar type the definition is based on.
	#[serde(rename = "$UnderlyingType")]
	pub underlying_type: String,
	/// Length bound of the underlying scalar.
	#[serde(rename = "$MaxLength")]
	pub max_length: u64,
}

/// The built-in object-identifier type definition: a bounded-length string
/// underlying every document key.
pub fn object_id_definition() -> TypeDefinitionDescriptor {
	TypeDefinitionDescriptor {
		kind: "TypeDefinition",
		underlying_type: EDM_STRING.to_string(),
		max_length: OBJECT_ID_MAX_LENGTH,
	}
}

/// A keyed structured type representing one addressable resource.
///
/// The `id` key property is seeded at construction, typed as the
/// namespace-qualified object-identifier type and non-nullable; the walk
/// never overwrites it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityTypeDescriptor {
	#[serde(rename = "$Kind")]
	kind: &'static str,
	#[serde(rename = "$Key")]
	key: Vec<String>,
	#[serde(flatten)]
	properties: IndexMap<String, EdmProperty>,
}

impl EntityTypeDescriptor {
	pub(crate) fn new(namespace: &str) -> Self {
		let mut properties = IndexMap::new();
		properties.insert(
			ID_PROPERTY.to_string(),
			EdmProperty::new(object_id_type(namespace)).nullable(false),
		);
		Self {
			kind: "EntityType",
			key: vec![ID_PROPERTY.to_string()],
			properties,
		}
	}

	pub(crate) fn insert(&mut self, name: String, property: EdmProperty) {
		self.properties.insert(name, property);
	}

	/// The declared key property names.
	pub fn key(&self) -> &[String] {
		&self.key
	}

	/// Looks up a compiled property by exposed name.
	pub fn property(&self, name: &str) -> Option<&EdmProperty> {
		self.properties.get(name)
	}

	/// The compiled properties in output order, `id` first.
	pub fn properties(&self) -> &IndexMap<String, EdmProperty> {
		&self.properties
	}
}

/// A keyless structured type synthesized for an embedded structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexTypeDescriptor {
	#[serde(rename = "$Kind")]
	kind: &'static str,
	#[serde(flatten)]
	properties: IndexMap<String, EdmProperty>,
}

impl Default for ComplexTypeDescriptor {
	fn default() -> Self {
		Self::new()
	}
}

impl ComplexTypeDescriptor {
	/// Creates an empty complex type.
	pub fn new() -> Self {
		Self {
			kind: "ComplexType",
			properties: IndexMap::new(),
		}
	}

	pub(crate) fn from_properties(properties: IndexMap<String, EdmProperty>) -> Self {
		Self {
			kind: "ComplexType",
			properties,
		}
	}

	/// Looks up a compiled property by exposed name.
	pub fn property(&self, name: &str) -> Option<&EdmProperty> {
		self.properties.get(name)
	}

	/// The compiled properties in output order.
	pub fn properties(&self) -> &IndexMap<String, EdmProperty> {
		&self.properties
	}
}

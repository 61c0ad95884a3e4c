//! Compiled property descriptors

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The compiled, protocol-facing shape of one field.
///
/// Optional members serialize only when set; in particular `$Collection` is
/// omitted rather than written as `false`.
///
/// # Examples
///
/// ```
/// use odata_edm::EdmProperty;
///
/// let property = EdmProperty::new("Edm.String").max_length(256);
/// let json = serde_json::to_value(&property).unwrap();
/// assert_eq!(json, serde_json::json!({"$Type": "Edm.String", "$MaxLength": 256}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdmProperty {
	/// Scalar type name or namespace-qualified complex-type name.
	#[serde(rename = "$Type")]
	pub edm_type: String,

	/// Set to `true` for array-valued properties, omitted otherwise.
	#[serde(rename = "$Collection", default, skip_serializing_if = "Option::is_none")]
	pub collection: Option<bool>,

	/// Maximum string length, when declared.
	#[serde(rename = "$MaxLength", default, skip_serializing_if = "Option::is_none")]
	pub max_length: Option<u64>,

	/// Nullability; only the seeded key property sets this.
	#[serde(rename = "$Nullable", default, skip_serializing_if = "Option::is_none")]
	pub nullable: Option<bool>,

	/// Declared default value, when the kind propagates one.
	#[serde(rename = "$DefaultValue", default, skip_serializing_if = "Option::is_none")]
	pub default_value: Option<Value>,
}

impl EdmProperty {
	/// Creates a property descriptor of the given type.
	pub fn new(edm_type: impl Into<String>) -> Self {
		Self {
			edm_type: edm_type.into(),
			collection: None,
			max_length: None,
			nullable: None,
			default_value: None,
		}
	}

	/// Marks the property as array-valued.
	pub fn collection(mut self) -> Self {
		self.collection = Some(true);
		self
	}

	/// Sets the maximum length.
	pub fn max_length(mut self, max_length: u64) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Sets nullability.
	pub fn nullable(mut self, nullable: bool) -> Self {
		self.nullable = Some(nullable);
		self
	}

	/// Sets the default value.
	pub fn default_value(mut self, value: Value) -> Self {
		self.default_value = Some(value);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_unset_members_are_omitted() {
		let json = serde_json::to_value(EdmProperty::new("Edm.Boolean")).unwrap();
		assert_eq!(json, json!({"$Type": "Edm.Boolean"}));
	}

	#[test]
	fn test_collection_serializes_as_true_never_false() {
		let json = serde_json::to_value(EdmProperty::new("Edm.String").collection()).unwrap();
		assert_eq!(json, json!({"$Type": "Edm.String", "$Collection": true}));
	}

	#[test]
	fn test_full_descriptor_round_trips() {
		let property = EdmProperty::new("Edm.Double")
			.nullable(false)
			.default_value(json!(0));
		let json = serde_json::to_value(&property).unwrap();
		let back: EdmProperty = serde_json::from_value(json).unwrap();
		assert_eq!(back, property);
	}
}

//! Scalar type mapping between storage field kinds and EDM type names

use odata_schema::FieldKind;

/// EDM boolean scalar type.
pub const EDM_BOOLEAN: &str = "Edm.Boolean";
/// EDM double scalar type; the store does not distinguish numeric widths.
pub const EDM_DOUBLE: &str = "Edm.Double";
/// EDM timestamp scalar type.
pub const EDM_DATE_TIME_OFFSET: &str = "Edm.DateTimeOffset";
/// EDM string scalar type.
pub const EDM_STRING: &str = "Edm.String";

/// Unqualified name of the object-identifier type definition.
pub const OBJECT_ID_TYPE: &str = "ObjectId";
/// Hex-string length of a storage object identifier.
pub const OBJECT_ID_MAX_LENGTH: u64 = 24;

/// Exposed name of the key property every entity carries.
pub const ID_PROPERTY: &str = "id";
/// Storage path backing the key property.
pub const ID_STORAGE_PATH: &str = "_id";

/// Namespace-qualified name of the object-identifier type.
pub fn object_id_type(namespace: &str) -> String {
	format!("{namespace}.{OBJECT_ID_TYPE}")
}

/// Maps a primitive field kind to its EDM scalar type name.
///
/// Returns `None` for kinds without a scalar mapping: embedded and array
/// kinds resolve through complex-type synthesis, unsupported kinds are
/// omitted from the output.
///
/// # Examples
///
/// ```
/// use odata_edm::primitive_type;
/// use odata_schema::FieldKind;
///
/// assert_eq!(
///     primitive_type(FieldKind::Number, "mongo.odata").as_deref(),
///     Some("Edm.Double")
/// );
/// assert_eq!(primitive_type(FieldKind::Embedded, "mongo.odata"), None);
/// ```
pub fn primitive_type(kind: FieldKind, namespace: &str) -> Option<String> {
	match kind {
		FieldKind::ObjectId => Some(object_id_type(namespace)),
		FieldKind::Boolean => Some(EDM_BOOLEAN.to_string()),
		FieldKind::Number => Some(EDM_DOUBLE.to_string()),
		FieldKind::Date => Some(EDM_DATE_TIME_OFFSET.to_string()),
		FieldKind::String => Some(EDM_STRING.to_string()),
		FieldKind::ArrayOfPrimitive
		| FieldKind::ArrayOfEmbedded
		| FieldKind::Embedded
		| FieldKind::Unsupported => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldKind::Boolean, "Edm.Boolean")]
	#[case(FieldKind::Number, "Edm.Double")]
	#[case(FieldKind::Date, "Edm.DateTimeOffset")]
	#[case(FieldKind::String, "Edm.String")]
	#[case(FieldKind::ObjectId, "mongo.odata.ObjectId")]
	fn test_primitive_mapping(#[case] kind: FieldKind, #[case] expected: &str) {
		assert_eq!(primitive_type(kind, "mongo.odata").as_deref(), Some(expected));
	}

	#[rstest]
	#[case(FieldKind::ArrayOfPrimitive)]
	#[case(FieldKind::ArrayOfEmbedded)]
	#[case(FieldKind::Embedded)]
	#[case(FieldKind::Unsupported)]
	fn test_structural_kinds_have_no_scalar_mapping(#[case] kind: FieldKind) {
		assert_eq!(primitive_type(kind, "mongo.odata"), None);
	}
}

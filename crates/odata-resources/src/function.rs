//! Unbound function resources

use crate::error::Result;
use odata_edm::{validate_identifier, validate_qualified_name};
use serde::Serialize;

/// One declared parameter of a function resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionParameter {
	#[serde(rename = "$Name")]
	pub name: String,
	#[serde(rename = "$Type")]
	pub edm_type: String,
	#[serde(rename = "$Collection", skip_serializing_if = "Option::is_none")]
	pub collection: Option<bool>,
	#[serde(rename = "$Nullable", skip_serializing_if = "Option::is_none")]
	pub nullable: Option<bool>,
}

impl FunctionParameter {
	/// Declares a parameter of the given EDM type.
	pub fn new(name: impl Into<String>, edm_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			edm_type: edm_type.into(),
			collection: None,
			nullable: None,
		}
	}

	/// Marks the parameter as collection-valued.
	pub fn collection(mut self) -> Self {
		self.collection = Some(true);
		self
	}

	/// Marks the parameter as nullable.
	pub fn nullable(mut self) -> Self {
		self.nullable = Some(true);
		self
	}
}

/// Declared return type of a function resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnType {
	#[serde(rename = "$Type")]
	pub edm_type: String,
	#[serde(rename = "$Collection", skip_serializing_if = "Option::is_none")]
	pub collection: Option<bool>,
}

impl ReturnType {
	/// Declares a return type.
	pub fn new(edm_type: impl Into<String>) -> Self {
		Self {
			edm_type: edm_type.into(),
			collection: None,
		}
	}

	/// Marks the return as collection-valued.
	pub fn collection(mut self) -> Self {
		self.collection = Some(true);
		self
	}
}

/// A callable function exposed through the entity container.
///
/// # Examples
///
/// ```
/// use odata_resources::{FunctionParameter, FunctionResource};
///
/// let search = FunctionResource::new("search")
///     .parameter(FunctionParameter::new("query", "Edm.String"));
/// assert_eq!(search.name(), "search");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResource {
	name: String,
	parameters: Vec<FunctionParameter>,
	return_type: Option<ReturnType>,
}

impl FunctionResource {
	/// Declares a function resource.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			parameters: Vec::new(),
			return_type: None,
		}
	}

	/// Appends a declared parameter.
	pub fn parameter(mut self, parameter: FunctionParameter) -> Self {
		self.parameters.push(parameter);
		self
	}

	/// Declares the return type.
	pub fn returns(mut self, return_type: ReturnType) -> Self {
		self.return_type = Some(return_type);
		self
	}

	/// Function name as exposed in the document.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The declared parameters.
	pub fn parameters(&self) -> &[FunctionParameter] {
		&self.parameters
	}

	/// Checks every declared name and type reference against the identifier
	/// grammar; registration refuses the resource on the first failure.
	pub(crate) fn validate(&self) -> Result<()> {
		validate_identifier(&self.name)?;
		for parameter in &self.parameters {
			validate_identifier(&parameter.name)?;
			validate_qualified_name(&parameter.edm_type)?;
		}
		if let Some(return_type) = &self.return_type {
			validate_qualified_name(&return_type.edm_type)?;
		}
		Ok(())
	}

	/// Builds the document descriptor for this function.
	pub fn descriptor(&self) -> FunctionDescriptor {
		FunctionDescriptor {
			kind: "Function",
			parameter: self.parameters.clone(),
			return_type: self.return_type.clone(),
		}
	}
}

/// Document shape of a function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDescriptor {
	#[serde(rename = "$Kind")]
	kind: &'static str,
	#[serde(rename = "$Parameter", skip_serializing_if = "Vec::is_empty")]
	parameter: Vec<FunctionParameter>,
	#[serde(rename = "$ReturnType", skip_serializing_if = "Option::is_none")]
	return_type: Option<ReturnType>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_descriptor_lists_declared_parameters() {
		let function = FunctionResource::new("search")
			.parameter(FunctionParameter::new("query", "Edm.String"))
			.parameter(FunctionParameter::new("limit", "Edm.Double").nullable());
		let json = serde_json::to_value(function.descriptor()).unwrap();
		assert_eq!(
			json,
			json!({
				"$Kind": "Function",
				"$Parameter": [
					{ "$Name": "query", "$Type": "Edm.String" },
					{ "$Name": "limit", "$Type": "Edm.Double", "$Nullable": true }
				]
			})
		);
	}

	#[test]
	fn test_descriptor_without_parameters_is_bare() {
		let json =
			serde_json::to_value(FunctionResource::new("reindex").descriptor()).unwrap();
		assert_eq!(json, json!({ "$Kind": "Function" }));
	}

	#[test]
	fn test_return_type_serializes_when_declared() {
		let function = FunctionResource::new("top_rated")
			.returns(ReturnType::new("mongo.odata.book").collection());
		let json = serde_json::to_value(function.descriptor()).unwrap();
		assert_eq!(
			json["$ReturnType"],
			json!({ "$Type": "mongo.odata.book", "$Collection": true })
		);
	}

	#[test]
	fn test_validation_rejects_bad_parameter_names() {
		let function =
			FunctionResource::new("search").parameter(FunctionParameter::new("bad name", "Edm.String"));
		assert!(function.validate().is_err());
	}
}

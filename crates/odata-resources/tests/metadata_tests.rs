//! Integration tests for resource registration and document assembly

use assert_json_diff::assert_json_eq;
use odata_resources::{
	BindingKind, EntityResource, FunctionParameter, FunctionResource, ResourceError,
	ResourceRegistry,
};
use odata_schema::{DocumentSchema, FieldKind, SchemaField};
use serde_json::json;

fn book_schema() -> DocumentSchema {
	DocumentSchema::new()
		.with(SchemaField::new("author", FieldKind::String))
		.with(SchemaField::new("description", FieldKind::String))
		.with(SchemaField::new("genre", FieldKind::String))
		.with(SchemaField::new("price", FieldKind::Number))
		.with(SchemaField::new("publish_date", FieldKind::Date))
		.with(SchemaField::new("title", FieldKind::String))
}

#[test]
fn test_entity_and_function_share_one_container() {
	let mut registry = ResourceRegistry::new();
	registry
		.register_entity(EntityResource::new("book", book_schema()))
		.unwrap();
	registry
		.register_function(
			FunctionResource::new("search").parameter(FunctionParameter::new("query", "Edm.String")),
		)
		.unwrap();

	let document = registry.metadata_document().unwrap();
	assert_eq!(
		document.get("mongo.odata"),
		Some(&json!({
			"$Kind": "EntityContainer",
			"book": { "$Collection": true, "$Type": "mongo.odata.book" },
			"search": { "$Function": "mongo.odata.search" }
		}))
	);
}

#[test]
fn test_whole_document_shape() {
	let mut registry = ResourceRegistry::new();
	registry
		.register_entity(EntityResource::new("book", book_schema()))
		.unwrap();
	registry
		.register_function(
			FunctionResource::new("search").parameter(FunctionParameter::new("query", "Edm.String")),
		)
		.unwrap();

	let document = registry.metadata_document().unwrap();
	assert_json_eq!(
		document.to_value(),
		json!({
			"$Version": "4.0",
			"ObjectId": {
				"$Kind": "TypeDefinition",
				"$UnderlyingType": "Edm.String",
				"$MaxLength": 24
			},
			"book": {
				"$Kind": "EntityType",
				"$Key": ["id"],
				"id": { "$Type": "mongo.odata.ObjectId", "$Nullable": false },
				"author": { "$Type": "Edm.String" },
				"description": { "$Type": "Edm.String" },
				"genre": { "$Type": "Edm.String" },
				"price": { "$Type": "Edm.Double" },
				"publish_date": { "$Type": "Edm.DateTimeOffset" },
				"title": { "$Type": "Edm.String" }
			},
			"search": {
				"$Kind": "Function",
				"$Parameter": [{ "$Name": "query", "$Type": "Edm.String" }]
			},
			"$EntityContainer": "mongo.odata",
			"mongo.odata": {
				"$Kind": "EntityContainer",
				"book": { "$Collection": true, "$Type": "mongo.odata.book" },
				"search": { "$Function": "mongo.odata.search" }
			}
		})
	);
}

#[test]
fn test_document_member_order() {
	let mut registry = ResourceRegistry::new();
	registry
		.register_entity(
			EntityResource::new("book", book_schema()).action("rate", BindingKind::Entity),
		)
		.unwrap();
	registry.register_function(FunctionResource::new("search")).unwrap();

	let document = registry.metadata_document().unwrap();
	let keys: Vec<&str> = document.keys().collect();
	assert_eq!(
		keys,
		["$Version", "ObjectId", "book", "rate", "search", "$EntityContainer", "mongo.odata"]
	);
}

#[test]
fn test_synthesized_complex_types_attach_to_the_document_root() {
	let schema = DocumentSchema::new()
		.with(SchemaField::new("address.street", FieldKind::String))
		.with(SchemaField::new("address.city", FieldKind::String));
	let mut registry = ResourceRegistry::new();
	registry
		.register_entity(EntityResource::new("customer", schema))
		.unwrap();

	let document = registry.metadata_document().unwrap();
	assert_eq!(
		document.get("customer").unwrap()["address"],
		json!({ "$Type": "mongo.odata.customeraddressChild1" })
	);
	assert_eq!(
		document.get("customeraddressChild1"),
		Some(&json!({
			"$Kind": "ComplexType",
			"street": { "$Type": "Edm.String" },
			"city": { "$Type": "Edm.String" }
		}))
	);
}

#[test]
fn test_bound_action_descriptors() {
	let mut registry = ResourceRegistry::new();
	registry
		.register_entity(
			EntityResource::new("book", book_schema())
				.action("rate", BindingKind::Entity)
				.action("discount", BindingKind::Collection),
		)
		.unwrap();

	let document = registry.metadata_document().unwrap();
	assert_eq!(
		document.get("rate"),
		Some(&json!({
			"$Kind": "Action",
			"$IsBound": true,
			"$Parameter": [{ "$Name": "book", "$Type": "mongo.odata.book" }]
		}))
	);
	assert_eq!(
		document.get("discount"),
		Some(&json!({
			"$Kind": "Action",
			"$IsBound": true,
			"$Parameter": [
				{ "$Name": "book", "$Type": "mongo.odata.book", "$Collection": true }
			]
		}))
	);
}

#[test]
fn test_assembly_is_idempotent() {
	let mut registry = ResourceRegistry::new();
	registry
		.register_entity(
			EntityResource::new("book", book_schema()).action("rate", BindingKind::Entity),
		)
		.unwrap();
	registry.register_function(FunctionResource::new("search")).unwrap();

	let first = registry.metadata_document().unwrap();
	let second = registry.metadata_document().unwrap();
	assert_eq!(first, second);
	assert_eq!(
		serde_json::to_string(&first).unwrap(),
		serde_json::to_string(&second).unwrap()
	);
}

#[test]
fn test_custom_namespace_flows_through_the_document() {
	let mut registry = ResourceRegistry::with_namespace("acme.api").unwrap();
	registry
		.register_entity(EntityResource::new("book", book_schema()))
		.unwrap();

	let document = registry.metadata_document().unwrap();
	assert_eq!(document.get("$EntityContainer"), Some(&json!("acme.api")));
	assert_eq!(
		document.get("book").unwrap()["id"]["$Type"],
		json!("acme.api.ObjectId")
	);
	assert_eq!(
		document.get("acme.api").unwrap()["book"]["$Type"],
		json!("acme.api.book")
	);
}

#[test]
fn test_action_name_colliding_with_a_resource_aborts_assembly() {
	let mut registry = ResourceRegistry::new();
	registry
		.register_entity(EntityResource::new("book", book_schema()))
		.unwrap();
	registry
		.register_entity(
			EntityResource::new("author", DocumentSchema::new())
				.action("book", BindingKind::Entity),
		)
		.unwrap();

	let err = registry.metadata_document().unwrap_err();
	assert!(matches!(
		err,
		ResourceError::Edm(odata_edm::EdmError::NameCollision(name)) if name == "book"
	));
}

#[test]
fn test_compilation_failure_surfaces_at_registration() {
	let schema = DocumentSchema::new()
		.with(SchemaField::new("a", FieldKind::String))
		.with(SchemaField::new("a.b", FieldKind::String));
	let mut registry = ResourceRegistry::new();

	let err = registry
		.register_entity(EntityResource::new("entry", schema))
		.unwrap_err();
	assert!(matches!(
		err,
		ResourceError::Edm(odata_edm::EdmError::DuplicateMapping(name)) if name == "a"
	));
	// nothing was registered
	assert!(registry.is_empty());
}

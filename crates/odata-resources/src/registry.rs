//! Ordered registry of exposed resources

use crate::error::{ResourceError, Result};
use crate::function::FunctionResource;
use crate::metadata::{MetadataAssembler, MetadataDocument};
use crate::resource::{EntityResource, RegisteredEntity};
use indexmap::IndexMap;
use odata_edm::{validate_identifier, validate_qualified_name, PropertyMappingTable};

/// Namespace qualifying every type reference unless a registry overrides it.
pub const DEFAULT_NAMESPACE: &str = "mongo.odata";

/// A registered resource: an entity set or a callable function.
#[derive(Debug, Clone)]
pub enum RegisteredResource {
	/// An entity resource with compiled metadata.
	Entity(RegisteredEntity),
	/// A function exposed through the entity container.
	Function(FunctionResource),
}

/// Ordered mapping from resource name to registered resource.
///
/// Registration order is preserved and fixes the ordering of the assembled
/// metadata document. Registration validates names and compiles entity
/// schemas eagerly, so a registered resource is always fully computed.
///
/// # Examples
///
/// ```
/// use odata_resources::{EntityResource, ResourceRegistry};
/// use odata_schema::{DocumentSchema, FieldKind, SchemaField};
///
/// let mut registry = ResourceRegistry::new();
/// let schema = DocumentSchema::new().with(SchemaField::new("title", FieldKind::String));
/// registry.register_entity(EntityResource::new("book", schema)).unwrap();
/// assert!(registry.entity("book").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
	namespace: String,
	resources: IndexMap<String, RegisteredResource>,
}

impl Default for ResourceRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl ResourceRegistry {
	/// Creates a registry under the default namespace.
	pub fn new() -> Self {
		Self {
			namespace: DEFAULT_NAMESPACE.to_string(),
			resources: IndexMap::new(),
		}
	}

	/// Creates a registry under a custom namespace.
	///
	/// # Errors
	///
	/// Returns an error if any namespace segment fails the identifier
	/// grammar.
	pub fn with_namespace(namespace: &str) -> Result<Self> {
		validate_qualified_name(namespace)?;
		Ok(Self {
			namespace: namespace.to_string(),
			resources: IndexMap::new(),
		})
	}

	/// The namespace qualifying this registry's type references.
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Registers an entity resource, compiling its schema eagerly.
	///
	/// # Errors
	///
	/// Fails on an invalid or duplicate resource name, invalid action
	/// declarations, or any compilation error; nothing is registered on
	/// failure.
	pub fn register_entity(&mut self, resource: EntityResource) -> Result<()> {
		validate_identifier(resource.name())?;
		if self.resources.contains_key(resource.name()) {
			return Err(ResourceError::DuplicateResource(resource.name().to_string()));
		}

		let registered = RegisteredEntity::register(resource, &self.namespace)?;
		tracing::debug!(resource = %registered.name(), "registered entity resource");
		self.resources.insert(
			registered.name().to_string(),
			RegisteredResource::Entity(registered),
		);
		Ok(())
	}

	/// Registers a function resource.
	///
	/// # Errors
	///
	/// Fails on an invalid or duplicate name or invalid parameter
	/// declarations.
	pub fn register_function(&mut self, function: FunctionResource) -> Result<()> {
		function.validate()?;
		if self.resources.contains_key(function.name()) {
			return Err(ResourceError::DuplicateResource(function.name().to_string()));
		}
		tracing::debug!(resource = %function.name(), "registered function resource");
		self.resources
			.insert(function.name().to_string(), RegisteredResource::Function(function));
		Ok(())
	}

	/// Looks up any resource by name.
	pub fn get(&self, name: &str) -> Option<&RegisteredResource> {
		self.resources.get(name)
	}

	/// Looks up an entity resource by name.
	pub fn entity(&self, name: &str) -> Option<&RegisteredEntity> {
		match self.resources.get(name) {
			Some(RegisteredResource::Entity(entity)) => Some(entity),
			_ => None,
		}
	}

	/// The mapping table of a registered entity, for the query translator.
	///
	/// # Errors
	///
	/// Returns [`ResourceError::UnknownResource`] if no entity resource is
	/// registered under the name.
	pub fn mapping_for(&self, name: &str) -> Result<&PropertyMappingTable> {
		self.entity(name)
			.map(RegisteredEntity::mapping)
			.ok_or_else(|| ResourceError::UnknownResource(name.to_string()))
	}

	/// Iterates resources in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredResource)> {
		self.resources
			.iter()
			.map(|(name, resource)| (name.as_str(), resource))
	}

	/// Number of registered resources.
	pub fn len(&self) -> usize {
		self.resources.len()
	}

	/// Whether no resources are registered.
	pub fn is_empty(&self) -> bool {
		self.resources.is_empty()
	}

	/// Assembles the metadata document over every registered resource.
	///
	/// # Errors
	///
	/// Any fatal error aborts the entire document; there is no partial
	/// output.
	pub fn metadata_document(&self) -> Result<MetadataDocument> {
		MetadataAssembler::new(self).assemble()
	}
}

//! Entity resources and their registration lifecycle

use crate::action::{BindingKind, BoundAction};
use crate::error::{ResourceError, Result};
use odata_edm::{
	validate_identifier, CompiledEntity, ComplexTypeRegistry, EntityTypeDescriptor,
	PropertyMappingTable, SchemaCompiler,
};
use odata_schema::DocumentSchema;

/// Ceiling on `$top` unless a resource narrows it.
pub const DEFAULT_MAX_TOP: u64 = 10_000;
/// Ceiling on `$skip` unless a resource narrows it.
pub const DEFAULT_MAX_SKIP: u64 = 10_000;

/// Per-resource query options consumed by the (external) query translator.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceOptions {
	/// Largest page a client may request.
	pub max_top: u64,
	/// Largest offset a client may request.
	pub max_skip: u64,
	/// Default sort order applied when the client sends none.
	pub order_by: Option<String>,
}

impl Default for ResourceOptions {
	fn default() -> Self {
		Self {
			max_top: DEFAULT_MAX_TOP,
			max_skip: DEFAULT_MAX_SKIP,
			order_by: None,
		}
	}
}

/// A declared entity resource, prior to registration.
///
/// Declaration is fluent and infallible; every name is validated and the
/// schema compiled when the resource is registered.
///
/// # Examples
///
/// ```
/// use odata_resources::{BindingKind, EntityResource};
/// use odata_schema::{DocumentSchema, FieldKind, SchemaField};
///
/// let schema = DocumentSchema::new().with(SchemaField::new("title", FieldKind::String));
/// let resource = EntityResource::new("book", schema)
///     .max_top(100)
///     .action("rate", BindingKind::Entity);
/// assert_eq!(resource.name(), "book");
/// ```
#[derive(Debug, Clone)]
pub struct EntityResource {
	name: String,
	schema: DocumentSchema,
	options: ResourceOptions,
	actions: Vec<BoundAction>,
}

impl EntityResource {
	/// Declares an entity resource over a document schema.
	pub fn new(name: impl Into<String>, schema: DocumentSchema) -> Self {
		Self {
			name: name.into(),
			schema,
			options: ResourceOptions::default(),
			actions: Vec::new(),
		}
	}

	/// Narrows the `$top` ceiling.
	pub fn max_top(mut self, count: u64) -> Self {
		self.options.max_top = count;
		self
	}

	/// Narrows the `$skip` ceiling.
	pub fn max_skip(mut self, count: u64) -> Self {
		self.options.max_skip = count;
		self
	}

	/// Sets the default sort order.
	pub fn order_by(mut self, field: impl Into<String>) -> Self {
		self.options.order_by = Some(field.into());
		self
	}

	/// Declares a bound action on this resource.
	pub fn action(mut self, name: impl Into<String>, binding: BindingKind) -> Self {
		self.actions.push(BoundAction::new(name, binding));
		self
	}

	/// Resource name as exposed in the document.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The declared schema.
	pub fn schema(&self) -> &DocumentSchema {
		&self.schema
	}

	/// The declared query options.
	pub fn options(&self) -> &ResourceOptions {
		&self.options
	}

	/// The declared bound actions.
	pub fn actions(&self) -> &[BoundAction] {
		&self.actions
	}
}

/// An entity resource after registration: its schema compiled, its metadata
/// frozen. Readers never observe an uncompiled state.
#[derive(Debug, Clone)]
pub struct RegisteredEntity {
	name: String,
	options: ResourceOptions,
	actions: Vec<BoundAction>,
	compiled: CompiledEntity,
}

impl RegisteredEntity {
	/// Validates the declaration and compiles its schema eagerly.
	pub(crate) fn register(resource: EntityResource, namespace: &str) -> Result<Self> {
		for (index, action) in resource.actions.iter().enumerate() {
			validate_identifier(action.name())?;
			let duplicate = resource.actions[..index]
				.iter()
				.any(|earlier| earlier.name() == action.name());
			if duplicate {
				return Err(ResourceError::DuplicateAction {
					resource: resource.name.clone(),
					action: action.name().to_string(),
				});
			}
		}

		let compiled = SchemaCompiler::new(&resource.name, namespace)?.compile(&resource.schema)?;
		tracing::debug!(resource = %resource.name, "compiled entity resource");

		Ok(Self {
			name: resource.name,
			options: resource.options,
			actions: resource.actions,
			compiled,
		})
	}

	/// Resource name as exposed in the document.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The compiled entity type descriptor.
	pub fn metadata(&self) -> &EntityTypeDescriptor {
		self.compiled.descriptor()
	}

	/// Complex types synthesized while compiling this resource.
	pub fn complex_types(&self) -> &ComplexTypeRegistry {
		self.compiled.complex_types()
	}

	/// The exposed-name ↔ storage-path mapping of this resource.
	pub fn mapping(&self) -> &PropertyMappingTable {
		self.compiled.mapping()
	}

	/// The declared query options.
	pub fn options(&self) -> &ResourceOptions {
		&self.options
	}

	/// The declared bound actions.
	pub fn actions(&self) -> &[BoundAction] {
		&self.actions
	}
}

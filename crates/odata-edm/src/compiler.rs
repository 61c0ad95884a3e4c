//! The schema walker: compiles a document schema into EDM metadata
//!
//! Compilation threads an explicit [`CompileContext`] (complex-type registry,
//! property mapping table, name counter) through the recursion and freezes it
//! into the returned [`CompiledEntity`]; there is no ambient mutable state
//! and no recomputation path.

use crate::descriptor::{ComplexTypeDescriptor, EntityTypeDescriptor};
use crate::error::{EdmError, Result};
use crate::identifier::{sanitize_path_segment, validate_identifier, validate_qualified_name};
use crate::mapping::PropertyMappingTable;
use crate::property::EdmProperty;
use crate::registry::ComplexTypeRegistry;
use crate::types::{primitive_type, EDM_BOOLEAN, EDM_DATE_TIME_OFFSET, EDM_DOUBLE, EDM_STRING, ID_STORAGE_PATH, object_id_type};
use indexmap::IndexMap;
use odata_schema::{DocumentSchema, FieldKind, SchemaField};

/// Mutable state of one entity's compilation: the complex-type registry, the
/// property mapping table, and the counter feeding synthesized type names.
///
/// A context is consumed by exactly one compilation. The registry is
/// reachable beforehand so callers can pre-seed names (tests do this to prove
/// collisions fail loudly).
#[derive(Debug, Clone)]
pub struct CompileContext {
	entity_name: String,
	namespace: String,
	registry: ComplexTypeRegistry,
	mapping: PropertyMappingTable,
	counter: u32,
}

impl CompileContext {
	/// Creates a fresh context for one entity.
	///
	/// # Errors
	///
	/// Returns [`EdmError::InvalidIdentifier`] if the entity name or a
	/// namespace segment fails the identifier grammar.
	pub fn new(entity_name: &str, namespace: &str) -> Result<Self> {
		validate_identifier(entity_name)?;
		validate_qualified_name(namespace)?;
		Ok(Self {
			entity_name: entity_name.to_string(),
			namespace: namespace.to_string(),
			registry: ComplexTypeRegistry::new(),
			mapping: PropertyMappingTable::new(namespace),
			counter: 0,
		})
	}

	/// Name of the entity being compiled.
	pub fn entity_name(&self) -> &str {
		&self.entity_name
	}

	/// Namespace qualifying every synthesized type reference.
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// The complex-type registry of this compilation.
	pub fn registry(&self) -> &ComplexTypeRegistry {
		&self.registry
	}

	/// Mutable access to the registry, for pre-seeding names before the walk.
	pub fn registry_mut(&mut self) -> &mut ComplexTypeRegistry {
		&mut self.registry
	}

	fn next_counter(&mut self) -> u32 {
		self.counter += 1;
		self.counter
	}
}

/// The frozen result of one compilation. Immutable by construction: reads
/// are safe from any thread and repeated reads observe identical state.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledEntity {
	descriptor: EntityTypeDescriptor,
	complex_types: ComplexTypeRegistry,
	mapping: PropertyMappingTable,
}

impl CompiledEntity {
	/// The compiled entity type descriptor.
	pub fn descriptor(&self) -> &EntityTypeDescriptor {
		&self.descriptor
	}

	/// Complex types synthesized during the walk.
	pub fn complex_types(&self) -> &ComplexTypeRegistry {
		&self.complex_types
	}

	/// The exposed-name ↔ storage-path mapping table.
	pub fn mapping(&self) -> &PropertyMappingTable {
		&self.mapping
	}
}

/// Recursive visitor turning a [`DocumentSchema`] into an
/// [`EntityTypeDescriptor`] plus synthesized complex types.
///
/// # Examples
///
/// ```
/// use odata_edm::SchemaCompiler;
/// use odata_schema::{DocumentSchema, FieldKind, SchemaField};
///
/// let schema = DocumentSchema::new().with(SchemaField::new("title", FieldKind::String));
/// let compiled = SchemaCompiler::new("book", "mongo.odata")
///     .unwrap()
///     .compile(&schema)
///     .unwrap();
/// assert_eq!(compiled.descriptor().property("title").unwrap().edm_type, "Edm.String");
/// ```
#[derive(Debug)]
pub struct SchemaCompiler {
	context: CompileContext,
}

impl SchemaCompiler {
	/// Creates a compiler with a fresh context.
	///
	/// # Errors
	///
	/// Returns [`EdmError::InvalidIdentifier`] for a bad entity name or
	/// namespace.
	pub fn new(entity_name: &str, namespace: &str) -> Result<Self> {
		Ok(Self {
			context: CompileContext::new(entity_name, namespace)?,
		})
	}

	/// Creates a compiler over an existing (possibly pre-seeded) context.
	pub fn with_context(context: CompileContext) -> Self {
		Self { context }
	}

	/// Compiles the schema, consuming the compiler.
	///
	/// The walk visits simple fields first, then dotted groups, mirroring
	/// the declaration order within each class. The seeded `id` property is
	/// never overwritten: a declared field exposing the name `id` fails
	/// compilation instead.
	///
	/// # Errors
	///
	/// Any [`EdmError`] aborts the whole compilation; no partial result is
	/// observable.
	pub fn compile(mut self, schema: &DocumentSchema) -> Result<CompiledEntity> {
		let properties = self.walk(schema)?;

		let mut descriptor = EntityTypeDescriptor::new(&self.context.namespace);
		for (name, property) in properties {
			if descriptor.property(&name).is_some() {
				return Err(EdmError::DuplicateMapping(name));
			}
			descriptor.insert(name, property);
		}

		tracing::debug!(
			entity = %self.context.entity_name,
			properties = descriptor.properties().len(),
			complex_types = self.context.registry.len(),
			"compiled entity schema"
		);

		Ok(CompiledEntity {
			descriptor,
			complex_types: self.context.registry,
			mapping: self.context.mapping,
		})
	}

	/// Visits one schema level and returns its compiled property map.
	fn walk(&mut self, schema: &DocumentSchema) -> Result<IndexMap<String, EdmProperty>> {
		let mut properties = IndexMap::new();
		let partition = schema.partition();

		for field in partition.simple {
			// the seeded id property covers the storage key
			if field.path == ID_STORAGE_PATH {
				continue;
			}
			let Some(property) = self.visit_field(field)? else {
				continue;
			};
			let exposed = self.expose(&field.path)?;
			if properties.contains_key(exposed.as_str()) {
				return Err(EdmError::DuplicateMapping(exposed));
			}
			properties.insert(exposed, property);
		}

		for (prefix, group) in &partition.groups {
			let exposed = self.expose(prefix)?;
			if properties.contains_key(exposed.as_str()) {
				// a dotted group may not shadow a declared simple property
				return Err(EdmError::DuplicateMapping(exposed));
			}
			let type_name = self.synthesize(prefix, group)?;
			properties.insert(exposed, EdmProperty::new(type_name));
		}

		Ok(properties)
	}

	/// Exposed identifier for a storage path segment, registering a mapping
	/// entry whenever the name had to change.
	fn expose(&mut self, storage_path: &str) -> Result<String> {
		let exposed = sanitize_path_segment(storage_path);
		if exposed != storage_path {
			self.context.mapping.add(storage_path, &exposed)?;
		}
		Ok(exposed)
	}

	/// Compiles one field into a property descriptor, or `None` for fields
	/// the protocol cannot express.
	fn visit_field(&mut self, field: &SchemaField) -> Result<Option<EdmProperty>> {
		let namespace = self.context.namespace.clone();

		let mut property = match field.kind {
			FieldKind::ObjectId => EdmProperty::new(object_id_type(&namespace)),
			FieldKind::Boolean => EdmProperty::new(EDM_BOOLEAN),
			FieldKind::Number => EdmProperty::new(EDM_DOUBLE),
			FieldKind::Date => EdmProperty::new(EDM_DATE_TIME_OFFSET),
			FieldKind::String => {
				let mut property = EdmProperty::new(EDM_STRING);
				if let Some(max_length) = field.options.max_length {
					property = property.max_length(max_length);
				}
				property
			}
			FieldKind::ArrayOfPrimitive => {
				let Some(element_type) = field
					.options
					.element
					.and_then(|element| primitive_type(element.underlying(), &namespace))
				else {
					tracing::debug!(path = %field.path, "array field without primitive element skipped");
					return Ok(None);
				};
				EdmProperty::new(element_type).collection()
			}
			FieldKind::ArrayOfEmbedded => {
				let Some(nested) = &field.nested else {
					tracing::debug!(path = %field.path, "embedded array without nested schema skipped");
					return Ok(None);
				};
				EdmProperty::new(self.synthesize(&field.path, nested)?).collection()
			}
			FieldKind::Embedded => {
				let Some(nested) = &field.nested else {
					tracing::debug!(path = %field.path, "embedded field without nested schema skipped");
					return Ok(None);
				};
				EdmProperty::new(self.synthesize(&field.path, nested)?)
			}
			// the protocol has no representation; omitted, not an error
			FieldKind::Unsupported => return Ok(None),
		};

		if field.kind.propagates_default() {
			if let Some(default) = &field.options.default_value {
				property = property.default_value(default.clone());
			}
		}

		Ok(Some(property))
	}

	/// Synthesizes a complex type from a nested schema and registers it,
	/// returning the namespace-qualified type reference.
	fn synthesize(&mut self, field_path: &str, schema: &DocumentSchema) -> Result<String> {
		let counter = self.context.next_counter();
		let name =
			ComplexTypeRegistry::generate_name(&self.context.entity_name, field_path, counter);
		let properties = self.walk(schema)?;
		self.context
			.registry
			.register(&name, ComplexTypeDescriptor::from_properties(properties))?;
		Ok(format!("{}.{name}", self.context.namespace))
	}
}

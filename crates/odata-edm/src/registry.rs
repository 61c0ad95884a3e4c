//! Per-compilation registry of synthesized complex types

use crate::descriptor::ComplexTypeDescriptor;
use crate::error::{EdmError, Result};
use crate::identifier::validate_identifier;
use indexmap::IndexMap;

/// Registry of synthesized complex-type descriptors, keyed by generated
/// name.
///
/// Scope is one entity's compilation. Registries are never shared across
/// entities, so the deterministic names below cannot collide across
/// unrelated schemas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplexTypeRegistry {
	types: IndexMap<String, ComplexTypeDescriptor>,
}

impl ComplexTypeRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Deterministic name for the `counter`-th complex type synthesized from
	/// `field_path` while compiling `entity_name`.
	///
	/// # Examples
	///
	/// ```
	/// use odata_edm::ComplexTypeRegistry;
	///
	/// assert_eq!(
	///     ComplexTypeRegistry::generate_name("book", "address", 1),
	///     "bookaddressChild1"
	/// );
	/// ```
	pub fn generate_name(entity_name: &str, field_path: &str, counter: u32) -> String {
		format!("{entity_name}{field_path}Child{counter}")
	}

	/// Stores a descriptor under a name.
	///
	/// # Errors
	///
	/// Returns [`EdmError::NameCollision`] if the name is already registered,
	/// or [`EdmError::InvalidIdentifier`] if it fails the identifier grammar.
	pub fn register(&mut self, name: &str, descriptor: ComplexTypeDescriptor) -> Result<()> {
		if self.types.contains_key(name) {
			return Err(EdmError::NameCollision(name.to_string()));
		}
		validate_identifier(name)?;
		tracing::debug!(name, properties = descriptor.properties().len(), "registered complex type");
		self.types.insert(name.to_string(), descriptor);
		Ok(())
	}

	/// Looks up a registered descriptor.
	pub fn get(&self, name: &str) -> Option<&ComplexTypeDescriptor> {
		self.types.get(name)
	}

	/// Whether a name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.types.contains_key(name)
	}

	/// Iterates registered types in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ComplexTypeDescriptor)> {
		self.types.iter().map(|(name, ty)| (name.as_str(), ty))
	}

	/// Number of registered types.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generated_names_are_deterministic() {
		let first = ComplexTypeRegistry::generate_name("book", "address", 1);
		let second = ComplexTypeRegistry::generate_name("book", "address", 1);
		assert_eq!(first, second);
		assert_eq!(first, "bookaddressChild1");
	}

	#[test]
	fn test_register_rejects_collisions() {
		let mut registry = ComplexTypeRegistry::new();
		registry
			.register("bookaddressChild1", ComplexTypeDescriptor::new())
			.unwrap();
		assert!(matches!(
			registry.register("bookaddressChild1", ComplexTypeDescriptor::new()),
			Err(EdmError::NameCollision(name)) if name == "bookaddressChild1"
		));
	}

	#[test]
	fn test_register_rejects_invalid_identifiers() {
		let mut registry = ComplexTypeRegistry::new();
		assert!(matches!(
			registry.register("bad-name", ComplexTypeDescriptor::new()),
			Err(EdmError::InvalidIdentifier(name)) if name == "bad-name"
		));
		assert!(registry.is_empty());
	}

	#[test]
	fn test_iteration_follows_registration_order() {
		let mut registry = ComplexTypeRegistry::new();
		registry.register("bZ", ComplexTypeDescriptor::new()).unwrap();
		registry.register("aA", ComplexTypeDescriptor::new()).unwrap();
		let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
		assert_eq!(names, ["bZ", "aA"]);
	}
}

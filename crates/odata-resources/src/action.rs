//! Bound actions advertised on entity resources

use serde::Serialize;

/// What a bound action binds to: a single entity or the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
	/// Invocable on one entity, addressed by key.
	Entity,
	/// Invocable on the entity collection.
	Collection,
}

/// An operation advertised as invocable on a specific entity or on an entity
/// collection. The routing collaborator owns the invocation; metadata only
/// advertises it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundAction {
	name: String,
	binding: BindingKind,
}

impl BoundAction {
	/// Declares a bound action.
	pub fn new(name: impl Into<String>, binding: BindingKind) -> Self {
		Self {
			name: name.into(),
			binding,
		}
	}

	/// Action name as exposed in the document.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The action's binding kind.
	pub fn binding(&self) -> BindingKind {
		self.binding
	}

	/// Builds the document descriptor for this action bound to
	/// `resource_name`.
	///
	/// The single parameter is named after the owning resource and typed with
	/// its namespace-qualified entity type; `$Collection` appears only for
	/// collection-bound actions.
	pub fn descriptor(&self, resource_name: &str, namespace: &str) -> ActionDescriptor {
		ActionDescriptor {
			kind: "Action",
			is_bound: true,
			parameter: vec![ActionParameter {
				name: resource_name.to_string(),
				edm_type: format!("{namespace}.{resource_name}"),
				collection: match self.binding {
					BindingKind::Collection => Some(true),
					BindingKind::Entity => None,
				},
			}],
		}
	}
}

/// Document shape of a bound action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionDescriptor {
	#[serde(rename = "$Kind")]
	kind: &'static str,
	#[serde(rename = "$IsBound")]
	is_bound: bool,
	#[serde(rename = "$Parameter")]
	parameter: Vec<ActionParameter>,
}

/// The binding parameter of a bound action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionParameter {
	#[serde(rename = "$Name")]
	name: String,
	#[serde(rename = "$Type")]
	edm_type: String,
	#[serde(rename = "$Collection", skip_serializing_if = "Option::is_none")]
	collection: Option<bool>,
}

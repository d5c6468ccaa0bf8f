use std::sync::Arc;

use fluentschema_value::Value;

use crate::kind::{Kind, Properties};
use crate::refine::Refinement;
use crate::validator;

/// A composable validator for one value position.
///
/// Cloning is cheap: the node is shared, and builder methods copy it only
/// when another handle still points at it.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    node: Arc<Node>,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: Kind,
    pub(crate) required: bool,
    pub(crate) refinements: Vec<Refinement>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            kind: Kind::Unset,
            required: true,
            refinements: Vec::new(),
        }
    }
}

impl Schema {
    /// A required schema with no declared kind. It rejects everything
    /// until a kind is declared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept strings.
    pub fn string(self) -> Self {
        self.with_kind(Kind::String)
    }

    /// Accept numbers.
    pub fn number(self) -> Self {
        self.with_kind(Kind::Number)
    }

    /// Accept booleans.
    pub fn boolean(self) -> Self {
        self.with_kind(Kind::Boolean)
    }

    /// Accept objects whose declared properties conform to their schemas.
    ///
    /// A property missing from the value is checked as `Value::Absent`, so
    /// it passes only when its schema is optional. Extra properties on the
    /// value are ignored. Arrays count as objects whose named properties
    /// are all absent; `Value::Null` passes only with no declared properties.
    pub fn object<I, K>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        let properties: Properties = properties
            .into_iter()
            .map(|(name, schema)| (name.into(), schema))
            .collect();
        self.with_kind(Kind::Object(properties))
    }

    /// Accept any object, array or null.
    pub fn any_object(self) -> Self {
        self.with_kind(Kind::Object(Properties::new()))
    }

    /// Accept arrays whose every element conforms to `element`.
    pub fn array_of(self, element: Schema) -> Self {
        self.with_kind(Kind::Array(element))
    }

    /// Accept values matching at least one of `alternatives`.
    pub fn one_of<I>(self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = Schema>,
    {
        self.with_kind(Kind::Union(alternatives.into_iter().collect()))
    }

    /// Accept `Value::Absent`. Order relative to the kind does not matter.
    pub fn optional(mut self) -> Self {
        self.node_mut().required = false;
        self
    }

    /// Add a predicate the value must satisfy after its type check.
    pub fn refine<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.node_mut().refinements.push(Refinement::new(predicate));
        self
    }

    /// Alias of [`Schema::refine`] that reads well in chains.
    ///
    /// `refine` is the `Where` spelling, renamed since `where` is a keyword.
    pub fn which<F>(self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.refine(predicate)
    }

    /// Decide whether `value` conforms to this schema.
    pub fn validate(&self, value: &Value) -> bool {
        validator::validate(self, value)
    }

    pub fn kind(&self) -> &Kind {
        &self.node.kind
    }

    pub fn is_required(&self) -> bool {
        self.node.required
    }

    pub fn refinement_count(&self) -> usize {
        self.node.refinements.len()
    }

    pub(crate) fn node(&self) -> &Node {
        &self.node
    }

    // Last declaration wins; the previous kind's children are dropped.
    fn with_kind(mut self, kind: Kind) -> Self {
        self.node_mut().kind = kind;
        self
    }

    fn node_mut(&mut self) -> &mut Node {
        Arc::make_mut(&mut self.node)
    }
}

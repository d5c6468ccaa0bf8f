use std::collections::BTreeMap;

use crate::schema::Schema;

/// Child schemas of an object node, keyed by property name.
pub type Properties = BTreeMap<String, Schema>;

/// The declared kind of a schema node, with its kind-specific children.
#[derive(Debug, Clone, Default)]
pub enum Kind {
    /// No kind declared yet. Fails every type check.
    #[default]
    Unset,
    String,
    Number,
    Boolean,
    /// Every declared property must conform; undeclared ones are ignored.
    Object(Properties),
    /// Every element must conform to the element schema.
    Array(Schema),
    /// At least one alternative must conform.
    Union(Vec<Schema>),
}

impl Kind {
    /// Lowercase kind name, used in log fields and lint output.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Unset => "unset",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Object(_) => "object",
            Kind::Array(_) => "array",
            Kind::Union(_) => "union",
        }
    }

    /// Arrays and unions inspect optionality themselves instead of taking
    /// the evaluator's absence short-circuit.
    pub fn handles_absence(&self) -> bool {
        matches!(self, Kind::Array(_) | Kind::Union(_))
    }

    /// True for kinds that recurse into child schemas.
    pub fn is_composite(&self) -> bool {
        matches!(self, Kind::Object(_) | Kind::Array(_) | Kind::Union(_))
    }
}

use fluentschema_value::Value;
use tracing::trace;

use crate::kind::Kind;
use crate::schema::{Node, Schema};

/// Evaluate `value` against `schema`.
///
/// Absence short-circuits to the node's optionality, except for arrays and
/// unions which decide about absence in their own type check. Otherwise the
/// type check must pass and then every refinement must hold.
pub(crate) fn validate(schema: &Schema, value: &Value) -> bool {
    let node = schema.node();

    if value.is_absent() && !node.kind.handles_absence() {
        return !node.required;
    }

    type_check(node, value) && refinements_hold(node, value)
}

fn type_check(node: &Node, value: &Value) -> bool {
    let accepted = match (&node.kind, value) {
        (Kind::Unset, _) => false,
        (Kind::String, Value::String(_))
        | (Kind::Number, Value::Number(_))
        | (Kind::Boolean, Value::Bool(_)) => true,
        (Kind::String | Kind::Number | Kind::Boolean, _) => false,
        // Arrays count as objects; every named property on one reads as absent.
        (Kind::Object(properties), Value::Object(_) | Value::Array(_)) => properties
            .iter()
            .all(|(name, child)| validate(child, value.get(name))),
        // Null has no properties to look up.
        (Kind::Object(properties), Value::Null) => properties.is_empty(),
        (Kind::Object(_), _) => false,
        (Kind::Array(element), Value::Array(items)) => {
            items.iter().all(|item| validate(element, item))
        }
        (Kind::Array(_), other) => !node.required && other.is_absent(),
        (Kind::Union(alternatives), other) => {
            (!node.required && other.is_absent())
                || alternatives.iter().any(|alternative| validate(alternative, other))
        }
    };

    if !accepted {
        trace!(
            kind = node.kind.name(),
            found = value.type_name(),
            "type check rejected value"
        );
    }
    accepted
}

fn refinements_hold(node: &Node, value: &Value) -> bool {
    node.refinements
        .iter()
        .enumerate()
        .all(|(index, refinement)| {
            let holds = refinement.holds(value);
            if !holds {
                trace!(
                    kind = node.kind.name(),
                    refinement = index,
                    "refinement rejected value"
                );
            }
            holds
        })
}

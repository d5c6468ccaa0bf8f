use std::fmt;
use std::sync::Arc;

use fluentschema_value::Value;

/// Signature of a refinement predicate.
///
/// Predicates must be pure: a schema shared across threads calls them
/// concurrently, and evaluation assumes repeated calls agree.
pub type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// A registered refinement predicate.
///
/// Refinements run after the type check succeeded, so a predicate on a
/// `string()` node only ever sees strings. The exception is an optional
/// array or union node receiving `Value::Absent`: its refinements still
/// run, with `&Value::Absent`.
#[derive(Clone)]
pub struct Refinement(Arc<Predicate>);

impl Refinement {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Apply the predicate.
    pub fn holds(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Refinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Refinement(..)")
    }
}

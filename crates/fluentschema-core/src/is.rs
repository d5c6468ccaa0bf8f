//! Free-function entry points for building schemas.
//!
//! Each function starts a fresh [`Schema`] so chains read naturally:
//!
//! ```
//! use fluentschema_core::{is, Value};
//!
//! let age = is::number().which(|n| n.as_f64().is_some_and(|n| n > 5.0));
//! let nickname = is::optional().string();
//!
//! assert!(age.validate(&Value::from(42)));
//! assert!(nickname.validate(&Value::Absent));
//! ```

use fluentschema_value::Value;

use crate::schema::Schema;

/// A schema that accepts `Value::Absent`. Declare its kind next.
pub fn optional() -> Schema {
    Schema::new().optional()
}

/// A schema with a refinement and no kind yet.
pub fn which<F>(predicate: F) -> Schema
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Schema::new().which(predicate)
}

pub fn string() -> Schema {
    Schema::new().string()
}

pub fn number() -> Schema {
    Schema::new().number()
}

pub fn boolean() -> Schema {
    Schema::new().boolean()
}

/// See [`Schema::object`].
pub fn object<I, K>(properties: I) -> Schema
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<String>,
{
    Schema::new().object(properties)
}

pub fn any_object() -> Schema {
    Schema::new().any_object()
}

pub fn array_of(element: Schema) -> Schema {
    Schema::new().array_of(element)
}

pub fn one_of<I>(alternatives: I) -> Schema
where
    I: IntoIterator<Item = Schema>,
{
    Schema::new().one_of(alternatives)
}

//! Fluent, declarative schema validation for dynamic values.
//!
//! Compose small validators into a tree describing the shape a value must
//! have, then get a single yes/no answer from `validate`.
//!
//! # Crate Structure
//!
//! - [`value`]: Runtime value model with an explicit absence sentinel
//! - [`schema`]: Schema nodes, builder surface, evaluator, lint, registry
//! - [`conformance`]: Behavioral conformance cases for the engine
//!
//! ```
//! use fluentschema::{is, Value};
//!
//! let person = is::object([
//!     ("name", is::string()),
//!     ("nickname", is::optional().string()),
//!     ("age", is::number().which(|n| n.as_f64().is_some_and(|n| n > 5.0))),
//! ]);
//!
//! let john = Value::from(serde_json::json!({"name": "John Doe", "age": 42}));
//! assert!(person.validate(&john));
//! ```

/// Re-export value types.
pub mod value {
    pub use fluentschema_value::*;
}

/// Re-export schema types.
pub mod schema {
    pub use fluentschema_core::*;
}

pub mod conformance;

pub use fluentschema_core::{is, Schema, SchemaError, SchemaRegistry};
pub use fluentschema_value::Value;

//! Composable schema nodes with a boolean evaluator.
//!
//! Build a [`Schema`] tree out of small validators, then ask whether a
//! [`Value`] conforms with [`Schema::validate`]. The answer is always a
//! plain `bool`: a malformed schema and a non-conforming value both
//! reject, and evaluation never errors.
//!
//! ```
//! use fluentschema_core::{is, Value};
//!
//! let location = is::object([
//!     ("name", is::string()),
//!     ("coordinates", is::array_of(is::number())),
//!     ("population", is::optional().number().which(|n| n.as_f64() > Some(0.0))),
//! ]);
//!
//! let budapest = Value::object([
//!     ("name", Value::from("Budapest")),
//!     ("coordinates", Value::array([47.49, 19.04])),
//! ]);
//! assert!(location.validate(&budapest));
//! assert!(!location.validate(&Value::object([("name", "Budapest")])));
//! ```
//!
//! Schemas are immutable values. Builder methods consume a schema and
//! return the updated one, copying a node only while it is still shared,
//! so a schema composed into a parent never changes underneath it.

pub mod config;
pub mod error;
pub mod is;
pub mod kind;
pub mod lint;
pub mod refine;
pub mod registry;
pub mod schema;
mod validator;

pub use config::RegistryConfig;
pub use error::{Result, SchemaError};
pub use fluentschema_value::Value;
pub use kind::{Kind, Properties};
pub use refine::{Predicate, Refinement};
pub use registry::SchemaRegistry;
pub use schema::Schema;

//! Runtime value model for fluentschema.
//!
//! Schemas are evaluated against a [`Value`], a closed sum type covering
//! the shapes a dynamic subject can take:
//! - primitives (null, booleans, numbers, strings)
//! - arrays and string-keyed objects
//! - [`Value::Absent`], the "not provided" sentinel
//!
//! Absence is a value of its own, distinct from `Null`, `false`, `0` and
//! `""`. A property missing from an object reads as `Absent`, and arrays
//! may hold `Absent` elements.

pub mod convert;
pub mod value;

pub use value::{Map, Value, ABSENT};

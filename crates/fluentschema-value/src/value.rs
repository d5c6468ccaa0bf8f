use std::collections::BTreeMap;
use std::ops::Index;

/// Property map of an object value.
pub type Map = BTreeMap<String, Value>;

/// Shared absence sentinel handed out for missing properties and indices.
pub static ABSENT: Value = Value::Absent;

/// A dynamically typed subject for schema evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No value was provided.
    #[default]
    Absent,
    /// An explicit null, distinct from `Absent`.
    Null,
    Bool(bool),
    /// Integers and floats share one numeric type.
    Number(f64),
    String(String),
    /// Elements may themselves be `Absent`.
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Build an array value from anything convertible into values.
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build an object value from `(name, value)` pairs.
    pub fn object<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            properties
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a property.
    ///
    /// Returns [`ABSENT`] when the property is missing or when `self` is
    /// not an object, so lookups chain without intermediate checks.
    pub fn get(&self, name: &str) -> &Value {
        match self {
            Value::Object(map) => map.get(name).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }

    /// True if `self` is an object that carries `name`, even as `Absent`.
    pub fn contains_key(&self, name: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(name))
    }

    /// Lowercase name of the variant, used in log fields.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.get(name)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => items.get(index).unwrap_or(&ABSENT),
            _ => &ABSENT,
        }
    }
}

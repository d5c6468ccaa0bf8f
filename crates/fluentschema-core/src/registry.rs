use std::collections::HashMap;

use fluentschema_value::Value;
use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::schema::Schema;

/// Name-keyed registry of finished schemas.
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            schemas: HashMap::new(),
            config,
        }
    }

    /// Register a schema under a name.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) -> Result<()> {
        let name = name.into();

        if self.config.reject_undeclared {
            schema.ensure_declared()?;
        }

        if self.schemas.contains_key(&name) {
            if !self.config.allow_replace {
                return Err(SchemaError::AlreadyRegistered(name));
            }
            debug!(%name, "replacing registered schema");
        } else {
            if self.schemas.len() >= self.config.max_schemas {
                return Err(SchemaError::LimitExceeded {
                    max: self.config.max_schemas,
                });
            }
            debug!(%name, kind = schema.kind().name(), "registered schema");
        }

        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Build a registry from `(name, schema)` pairs.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Self::from_entries_with_config(entries, RegistryConfig::default())
    }

    /// Build a registry from `(name, schema)` pairs with explicit config.
    pub fn from_entries_with_config<I, K>(entries: I, config: RegistryConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        let mut registry = Self::with_config(config);
        for (name, schema) in entries {
            registry.register(name, schema)?;
        }
        Ok(registry)
    }

    /// Validate a value against the schema registered under `name`.
    ///
    /// Unknown names pass unless `fail_on_missing_schema` is set.
    pub fn validate(&self, name: &str, value: &Value) -> Result<bool> {
        match self.schemas.get(name) {
            Some(schema) => Ok(schema.validate(value)),
            None if self.config.fail_on_missing_schema => {
                Err(SchemaError::NoSchema(name.to_string()))
            }
            None => {
                trace!(name, "no schema registered, accepting value");
                Ok(true)
            }
        }
    }

    /// Like [`SchemaRegistry::validate`], but a rejection is an error.
    pub fn ensure(&self, name: &str, value: &Value) -> Result<()> {
        if self.validate(name, value)? {
            Ok(())
        } else {
            Err(SchemaError::Rejected {
                name: name.to_string(),
            })
        }
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Check if a name has a registered schema.
    pub fn has_schema(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::is;

    use super::*;

    fn location() -> Schema {
        is::object([
            ("name", is::string()),
            ("coordinates", is::array_of(is::number())),
            ("population", is::optional().number()),
        ])
    }

    #[test]
    fn register_and_validate() {
        let mut registry = SchemaRegistry::new();
        registry.register("location", location()).unwrap();

        let budapest = Value::from(json!({"name": "Budapest", "coordinates": [47.49, 19.04]}));
        let nowhere = Value::from(json!({"name": "Nowhere"}));

        assert!(registry.validate("location", &budapest).unwrap());
        assert!(!registry.validate("location", &nowhere).unwrap());
        assert!(registry.ensure("location", &budapest).is_ok());
        assert!(matches!(
            registry.ensure("location", &nowhere),
            Err(SchemaError::Rejected { name }) if name == "location"
        ));
    }

    #[test]
    fn missing_schema_permissive_passes() {
        let registry = SchemaRegistry::new();
        assert!(registry.validate("anything", &Value::Null).unwrap());
        assert!(registry.ensure("anything", &Value::Absent).is_ok());
    }

    #[test]
    fn missing_schema_strict_fails() {
        let registry = SchemaRegistry::with_config(RegistryConfig {
            fail_on_missing_schema: true,
            ..RegistryConfig::default()
        });

        assert!(matches!(
            registry.validate("person", &Value::Null),
            Err(SchemaError::NoSchema(name)) if name == "person"
        ));
    }

    #[test]
    fn duplicate_name_is_rejected_by_default() {
        let mut registry = SchemaRegistry::new();
        registry.register("id", is::number()).unwrap();

        assert!(matches!(
            registry.register("id", is::string()),
            Err(SchemaError::AlreadyRegistered(name)) if name == "id"
        ));
        assert!(registry.validate("id", &Value::from(1)).unwrap());
    }

    #[test]
    fn replace_allowed_by_config() {
        let mut registry = SchemaRegistry::with_config(RegistryConfig {
            allow_replace: true,
            ..RegistryConfig::default()
        });
        registry.register("id", is::number()).unwrap();
        registry.register("id", is::string()).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.validate("id", &Value::from("abc")).unwrap());
        assert!(!registry.validate("id", &Value::from(1)).unwrap());
    }

    #[test]
    fn undeclared_schema_accepted_unless_configured() {
        let mut permissive = SchemaRegistry::new();
        permissive.register("blank", is::optional()).unwrap();
        assert!(!permissive.validate("blank", &Value::from(1)).unwrap());

        let mut strict = SchemaRegistry::with_config(RegistryConfig {
            reject_undeclared: true,
            ..RegistryConfig::default()
        });
        assert!(matches!(
            strict.register("wrapper", is::array_of(is::optional())),
            Err(SchemaError::Undeclared { path }) if path == "$[]"
        ));
        assert!(strict.is_empty());
    }

    #[test]
    fn schema_count_limit_is_enforced() {
        let config = RegistryConfig {
            max_schemas: 1,
            ..RegistryConfig::default()
        };
        let result = SchemaRegistry::from_entries_with_config(
            [("a", is::string()), ("b", is::number())],
            config,
        );
        assert!(matches!(result, Err(SchemaError::LimitExceeded { max: 1 })));
    }

    #[test]
    fn replacing_at_capacity_is_allowed() {
        let mut registry = SchemaRegistry::with_config(RegistryConfig {
            allow_replace: true,
            max_schemas: 1,
            ..RegistryConfig::default()
        });
        registry.register("a", is::string()).unwrap();
        registry.register("a", is::number()).unwrap();
        assert!(registry.has_schema("a"));
    }

    #[test]
    fn from_entries_loads_schemas() {
        let registry = SchemaRegistry::from_entries([
            ("location", location()),
            ("tag", is::string()),
        ])
        .unwrap();

        assert!(registry.has_schema("location"));
        assert!(registry.has_schema("tag"));
        assert!(!registry.has_schema("person"));
        assert_eq!(registry.names(), vec!["location", "tag"]);
        assert!(matches!(registry.get("tag").map(Schema::kind), Some(crate::Kind::String)));
    }

    #[test]
    fn config_access() {
        let config = RegistryConfig {
            fail_on_missing_schema: true,
            reject_undeclared: true,
            allow_replace: true,
            max_schemas: 8,
        };
        let registry = SchemaRegistry::with_config(config);
        assert_eq!(registry.config(), &config);
        assert!(SchemaRegistry::default().is_empty());
    }
}

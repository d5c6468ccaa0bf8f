/// Controls schema registry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, unknown names return `SchemaError::NoSchema` instead of passing.
    pub fail_on_missing_schema: bool,
    /// When true, registration fails for schemas with an undeclared node.
    pub reject_undeclared: bool,
    /// When true, registering a taken name replaces the previous schema.
    pub allow_replace: bool,
    /// Maximum number of registered schemas.
    pub max_schemas: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            fail_on_missing_schema: false,
            reject_undeclared: false,
            allow_replace: false,
            max_schemas: 256,
        }
    }
}

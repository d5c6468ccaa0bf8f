/// Errors raised around schemas. Evaluation itself never errors.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A node with no declared kind is reachable from the schema root.
    #[error("schema has no declared kind at {path}")]
    Undeclared { path: String },

    /// A schema is already registered under this name.
    #[error("schema already registered: {0}")]
    AlreadyRegistered(String),

    /// The registry is full.
    #[error("schema count exceeds configured max ({max})")]
    LimitExceeded { max: usize },

    /// No schema registered under the given name.
    #[error("no schema registered under {0}")]
    NoSchema(String),

    /// The value does not conform to the named schema.
    #[error("value rejected by schema {name}")]
    Rejected { name: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;

//! Error types for traefik-labels

use thiserror::Error;

/// Result type for label operations
pub type Result<T> = std::result::Result<T, LabelError>;

/// Label editing error types
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("missing 'services' in compose file")]
    MissingServices,

    #[error("missing service '{0}' in compose file")]
    ServiceNotFound(String),

    #[error("Compose file parse error: {0}")]
    ComposeParse(String),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

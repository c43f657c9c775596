use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Could not find '{field}' in response; tried fields: {}", .aliases.join(", "))]
    ParsingError {
        field: String,
        aliases: Vec<String>,
    },

    #[error("{operation} operation failed with HTTP {status}: {body_excerpt}")]
    OperationFailedError {
        operation: String,
        status: u16,
        body_excerpt: String,
    },
}

impl ProviderError {
    pub fn config(message: impl Into<String>) -> Self {
        ProviderError::ConfigError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

use std::io;
use thiserror::Error;

pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Boxed error used to carry an underlying cause
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for the Bedrock client
#[derive(Error, Debug)]
pub enum ModelError {
    /// Invalid configuration, detected at validation time
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Opening the connection handle failed
    #[error("failed to connect to bedrock runtime in {region}: {source}")]
    Connection {
        region: String,
        #[source]
        source: BoxError,
    },

    /// The streaming inference call failed
    #[error("GetConverseStream failed, err: {message}")]
    Invocation {
        message: String,
        #[source]
        source: BoxError,
    },

    /// Stream disconnected before completion
    #[error("stream disconnected before completion: {0}")]
    Stream(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Wrap a connection failure for `region`
    pub fn connection(region: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ModelError::Connection {
            region: region.into(),
            source: source.into(),
        }
    }

    /// Wrap an invocation failure, keeping its text and the original error
    pub fn invocation(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        ModelError::Invocation {
            message: source.to_string(),
            source,
        }
    }

    /// Check if the error is a client error (caller must fix its input)
    pub fn is_client_error(&self) -> bool {
        matches!(self, ModelError::Configuration(_))
    }
}

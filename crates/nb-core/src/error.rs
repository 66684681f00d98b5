//! Error types for newsboard

use thiserror::Error;

/// Main error type for newsboard
#[derive(Debug, Error)]
pub enum NewsboardError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// News item not found
    #[error("News not found: {0}")]
    NewsNotFound(String),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Actor not found
    #[error("User not found: {0}")]
    ActorNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<NewsboardError>,
    },
}

impl NewsboardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        NewsboardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error means the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            NewsboardError::NewsNotFound(_)
            | NewsboardError::CommentNotFound(_)
            | NewsboardError::ActorNotFound(_) => true,
            NewsboardError::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

impl From<toml::de::Error> for NewsboardError {
    fn from(err: toml::de::Error) -> Self {
        NewsboardError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for NewsboardError {
    fn from(err: toml::ser::Error) -> Self {
        NewsboardError::Toml(err.to_string())
    }
}

/// Result type alias for newsboard
pub type Result<T> = std::result::Result<T, NewsboardError>;

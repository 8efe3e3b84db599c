//! Error types for connect-worlds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primary error type for all conversation operations.
///
/// Every variant is fatal to a running conversation: the loop stops on the
/// first error and hands it back to the caller.
#[derive(Error, Debug)]
pub enum WorldsError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed reply: {0}")]
    MalformedReply(#[from] serde_json::Error),

    #[error("Reply from {world} has no string field '{field}'")]
    MissingField { world: String, field: String },

    #[error("Timeout after {0}ms")]
    Timeout(u64),
}

/// Coarse classification of a [`WorldsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Configuration,
    Network,
    MalformedReply,
    Timeout,
}

impl WorldsError {
    pub fn missing_field(world: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            world: world.into(),
            field: field.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Network(_) => ErrorCategory::Network,
            Self::MalformedReply(_) | Self::MissingField { .. } => ErrorCategory::MalformedReply,
            Self::Timeout(_) => ErrorCategory::Timeout,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, WorldsError>;

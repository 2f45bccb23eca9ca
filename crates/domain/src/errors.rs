//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for PiiGuard
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum PiiGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Pattern error: {0}")]
    Pattern(String),

    #[error("Edit rejected: {0}")]
    Edit(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for PiiGuard operations
pub type Result<T> = std::result::Result<T, PiiGuardError>;

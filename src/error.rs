//! Error types for the entity registry.
//!
//! All errors are strongly typed using thiserror so callers can match on
//! specific conditions (most importantly "entity not found") instead of
//! inspecting messages.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Validation errors raised while decoding caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date '{value}': expected YYYY-MM-DD or an ISO-8601 timestamp")]
    InvalidDate {
        value: String,
    },

    #[error("Invalid boolean '{value}' for '{field}': expected true or false")]
    InvalidBool {
        field: String,
        value: String,
    },
}

/// Top-level error type for the server process.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0} (run with --help for usage)")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

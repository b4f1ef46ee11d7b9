//! Error types for the rank feature framework
//!
//! The framework operates on trusted, in-process data, so the taxonomy is
//! narrow. Out-of-range term lookups are not errors (they return `None`);
//! only ambient operations such as field resolution, configuration loading
//! and binding into mis-sized match data can fail.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::TermFieldHandle;
use thiserror::Error;

/// Result type alias for framework operations
pub type Result<T> = std::result::Result<T, FefError>;

/// Error types for the rank feature framework
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FefError {
    /// A field name could not be resolved in the index environment
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    /// Match data has no slot for the given term field handle
    #[error("Unknown term field handle: {0}")]
    UnknownHandle(TermFieldHandle),

    /// Configuration is structurally valid but semantically wrong
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for FefError {
    fn from(e: toml::de::Error) -> Self {
        FefError::Serialization(e.to_string())
    }
}

//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// City name was empty after trimming
    #[error("Invalid city: {0}")]
    InvalidCity(String),

    /// Voice name is not part of the voice table
    #[error("Unknown voice: {0} (expected one of Rachel, Bella, Antoni, Daniel)")]
    UnknownVoice(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

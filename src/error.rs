//! Custom error types for the intake wizard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for intake-cli operations
#[derive(Error, Debug)]
pub enum IntakeError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors (a step's validity predicate failed)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lead export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl IntakeError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for intake-cli operations
pub type IntakeResult<T> = Result<T, IntakeError>;

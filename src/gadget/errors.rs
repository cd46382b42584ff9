//! # Gadget Errors
//!
//! Error taxonomy for gadget operations: not-found, validation failure,
//! and internal degradation. Each error knows its HTTP status code so the
//! HTTP layer can translate uniformly.

use thiserror::Error;

/// Result type for gadget operations
pub type GadgetResult<T> = Result<T, GadgetError>;

/// Errors produced by the gadget service
#[derive(Debug, Clone, Error)]
pub enum GadgetError {
    /// No record with the requested id
    #[error("no gadget with this id present")]
    NotFound,

    /// Update payload violated a validation rule
    #[error("{0}")]
    ValidationFailed(String),

    /// Storage operation failed
    #[error("storage error: {0}")]
    StorageError(String),
}

impl GadgetError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GadgetError::NotFound => 404,
            GadgetError::ValidationFailed(_) => 400,
            GadgetError::StorageError(_) => 500,
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

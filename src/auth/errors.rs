//! # Auth Errors
//!
//! Error types for the token gate. The missing-credential case is
//! deliberately reported as 400 rather than 401; that is the contract
//! clients of this API already depend on.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No bearer token was presented
    #[error("you are not logged in")]
    MissingToken,

    /// Token failed signature or expiry verification
    #[error("invalid token")]
    InvalidToken,

    /// Token signing failed
    #[error("internal error: token generation failed")]
    TokenGenerationFailed,
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::MissingToken => 400,
            AuthError::InvalidToken => 400,
            AuthError::TokenGenerationFailed => 500,
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_invalid_tokens_are_client_errors() {
        assert_eq!(AuthError::MissingToken.status_code(), 400);
        assert_eq!(AuthError::InvalidToken.status_code(), 400);
        assert!(AuthError::MissingToken.is_client_error());
    }

    #[test]
    fn test_generation_failure_is_internal() {
        assert_eq!(AuthError::TokenGenerationFailed.status_code(), 500);
        assert!(!AuthError::TokenGenerationFailed.is_client_error());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AuthError::MissingToken.to_string(), "you are not logged in");
        assert_eq!(AuthError::InvalidToken.to_string(), "invalid token");
    }
}

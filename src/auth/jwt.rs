//! # JWT Token Management
//!
//! Capability-token generation and verification for the gadget API.
//!
//! The token is a gate pass, not an identity: it carries a static marker
//! claim plus issued-at and expiry timestamps, and no subject. Anyone who
//! holds a validly signed, unexpired token passes the gate.
//!
//! ## Invariants
//! - AUTH-JWT1: verification is stateless (no store lookup)
//! - AUTH-JWT2: tokens expire 24 hours after issue
//! - AUTH-JWT3: tokens carry no user identity or secrets

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};

/// Marker value carried by every issued token
const TOKEN_TITLE: &str = "auth";

/// Claims carried by a gate token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Static marker claim
    pub title: String,

    /// Issued at timestamp (Unix epoch seconds)
    pub iat: i64,

    /// Expiration timestamp (Unix epoch seconds)
    pub exp: i64,
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for HS256 signing
    pub secret: String,

    /// Token lifetime
    pub token_ttl: Duration,
}

impl JwtConfig {
    /// Create a config with the given secret and the default 24-hour lifetime
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            token_ttl: Duration::hours(24),
        }
    }
}

/// JWT manager for token generation and verification
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    /// Create a new JWT manager with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a signed gate token
    pub fn issue_token(&self) -> AuthResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            title: TOKEN_TITLE.to_string(),
            iat: now.timestamp(),
            exp: (now + self.config.token_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)
    }

    /// Verify a gate token's signature and expiry.
    ///
    /// # Invariant
    /// AUTH-JWT1: verification is stateless (no store lookup)
    pub fn verify_token(&self, token: &str) -> AuthResult<TokenClaims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> JwtManager {
        JwtManager::new(JwtConfig::new("test-secret-at-least-32-chars-long".to_string()))
    }

    #[test]
    fn test_issued_token_verifies() {
        let manager = manager();
        let token = manager.issue_token().unwrap();

        let claims = manager.verify_token(&token).unwrap();
        assert_eq!(claims.title, "auth");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_expires_after_24_hours() {
        let manager = manager();
        let token = manager.issue_token().unwrap();
        let claims = manager.verify_token(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let manager = manager();
        assert!(matches!(
            manager.verify_token("not-a-jwt"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = manager().issue_token().unwrap();
        let other = JwtManager::new(JwtConfig::new("a-completely-different-secret-key".to_string()));

        assert!(matches!(
            other.verify_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }
}

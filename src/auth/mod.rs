//! # Auth Module
//!
//! Capability-token issuance and verification for the gadget API gate.

pub mod errors;
pub mod jwt;

pub use errors::{AuthError, AuthResult};
pub use jwt::{JwtConfig, JwtManager, TokenClaims};

//! # Gadget API HTTP Server Module
//!
//! Axum server, routes, auth gate, and error translation for the gadget
//! inventory API.
//!
//! # Endpoints
//!
//! - `/` - Liveness banner
//! - `/health` - Health check
//! - `/api/v1/gadgets/auth` - Token issuance (unauthenticated)
//! - `/api/v1/gadgets*` - Gadget lifecycle (bearer-gated)

pub mod auth_gate;
pub mod config;
pub mod errors;
pub mod gadget_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use gadget_routes::GadgetState;
pub use server::HttpServer;

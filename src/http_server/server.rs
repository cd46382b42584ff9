//! # HTTP Server
//!
//! The unified entry point for the gadget API: builds the router from the
//! shared state, layers CORS, and serves over a tokio listener.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{http::StatusCode, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::gadget_routes::{gadget_routes, GadgetState};
use crate::observability::Logger;

/// Liveness banner served at the root path
const BANNER: &str = "gadgets inventory";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// HTTP server for the gadget API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server from a config and the shared gadget state
    pub fn new(config: HttpServerConfig, state: Arc<GadgetState>) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the router: liveness endpoints at the root, the gadget API
    /// nested under `/api/v1`, CORS applied across the board.
    fn build_router(config: &HttpServerConfig, state: Arc<GadgetState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(banner_handler))
            .route("/health", get(health_handler))
            .nest("/api/v1", gadget_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "invalid socket address")
        })?;

        Logger::info("SERVER_START", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Liveness banner handler
async fn banner_handler() -> &'static str {
    BANNER
}

/// Health check handler
async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

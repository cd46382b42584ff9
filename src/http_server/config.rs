//! HTTP Server Configuration
//!
//! Host, port, and CORS settings for the gadget API server. The listening
//! port and the signing secret are required at startup; the CLI layer is
//! responsible for sourcing them from the environment.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// CORS allowed origins (empty means permissive, for development)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl HttpServerConfig {
    /// Create a config listening on the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            host: default_host(),
            port,
            cors_origins: Vec::new(),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

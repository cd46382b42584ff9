//! CLI command implementations
//!
//! The `serve` command wires the process together: environment into
//! config, config into state, state into the server, then blocks on the
//! tokio runtime. Everything the server needs is constructed here and
//! injected; no module-level globals.

use std::env;
use std::sync::Arc;

use crate::auth::{JwtConfig, JwtManager};
use crate::http_server::{GadgetState, HttpServer, HttpServerConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Environment variable holding the token-signing secret (required)
const ENV_JWT_SECRET: &str = "JWT_SECRET";

/// Environment variable holding the listening port (required unless
/// `--port` is given)
const ENV_PORT: &str = "PORT";

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { port } => serve(port),
    }
}

/// Boot the gadget API server and serve until shutdown.
///
/// 1. Resolve the signing secret and port from flags/environment
/// 2. Construct the state (store, service, token manager)
/// 3. Start the axum server on a fresh tokio runtime
pub fn serve(port_flag: Option<u16>) -> CliResult<()> {
    let secret = env::var(ENV_JWT_SECRET)
        .map_err(|_| CliError::config_error(format!("{} is not set", ENV_JWT_SECRET)))?;
    if secret.is_empty() {
        return Err(CliError::config_error(format!("{} is empty", ENV_JWT_SECRET)));
    }

    let port = resolve_port(port_flag)?;

    let jwt = JwtManager::new(JwtConfig::new(secret));
    let state = Arc::new(GadgetState::new(jwt));
    let server = HttpServer::new(HttpServerConfig::with_port(port), state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Resolve the listening port: `--port` flag first, then `PORT`
fn resolve_port(port_flag: Option<u16>) -> CliResult<u16> {
    if let Some(port) = port_flag {
        return Ok(port);
    }

    let raw = env::var(ENV_PORT)
        .map_err(|_| CliError::config_error(format!("{} is not set", ENV_PORT)))?;
    raw.parse::<u16>()
        .map_err(|_| CliError::config_error(format!("{} is not a valid port: {}", ENV_PORT, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_flag_wins() {
        assert_eq!(resolve_port(Some(3000)).unwrap(), 3000);
    }
}

//! CLI argument definitions using clap
//!
//! Commands:
//! - gadgetry serve [--port <port>]

use clap::{Parser, Subcommand};

/// Gadgetry - a small token-gated gadget inventory API
#[derive(Parser, Debug)]
#[command(name = "gadgetry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the gadget API server
    Serve {
        /// Listening port; overrides the PORT environment variable
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_port_flag() {
        let cli = Cli::try_parse_from(["gadgetry", "serve", "--port", "3000"]).unwrap();
        let Command::Serve { port } = cli.command;
        assert_eq!(port, Some(3000));
    }

    #[test]
    fn test_serve_without_flag() {
        let cli = Cli::try_parse_from(["gadgetry", "serve"]).unwrap();
        let Command::Serve { port } = cli.command;
        assert_eq!(port, None);
    }
}

//! CLI module for the Users API
//!
//! Provides subcommands for running the service:
//! - `serve`: HTTP API server

pub mod serve;

use clap::{Parser, Subcommand};

/// Users API - in-memory user directory over HTTP
#[derive(Parser)]
#[command(name = "users-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["users-api", "serve"]).unwrap();
        let Command::Serve(args) = cli.command;
        assert!(args.port.is_none());
    }

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["users-api", "serve", "--port", "9090"]).unwrap();
        let Command::Serve(args) = cli.command;
        assert_eq!(args.port, Some(9090));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["users-api"]).is_err());
    }
}

//! Command-line interface for the ultimate tic-tac-toe server.

use clap::Parser;
use std::path::PathBuf;

/// Ultimate tic-tac-toe game server
#[derive(Parser, Debug)]
#[command(name = "ultimate_server")]
#[command(about = "Serves a single ultimate tic-tac-toe game over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["ultimate_server"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.port.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "ultimate_server",
            "--config",
            "server.toml",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("server.toml")));
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cli.port, Some(9000));
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["ultimate_server", "--port", "99999"]).is_err());
    }
}

use clap::Parser;
use std::path::PathBuf;

/// Paideia Admin Console - serves the admin UI and proxies its API calls
#[derive(Parser, Debug, Clone)]
#[command(name = "paideia", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "PAIDEIA_CONFIG", default_value = "paideia.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "PAIDEIA_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "PAIDEIA_PORT")]
    pub port: Option<u16>,

    /// Base URL of the platform API requests are proxied to
    #[arg(long, env = "PAIDEIA_UPSTREAM")]
    pub upstream: Option<String>,

    /// Seconds to wait for the platform API before giving up
    #[arg(long, env = "PAIDEIA_UPSTREAM_TIMEOUT")]
    pub upstream_timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["paideia"]);
        assert_eq!(cli.config, PathBuf::from("paideia.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.upstream.is_none());
        assert!(cli.upstream_timeout.is_none());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "paideia",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8088",
            "--upstream",
            "http://platform:8080",
            "--upstream-timeout",
            "10",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8088));
        assert_eq!(cli.upstream, Some("http://platform:8080".to_string()));
        assert_eq!(cli.upstream_timeout, Some(10));
    }
}

use std::path::Path;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Problems a settings file can have beyond failing to parse
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("upstream.url is not a valid URL: {0}")]
    InvalidUpstreamUrl(String),
    #[error("upstream.url must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("upstream.timeout_seconds must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Where the platform API lives and how long to wait for it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamSettings {
    pub url: String,
    #[serde(default = "default_upstream_timeout")]
    pub timeout_seconds: u64,
}

fn default_upstream_timeout() -> u64 {
    30
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_file(Path::new("paideia.toml"))
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::from_file(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);
        settings.validate()?;

        Ok(settings)
    }

    fn from_file(config_path: &Path) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 4000)?
            .set_default("upstream.url", "http://127.0.0.1:8080")?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(upstream) = &cli.upstream {
            self.upstream.url = upstream.clone();
        }
        if let Some(timeout) = cli.upstream_timeout {
            self.upstream.timeout_seconds = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let url = reqwest::Url::parse(&self.upstream.url)
            .map_err(|_| SettingsError::InvalidUpstreamUrl(self.upstream.url.clone()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(SettingsError::UnsupportedScheme(other.to_string())),
        }
        if self.upstream.timeout_seconds == 0 {
            return Err(SettingsError::ZeroTimeout);
        }
        Ok(())
    }
}

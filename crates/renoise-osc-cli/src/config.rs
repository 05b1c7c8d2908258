//! Configuration file for the `renoise-osc` binary
//!
//! ```toml
//! host = "192.168.1.20"
//! port = 8000
//! bind = "0.0.0.0:0"
//! ```

use anyhow::{Context, Result};
use renoise_osc_client::RenoiseBuilder;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Renoise host, IP literal or hostname
    pub host: Option<String>,
    /// Renoise OSC server port
    pub port: Option<u16>,
    /// Local address for the outbound socket
    pub bind: Option<SocketAddr>,
}

impl CliConfig {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Load `explicit`, or the default file when it exists.
    /// Also returns the file that was read, if any.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_file().filter(|path| path.is_file()),
        };
        match path {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Command-line flags win over the file
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if host.is_some() {
            self.host = host;
        }
        if port.is_some() {
            self.port = port;
        }
        self
    }

    pub fn builder(&self) -> RenoiseBuilder {
        let mut builder = RenoiseBuilder::new();
        if let Some(host) = &self.host {
            builder = builder.host(host);
        }
        if let Some(port) = self.port {
            builder = builder.port(port);
        }
        if let Some(bind) = self.bind {
            builder = builder.bind_addr(bind);
        }
        builder
    }
}

/// `<config_dir>/renoise-osc/config.toml`
pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("renoise-osc").join("config.toml"))
}

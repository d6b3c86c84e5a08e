use std::net::SocketAddr;

use serde::Deserialize;
use hassbridge_core::error::{BridgeError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub statsd: StatsdSection,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            gateway: GatewaySection::default(),
            statsd: StatsdSection::default(),
        }
    }
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BridgeError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.statsd.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            BridgeError::Config(format!(
                "gateway.listen must be a socket address, got {:?}",
                self.listen
            ))
        })
    }
}

/// Collector settings. Every key is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsdSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_sample_rate", alias = "rate")]
    pub sample_rate: u32,
}

impl Default for StatsdSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            prefix: default_prefix(),
            sample_rate: default_sample_rate(),
        }
    }
}

impl StatsdSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(BridgeError::Config("statsd.host must not be empty".into()));
        }
        // u16 already caps the upper bound.
        if self.port == 0 {
            return Err(BridgeError::Config(
                "statsd.port must be between 1 and 65535".into(),
            ));
        }
        if self.prefix.is_empty() {
            return Err(BridgeError::Config("statsd.prefix must not be empty".into()));
        }
        if let Some(c) = self
            .prefix
            .chars()
            .find(|c| matches!(c, ':' | '|' | '#' | '@') || c.is_whitespace())
        {
            return Err(BridgeError::Config(format!(
                "statsd.prefix contains reserved character {c:?}"
            )));
        }
        if self.sample_rate < 1 {
            return Err(BridgeError::Config("statsd.sample_rate must be >= 1".into()));
        }
        Ok(())
    }

    /// Snapshot the validated settings.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;
        Ok(ResolvedConfig {
            host: self.host.clone(),
            port: self.port,
            prefix: self.prefix.clone(),
            sample_rate: self.sample_rate,
        })
    }
}

/// Immutable collector settings shared by every submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub host: String,
    pub port: u16,
    pub prefix: String,
    pub sample_rate: u32,
}

fn default_version() -> u32 {
    1
}
fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_host() -> String {
    "localhost".into()
}
fn default_port() -> u16 {
    8125
}
fn default_prefix() -> String {
    "hass".into()
}
fn default_sample_rate() -> u32 {
    1
}

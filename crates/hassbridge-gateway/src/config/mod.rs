//! Bridge config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use hassbridge_core::error::{BridgeError, Result};

pub use schema::{BridgeConfig, GatewaySection, ResolvedConfig, StatsdSection};

/// Environment variable overriding the config path.
pub const CONFIG_ENV: &str = "HASSBRIDGE_CONFIG";
/// Config path used when `HASSBRIDGE_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "hassbridge.yaml";

/// Load from `HASSBRIDGE_CONFIG` or the default path.
///
/// A missing default file is not an error: every option has a default.
pub fn load() -> Result<BridgeConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) => match fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(s) => load_from_str(&s),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
                let cfg = BridgeConfig::default();
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) => Err(BridgeError::Config(format!("read config failed: {e}"))),
        },
    }
}

pub fn load_from_file(path: &str) -> Result<BridgeConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| BridgeError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<BridgeConfig> {
    let cfg: BridgeConfig = serde_yaml::from_str(s)
        .map_err(|e| BridgeError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

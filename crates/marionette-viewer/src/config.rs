//! Viewer-server connection configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Connection parameters for the external viewer server
///
/// Consumed by whatever connection routine the caller hands to
/// `create_real_client`; this crate does not own the transport itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Host running the viewer server
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the viewer server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Window to create scenes under
    #[serde(default = "default_window_name")]
    pub window_name: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            window_name: default_window_name(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    12321
}

fn default_window_name() -> String {
    "manipulation".to_string()
}

/// Load configuration from file, falling back to defaults when missing
pub fn load_config(path: &Path) -> Result<ViewerConfig, ConfigError> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: ViewerConfig = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded viewer configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Viewer configuration not found, using defaults"
        );
        Ok(ViewerConfig::default())
    }
}

/// Save configuration to file
pub fn save_config(config: &ViewerConfig, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

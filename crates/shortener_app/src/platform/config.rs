//! Client configuration, read from `shortener.ron` in the working directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use shortener_gateway::GatewaySettings;
use shortener_logging::LogDestination;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "shortener.ron";
pub const API_BASE_ENV: &str = "SHORTENER_API_BASE";
pub const LOG_FILENAME: &str = "shortener.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let settings = GatewaySettings::default();
        Self {
            api_base: settings.base_url,
            connect_timeout_ms: settings.connect_timeout.as_millis() as u64,
            request_timeout_ms: settings.request_timeout.as_millis() as u64,
            max_response_bytes: settings.max_response_bytes,
            log_destination: LogDestination::default(),
        }
    }
}

impl ClientConfig {
    /// Reads the config file; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Applies the `SHORTENER_API_BASE` value, if set and non-blank.
    pub fn with_api_base_override(mut self, value: Option<String>) -> Self {
        if let Some(base) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            self.api_base = base;
        }
        self
    }

    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            base_url: self.api_base.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_response_bytes: self.max_response_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ClientConfig::load(&temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base, "http://localhost:8000");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(api_base: "https://sho.rt", request_timeout_ms: 1500, log_destination: Both)"#,
        )
        .unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.api_base, "https://sho.rt");
        assert_eq!(config.log_destination, LogDestination::Both);
        let settings = config.gateway_settings();
        assert_eq!(settings.request_timeout, Duration::from_millis(1500));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "(api_base: 42").unwrap();

        let err = ClientConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn env_override_replaces_base_unless_blank() {
        let config = ClientConfig::default()
            .with_api_base_override(Some("  http://other:9000 ".to_string()));
        assert_eq!(config.api_base, "http://other:9000");

        let config = config.with_api_base_override(Some("   ".to_string()));
        assert_eq!(config.api_base, "http://other:9000");

        let config = config.with_api_base_override(None);
        assert_eq!(config.api_base, "http://other:9000");
    }
}

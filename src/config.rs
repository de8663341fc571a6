//! SDK configuration
//!
//! Host-side knobs for the demo shell: where analytics go and how the
//! gallery is themed. Stored as JSON in the platform config directory;
//! missing or corrupt files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDir(String),
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// SDK configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Analytics collector endpoint. Events go to the structured log when
    /// unset.
    pub analytics_endpoint: Option<String>,
    /// Demo window theme: "light" or "dark"
    pub theme: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            analytics_endpoint: None,
            theme: "light".to_string(),
        }
    }
}

impl SdkConfig {
    /// Normalize invalid values
    pub fn validate(&mut self) {
        if self.theme != "light" && self.theme != "dark" {
            self.theme = "light".to_string();
        }

        if let Some(endpoint) = &self.analytics_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                tracing::warn!("Ignoring non-HTTP analytics endpoint: {}", endpoint);
                self.analytics_endpoint = None;
            }
        }
    }
}

/// Path of the config file in the platform config directory
fn config_path() -> Result<PathBuf, ConfigError> {
    directories::ProjectDirs::from("me", "SplitPay", "SplitPaySnippet")
        .map(|dirs| dirs.config_dir().join("config.json"))
        .ok_or_else(|| ConfigError::ConfigDir("could not determine config directory".to_string()))
}

/// Load the configuration, falling back to defaults on any failure
pub fn load_config() -> SdkConfig {
    match config_path().and_then(|p| load_from(&p)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            SdkConfig::default()
        }
    }
}

fn load_from(path: &Path) -> Result<SdkConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("Config file not found, using defaults");
        return Ok(SdkConfig::default());
    }

    let json = fs::read_to_string(path)?;
    let mut config: SdkConfig = serde_json::from_str(&json)?;
    config.validate();

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save the configuration
pub fn save_config(config: &SdkConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to(config, &path)
}

fn save_to(config: &SdkConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;

    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SdkConfig::default();
        assert!(config.analytics_endpoint.is_none());
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn test_validate_theme() {
        let mut config = SdkConfig::default();
        config.theme = "neon".to_string();
        config.validate();
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = SdkConfig::default();
        config.analytics_endpoint = Some("ftp://collector.example".to_string());
        config.validate();
        assert!(config.analytics_endpoint.is_none());

        config.analytics_endpoint = Some("https://collector.example/events".to_string());
        config.validate();
        assert!(config.analytics_endpoint.is_some());
    }

    #[test]
    fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = SdkConfig {
            analytics_endpoint: Some("https://collector.example/events".to_string()),
            theme: "dark".to_string(),
        };
        save_to(&config, &path).unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.analytics_endpoint, config.analytics_endpoint);
        assert_eq!(loaded.theme, "dark");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.analytics_endpoint.is_none());
    }
}

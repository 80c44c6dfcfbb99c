//! Configuration loading for the HS Finder TUI.
//!
//! Every field has a default. An optional TOML file (`--config` or
//! `HSFINDER_TUI_CONFIG`) overrides the defaults, and `API_BASE_URL`
//! overrides the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::types::{MAX_RESULT_SIZE, MIN_RESULT_SIZE};

pub const DEFAULT_API_BASE_URL: &str = "https://dmitriykuramshin-demoapi.hf.space";
pub const CONFIG_PATH_ENV: &str = "HSFINDER_TUI_CONFIG";
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HsfinderConfig {
    pub api_base_url: String,
    pub timeouts: TimeoutConfig,
    pub default_size: u8,
    pub default_alpha: f64,
    pub log_path: PathBuf,
}

/// Per-endpoint request timeouts, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeoutConfig {
    pub spelling_ms: u64,
    pub search_ms: u64,
    pub organizations_ms: u64,
    pub health_ms: u64,
}

impl Default for HsfinderConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeouts: TimeoutConfig::default(),
            default_size: 10,
            default_alpha: 0.5,
            log_path: PathBuf::from("hsfinder-tui.log"),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            spelling_ms: 10_000,
            search_ms: 30_000,
            organizations_ms: 30_000,
            health_ms: 5_000,
        }
    }
}

impl TimeoutConfig {
    pub fn spelling(&self) -> Duration {
        Duration::from_millis(self.spelling_ms)
    }

    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn organizations(&self) -> Duration {
        Duration::from_millis(self.organizations_ms)
    }

    pub fn health(&self) -> Duration {
        Duration::from_millis(self.health_ms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl HsfinderConfig {
    /// Resolve the configuration for this process.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        let config = config.with_base_url_override(std::env::var(API_BASE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: HsfinderConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Replace the base URL when `url` is set and non-blank.
    pub fn with_base_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }

    /// Base URL without surrounding whitespace or a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim().trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url();
        if base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must start with http:// or https://".to_string(),
            });
        }
        let timeouts = [
            ("timeouts.spelling_ms", self.timeouts.spelling_ms),
            ("timeouts.search_ms", self.timeouts.search_ms),
            ("timeouts.organizations_ms", self.timeouts.organizations_ms),
            ("timeouts.health_ms", self.timeouts.health_ms),
        ];
        for (field, value) in timeouts {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be > 0".to_string(),
                });
            }
        }
        if !(MIN_RESULT_SIZE..=MAX_RESULT_SIZE).contains(&self.default_size) {
            return Err(ConfigError::InvalidValue {
                field: "default_size",
                reason: format!("must be within {}..={}", MIN_RESULT_SIZE, MAX_RESULT_SIZE),
            });
        }
        if !(0.0..=1.0).contains(&self.default_alpha) {
            return Err(ConfigError::InvalidValue {
                field: "default_alpha",
                reason: "must be within 0.0..=1.0".to_string(),
            });
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log_path",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = HsfinderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.timeouts.spelling(), Duration::from_secs(10));
        assert_eq!(config.timeouts.search(), Duration::from_secs(30));
        assert_eq!(config.timeouts.organizations(), Duration::from_secs(30));
        assert_eq!(config.timeouts.health(), Duration::from_secs(5));
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = HsfinderConfig::from_toml(
            r#"
            api_base_url = "http://localhost:8000/"
            [timeouts]
            search_ms = 1500
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(config.timeouts.search_ms, 1500);
        assert_eq!(config.timeouts.health_ms, 5_000);
        assert_eq!(config.default_size, 10);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = HsfinderConfig::from_toml("tenant_id = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_override_replaces_base_url() {
        let config = HsfinderConfig::default()
            .with_base_url_override(Some("http://127.0.0.1:9000".to_string()));
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = HsfinderConfig::default().with_base_url_override(Some("  ".to_string()));
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn base_url_requires_http_scheme() {
        let config =
            HsfinderConfig::default().with_base_url_override(Some("localhost:8000".to_string()));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "api_base_url", .. })
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = HsfinderConfig::default();
        config.timeouts.health_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "timeouts.health_ms", .. })
        ));
    }
}

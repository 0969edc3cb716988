//! Shell configuration.
//!
//! Settings live in a small JSON file in the standard configuration directory
//! (`~/.config/neobank/shell.json` on most platforms). A missing file means
//! defaults; a file that fails to parse is reported and ignored so a typo
//! never keeps the shell from starting. Environment variables take precedence
//! over the file, and the binary's flags take precedence over both.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::paths::{app_config_dir, env_path};

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "NEOBANK_CONFIG_PATH";
/// Environment variable overriding `api_base_url`.
pub const API_BASE_ENV: &str = "NEOBANK_API_BASE";
/// Environment variable supplying the bearer token.
pub const API_TOKEN_ENV: &str = "NEOBANK_API_TOKEN";

pub const CONFIG_FILE_NAME: &str = "shell.json";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_LOGOUT_TIMEOUT_SECS: u64 = 5;
const MIN_POLL_INTERVAL_SECS: u64 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure other than a missing file.
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File and environment-derived settings for the shell. Read-only: the shell
/// never writes this file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Base URL of the banking API, e.g. `https://bank.example.com/api`.
    pub api_base_url: String,
    /// Bearer token; normally supplied through `NEOBANK_API_TOKEN`.
    pub api_token: Option<String>,
    /// Seconds between unread-count refreshes.
    pub poll_interval_secs: u64,
    /// Upper bound on how long sign-out waits for the backend.
    pub logout_timeout_secs: u64,
    pub preferred_theme: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            logout_timeout_secs: DEFAULT_LOGOUT_TIMEOUT_SECS,
            preferred_theme: None,
        }
    }
}

impl ShellConfig {
    /// Loads the config file from its default location and applies
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&default_config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads a config file without consulting the environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => Ok(config),
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "Failed to parse shell config; using defaults"
                    );
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(base) = non_empty_env(API_BASE_ENV) {
            self.api_base_url = base;
        }
        if let Some(token) = non_empty_env(API_TOKEN_ENV) {
            self.api_token = Some(token);
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(MIN_POLL_INTERVAL_SECS))
    }

    pub fn logout_timeout(&self) -> Duration {
        Duration::from_secs(self.logout_timeout_secs)
    }
}

/// Resolved location of the config file.
pub fn default_config_path() -> PathBuf {
    env_path(CONFIG_PATH_ENV).unwrap_or_else(|| app_config_dir().join(CONFIG_FILE_NAME))
}

fn non_empty_env(var: &str) -> Option<String> {
    env::var(var).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert_eq!(config.logout_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(ShellConfig::load_from(&path).unwrap(), ShellConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        fs::write(&path, r#"{ "api_base_url": "https://bank.example.com/api", "poll_interval_secs": 10 }"#).unwrap();

        let config = ShellConfig::load_from(&path).unwrap();
        assert_eq!(config.api_base_url, "https://bank.example.com/api");
        assert_eq!(config.poll_interval(), Duration::from_secs(10));
        assert_eq!(config.logout_timeout_secs, DEFAULT_LOGOUT_TIMEOUT_SECS);
        assert_eq!(config.preferred_theme, None);
    }

    #[test]
    fn zero_poll_interval_is_clamped() {
        let config = ShellConfig {
            poll_interval_secs: 0,
            ..ShellConfig::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn full_file_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        fs::write(
            &path,
            r#"{
                "api_base_url": "https://bank.example.com/api",
                "api_token": "from-file",
                "poll_interval_secs": 15,
                "logout_timeout_secs": 2,
                "preferred_theme": "ansi256"
            }"#,
        )
        .unwrap();

        let config = ShellConfig::load_from(&path).unwrap();
        assert_eq!(config.api_token.as_deref(), Some("from-file"));
        assert_eq!(config.poll_interval(), Duration::from_secs(15));
        assert_eq!(config.logout_timeout(), Duration::from_secs(2));
        assert_eq!(config.preferred_theme.as_deref(), Some("ansi256"));
    }

    #[test]
    fn environment_overrides_file_values() {
        temp_env::with_vars(
            [
                (API_BASE_ENV, Some("https://staging.example.com/api")),
                (API_TOKEN_ENV, Some("  secret-token  ")),
            ],
            || {
                let mut config = ShellConfig::default();
                config.apply_env_overrides();
                assert_eq!(config.api_base_url, "https://staging.example.com/api");
                assert_eq!(config.api_token.as_deref(), Some("secret-token"));
            },
        );
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        temp_env::with_vars([(API_BASE_ENV, Some("   ")), (API_TOKEN_ENV, None::<&str>)], || {
            let mut config = ShellConfig::default();
            config.apply_env_overrides();
            assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
            assert_eq!(config.api_token, None);
        });
    }

    #[test]
    fn config_path_honours_override() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/neobank/custom.json"), || {
            assert_eq!(default_config_path(), PathBuf::from("/tmp/neobank/custom.json"));
        });
    }
}

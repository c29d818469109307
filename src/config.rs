//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the users service address
pub const BASE_URL_ENV: &str = "USERS_SERVICE_URL";

/// Address used when neither the environment nor the config file sets one
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Log file name inside the platform data directory
const LOG_FILE_NAME: &str = "signup-tui.log";

/// Where diagnostic logs are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

/// User configuration for the TUI, read from `config.json`
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TuiConfig {
    /// Users service base URL
    pub base_url: Option<String>,
    /// Fetch the user list once at startup (default: true)
    pub fetch_on_start: Option<bool>,
    /// Append diagnostic logs to this file (default: `signup-tui.log` in
    /// the platform data directory)
    pub log_file: Option<PathBuf>,
    /// Write diagnostic logs to stderr instead of a file
    pub log_to_stderr: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Default log file under the platform data directory
    fn default_log_path() -> PathBuf {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir)
            .join(LOG_FILE_NAME)
    }

    /// Resolve the log sink. Stderr shares the terminal with the UI, so it is
    /// only used when asked for explicitly.
    pub fn log_destination(&self) -> LogDestination {
        if self.log_to_stderr.unwrap_or(false) {
            return LogDestination::Stderr;
        }
        LogDestination::File(
            self.log_file
                .clone()
                .unwrap_or_else(Self::default_log_path),
        )
    }

    /// Whether the user list should be fetched when the app starts
    pub fn fetch_on_start(&self) -> bool {
        self.fetch_on_start.unwrap_or(true)
    }

    /// Resolve the client configuration. `env_base_url` wins over the file.
    pub fn client_config(&self, env_base_url: Option<String>) -> ClientConfig {
        let base_url = env_base_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        ClientConfig { base_url }
    }
}

/// Settings handed to the application root at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the users service, e.g. `http://localhost:5001`
    pub base_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.base_url.is_none());
        assert!(config.log_file.is_none());
        assert!(config.fetch_on_start());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.base_url.is_none());
        assert!(parsed.fetch_on_start.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"base_url": "http://users:5000", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.base_url, Some("http://users:5000".to_string()));
    }

    #[test]
    fn test_client_config_prefers_env() {
        let config = TuiConfig {
            base_url: Some("http://from-file:5000".to_string()),
            ..Default::default()
        };
        let client = config.client_config(Some("http://from-env:5000".to_string()));
        assert_eq!(client.base_url, "http://from-env:5000");
    }

    #[test]
    fn test_client_config_falls_back_to_file_then_default() {
        let config = TuiConfig {
            base_url: Some("http://from-file:5000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.client_config(Some("  ".to_string())).base_url,
            "http://from-file:5000"
        );
        assert_eq!(
            TuiConfig::default().client_config(None).base_url,
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_default_log_destination_is_a_file() {
        match TuiConfig::default().log_destination() {
            LogDestination::File(path) => {
                assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
            }
            LogDestination::Stderr => panic!("default logs must not go to the terminal"),
        }
    }

    #[test]
    fn test_log_destination_uses_configured_file() {
        let config = TuiConfig {
            log_file: Some(PathBuf::from("/tmp/signup.log")),
            ..Default::default()
        };
        assert_eq!(
            config.log_destination(),
            LogDestination::File(PathBuf::from("/tmp/signup.log"))
        );
    }

    #[test]
    fn test_log_destination_stderr_when_requested() {
        let parsed: TuiConfig =
            serde_json::from_str(r#"{"log_to_stderr": true, "log_file": "/tmp/x.log"}"#).unwrap();
        assert_eq!(parsed.log_destination(), LogDestination::Stderr);
    }

    #[test]
    fn test_fetch_on_start_can_be_disabled() {
        let parsed: TuiConfig = serde_json::from_str(r#"{"fetch_on_start": false}"#).unwrap();
        assert!(!parsed.fetch_on_start());
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let path = std::env::temp_dir().join("signup-tui-missing-config.json");
        let _ = fs::remove_file(&path);
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-config-{}.json",
            std::process::id()
        ));
        fs::write(
            &path,
            r#"{"base_url": "http://users:5000", "log_file": "/tmp/signup.log"}"#,
        )
        .unwrap();

        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.base_url, Some("http://users:5000".to_string()));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/signup.log")));
    }

    #[test]
    fn test_load_from_malformed_file_is_error() {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-bad-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{not json").unwrap();

        let result = TuiConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}

//! Configuration management for insights-reviewer.
//!
//! Settings are stored in a TOML file under the platform config directory:
//!
//! - **macOS/Linux**: `~/.config/insights-reviewer/config.toml`
//! - **Windows**: `%APPDATA%\insights-reviewer\config.toml`
//!
//! The GitHub bearer token is read from the `GITHUB_TOKEN` environment
//! variable and is never written to disk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Config file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config directory name.
const CONFIG_DIR_NAME: &str = "insights-reviewer";

/// Environment variable holding the GitHub bearer token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubConfig>,
}

/// GitHub API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// GitHub API base URL (override for GitHub Enterprise)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Get the configuration directory path.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(CONFIG_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location.
    ///
    /// Returns a default (empty) config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// Returns a default (empty) config if the file doesn't exist.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            debug!(path = ?path, "Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        debug!(path = ?path, "Loading config");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

        info!(path = ?path, "Config loaded successfully");
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        debug!(path = ?path, "Saving config");

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        info!(path = ?path, "Config saved successfully");
        Ok(())
    }

    /// The effective GitHub configuration, defaults if none is stored.
    pub fn github(&self) -> GithubConfig {
        self.github.clone().unwrap_or_default()
    }
}

/// Read the GitHub bearer token from the environment.
pub fn token_from_env() -> Result<String> {
    std::env::var(TOKEN_ENV_VAR)
        .map_err(|_| Error::Config(format!("{} environment variable is not set", TOKEN_ENV_VAR)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.github.is_none());

        let github = config.github();
        assert_eq!(github.api_url, "https://api.github.com");
        assert_eq!(github.timeout_secs, 10);
    }

    #[test]
    fn test_save_and_load() {
        let config = Config {
            github: Some(GithubConfig {
                api_url: "https://github.example.com/api/v3".to_string(),
                timeout_secs: 30,
            }),
        };

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        config.save_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("api_url = \"https://github.example.com/api/v3\""));
        assert!(contents.contains("timeout_secs = 30"));

        let loaded = Config::load_from(&path).unwrap();
        let github = loaded.github.unwrap();
        assert_eq!(github.api_url, "https://github.example.com/api/v3");
        assert_eq!(github.timeout_secs, 30);
    }

    #[test]
    fn test_load_nonexistent() {
        let path = PathBuf::from("/nonexistent/path/config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(config.github.is_none());
    }

    #[test]
    fn test_partial_config_uses_field_defaults() {
        let config: Config =
            toml::from_str("[github]\napi_url = \"https://ghe.local/api/v3\"\n").unwrap();

        let github = config.github.unwrap();
        assert_eq!(github.api_url, "https://ghe.local/api/v3");
        assert_eq!(github.timeout_secs, 10);
    }

    #[test]
    fn test_toml_serialization_omits_empty_sections() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(!toml_str.contains("[github]"));

        let config = Config {
            github: Some(GithubConfig::default()),
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[github]"));
    }
}

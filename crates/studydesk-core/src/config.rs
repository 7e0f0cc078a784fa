//! Configuration management for studydesk.
//!
//! Loads configuration from ${STUDYDESK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable that overrides `api.token`.
pub const TOKEN_ENV: &str = "STUDYDESK_TOKEN";

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for studydesk configuration and data directories.
    //!
    //! STUDYDESK_HOME resolution order:
    //! 1. STUDYDESK_HOME environment variable (if set)
    //! 2. ~/.config/studydesk (default)

    use std::path::PathBuf;

    /// Returns the studydesk home directory.
    pub fn studydesk_home() -> PathBuf {
        if let Ok(home) = std::env::var("STUDYDESK_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".studydesk"),
            |h| h.join(".config").join("studydesk"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        studydesk_home().join("config.toml")
    }

    /// Returns the directory rolling log files are written to.
    pub fn logs_dir() -> PathBuf {
        studydesk_home().join("logs")
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the study backend.
    pub base_url: String,
    /// Bearer token attached to requests.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Config::DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }
}

impl ApiConfig {
    /// Parses `base_url`.
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(self.base_url.trim())
            .with_context(|| format!("Invalid api.base_url '{}'", self.base_url))
    }

    /// Token from `STUDYDESK_TOKEN`, falling back to the config value.
    ///
    /// Blank values count as unset.
    pub fn resolved_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .or_else(|| {
                self.token
                    .as_deref()
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
            })
    }
}

/// Workspace controller settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Delay between revealed characters, in milliseconds.
    pub reveal_interval_ms: u64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: Config::DEFAULT_REVEAL_INTERVAL_MS,
        }
    }
}

impl WorkspaceConfig {
    /// Reveal tick interval; zero is bumped to one millisecond.
    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms.max(1))
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Write to rolling files under the logs dir instead of stderr.
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: true,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub workspace: WorkspaceConfig,
    pub log: LogConfig,
}

impl Config {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";
    pub const DEFAULT_REVEAL_INTERVAL_MS: u64 = 20;

    /// Loads configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default template to `path`.
    ///
    /// Fails if a config file is already there.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api.base_url, Config::DEFAULT_BASE_URL);
        assert_eq!(
            config.workspace.reveal_interval_ms,
            Config::DEFAULT_REVEAL_INTERVAL_MS
        );
        assert!(config.log.file);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "[workspace]\nreveal_interval_ms = 5\n[log]\nfile = false\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.workspace.reveal_interval_ms, 5);
        assert!(!config.log.file);
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.api.base_url, Config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[api\nbase_url = ").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("base_url ="));
        assert!(contents.contains("reveal_interval_ms ="));

        let loaded = Config::load_from(&config_path).unwrap();
        assert_eq!(loaded.api.base_url, Config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "# existing").unwrap();

        let err = Config::init(&config_path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_reveal_interval_never_zero() {
        let config = WorkspaceConfig {
            reveal_interval_ms: 0,
        };
        assert_eq!(config.reveal_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        let api = ApiConfig {
            base_url: "not a url".to_string(),
            token: None,
        };
        assert!(api.base_url().is_err());
    }

    #[test]
    fn test_blank_config_token_is_unset() {
        let api = ApiConfig {
            base_url: Config::DEFAULT_BASE_URL.to_string(),
            token: Some("   ".to_string()),
        };
        if std::env::var(TOKEN_ENV).is_err() {
            assert_eq!(api.resolved_token(), None);
        }
    }
}

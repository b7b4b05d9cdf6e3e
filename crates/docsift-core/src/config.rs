//! Configuration for the document service.
//!
//! Configuration is read from TOML and every field has a default, so an empty
//! or missing file is valid.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Defaults**: `./data` as the corpus root, DeepSeek as the model API
//! 2. **Config file**: `global.toml` in the platform config directory, or an
//!    explicit path passed on the command line
//! 3. **Environment variables**: `DOCSIFT_DATA_DIR`, `DOCSIFT_API_URL`,
//!    `DOCSIFT_MODEL`, `DEEPSEEK_API_KEY`
//!
//! The environment is consulted once, by [`Config::apply_env_overrides`]. The
//! API key then travels inside [`GatewayConfig`] to the gateway constructor.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [data]
//! root = "/home/user/notes"
//! extensions = [".md", ".txt"]
//!
//! [gateway]
//! api_url = "https://api.deepseek.com/chat/completions"
//! model = "deepseek-chat"
//! temperature = 0.1
//! timeout_secs = 60
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::loader::DEFAULT_EXTENSIONS;
use crate::{Error, Result};

/// Environment variable overriding the corpus root.
pub const ENV_DATA_DIR: &str = "DOCSIFT_DATA_DIR";
/// Environment variable overriding the chat-completions URL.
pub const ENV_API_URL: &str = "DOCSIFT_API_URL";
/// Environment variable overriding the model name.
pub const ENV_MODEL: &str = "DOCSIFT_MODEL";
/// Environment variable holding the model API key.
pub const ENV_API_KEY: &str = "DEEPSEEK_API_KEY";

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.deepseek.com/chat/completions";
/// Default model name.
pub const DEFAULT_MODEL: &str = "deepseek-chat";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where documents are read from
    pub data: DataConfig,
    /// Remote model settings
    pub gateway: GatewayConfig,
}

/// Corpus location and file filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory scanned recursively on every request.
    pub root: PathBuf,

    /// Allowed extensions, lowercase with the leading dot.
    pub extensions: Vec<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Settings for the chat-completions gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Chat-completions endpoint URL.
    pub api_url: String,
    /// Model name sent with every request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,

    /// Bearer token. Never serialized.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.1,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config {}: {e}", path.display())))
    }

    /// Apply overrides from the process environment.
    #[must_use]
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. Blank values are ignored.
    #[must_use]
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(root) = get(ENV_DATA_DIR) {
            self.data.root = PathBuf::from(root);
        }
        if let Some(url) = get(ENV_API_URL) {
            self.gateway.api_url = url;
        }
        if let Some(model) = get(ENV_MODEL) {
            self.gateway.model = model;
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.gateway.api_key = Some(key);
        }
        self
    }

    /// Load configuration for a process start.
    ///
    /// Reads `path` when given (otherwise the global file), applies the
    /// environment, then lets an explicit `data_dir` win over both.
    pub fn resolve(path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        let mut config = config.apply_env_overrides();
        if let Some(dir) = data_dir {
            config.data.root = dir;
        }
        Ok(config)
    }

    /// Path of the global configuration file.
    ///
    /// - Linux: `~/.config/docsift/global.toml`
    /// - macOS: `~/Library/Application Support/dev.docsift.docsift/global.toml`
    /// - Windows: `%APPDATA%\docsift\docsift\config\global.toml`
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("dev", "docsift", "docsift")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;

        Ok(project_dirs.config_dir().join("global.toml"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.data.root, PathBuf::from("data"));
        assert!(config.data.extensions.contains(&".md".to_string()));
        assert_eq!(config.data.extensions.len(), 7);
        assert_eq!(config.gateway.model, "deepseek-chat");
        assert_eq!(config.gateway.timeout_secs, 60);
        assert!(config.gateway.api_key.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[data]\nroot = \"/srv/notes\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.data.root, PathBuf::from("/srv/notes"));
        assert_eq!(config.data.extensions.len(), 7);
        assert_eq!(config.gateway, GatewayConfig::default());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[data\nroot = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load_from(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_DATA_DIR, "/tmp/docs"),
            (ENV_API_KEY, "sk-123"),
            (ENV_MODEL, "  "),
        ]);

        let config = Config::default()
            .apply_overrides(|key| vars.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.data.root, PathBuf::from("/tmp/docs"));
        assert_eq!(config.gateway.api_key.as_deref(), Some("sk-123"));
        assert_eq!(config.gateway.model, DEFAULT_MODEL);
        assert_eq!(config.gateway.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_data_dir_flag_wins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[gateway]\nmodel = \"local\"\n").unwrap();

        let config = Config::resolve(Some(&path), Some(PathBuf::from("/flag/dir"))).unwrap();

        assert_eq!(config.data.root, PathBuf::from("/flag/dir"));
        assert_eq!(config.data.extensions.len(), 7);
    }

    #[test]
    fn test_serialized_config_omits_api_key() {
        let mut config = Config::default();
        config.gateway.api_key = Some("sk-secret".to_string());

        let written = toml::to_string_pretty(&config).unwrap();
        assert!(!written.contains("sk-secret"));

        let reloaded: Config = toml::from_str(&written).unwrap();
        assert_eq!(reloaded.data, config.data);
        assert!(reloaded.gateway.api_key.is_none());
    }
}

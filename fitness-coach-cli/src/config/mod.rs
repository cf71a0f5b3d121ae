use anyhow::{Context, Result};
use fitness_coach::models::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `gemini.api_key`
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Used until a theme has been chosen and saved
    #[serde(default)]
    pub default_theme: Theme,

    #[serde(default = "default_date_format")]
    pub date_format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Location of the state database, defaults to ~/.fitness-coach/state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// Default value functions
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::default(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.fitness-coach/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".fitness-coach"))
    }

    /// Get config file path (~/.fitness-coach/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file()?)
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// API key from the environment, else from the config file
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| Some(self.gemini.api_key.clone()).filter(|key| !key.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.timeout_seconds, 60);
        assert_eq!(config.ui.default_theme, Theme::Dark);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.gemini.base_url, deserialized.gemini.base_url);
        assert_eq!(config.ui.default_theme, deserialized.ui.default_theme);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [gemini]
            model = "gemini-1.5-pro"

            [ui]
            default_theme = "light"
            "#,
        )
        .unwrap();

        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.timeout_seconds, 60);
        assert_eq!(config.ui.default_theme, Theme::Light);
        assert_eq!(config.ui.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.gemini.api_key = "abc123".to_string();
        config.storage.path = Some(dir.path().join("db"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.gemini.api_key, "abc123");
        assert_eq!(loaded.storage.path, Some(dir.path().join("db")));
    }
}

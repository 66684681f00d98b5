//! Configuration management for newsboard

use crate::error::{NewsboardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Number of news items shown on the home page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Warning attached to the text field when a banned word is found
pub const WARNING: &str = "Не ругайтесь!";

/// Words rejected in comment text by default
pub const BAD_WORDS: [&str; 2] = ["редиска", "негодяй"];

/// Maximum comment length (default)
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 2000;

/// Default location of the config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".newsboard/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Home page feed settings
    pub feed: FeedConfig,
    /// Comment moderation settings
    pub moderation: ModerationConfig,
    /// Storage settings
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NewsboardError::Io(e).with_context(format!("Reading {}", path.display()))
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.feed.page_size == 0 {
            return Err(NewsboardError::Config(
                "feed.page_size must be at least 1".to_string(),
            ));
        }

        if self.moderation.max_comment_length == 0 {
            return Err(NewsboardError::Config(
                "moderation.max_comment_length must be at least 1".to_string(),
            ));
        }

        if self.moderation.banned_words.iter().any(|w| w.is_empty()) {
            return Err(NewsboardError::Config(
                "moderation.banned_words cannot contain empty words".to_string(),
            ));
        }

        Ok(())
    }
}

/// Home page feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Max items returned by the home page
    pub page_size: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Comment moderation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// Substrings that cause a comment to be rejected
    pub banned_words: Vec<String>,
    /// Message shown on rejection
    pub warning: String,
    /// Maximum comment text length in characters
    pub max_comment_length: usize,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            banned_words: BAD_WORDS.iter().map(|w| w.to_string()).collect(),
            warning: WARNING.to_string(),
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory; platform data dir when unset
    pub data_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.feed.page_size, 10);
        assert_eq!(config.moderation.warning, WARNING);
        assert_eq!(config.moderation.banned_words.len(), 2);
        assert!(config.storage.data_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[feed]"));
        assert!(toml.contains("[moderation]"));

        let config2: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.feed.page_size, config2.feed.page_size);
        assert_eq!(config.moderation.banned_words, config2.moderation.banned_words);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[feed]\npage_size = 3\n").unwrap();
        assert_eq!(config.feed.page_size, 3);
        assert_eq!(config.moderation.max_comment_length, DEFAULT_MAX_COMMENT_LENGTH);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.feed.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.moderation.banned_words.push(String::new());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.moderation.max_comment_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_and_load_or_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.feed.page_size, DEFAULT_PAGE_SIZE);

        fs::write(&path, "[moderation]\nbanned_words = [\"spam\"]\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.moderation.banned_words, vec!["spam".to_string()]);

        fs::write(&path, "[feed]\npage_size = 0\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}

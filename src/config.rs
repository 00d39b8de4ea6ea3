//! Configuration system
//!
//! TOML-based configuration with sensible defaults, environment
//! variable overrides and validation. Lives under the platform config
//! directory (`~/.config/radix/config.toml` on Linux).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::alphabet::{MAX_BASE, MIN_BASE};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Path error: {0}")]
    Path(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Enable colored output
    pub colors: bool,
    /// Render letter digits lowercase instead of the canonical uppercase
    pub lowercase_digits: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colors: true,
            lowercase_digits: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Working base the REPL starts in
    pub default_base: u32,
    /// Maximum number of history entries to retain
    pub history_size: usize,
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_base: 10,
            history_size: 1000,
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, falling back to defaults for missing values
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: Self = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location, creating it if necessary
    pub fn load_or_create_default() -> ConfigResult<Self> {
        let config_path = Self::config_file_path()?;
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            let mut config = Self::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            config.save_to_file(&config_path)?;
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let toml_content = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), toml_content)?;
        Ok(())
    }

    /// Apply `RADIX_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("RADIX_DEFAULT_BASE") {
            if let Ok(base) = val.parse::<u32>() {
                self.default_base = base;
            }
        }
        if let Ok(val) = env::var("RADIX_HISTORY_SIZE") {
            if let Ok(size) = val.parse::<usize>() {
                self.history_size = size;
            }
        }
        if let Ok(val) = env::var("RADIX_COLORS") {
            if let Ok(colors) = val.parse::<bool>() {
                self.display.colors = colors;
            }
        }
        if let Ok(val) = env::var("RADIX_LOWERCASE_DIGITS") {
            if let Ok(lowercase) = val.parse::<bool>() {
                self.display.lowercase_digits = lowercase;
            }
        }
    }

    /// Validate the configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if !(MIN_BASE..=MAX_BASE).contains(&self.default_base) {
            return Err(ConfigError::Validation(format!(
                "default_base must be between {} and {}, got {}",
                MIN_BASE, MAX_BASE, self.default_base
            )));
        }
        if self.history_size == 0 {
            return Err(ConfigError::Validation(
                "history_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the configuration file under the platform config directory
    pub fn config_file_path() -> ConfigResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| ConfigError::Path("no config directory on this platform".to_string()))?;
        Ok(base.join("radix").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_base, 10);
        assert_eq!(config.history_size, 1000);
        assert!(config.display.colors);
        assert!(!config.display.lowercase_digits);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.default_base = 16;
        config.history_size = 42;
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.default_base, 16);
        assert_eq!(loaded.history_size, 42);
    }

    #[test]
    fn test_validation_rejects_bad_base() {
        let mut config = AppConfig::default();
        config.default_base = 1;
        assert!(config.validate().is_err());
        config.default_base = 37;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_history() {
        let mut config = AppConfig::default();
        config.history_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_base = 99\nhistory_size = 10\n[display]\ncolors = true\nlowercase_digits = false\n").unwrap();
        assert!(AppConfig::load_from_file(&path).is_err());
    }
}

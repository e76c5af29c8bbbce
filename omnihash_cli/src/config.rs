//! Persisted CLI settings with layered loading (env > file > defaults)

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use omnihash_core::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub engine: EngineSettings,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct DisplayConfig {
    /// Render hex and checksum outputs in uppercase
    #[serde(default)]
    pub show_uppercase: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EngineSettings {
    /// Read chunk size in bytes for streaming file input
    pub chunk_size: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered loading
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a manager pointing at the default XDG-compliant path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a manager with a specific path (for testing)
    #[allow(dead_code)]
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// The configuration file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("omnihash/config.toml");
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("omnihash/config.toml")
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        figment = figment.merge(Env::prefixed("OMNIHASH_").split("__"));

        figment.extract().context("Failed to load configuration")
    }

    /// Write the configuration back to disk
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create configuration directory")?;
        }

        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize configuration")?;
        fs::write(&self.config_path, toml_string).context("Failed to write configuration file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.display.show_uppercase);
        assert_eq!(config.engine.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_load_without_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("missing/config.toml"));

        let config = manager.load().unwrap();
        assert!(!config.display.show_uppercase);
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp_dir.path().join("omnihash/config.toml"));

        let mut config = AppConfig::default();
        config.display.show_uppercase = true;
        config.engine.chunk_size = 4096;
        manager.save(&config).unwrap();

        let reloaded = manager.load().unwrap();
        assert!(reloaded.display.show_uppercase);
        assert_eq!(reloaded.engine.chunk_size, 4096);
    }

    #[test]
    fn test_partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[display]\nshow_uppercase = true\n").unwrap();

        let config = ConfigManager::with_path(path).load().unwrap();
        assert!(config.display.show_uppercase);
        assert_eq!(config.engine.chunk_size, DEFAULT_CHUNK_SIZE);
    }
}

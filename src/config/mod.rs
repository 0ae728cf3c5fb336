//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Per-project directory holding config and data
pub const LOCAL_DIR: &str = ".medmoriser";
pub const CONFIG_FILE: &str = "config.toml";
pub const DATA_FILE: &str = "medmoriser.json";

/// Overrides every other data file location
pub const DATA_ENV: &str = "MEDMORISER_DATA";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Explicit data file; relative paths resolve against the cwd
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

/// How command output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tables and colors
    #[default]
    Pretty,
    /// One tab-separated line per entry
    Compact,
    /// Machine readable
    Json,
}

impl Config {
    /// Load config: explicit path, then local, then global, then defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(local) = Self::find_local_config() {
            return Self::load_from(&local);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Find a `.medmoriser` directory walking up from `start`
    pub fn find_local_dir_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(LOCAL_DIR))
            .find(|candidate| candidate.is_dir())
    }

    /// Find a `.medmoriser` directory walking up from the cwd
    pub fn find_local_dir() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_local_dir_from(&current)
    }

    /// Find local .medmoriser/config.toml walking up directories
    pub fn find_local_config() -> Option<PathBuf> {
        Self::find_local_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .filter(|path| path.exists())
    }

    /// Platform config path (e.g. ~/.config/medmoriser/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Platform data path (e.g. ~/.local/share/medmoriser/medmoriser.json)
    pub fn global_data_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().join(DATA_FILE))
    }

    /// Get data file path with priority:
    /// 1. MEDMORISER_DATA env var
    /// 2. `storage.data_file` from config
    /// 3. Local .medmoriser/medmoriser.json (walking up from CWD)
    /// 4. Global platform data dir
    pub fn data_file(&self) -> PathBuf {
        if let Ok(env_path) = std::env::var(DATA_ENV) {
            return PathBuf::from(env_path);
        }

        if let Some(path) = &self.storage.data_file {
            return path.clone();
        }

        if let Some(local) = Self::find_local_dir() {
            return local.join(DATA_FILE);
        }

        if let Some(global) = Self::global_data_path() {
            return global;
        }

        PathBuf::from(LOCAL_DIR).join(DATA_FILE)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "medmoriser")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.display.format, OutputFormat::Pretty);
        assert!(config.display.color);
        assert!(config.storage.data_file.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[display]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.display.format, OutputFormat::Json);
        assert!(config.display.color);
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = Config::default();
        config.storage.data_file = Some(PathBuf::from("bank.json"));
        config.display.color = false;
        config.save_to(&path)?;

        assert_eq!(Config::load_from(&path)?, config);
        assert_eq!(Config::load(Some(&path))?, config);
        Ok(())
    }

    #[test]
    fn test_find_local_dir_walks_up() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::create_dir(dir.path().join(LOCAL_DIR))?;
        let deep = dir.path().join("a").join("b");
        std::fs::create_dir_all(&deep)?;

        let found = Config::find_local_dir_from(&deep);
        assert_eq!(found, Some(dir.path().join(LOCAL_DIR)));
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[display\nformat = ")?;
        assert!(Config::load_from(&path).is_err());
        Ok(())
    }
}

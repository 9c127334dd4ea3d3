//! Workspace shell configuration.
//!
//! Covers:
//! - The `Config` struct with serde defaults
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_path`, `config_dir`)
//! - Resolution of the workspace directory handed to the orchestrator

use crate::error::ConfigError;
use crate::types::{AcquireMode, LogLevel};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration, persisted as `config.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of editor views that may be live at the same time
    #[serde(default = "crate::defaults::editor_capacity")]
    pub editor_capacity: usize,

    /// What opening an editor does when the pool is at capacity
    #[serde(default = "crate::defaults::acquire_mode")]
    pub acquire_mode: AcquireMode,

    /// Directory the file browser roots at and scratch editors are created in.
    /// `None` resolves to the platform data directory.
    #[serde(default)]
    pub workspace_dir: Option<PathBuf>,

    /// Verbosity of the debug log file
    #[serde(default = "crate::defaults::log_level")]
    pub log_level: LogLevel,

    /// Create an `untitled-*.txt` placeholder file for editors opened without a file
    #[serde(default = "crate::defaults::bool_true")]
    pub scratch_placeholders: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor_capacity: crate::defaults::editor_capacity(),
            acquire_mode: crate::defaults::acquire_mode(),
            workspace_dir: None,
            log_level: crate::defaults::log_level(),
            scratch_placeholders: crate::defaults::bool_true(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save_to(&config_path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading existing config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Check field values that serde cannot express
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.editor_capacity == 0 {
            return Err(ConfigError::Validation(
                "editor_capacity must be at least 1".to_string(),
            ));
        }
        if let Some(dir) = &self.workspace_dir
            && dir.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "workspace_dir must not be empty when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration directory (`~/.config/duopane`)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("duopane")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("duopane")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Resolve the directory handed to the orchestrator as its workspace root
    pub fn effective_workspace_dir(&self) -> PathBuf {
        if let Some(dir) = &self.workspace_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("duopane"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

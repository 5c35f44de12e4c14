//! Configuration handling for controller defaults

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Controller behaviour defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ControlConfig {
    /// Validate inputs on every change
    pub validate_on_change: Option<bool>,
    /// Validate inputs when they lose focus
    pub validate_on_blur: Option<bool>,
    /// Touch every field when a form is validated outside of submit
    pub touch_all_on_validate: Option<bool>,
}

impl ControlConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "control-state", "control-state")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_or_default(Self::config_path())
    }

    fn load_or_default(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ControlConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn validate_on_change(&self) -> bool {
        self.validate_on_change.unwrap_or(false)
    }

    pub fn validate_on_blur(&self) -> bool {
        self.validate_on_blur.unwrap_or(false)
    }

    pub fn touch_all_on_validate(&self) -> bool {
        self.touch_all_on_validate.unwrap_or(false)
    }
}

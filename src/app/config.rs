//! Configuration for the window title block

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Window title configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Icon settings
    pub icon: IconConfig,
    /// Text measurement settings
    pub text: TextConfig,
}

/// Icon configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Show the focused window's icon next to its title
    pub enabled: bool,
    /// Preferred icon edge length in pixels
    pub size: u32,
    /// Directory with `<window>.icon` property dumps (headless runs)
    pub dump_dir: Option<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            size: 16,
            dump_dir: None,
        }
    }
}

impl IconConfig {
    /// Edge length handed to the icon selector, 0 when icons are off
    pub fn effective_size(&self) -> u32 {
        if self.enabled {
            self.size
        } else {
            0
        }
    }
}

/// Text measurement configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Width of one character cell in pixels
    pub cell_width: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { cell_width: 8 }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/wintitle/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }

    /// Reject values the bar cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text.cell_width == 0 {
            return Err(ConfigError::Invalid("text.cell_width must be positive".into()));
        }
        if self.icon.enabled && self.icon.size == 0 {
            return Err(ConfigError::Invalid(
                "icon.size must be positive when icons are enabled".into(),
            ));
        }
        Ok(())
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("wintitle"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

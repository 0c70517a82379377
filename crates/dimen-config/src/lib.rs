//! Dimen configuration system
//!
//! Loads display settings from `dimen.toml` as an alternative to environment
//! variables. These settings feed the metrics providers: the font scale
//! multiplies the OS density into the scaled density used for text sizing,
//! and the density override replaces the OS-reported scale factor entirely.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Dimen
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DimenConfig {
    /// Display scaling settings
    pub display: DisplayConfig,
}

/// Display scaling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// User font-size preference multiplier (1.0 = no preference)
    pub font_scale: Option<f32>,
    /// Force a density instead of the OS-reported scale factor
    pub density_override: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { font_scale: None, density_override: None }
    }
}

impl DimenConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (dimen.toml in the
    /// current directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("dimen.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("DIMEN_FONT_SCALE") {
            if let Ok(scale) = val.parse::<f32>() {
                self.display.font_scale = Some(scale);
            }
        }
        if let Ok(val) = std::env::var("DIMEN_DENSITY") {
            if let Ok(density) = val.parse::<f32>() {
                self.display.density_override = Some(density);
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from dimen.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

impl DisplayConfig {
    /// Effective font scale, defaulting to 1.0 when unset.
    pub fn font_scale_or_default(&self) -> f32 {
        self.font_scale.unwrap_or(1.0)
    }
}

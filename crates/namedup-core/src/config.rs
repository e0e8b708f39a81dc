//! Configuration for duplicate detection
//!
//! Controls how novel names are keyed in the registry and how far the
//! fuzzy tier may stretch last names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NameDupError, Result};

/// Upper limit accepted for `max_last_name_distance`
pub const MAX_LAST_NAME_DISTANCE_LIMIT: usize = 3;

/// Text a novel name is keyed on when it enters the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryKey {
    /// Key on the raw input text, middle names included.
    ///
    /// A novel `Bill Henry Gates` is then not found by a later `Bill Gates`
    /// through the identical or reordered tiers.
    #[default]
    Original,
    /// Key on the middle-name-stripped form used for comparisons
    Reduced,
}

/// Detector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// How novel names are keyed
    pub registry_key: RegistryKey,
    /// Largest edit distance at which two last names still count as the same
    pub max_last_name_distance: usize,
    /// Whether the nickname/typo tier runs at all
    pub fuzzy_matching: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            registry_key: RegistryKey::Original,
            max_last_name_distance: 1,
            fuzzy_matching: true,
        }
    }
}

impl DetectorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file; `.json` files are read as JSON,
    /// everything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| NameDupError::Config(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_last_name_distance > MAX_LAST_NAME_DISTANCE_LIMIT {
            return Err(NameDupError::Config(format!(
                "max_last_name_distance must be at most {MAX_LAST_NAME_DISTANCE_LIMIT}, got {}",
                self.max_last_name_distance
            )));
        }
        Ok(())
    }
}

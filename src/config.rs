//! YAML Configuration File Support for Tintex
//!
//! This module provides support for loading pipeline configurations from
//! YAML files. It allows users to define the colorization and matching
//! stage configurations in a single file and load them at runtime.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Tintex Pipeline Configuration
//! version: "1.0"
//!
//! colorize:
//!   version: 1
//!   max_hues: 30
//!   batch_policy: palette
//!
//! matcher:
//!   version: 1
//!   normalize_unicode: true
//!   strip_attributes: true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use colorize::ColorizeConfig;
use matchsym::MatchConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration structure for the pipeline.
///
/// The stage sections deserialize directly into the stage crates' own
/// config types, so a YAML file can omit any field and pick up the same
/// defaults the stages use programmatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TintexConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Colorization stage configuration
    #[serde(default)]
    pub colorize: ColorizeConfig,

    /// Symbol matcher configuration
    #[serde(default)]
    pub matcher: MatchConfig,
}

impl TintexConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: TintexConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.colorize
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.matcher
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;

        Ok(())
    }
}

impl Default for TintexConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            colorize: ColorizeConfig::default(),
            matcher: MatchConfig::default(),
        }
    }
}

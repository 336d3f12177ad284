//! Configuration types for the colorization engine.
//!
//! This module defines [`ColorizeConfig`], which controls how many entities
//! are colorized per iteration and how iterations are batched.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change to directive
//! format, palette spacing, or batching (even bug fixes) must be accompanied
//! by a version bump so that ledgers produced under the old behavior remain
//! interpretable.
//!
//! # Determinism
//!
//! For a given `version`, the same document, entity set, and configuration
//! produce the same iterations on any machine: hue assignment and batch
//! boundaries depend only on the input ordering.

use serde::{Deserialize, Serialize};

use crate::error::ColorizeError;

/// Batching policy for a colorization run.
///
/// `Palette` packs as many non-overlapping entities into each iteration as
/// the palette allows. `SingleEntity` is the exhaustive-isolation mode: one
/// entity per iteration regardless of palette size, used when rendered hues
/// turn out not to be distinguishable enough for a document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Fill each iteration up to the palette size.
    #[default]
    Palette,
    /// One entity per iteration.
    SingleEntity,
}

/// Configuration for the colorization engine.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// pipeline configs.
///
/// # Examples
///
/// ```rust
/// use colorize::{BatchPolicy, ColorizeConfig};
///
/// // Default configuration (recommended)
/// let cfg = ColorizeConfig::default();
/// assert_eq!(cfg.max_hues, 30);
///
/// // Exhaustive per-entity isolation
/// let isolated = ColorizeConfig {
///     batch_policy: BatchPolicy::SingleEntity,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorizeConfig {
    /// Semantic version of the colorization configuration.
    ///
    /// Must be >= 1; version 0 is reserved and rejected.
    #[serde(default = "ColorizeConfig::default_version")]
    pub version: u32,

    /// Size of the hue palette: the number of hues that stay reliably
    /// distinguishable after rendering and anti-aliasing.
    ///
    /// Also the upper bound on entities colorized in one iteration. Must be
    /// >= 1; a palette of zero can never colorize anything and is a fatal
    /// configuration error.
    #[serde(default = "ColorizeConfig::default_max_hues")]
    pub max_hues: usize,

    /// How entities are grouped into iterations.
    #[serde(default)]
    pub batch_policy: BatchPolicy,
}

impl ColorizeConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_max_hues() -> usize {
        30
    }

    /// Validate the configuration before any document is processed.
    pub fn validate(&self) -> Result<(), ColorizeError> {
        if self.version == 0 {
            return Err(ColorizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.max_hues == 0 {
            return Err(ColorizeError::InvalidConfig(
                "max_hues must be >= 1: an empty palette can never colorize a batch".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ColorizeConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            max_hues: Self::default_max_hues(),
            batch_policy: BatchPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ColorizeConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.batch_policy, BatchPolicy::Palette);
    }

    #[test]
    fn zero_palette_rejected() {
        let cfg = ColorizeConfig {
            max_hues: 0,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            ColorizeError::InvalidConfig(msg) => assert!(msg.contains("max_hues")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = ColorizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ColorizeError::InvalidConfig(_))
        ));
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for one paper's symbol-match computation.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// pipeline configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Semantic version of the matching configuration. Any change to the
    /// normal form (even a bug fix) must bump this so persisted match rows
    /// stay interpretable. Must be >= 1.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,

    /// Apply Unicode NFC before structural normalization, so composed and
    /// decomposed encodings of the same character group together.
    #[serde(default = "MatchConfig::default_true")]
    pub normalize_unicode: bool,

    /// Strip tag attributes when computing the grouping key. Presentation
    /// attributes (font variants, spacing hints) vary across occurrences of
    /// a structurally identical symbol.
    #[serde(default = "MatchConfig::default_true")]
    pub strip_attributes: bool,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_true() -> bool {
        true
    }

    /// Validate the configuration for a single paper run.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            normalize_unicode: true,
            strip_attributes: true,
        }
    }
}

/// One asserted equivalence: the matched representation plus its 1-based
/// rank in the canonical ordering of the class's other members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolMatch {
    pub mathml: String,
    pub rank: u32,
}

/// Match lists for one paper: every input representation maps to the other
/// members of its equivalence class, canonically ordered. A representation
/// alone in its class maps to an empty list.
pub type Matches = BTreeMap<String, Vec<SymbolMatch>>;

/// Result of one paper's match computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MatchOutcome {
    pub matches: Matches,
    /// Representations excluded as structurally malformed, in input-sorted
    /// order. Exclusion is logged and never aborts the paper.
    pub excluded: Vec<String>,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    /// Invalid configuration; fatal before any paper is processed.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.normalize_unicode);
        assert!(cfg.strip_attributes);
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = MatchConfig {
            version: 0,
            ..Default::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("version")),
        }
    }
}

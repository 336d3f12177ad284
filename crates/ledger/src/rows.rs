//! Persisted row shapes.
//!
//! Field order is the column order of the delimited files, so it is part of
//! the persisted format: append-only consumers parse by position. Do not
//! reorder fields without bumping the pipeline config version.

use serde::{Deserialize, Serialize};

/// File name of the per-document entity-hue ledger.
pub const HUES_FILE: &str = "entity_hues.csv";

/// File name of the per-paper symbol-match ledger.
pub const MATCHES_FILE: &str = "matches.csv";

/// One colorized entity: the durable join key from rendered color back to
/// the logical entity that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityHueRow {
    /// Source file path relative to the paper's source root.
    pub tex_path: String,
    /// Stable per-document entity identifier.
    pub entity_index: u32,
    /// Iteration-named output location this row belongs to.
    pub iteration: String,
    /// Assigned hue in `[0, 1)`.
    pub hue: f32,
    /// The colorized source fragment.
    pub tex: String,
    pub content_start: usize,
    pub content_end: usize,
    /// Inner content as it appears in the original text.
    pub content_tex: String,
    pub depth: u32,
    pub start: usize,
    pub end: usize,
}

/// One directed symbol-match pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolMatchRow {
    pub mathml: String,
    pub match_mathml: String,
    /// 1-based rank of the match in the class's canonical ordering.
    pub rank: u32,
}

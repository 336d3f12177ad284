//! Output types of the colorization engine.
//!
//! One [`Iteration`] is one complete colorized variant of a document: the
//! fully rewritten text plus a record per colorized entity. Iterations over
//! one document share the same base text; they are independent variants,
//! never cumulative.

use serde::{Deserialize, Serialize};

/// An entity annotated with its assigned hue and colorized fragment.
///
/// Carries the entity's original span metadata so ledger rows can be
/// produced without re-consulting the input entity set. All offsets refer
/// to the ORIGINAL document text, not the rewritten iteration text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorizedEntity {
    /// Stable per-document entity identifier.
    pub index: u32,
    /// Assigned hue in `[0, 1)`; unique within the owning iteration.
    pub hue: f32,
    /// The entity's full-span source fragment with directives inserted.
    pub tex: String,
    pub start: usize,
    pub end: usize,
    pub content_start: usize,
    pub content_end: usize,
    /// The inner content as it appears in the original text.
    pub content_tex: String,
    pub depth: u32,
}

/// One colorized variant of a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Iteration {
    /// Zero-based, monotonically increasing pass index; names the
    /// iteration's materialized output location.
    pub index: usize,
    /// The fully rewritten document text for this pass.
    pub tex: String,
    /// The entities colorized in this pass, in input order.
    pub entities: Vec<ColorizedEntity>,
}

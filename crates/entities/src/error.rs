//! Error types produced by the entities crate.
//!
//! All errors are typed, cloneable, and comparable so callers can branch on
//! specific failures and tests can assert exact variants. Every variant is a
//! validation failure: a document or entity set that cannot safely enter the
//! colorization pipeline.

use thiserror::Error;

/// Errors that can occur while validating a document and its entity set.
///
/// The enum is marked `#[non_exhaustive]` to allow future additions without
/// breaking existing code. Callers should always include a catch-all arm when
/// matching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntityError {
    /// The document identifier is empty or whitespace-only.
    ///
    /// A document ID is required for traceability: every ledger row produced
    /// downstream joins back to it.
    #[error("document id is missing or empty")]
    MissingDocId,

    /// An entity span extends past the end of the document text.
    #[error("entity {index}: span end {end} exceeds document length {len}")]
    SpanOutOfBounds { index: u32, end: usize, len: usize },

    /// An entity span has `start > end` (either the full span or the
    /// content span).
    #[error("entity {index}: inverted span")]
    InvertedSpan { index: u32 },

    /// The content span `[content_start, content_end)` is not contained in
    /// the full span `[start, end)`.
    #[error("entity {index}: content span escapes full span")]
    ContentOutsideSpan { index: u32 },

    /// A span offset does not fall on a UTF-8 character boundary.
    ///
    /// Slicing at such an offset would panic, and inserting a directive
    /// there would corrupt the surrounding character.
    #[error("entity {index}: offset {offset} is not a utf-8 character boundary")]
    NotCharBoundary { index: u32, offset: usize },

    /// Two entities in the same document share an identifier.
    ///
    /// Identifiers are the join key between ledger rows and entities; a
    /// duplicate would make rendered color unattributable.
    #[error("duplicate entity index {index}")]
    DuplicateIndex { index: u32 },
}

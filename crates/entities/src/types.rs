//! Core input types: documents and the entities located inside them.
//!
//! A [`Document`] is an immutable snapshot of one source file of a paper.
//! [`Entity`] values are candidate regions inside that text, produced by an
//! external locator. Both are plain data: offsets are byte offsets into
//! `Document::text`, spans are half-open `[start, end)`.

use serde::{Deserialize, Serialize};

/// One source file of a paper, as handed to the colorization pipeline.
///
/// The text has already been read tolerantly by the caller; `encoding` is
/// the declared encoding of the original file, recorded so the rewritten
/// variant can be written back the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Paper-level identifier (e.g., an archive submission id).
    pub doc_id: String,
    /// Path of this source file relative to the paper's source root.
    pub tex_path: String,
    /// Full decoded text of the file.
    pub text: String,
    /// Declared text encoding of the original file (e.g., `"utf-8"`).
    pub encoding: String,
}

impl Document {
    /// Build a document from its parts. Trims nothing; the text is taken
    /// byte-for-byte as the base every iteration rewrites.
    pub fn new(
        doc_id: impl Into<String>,
        tex_path: impl Into<String>,
        text: impl Into<String>,
        encoding: impl Into<String>,
    ) -> Self {
        Self {
            doc_id: doc_id.into(),
            tex_path: tex_path.into(),
            text: text.into(),
            encoding: encoding.into(),
        }
    }
}

/// A located region of interest in a document (e.g., an equation).
///
/// `[start, end)` covers the whole entity including its delimiters;
/// `[content_start, content_end)` covers the inner content only. Entities
/// may nest (an equation inside a display block); `depth` records how many
/// enclosing entities contain this one. `index` is the stable identifier
/// distinguishing this entity from its siblings, unique per document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub index: u32,
    pub start: usize,
    pub end: usize,
    pub content_start: usize,
    pub content_end: usize,
    pub depth: u32,
}

impl Entity {
    /// The full source fragment of this entity, delimiters included.
    pub fn tex<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// The inner content of this entity, delimiters excluded.
    pub fn content_tex<'a>(&self, text: &'a str) -> &'a str {
        &text[self.content_start..self.content_end]
    }

    /// True if the full spans of the two entities intersect.
    ///
    /// Touching spans (`self.end == other.start`) do not overlap; half-open
    /// spans make that the natural reading.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

//! Tintex entity input layer.
//!
//! This is where documents and their located entities enter the pipeline.
//! An external locator finds candidate regions (equations, symbols) in raw
//! source text; this crate gives those regions a typed shape and checks the
//! invariants the colorization engine depends on before any text is touched.
//!
//! ## What we check
//!
//! - **Document identity** - A non-empty `doc_id`; every ledger row joins
//!   back to it.
//! - **Span sanity** - Spans inside the text, content inside the full span,
//!   no inverted ranges.
//! - **Character boundaries** - Every offset lands on a UTF-8 boundary, so
//!   slicing and directive insertion never split a character.
//! - **Identifier uniqueness** - No two entities in one document share an
//!   `index`.
//!
//! Give [`validate_entities`] the same document and entity set and you get
//! the same answer on any machine; there is no I/O and no ambient state.

use std::time::Instant;

use tracing::{info, warn, Level};

mod error;
mod types;

pub use crate::error::EntityError;
pub use crate::types::{Document, Entity};

/// Validate a document and its entity set for colorization.
///
/// Checks every invariant the engine assumes: spans in bounds and ordered,
/// content spans contained in full spans, offsets on character boundaries,
/// and unique entity identifiers. Returns the first violation found;
/// entities are checked in input order.
pub fn validate_entities(doc: &Document, entities: &[Entity]) -> Result<(), EntityError> {
    let start = Instant::now();

    if doc.doc_id.trim().is_empty() {
        warn!(error = %EntityError::MissingDocId, "entities_rejected");
        return Err(EntityError::MissingDocId);
    }

    let span = tracing::span!(
        Level::INFO,
        "entities.validate",
        doc_id = %doc.doc_id,
        tex_path = %doc.tex_path,
        count = entities.len()
    );
    let _guard = span.enter();

    match validate_inner(doc, entities) {
        Ok(()) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(elapsed_micros, "entities_valid");
            Ok(())
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "entities_rejected");
            Err(err)
        }
    }
}

fn validate_inner(doc: &Document, entities: &[Entity]) -> Result<(), EntityError> {
    let text = doc.text.as_str();
    let mut seen = Vec::with_capacity(entities.len());

    for entity in entities {
        if entity.start > entity.end || entity.content_start > entity.content_end {
            return Err(EntityError::InvertedSpan {
                index: entity.index,
            });
        }
        if entity.end > text.len() {
            return Err(EntityError::SpanOutOfBounds {
                index: entity.index,
                end: entity.end,
                len: text.len(),
            });
        }
        if entity.content_start < entity.start || entity.content_end > entity.end {
            return Err(EntityError::ContentOutsideSpan {
                index: entity.index,
            });
        }
        for offset in [
            entity.start,
            entity.end,
            entity.content_start,
            entity.content_end,
        ] {
            if !text.is_char_boundary(offset) {
                return Err(EntityError::NotCharBoundary {
                    index: entity.index,
                    offset,
                });
            }
        }
        if seen.contains(&entity.index) {
            return Err(EntityError::DuplicateIndex {
                index: entity.index,
            });
        }
        seen.push(entity.index);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::new("2001.00001", "main.tex", text, "utf-8")
    }

    fn entity(index: u32, start: usize, end: usize) -> Entity {
        Entity {
            index,
            start,
            end,
            content_start: start,
            content_end: end,
            depth: 0,
        }
    }

    #[test]
    fn valid_entities_accepted() {
        let d = doc("text $x$ more $y$ end");
        let es = vec![entity(0, 5, 8), entity(1, 14, 17)];
        assert!(validate_entities(&d, &es).is_ok());
    }

    #[test]
    fn empty_entity_set_accepted() {
        let d = doc("no entities here");
        assert!(validate_entities(&d, &[]).is_ok());
    }

    #[test]
    fn missing_doc_id_rejected() {
        let d = Document::new("  ", "main.tex", "text", "utf-8");
        let err = validate_entities(&d, &[]).expect_err("should reject");
        assert_eq!(err, EntityError::MissingDocId);
    }

    #[test]
    fn span_out_of_bounds_rejected() {
        let d = doc("short");
        let err = validate_entities(&d, &[entity(0, 0, 99)]).expect_err("should reject");
        assert!(matches!(err, EntityError::SpanOutOfBounds { index: 0, .. }));
    }

    #[test]
    fn inverted_span_rejected() {
        let d = doc("some text");
        let mut e = entity(2, 5, 5);
        e.start = 6;
        e.end = 5;
        let err = validate_entities(&d, &[e]).expect_err("should reject");
        assert!(matches!(err, EntityError::InvertedSpan { index: 2 }));
    }

    #[test]
    fn content_outside_span_rejected() {
        let d = doc("abcdefghij");
        let e = Entity {
            index: 1,
            start: 2,
            end: 5,
            content_start: 1,
            content_end: 4,
            depth: 0,
        };
        let err = validate_entities(&d, &[e]).expect_err("should reject");
        assert!(matches!(err, EntityError::ContentOutsideSpan { index: 1 }));
    }

    #[test]
    fn non_boundary_offset_rejected() {
        // 'é' is two bytes; offset 1 falls inside it.
        let d = doc("émc²");
        let err = validate_entities(&d, &[entity(0, 1, 2)]).expect_err("should reject");
        assert!(matches!(
            err,
            EntityError::NotCharBoundary {
                index: 0,
                offset: 1
            }
        ));
    }

    #[test]
    fn duplicate_index_rejected() {
        let d = doc("one $x$ two $y$");
        let es = vec![entity(7, 4, 7), entity(7, 12, 15)];
        let err = validate_entities(&d, &es).expect_err("should reject");
        assert!(matches!(err, EntityError::DuplicateIndex { index: 7 }));
    }
}

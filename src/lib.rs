//! Workspace umbrella crate for Tintex paper instrumentation.
//!
//! This crate stitches together entity validation, colorization, symbol
//! matching, and the persisted ledgers so callers can process one paper
//! with a single API entry point. The pure stages live in their own crates;
//! what is added here is error unification, per-document job orchestration
//! (`batch`), and YAML configuration (`config`).

pub use colorize::{
    BatchPolicy, ColorizeConfig, ColorizeError, ColorizedEntity, Iteration, color_start,
    colorize_document, hue_to_rgb, palette, partition, strip_color_directives,
};
pub use entities::{Document, Entity, EntityError, validate_entities};
pub use ledger::{
    EntityHueRow, HUES_FILE, LedgerError, MATCHES_FILE, SymbolMatchRow, append_row, append_rows,
    clean_directory, iteration_dir, iteration_id,
};
pub use matchsym::{
    MatchConfig, MatchError, MatchOutcome, Matches, SymbolMatch, find_matches, normal_form,
    well_formed,
};

pub mod batch;
pub mod config;

use std::error::Error;
use std::fmt;

pub use crate::batch::{
    ColorizeJobSummary, MatchJobSummary, MaterializeError, SourceMaterializer, run_colorize_job,
    run_match_job,
};

/// Errors that can occur while processing a paper through the pipeline.
#[derive(Debug)]
pub enum PipelineError {
    Entity(EntityError),
    Colorize(ColorizeError),
    Match(MatchError),
    Ledger(LedgerError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Entity(err) => write!(f, "entity validation failure: {err}"),
            PipelineError::Colorize(err) => write!(f, "colorization failure: {err}"),
            PipelineError::Match(err) => write!(f, "symbol matching failure: {err}"),
            PipelineError::Ledger(err) => write!(f, "ledger failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Entity(err) => Some(err),
            PipelineError::Colorize(err) => Some(err),
            PipelineError::Match(err) => Some(err),
            PipelineError::Ledger(err) => Some(err),
        }
    }
}

impl From<EntityError> for PipelineError {
    fn from(value: EntityError) -> Self {
        PipelineError::Entity(value)
    }
}

impl From<ColorizeError> for PipelineError {
    fn from(value: ColorizeError) -> Self {
        PipelineError::Colorize(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

impl From<LedgerError> for PipelineError {
    fn from(value: LedgerError) -> Self {
        PipelineError::Ledger(value)
    }
}

/// Colorize one document end-to-end with explicit configuration.
pub fn colorize_paper(
    doc: &Document,
    entities: &[Entity],
    cfg: &ColorizeConfig,
) -> Result<Vec<Iteration>, PipelineError> {
    Ok(colorize_document(doc, entities, cfg)?)
}

/// Compute one paper's symbol matches with explicit configuration.
pub fn match_paper<I, S>(reprs: I, cfg: &MatchConfig) -> Result<MatchOutcome, PipelineError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Ok(find_matches(reprs, cfg)?)
}

/// Convenience helper that feeds the bundled sample paper through the
/// colorization pipeline. Useful for demos and integration smoke tests.
pub fn sample_paper_demo(cfg: &ColorizeConfig) -> Result<Vec<Iteration>, PipelineError> {
    const SAMPLE_TEX: &str = include_str!("../crates/colorize/demos/sample_paper.tex");

    let doc = Document::new("demo-0001", "main.tex", SAMPLE_TEX, "utf-8");
    let entities = locate_inline_math(&doc.text);
    colorize_paper(&doc, &entities, cfg)
}

/// Minimal `$...$` scanner for the bundled sample. Real entity location is
/// the job of the external locator; this exists so the demo has spans to
/// colorize without shipping a locator.
fn locate_inline_math(text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut open: Option<usize> = None;
    let mut index = 0u32;
    for (pos, ch) in text.char_indices() {
        if ch != '$' {
            continue;
        }
        match open.take() {
            None => open = Some(pos),
            Some(start) => {
                entities.push(Entity {
                    index,
                    start,
                    end: pos + 1,
                    content_start: start + 1,
                    content_end: pos,
                    depth: 0,
                });
                index += 1;
            }
        }
    }
    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_demo_produces_iterations() {
        let cfg = ColorizeConfig::default();
        let iterations = sample_paper_demo(&cfg).expect("demo should colorize");
        assert!(!iterations.is_empty());
        let total: usize = iterations.iter().map(|it| it.entities.len()).sum();
        assert!(total >= 2, "sample paper should contain several equations");
    }

    #[test]
    fn locate_inline_math_finds_spans() {
        let entities = locate_inline_math("Let $x$ and $y_i$ be given.");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].start, 4);
        assert_eq!(entities[0].end, 7);
        assert_eq!(entities[1].content_start, 13);
        assert_eq!(entities[1].content_end, 16);
    }

    #[test]
    fn pipeline_error_wraps_stage_errors() {
        let doc = Document::new("", "main.tex", "text", "utf-8");
        let err = colorize_paper(&doc, &[], &ColorizeConfig::default())
            .expect_err("empty doc id should fail");
        assert!(matches!(
            err,
            PipelineError::Colorize(ColorizeError::Entity(EntityError::MissingDocId))
        ));
        assert!(err.to_string().contains("colorization failure"));
    }
}

//! Per-document job orchestration.
//!
//! One job covers one document (or one paper, for matching) for one run:
//! clear the output location, run the pure stage, persist the results. The
//! clearing happens exactly once per job, before any iteration writes,
//! which is the single ordering point parallel callers must respect.
//! Different documents never share state and can run concurrently, but
//! iterations of one document always run inside one job.
//!
//! ## Failure behavior
//!
//! A materialization failure skips that iteration's ledger rows with a
//! warning and the job continues; a dropped row decrements the written
//! count, nothing else. Only clearing the output root or a configuration
//! error fails the whole job, and the caller treats even that at document
//! granularity: log, skip the document, continue the batch.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use colorize::{ColorizeConfig, colorize_document};
use entities::{Document, Entity};
use ledger::{EntityHueRow, HUES_FILE, MATCHES_FILE, SymbolMatchRow};
use matchsym::{MatchConfig, find_matches};

use crate::PipelineError;

/// Failure to populate an iteration's output location.
///
/// Opaque by design: unpacking an archive, copying a source tree, or
/// mounting a fixture can all fail in collaborator-specific ways the job
/// only needs to log.
#[derive(Debug, Error)]
#[error("materialization failed: {0}")]
pub struct MaterializeError(pub String);

/// Collaborator that populates an iteration's output directory with the
/// document's unpacked sources.
///
/// Each iteration gets its own isolated destination; the materializer may
/// fail independently per iteration and is never retried by the job.
pub trait SourceMaterializer {
    fn materialize(&self, doc_id: &str, dest: &Path) -> Result<(), MaterializeError>;
}

/// Outcome counters for one colorization job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorizeJobSummary {
    /// Iterations fully materialized and ledgered.
    pub iterations_written: usize,
    /// Iterations skipped because materialization or persistence failed.
    pub iterations_failed: usize,
    pub rows_written: usize,
    pub rows_dropped: usize,
}

/// Outcome counters for one match job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchJobSummary {
    /// Distinct representations that participated in matching.
    pub representations: usize,
    /// Representations excluded as malformed.
    pub excluded: usize,
    pub rows_written: usize,
    pub rows_dropped: usize,
}

/// Colorize one document and persist every iteration.
///
/// Clears `output_root` once, colorizes, then per iteration: materialize
/// the iteration's isolated source directory, write the rewritten text
/// into it, and append that iteration's rows to the document's hue ledger
/// at the output root. Ledger rows for a failed iteration are never
/// written.
pub fn run_colorize_job<M: SourceMaterializer>(
    doc: &Document,
    entities: &[Entity],
    cfg: &ColorizeConfig,
    materializer: &M,
    output_root: &Path,
) -> Result<ColorizeJobSummary, PipelineError> {
    // Configuration errors abort before the job touches the filesystem.
    cfg.validate()?;

    // Happens-before every iteration write: the job owns the output root
    // from here on.
    ledger::clean_directory(output_root)?;

    let iterations = colorize_document(doc, entities, cfg)?;
    let hues_path = output_root.join(HUES_FILE);

    let mut summary = ColorizeJobSummary::default();
    for iteration in &iterations {
        let iteration_id = ledger::iteration_id(&doc.tex_path, iteration.index);
        let dest = ledger::iteration_dir(output_root, &iteration_id);

        if let Err(err) = materializer.materialize(&doc.doc_id, &dest) {
            warn!(
                doc_id = %doc.doc_id,
                iteration = %iteration_id,
                error = %err,
                "iteration_skipped"
            );
            summary.iterations_failed += 1;
            continue;
        }

        if let Err(err) = write_iteration_tex(&dest, &doc.tex_path, &iteration.tex) {
            warn!(
                doc_id = %doc.doc_id,
                iteration = %iteration_id,
                error = %err,
                "iteration_skipped"
            );
            summary.iterations_failed += 1;
            continue;
        }

        let rows: Vec<EntityHueRow> = iteration
            .entities
            .iter()
            .map(|entity| EntityHueRow {
                tex_path: doc.tex_path.clone(),
                entity_index: entity.index,
                iteration: iteration_id.clone(),
                hue: entity.hue,
                tex: entity.tex.clone(),
                content_start: entity.content_start,
                content_end: entity.content_end,
                content_tex: entity.content_tex.clone(),
                depth: entity.depth,
                start: entity.start,
                end: entity.end,
            })
            .collect();

        match ledger::append_rows(&hues_path, &rows) {
            Ok(written) => {
                summary.iterations_written += 1;
                summary.rows_written += written;
                summary.rows_dropped += rows.len() - written;
            }
            Err(err) => {
                warn!(
                    doc_id = %doc.doc_id,
                    iteration = %iteration_id,
                    error = %err,
                    "iteration_skipped"
                );
                summary.iterations_failed += 1;
            }
        }
    }

    info!(
        doc_id = %doc.doc_id,
        tex_path = %doc.tex_path,
        iterations_written = summary.iterations_written,
        iterations_failed = summary.iterations_failed,
        rows_written = summary.rows_written,
        "colorize_job_complete"
    );

    Ok(summary)
}

/// Compute one paper's symbol matches and persist one row per directed
/// pair. Clears the paper's match output location first.
pub fn run_match_job<I, S>(
    paper_id: &str,
    reprs: I,
    cfg: &MatchConfig,
    output_root: &Path,
) -> Result<MatchJobSummary, PipelineError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    cfg.validate()?;
    ledger::clean_directory(output_root)?;

    let outcome = find_matches(reprs, cfg)?;

    let rows: Vec<SymbolMatchRow> = outcome
        .matches
        .iter()
        .flat_map(|(repr, list)| {
            list.iter().map(move |m| SymbolMatchRow {
                mathml: repr.clone(),
                match_mathml: m.mathml.clone(),
                rank: m.rank,
            })
        })
        .collect();

    let matches_path = output_root.join(MATCHES_FILE);
    let written = if rows.is_empty() {
        0
    } else {
        ledger::append_rows(&matches_path, &rows)?
    };

    let summary = MatchJobSummary {
        representations: outcome.matches.len(),
        excluded: outcome.excluded.len(),
        rows_written: written,
        rows_dropped: rows.len() - written,
    };

    info!(
        paper_id = %paper_id,
        representations = summary.representations,
        excluded = summary.excluded,
        rows_written = summary.rows_written,
        "match_job_complete"
    );

    Ok(summary)
}

/// Write the rewritten document text into the iteration's source tree,
/// creating intermediate directories for nested `tex_path`s.
fn write_iteration_tex(dest: &Path, tex_path: &str, tex: &str) -> Result<(), std::io::Error> {
    let target = dest.join(tex_path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, tex.as_bytes())
}

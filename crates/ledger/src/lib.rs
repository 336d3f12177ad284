//! Tintex ledger layer.
//!
//! Everything the pipeline persists goes through here: the per-document
//! entity-hue ledger that joins rendered color back to logical entities,
//! and the per-paper symbol-match ledger. Both are append-only delimited
//! files with fixed, positional columns.
//!
//! ## Failure behavior
//!
//! A row that cannot be serialized is dropped with a warning and never
//! aborts its siblings. Opening or flushing a ledger file can fail as a
//! whole; callers treat that at iteration granularity and move on. Output
//! locations are cleared exactly once per document, before any iteration
//! writes into them.

mod error;
mod paths;
mod rows;
mod writer;

pub use crate::error::LedgerError;
pub use crate::paths::{clean_directory, iteration_dir, iteration_id};
pub use crate::rows::{EntityHueRow, SymbolMatchRow, HUES_FILE, MATCHES_FILE};
pub use crate::writer::{append_row, append_rows};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_row(index: u32, iteration: &str) -> EntityHueRow {
        EntityHueRow {
            tex_path: "sections/intro.tex".into(),
            entity_index: index,
            iteration: iteration.into(),
            hue: 0.25,
            tex: "$\\tintsetcolor[rgb]{0.5000,1.0000,0.0000}x\\tintrevertcolor{}$".into(),
            content_start: 6,
            content_end: 7,
            content_tex: "x".into(),
            depth: 0,
            start: 5,
            end: 8,
        }
    }

    fn read_rows(path: &std::path::Path) -> Vec<EntityHueRow> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .expect("ledger file opens");
        reader
            .deserialize()
            .collect::<Result<Vec<_>, _>>()
            .expect("ledger rows parse")
    }

    #[test]
    fn rows_round_trip_through_csv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(HUES_FILE);
        let rows = vec![sample_row(0, "main.tex-iteration-0"), sample_row(1, "main.tex-iteration-0")];

        let written = append_rows(&path, &rows).expect("append succeeds");
        assert_eq!(written, 2);
        assert_eq!(read_rows(&path), rows);
    }

    #[test]
    fn appends_accumulate_across_iterations() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(HUES_FILE);

        append_rows(&path, &[sample_row(0, "main.tex-iteration-0")]).expect("first append");
        append_rows(&path, &[sample_row(1, "main.tex-iteration-1")]).expect("second append");

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].iteration, "main.tex-iteration-0");
        assert_eq!(rows[1].iteration, "main.tex-iteration-1");
    }

    #[test]
    fn fields_with_delimiters_and_newlines_survive() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(HUES_FILE);
        let mut row = sample_row(0, "main.tex-iteration-0");
        row.content_tex = "x, y\n\"quoted\"".into();

        append_rows(&path, &[row.clone()]).expect("append succeeds");
        assert_eq!(read_rows(&path), vec![row]);
    }

    #[test]
    fn match_rows_serialize_positionally() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(MATCHES_FILE);
        let row = SymbolMatchRow {
            mathml: "<mi>x</mi>".into(),
            match_mathml: "<mi mathvariant=\"bold\">x</mi>".into(),
            rank: 1,
        };
        append_row(&path, &row).expect("append succeeds");

        let raw = fs::read_to_string(&path).expect("file readable");
        assert_eq!(
            raw.trim_end(),
            "\"<mi>x</mi>\",\"<mi mathvariant=\"\"bold\"\">x</mi>\",\"1\""
        );
    }

    #[test]
    fn iteration_id_flattens_paths() {
        assert_eq!(
            iteration_id("sections/intro.tex", 2),
            "sections-intro.tex-iteration-2"
        );
        assert_eq!(iteration_id("main.tex", 0), "main.tex-iteration-0");
    }

    #[test]
    fn clean_directory_removes_stale_outputs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("doc-output");
        fs::create_dir_all(root.join("stale-iteration-0")).expect("stale dir");
        fs::write(root.join("stale-iteration-0").join(HUES_FILE), "junk").expect("stale file");

        clean_directory(&root).expect("clean succeeds");
        assert!(root.exists());
        assert_eq!(fs::read_dir(&root).expect("readable").count(), 0);
    }

    #[test]
    fn clean_directory_creates_missing_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("fresh");
        clean_directory(&root).expect("clean succeeds");
        assert!(root.is_dir());
    }
}

use std::fs::OpenOptions;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::error::LedgerError;

/// Append rows to a delimited ledger file, creating it if needed.
///
/// Rows for one document accumulate across iterations in one file, so the
/// writer always opens in append mode and never writes a header. Every
/// field is quoted, matching the quote-all convention of the consumers.
///
/// A row that fails to serialize is dropped with a warning and the
/// remaining rows continue; only opening or flushing the file itself is an
/// error. Returns the number of rows actually written.
pub fn append_rows<R: Serialize>(path: &Path, rows: &[R]) -> Result<usize, LedgerError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(file);

    let mut written = 0usize;
    for row in rows {
        match writer.serialize(row) {
            Ok(()) => written += 1,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ledger_row_dropped");
            }
        }
    }
    writer.flush()?;
    Ok(written)
}

/// Append a single row; a serialization failure drops it with a warning.
pub fn append_row<R: Serialize>(path: &Path, row: &R) -> Result<usize, LedgerError> {
    append_rows(path, std::slice::from_ref(row))
}

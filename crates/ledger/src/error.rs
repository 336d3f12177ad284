use thiserror::Error;

/// Errors produced by the ledger layer.
///
/// An error opening or flushing a ledger file is surfaced to the caller,
/// which treats it at iteration granularity (skip, warn, continue). A
/// single row that fails to serialize is handled inside the writer itself
/// and never becomes a `LedgerError`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LedgerError {
    /// Filesystem operation failed.
    #[error("ledger io error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer failed outside of per-row serialization.
    #[error("ledger csv error: {0}")]
    Csv(#[from] csv::Error),
}

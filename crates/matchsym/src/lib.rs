//! Tintex symbol-equivalence matching layer.
//!
//! A paper mentions the same symbol many times; the rendered occurrences
//! arrive here as normalized markup representations. This crate decides
//! which of them are the SAME symbol, structurally, and emits the match
//! records downstream UIs use to highlight every occurrence at once.
//!
//! ## How matching works
//!
//! - Exact-duplicate strings collapse first (so nothing matches itself)
//! - Malformed representations are excluded with a warning, never fatally
//! - Survivors group by a structural normal form: Unicode NFC, attribute
//!   stripping, insignificant-whitespace collapse
//! - Every class of size >= 2 emits its complete graph, each list in
//!   canonical order with 1-based ranks
//!
//! ## Determinism
//!
//! For identical input sets the output is identical regardless of input
//! iteration order. Running the matcher twice yields the same result;
//! regression tests can assert exact output.

mod engine;
mod normal;
mod types;

pub use crate::engine::find_matches;
pub use crate::normal::{normal_form, well_formed};
pub use crate::types::{MatchConfig, MatchError, MatchOutcome, Matches, SymbolMatch};

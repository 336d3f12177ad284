use std::collections::BTreeSet;
use std::time::Instant;

use fxhash::FxHashMap;
use tracing::{info, warn, Level};

use crate::normal::{normal_form, well_formed};
use crate::types::{MatchConfig, MatchError, MatchOutcome, Matches, SymbolMatch};

/// Compute the equivalence classes of one paper's symbol representations
/// and emit the complete match graph.
///
/// Exact-duplicate strings collapse before matching, so a representation
/// never matches itself. Representations group by structural normal form;
/// every class of size >= 2 emits a record from every member to every other
/// member, so the relation is queryable from either endpoint without
/// re-deriving the class. Output is canonically ordered: identical input
/// sets produce identical output regardless of iteration order.
pub fn find_matches<I, S>(reprs: I, cfg: &MatchConfig) -> Result<MatchOutcome, MatchError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    cfg.validate()?;

    let start = Instant::now();

    // BTreeSet both deduplicates and fixes the processing order.
    let deduped: BTreeSet<String> = reprs.into_iter().map(Into::into).collect();
    let total = deduped.len();

    let span = tracing::span!(Level::INFO, "matchsym.find", reprs = total);
    let _guard = span.enter();

    let mut excluded = Vec::new();
    let mut classes: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for repr in deduped {
        if !well_formed(&repr) {
            warn!(repr = %repr, "symbol_excluded");
            excluded.push(repr);
            continue;
        }
        let key = normal_form(&repr, cfg);
        classes.entry(key).or_default().push(repr);
    }

    let mut matches = Matches::new();
    let mut pairs = 0usize;
    for (_, mut members) in classes {
        // BTreeSet input arrives sorted, but sort again so the canonical
        // ordering never depends on how the class was accumulated.
        members.sort_unstable();
        for member in &members {
            let list: Vec<SymbolMatch> = members
                .iter()
                .filter(|other| *other != member)
                .enumerate()
                .map(|(i, other)| SymbolMatch {
                    mathml: other.clone(),
                    rank: i as u32 + 1,
                })
                .collect();
            pairs += list.len();
            matches.insert(member.clone(), list);
        }
    }

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        reprs = total,
        excluded = excluded.len(),
        pairs,
        elapsed_micros,
        "match_complete"
    );

    Ok(MatchOutcome { matches, excluded })
}

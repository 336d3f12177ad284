//! Partitioning of an entity set into colorization batches.
//!
//! Each batch becomes one iteration. Two constraints shape the partition:
//! the palette bound (no more entities per batch than there are
//! distinguishable hues) and the overlap constraint (two entities whose
//! spans intersect can never share a batch, or their directives would
//! interleave). Batches are consecutive in input order, so the partition is
//! deterministic for a given entity ordering.

use entities::Entity;

use crate::config::BatchPolicy;

/// Partition entities into consecutive batches.
///
/// A batch closes when it reaches the size limit or when the next entity
/// overlaps a member already in it. Under [`BatchPolicy::SingleEntity`]
/// every batch has exactly one entity regardless of `max_hues`. Every input
/// entity lands in exactly one batch.
pub fn partition<'a>(
    entities: &'a [Entity],
    max_hues: usize,
    policy: BatchPolicy,
) -> Vec<Vec<&'a Entity>> {
    let limit = match policy {
        BatchPolicy::Palette => max_hues,
        BatchPolicy::SingleEntity => 1,
    };

    let mut batches: Vec<Vec<&Entity>> = Vec::new();
    let mut current: Vec<&Entity> = Vec::new();
    for entity in entities {
        let full = current.len() >= limit;
        let conflict = current.iter().any(|member| member.overlaps(entity));
        if (full || conflict) && !current.is_empty() {
            batches.push(std::mem::take(&mut current));
        }
        current.push(entity);
    }
    if !current.is_empty() {
        batches.push(current);
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn sizes(batches: &[Vec<&Entity>]) -> Vec<usize> {
        batches.iter().map(Vec::len).collect()
    }

    #[test]
    fn fills_batches_to_palette_size() {
        let es: Vec<Entity> = (0..5).map(|i| entity(i, i as usize * 10, i as usize * 10 + 5)).collect();
        let batches = partition(&es, 2, BatchPolicy::Palette);
        assert_eq!(sizes(&batches), vec![2, 2, 1]);
    }

    #[test]
    fn single_entity_policy_isolates_every_entity() {
        let es: Vec<Entity> = (0..4).map(|i| entity(i, i as usize * 10, i as usize * 10 + 5)).collect();
        let batches = partition(&es, 30, BatchPolicy::SingleEntity);
        assert_eq!(sizes(&batches), vec![1, 1, 1, 1]);
    }

    #[test]
    fn overlap_closes_the_batch() {
        // A display block at [0, 40) containing an equation at [10, 20).
        let es = vec![entity(0, 0, 40), entity(1, 10, 20), entity(2, 50, 60)];
        let batches = partition(&es, 30, BatchPolicy::Palette);
        assert_eq!(sizes(&batches), vec![1, 2]);
        assert_eq!(batches[0][0].index, 0);
        assert_eq!(batches[1][0].index, 1);
    }

    #[test]
    fn every_entity_appears_exactly_once() {
        let es = vec![
            entity(0, 0, 40),
            entity(1, 10, 20),
            entity(2, 25, 35),
            entity(3, 50, 60),
            entity(4, 55, 70),
        ];
        let batches = partition(&es, 2, BatchPolicy::Palette);
        let mut seen: Vec<u32> = batches
            .iter()
            .flat_map(|b| b.iter().map(|e| e.index))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_input_yields_no_batches() {
        let batches = partition(&[], 30, BatchPolicy::Palette);
        assert!(batches.is_empty());
    }
}

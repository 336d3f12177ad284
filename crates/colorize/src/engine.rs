use entities::{validate_entities, Document, Entity};
use tracing::info;

use crate::batch::partition;
use crate::config::ColorizeConfig;
use crate::directive::{color_start, COLOR_END};
use crate::error::ColorizeError;
use crate::iteration::{ColorizedEntity, Iteration};
use crate::palette::palette;

/// Main entry point. Takes a document, its located entities, and a config,
/// and returns one colorized variant per batch.
///
/// Offsets are always computed against the original, unmodified text; each
/// batch's rewrite is applied in a single back-to-front pass so one
/// entity's insertion never shifts a sibling's recorded offsets. Distinct
/// iterations are independent variants of the same base document.
pub fn colorize_document(
    doc: &Document,
    entities: &[Entity],
    cfg: &ColorizeConfig,
) -> Result<Vec<Iteration>, ColorizeError> {
    cfg.validate()?;
    validate_entities(doc, entities)?;

    let hues = palette(cfg.max_hues);
    let batches = partition(entities, cfg.max_hues, cfg.batch_policy);

    let iterations: Vec<Iteration> = batches
        .into_iter()
        .enumerate()
        .map(|(index, batch)| colorize_batch(doc, &batch, &hues, index))
        .collect();

    info!(
        doc_id = %doc.doc_id,
        tex_path = %doc.tex_path,
        entities = entities.len(),
        iterations = iterations.len(),
        "colorize_complete"
    );

    Ok(iterations)
}

/// Produce one iteration: assign hues to the batch and rewrite the text.
fn colorize_batch(
    doc: &Document,
    batch: &[&Entity],
    hues: &[f32],
    index: usize,
) -> Iteration {
    let text = doc.text.as_str();

    // Hues are assigned positionally, so the pairing is deterministic for a
    // given input ordering. The partition guarantees batch.len() <= hues.len().
    let selected: Vec<(&Entity, f32)> = batch
        .iter()
        .copied()
        .zip(hues.iter().copied())
        .collect();

    // Rewrite back-to-front. Batch members never overlap, so sorting by
    // span start descending and inserting end-then-start keeps every
    // earlier offset valid and orders directives correctly even when two
    // content spans touch.
    let mut tex = text.to_string();
    let mut by_position = selected.clone();
    by_position.sort_by(|a, b| b.0.start.cmp(&a.0.start));
    for (entity, hue) in &by_position {
        tex.insert_str(entity.content_end, COLOR_END);
        tex.insert_str(entity.content_start, &color_start(*hue));
    }

    let colorized = selected
        .into_iter()
        .map(|(entity, hue)| ColorizedEntity {
            index: entity.index,
            hue,
            tex: colorized_fragment(text, entity, hue),
            start: entity.start,
            end: entity.end,
            content_start: entity.content_start,
            content_end: entity.content_end,
            content_tex: entity.content_tex(text).to_string(),
            depth: entity.depth,
        })
        .collect();

    Iteration {
        index,
        tex,
        entities: colorized,
    }
}

/// The entity's full span with its directive pair inserted at the content
/// boundaries: delimiters stay outside the colored region so the annotated
/// source still typesets.
fn colorized_fragment(text: &str, entity: &Entity, hue: f32) -> String {
    let mut fragment = String::with_capacity(entity.end - entity.start + 64);
    fragment.push_str(&text[entity.start..entity.content_start]);
    fragment.push_str(&color_start(hue));
    fragment.push_str(&text[entity.content_start..entity.content_end]);
    fragment.push_str(COLOR_END);
    fragment.push_str(&text[entity.content_end..entity.end]);
    fragment
}

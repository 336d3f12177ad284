//! Tintex colorization layer.
//!
//! This crate turns a document plus its located entities into colorized
//! variants ("iterations"). Downstream rendering maps pixels back to
//! entities by hue, so everything here is about keeping that join exact.
//!
//! ## What we do
//!
//! - Evenly spaced hue palette, sized to what stays distinguishable after
//!   rendering and anti-aliasing
//! - Batch partitioning under the palette bound and the overlap constraint
//!   (overlapping spans never share an iteration)
//! - Single-pass, back-to-front rewriting so sibling offsets never
//!   desynchronize
//! - One [`ColorizedEntity`] record per colorized entity, carrying hue,
//!   fragment, and original span metadata
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no ambient state. Give us the same document,
//! entity set, and config, you get the same iterations on any machine.
//!
//! ## Invariants worth knowing
//!
//! - Every input entity appears in exactly one iteration
//! - Within one iteration no two entities share a hue
//! - Stripping directives from an iteration reproduces the base text
//!   byte-for-byte
//!
//! Bottom line: same input + same config = same iterations forever.

mod batch;
mod config;
mod directive;
mod engine;
mod error;
mod iteration;
mod palette;

pub use crate::batch::partition;
pub use crate::config::{BatchPolicy, ColorizeConfig};
pub use crate::directive::{color_start, strip_color_directives, COLOR_END, COLOR_START_PREFIX};
pub use crate::engine::colorize_document;
pub use crate::error::ColorizeError;
pub use crate::iteration::{ColorizedEntity, Iteration};
pub use crate::palette::{hue_to_rgb, palette};

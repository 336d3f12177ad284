//! Color directive markers inserted into document text.
//!
//! A colorized entity's content span is wrapped in a set-color/revert-color
//! pair. The markers carry the assigned hue as an RGB triple so the
//! annotated source renders each entity in its own color without any macro
//! package beyond the two commands themselves. The marker format is fixed
//! per config version: downstream consumers strip or locate directives by
//! these exact prefixes.

use crate::palette::hue_to_rgb;

/// Opening of a set-color directive, up to the RGB arguments.
pub const COLOR_START_PREFIX: &str = "\\tintsetcolor[rgb]{";

/// The revert-color directive, inserted after an entity's content.
pub const COLOR_END: &str = "\\tintrevertcolor{}";

/// The full set-color directive for a hue.
pub fn color_start(hue: f32) -> String {
    let (r, g, b) = hue_to_rgb(hue);
    format!("{COLOR_START_PREFIX}{r:.4},{g:.4},{b:.4}}}")
}

/// Remove every color directive from a colorized text.
///
/// Stripping a colorized iteration reproduces the original document
/// byte-for-byte; text that never contained directives passes through
/// unchanged.
pub fn strip_color_directives(tex: &str) -> String {
    let mut out = String::with_capacity(tex.len());
    let mut rest = tex;
    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix(COLOR_END) {
            rest = after;
            continue;
        }
        if let Some(after) = rest.strip_prefix(COLOR_START_PREFIX) {
            // The RGB arguments never contain a brace; the first closing
            // brace ends the directive.
            if let Some(close) = after.find('}') {
                rest = &after[close + 1..];
                continue;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
            rest = chars.as_str();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_directive_carries_rgb() {
        let directive = color_start(0.0);
        assert_eq!(directive, "\\tintsetcolor[rgb]{1.0000,0.0000,0.0000}");
    }

    #[test]
    fn strip_removes_wrapped_pair() {
        let tex = format!("$ {}x + y{} $", color_start(0.5), COLOR_END);
        assert_eq!(strip_color_directives(&tex), "$ x + y $");
    }

    #[test]
    fn strip_is_identity_without_directives() {
        let tex = "\\begin{equation}x\\end{equation}";
        assert_eq!(strip_color_directives(tex), tex);
    }

    #[test]
    fn strip_handles_adjacent_directives() {
        let tex = format!(
            "{}{}{}{}",
            color_start(0.1),
            COLOR_END,
            color_start(0.2),
            COLOR_END
        );
        assert_eq!(strip_color_directives(&tex), "");
    }
}

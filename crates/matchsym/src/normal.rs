//! The structural normal form used as the equivalence grouping key.
//!
//! Two representations are structurally equivalent iff their normal forms
//! are byte-identical. The normal form is intentionally conservative: it
//! removes only variation that cannot change a symbol's structure
//! (character encoding differences, insignificant whitespace, presentation
//! attributes). It never reorders or rewrites elements.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::types::MatchConfig;

/// True if the representation's markup brackets nest sanely.
///
/// A stray `<` or `>` outside a tag, or input ending mid-tag, means the
/// encoding was truncated or corrupted upstream; such representations are
/// excluded from matching rather than grouped by garbage keys. The empty
/// string is well-formed and participates like any other key.
pub fn well_formed(repr: &str) -> bool {
    let mut in_tag = false;
    for ch in repr.chars() {
        match ch {
            '<' if in_tag => return false,
            '<' => in_tag = true,
            '>' if !in_tag => return false,
            '>' => in_tag = false,
            _ => {}
        }
    }
    !in_tag
}

/// Compute the structural normal form of a well-formed representation.
pub fn normal_form(repr: &str, cfg: &MatchConfig) -> String {
    let text: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(repr.nfc().collect::<String>())
    } else {
        Cow::Borrowed(repr)
    };

    let stripped: Cow<str> = if cfg.strip_attributes {
        Cow::Owned(strip_attributes(text.as_ref()))
    } else {
        text
    };

    collapse_markup_whitespace(stripped.as_ref())
}

/// Drop everything between a tag's name and its closing `>`.
fn strip_attributes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '<' {
            let mut dropping = false;
            for c in chars.by_ref() {
                if c == '>' {
                    out.push('>');
                    break;
                }
                if c.is_whitespace() {
                    dropping = true;
                }
                if !dropping {
                    out.push(c);
                }
            }
        }
    }
    out
}

/// Collapse whitespace runs: drop runs adjacent to a tag boundary, reduce
/// the rest to a single space. Leading and trailing whitespace is dropped.
fn collapse_markup_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending = true;
            continue;
        }
        if pending {
            if !out.is_empty() && !out.ends_with('>') && ch != '<' {
                out.push(' ');
            }
            pending = false;
        }
        out.push(ch);
    }
    out
}

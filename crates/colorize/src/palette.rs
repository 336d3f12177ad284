//! The hue palette and its mapping into color directives.
//!
//! Hues are values in `[0, 1)` on the HSV color wheel at full saturation and
//! value. A palette of size `n` spaces them evenly, which maximizes the
//! minimum angular distance between any two assigned hues.

/// Evenly spaced hues for a palette of the given size.
///
/// Deterministic: `palette(n)[i] == i / n` for all `i < n`. An empty palette
/// request yields an empty vector; callers reject that case during config
/// validation.
pub fn palette(max_hues: usize) -> Vec<f32> {
    (0..max_hues)
        .map(|i| i as f32 / max_hues as f32)
        .collect()
}

/// Convert a hue in `[0, 1)` to RGB at full saturation and value.
///
/// Out-of-range hues wrap around the wheel rather than clamping, so hue
/// arithmetic upstream cannot produce an invalid color.
pub fn hue_to_rgb(hue: f32) -> (f32, f32, f32) {
    let h = hue.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    match sector as u32 % 6 {
        0 => (1.0, f, 0.0),
        1 => (1.0 - f, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, 1.0 - f, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_evenly_spaced() {
        let hues = palette(4);
        assert_eq!(hues, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn palette_entries_are_distinct() {
        let hues = palette(30);
        for (i, a) in hues.iter().enumerate() {
            for b in &hues[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn primary_hues_map_to_primaries() {
        assert_eq!(hue_to_rgb(0.0), (1.0, 0.0, 0.0));
        let (r, g, b) = hue_to_rgb(1.0 / 3.0);
        assert!((r - 0.0).abs() < 1e-5 && (g - 1.0).abs() < 1e-5 && b.abs() < 1e-5);
        let (r, g, b) = hue_to_rgb(2.0 / 3.0);
        assert!(r.abs() < 1e-5 && g.abs() < 1e-5 && (b - 1.0).abs() < 1e-5);
    }

    #[test]
    fn hue_wraps_around_the_wheel() {
        assert_eq!(hue_to_rgb(1.25), hue_to_rgb(0.25));
        assert_eq!(hue_to_rgb(-0.75), hue_to_rgb(0.25));
    }
}

//! Text measurement capability.
//!
//! Span construction distributes an item's total width across its words in
//! proportion to each word's rendered width. The measurer is an explicitly
//! passed capability so a rendering surface, a font-metric table, or a
//! deterministic test double can back it interchangeably. When none is
//! available the span builder degrades to whole-item spans.

/// Measures rendered text width at a given font size.
///
/// Results are in the same units as `font_size`. Only relative accuracy
/// matters: widths are used proportionally, never as absolute geometry.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f64) -> f64;
}

/// Advance widths for the printable ASCII range (U+0020..U+007E), in
/// thousandths of an em. Helvetica metrics.
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, 556, 556, 556,
    556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, 1015, 667, 667, 722, 722,
    667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222,
    500, 222, 833, 556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334,
    584,
];

/// Width assumed for characters outside the table, in thousandths of an em.
const DEFAULT_WIDTH: u16 = 556;

/// Font-metric text measurer backed by a static advance-width table.
///
/// Deterministic and independent of any rendering surface, which keeps span
/// geometry reproducible in headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphWidthMeasure;

impl TextMeasure for GlyphWidthMeasure {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        let milli_ems: u64 = text
            .chars()
            .map(|c| {
                if c.is_whitespace() {
                    u64::from(ASCII_WIDTHS[0])
                } else {
                    match u32::from(c) {
                        cp @ 0x20..=0x7E => u64::from(ASCII_WIDTHS[(cp - 0x20) as usize]),
                        _ => u64::from(DEFAULT_WIDTH),
                    }
                }
            })
            .sum();
        milli_ems as f64 / 1000.0 * font_size
    }
}

/// Fixed-advance measurer: every character is `em` ems wide.
///
/// Useful where exact proportional distribution must be predictable, e.g.
/// driving the span builder from tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedTextMeasure {
    pub em: f64,
}

impl FixedTextMeasure {
    pub const fn new(em: f64) -> Self {
        Self { em }
    }
}

impl TextMeasure for FixedTextMeasure {
    fn measure(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * self.em * font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_glyphs_measure_less_than_wide_ones() {
        let m = GlyphWidthMeasure;
        assert!(m.measure("iii", 12.0) < m.measure("mmm", 12.0));
    }

    #[test]
    fn width_scales_linearly_with_font_size() {
        let m = GlyphWidthMeasure;
        let w = m.measure("word", 10.0);
        assert!((m.measure("word", 20.0) - 2.0 * w).abs() < 1e-9);
    }

    #[test]
    fn whitespace_has_positive_width() {
        let m = GlyphWidthMeasure;
        assert!(m.measure(" ", 10.0) > 0.0);
        assert_eq!(m.measure(" ", 10.0), m.measure("\t", 10.0));
    }

    #[test]
    fn fixed_measure_counts_chars() {
        let m = FixedTextMeasure::new(0.5);
        assert_eq!(m.measure("abcd", 10.0), 20.0);
    }
}

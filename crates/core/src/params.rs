//! Engine parameters.
//!
//! Contains EngineParams for controlling span reconstruction, hit testing,
//! selection, and highlight geometry.

use std::time::Duration;

/// Parameters for span reconstruction and highlight geometry.
///
/// The distances are empirically tuned constants, exposed as configuration
/// rather than derived values. All lengths are in scaled screen units unless
/// noted otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineParams {
    /// Two consecutive items whose vertical positions differ by no more than
    /// this are considered part of the same visual line.
    pub line_tolerance: f64,

    /// Fraction of the font size between the text baseline and the top of
    /// the rendered glyphs. Used to derive a top-left origin from the
    /// baseline translation.
    pub baseline_ratio: f64,

    /// Per-character width fraction of the font size, used to approximate an
    /// item's width when the source declares none.
    pub fallback_width_ratio: f64,

    /// Horizontal padding around a span accepted as a direct hit.
    pub hit_pad_x: f64,

    /// Vertical padding around a span accepted as a direct hit.
    pub hit_pad_y: f64,

    /// Largest horizontal gap at which a vertically-aligned span is still
    /// returned as a fallback hit.
    pub hit_max_gap: f64,

    /// Top padding added to each compiled highlight rectangle.
    pub rect_pad_top: f64,

    /// Bottom padding added to each compiled highlight rectangle.
    pub rect_pad_bottom: f64,

    /// Horizontal padding added on each side of a compiled rectangle.
    pub rect_pad_x: f64,

    /// Two spans whose vertical positions differ by less than this are on
    /// the same line for text reconstruction.
    pub same_line_eps: f64,

    /// Horizontal gap between same-line spans above which a space is
    /// inserted in the reconstructed text.
    pub word_gap: f64,

    /// Selections covering fewer spans than this are discarded at commit.
    pub min_selection_spans: usize,

    /// Grace period before a scheduled hover-leave clears the hover state.
    pub hover_grace: Duration,

    /// Overlay fill opacity for an unfocused highlight.
    pub default_alpha: f64,

    /// Overlay fill opacity for a hovered or active highlight.
    pub emphasis_alpha: f64,

    /// Smallest height a highlight rectangle is drawn at, in scaled units.
    pub min_draw_height: f64,

    /// Vertical gap between the last selected span and the picker anchor.
    pub anchor_gap: f64,

    /// Vertical gap between a highlight's bounding box and its floating
    /// action controls.
    pub action_margin: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            line_tolerance: 4.0,
            baseline_ratio: 0.85,
            fallback_width_ratio: 0.5,
            hit_pad_x: 4.0,
            hit_pad_y: 6.0,
            hit_max_gap: 40.0,
            rect_pad_top: 2.0,
            rect_pad_bottom: 3.0,
            rect_pad_x: 1.0,
            same_line_eps: 6.0,
            word_gap: 1.0,
            min_selection_spans: 2,
            hover_grace: Duration::from_millis(1000),
            default_alpha: 0.18,
            emphasis_alpha: 0.38,
            min_draw_height: 4.0,
            anchor_gap: 8.0,
            action_margin: 4.0,
        }
    }
}

impl EngineParams {
    /// Creates parameters from the tunable distances, keeping defaults for
    /// the rest.
    ///
    /// # Panics
    /// Panics if any distance is negative or non-finite.
    pub fn new(line_tolerance: f64, hit_pad_x: f64, hit_pad_y: f64, hit_max_gap: f64) -> Self {
        for (name, v) in [
            ("line_tolerance", line_tolerance),
            ("hit_pad_x", hit_pad_x),
            ("hit_pad_y", hit_pad_y),
            ("hit_max_gap", hit_max_gap),
        ] {
            assert!(
                v.is_finite() && v >= 0.0,
                "{name} should be a non-negative finite number"
            );
        }

        Self {
            line_tolerance,
            hit_pad_x,
            hit_pad_y,
            hit_max_gap,
            ..Self::default()
        }
    }
}

//! Overlay rendering of persisted and live highlight geometry.
//!
//! This module contains:
//! - Scale-up of persisted rectangles at draw time
//! - Per-highlight bounding boxes hosting the floating action controls
//! - Visual states mapped to opacity
//! - The debounced hover tracker

pub mod hover;

pub use hover::HoverTracker;

use crate::geom::{Point, Rect};
use crate::highlight::{PositionData, line_boxes};
use crate::layout::Span;
use crate::params::EngineParams;

/// External identity of a saved highlight.
pub type HighlightId = i64;

/// Visual state of a drawn highlight. Affects opacity only, never geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Default,
    Hovered,
    Active,
}

impl VisualState {
    pub fn of(id: HighlightId, hovered: Option<HighlightId>, active: Option<HighlightId>) -> Self {
        if active == Some(id) {
            Self::Active
        } else if hovered == Some(id) {
            Self::Hovered
        } else {
            Self::Default
        }
    }
}

/// Draw-ready geometry for one saved highlight at the current scale.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightOverlay {
    pub id: HighlightId,
    /// Translucent fill regions, scaled units.
    pub rects: Vec<Rect>,
    /// Min/max envelope of the rects; hosts the interactive affordances.
    pub bbox: Rect,
    pub state: VisualState,
    /// Fill opacity for `state`.
    pub alpha: f64,
    /// Where the floating edit/delete controls anchor, above the bbox.
    pub actions_anchor: Point,
}

/// Lays out saved highlights for drawing at the current scale.
///
/// Persisted rectangles are native units; they are multiplied by `scale`
/// here and nowhere else — the stored form is never touched. Highlights
/// with no rectangles are skipped.
pub fn render_highlights(
    highlights: &[(HighlightId, &PositionData)],
    hovered: Option<HighlightId>,
    active: Option<HighlightId>,
    scale: f64,
    params: &EngineParams,
) -> Vec<HighlightOverlay> {
    highlights
        .iter()
        .filter(|(_, data)| !data.is_empty())
        .map(|&(id, data)| {
            let scaled: Vec<Rect> = data.rects.iter().map(|r| r.scaled(scale)).collect();
            let bbox = envelope(&scaled);
            let rects = scaled
                .into_iter()
                .map(|r| Rect {
                    width: r.width.max(0.0),
                    height: r.height.max(params.min_draw_height),
                    ..r
                })
                .collect();

            let state = VisualState::of(id, hovered, active);
            let alpha = match state {
                VisualState::Default => params.default_alpha,
                VisualState::Hovered | VisualState::Active => params.emphasis_alpha,
            };

            HighlightOverlay {
                id,
                rects,
                bbox,
                state,
                alpha,
                actions_anchor: (bbox.x, bbox.y - params.action_margin),
            }
        })
        .collect()
}

/// Translucent regions for the in-progress selection, in scaled units.
///
/// Live geometry is the same per-line box the compiler persists, but it
/// never leaves screen space — nothing is stored until the gesture
/// commits.
pub fn selection_overlay(selected: &[&Span], params: &EngineParams) -> Vec<Rect> {
    line_boxes(selected, params)
}

fn envelope(rects: &[Rect]) -> Rect {
    let left = rects.iter().map(|r| r.x).fold(f64::INFINITY, f64::min);
    let top = rects.iter().map(|r| r.y).fold(f64::INFINITY, f64::min);
    let right = rects.iter().map(Rect::right).fold(f64::NEG_INFINITY, f64::max);
    let bottom = rects.iter().map(Rect::bottom).fold(f64::NEG_INFINITY, f64::max);
    Rect {
        x: left,
        y: top,
        width: right - left,
        height: bottom - top,
    }
}

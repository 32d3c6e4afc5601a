//! Persisted highlight geometry and the commit emission.

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect};

/// The persisted, scale-independent geometry of one highlight.
///
/// One rectangle per visual line touched by the selection, every field in
/// document-native units. Written once at creation time and never mutated
/// afterwards; rendering at a zoom level is a multiplication, not a stored
/// change. Array order is immaterial.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionData {
    pub rects: Vec<Rect>,
}

impl PositionData {
    pub fn new(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Creation request emitted when a drag selection commits.
///
/// The persistence collaborator owns everything after this point: prompting
/// for a color, attaching a note, and the actual create call. The engine
/// knows none of that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightRequest {
    pub page_number: u32,
    pub position_data: PositionData,
    pub highlighted_text: String,
    /// Normalized selected span range, low end.
    pub span_start: u32,
    /// Normalized selected span range, high end.
    pub span_end: u32,
    /// Suggested picker position, centered above the last selected span, in
    /// scaled page coordinates.
    pub anchor: Point,
}

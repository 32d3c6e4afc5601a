//! Per-page session: the span list, the drag gesture, and commit emission.

use tracing::debug;

use crate::geom::{Matrix, Point, Rect};
use crate::highlight::{HighlightRequest, PositionData, compile_rects, compile_text};
use crate::layout::{Span, TextItem, build_spans};
use crate::measure::TextMeasure;
use crate::overlay::selection_overlay;
use crate::params::EngineParams;
use crate::select::{SelectionTracker, hit_test};

/// One rendered page's selection state.
///
/// Everything here is synchronous: pointer events and render events arrive
/// one at a time, and sessions for different pages share no state. The span
/// list is rebuilt from scratch on every render, which invalidates any
/// in-flight gesture against the old spans.
#[derive(Debug, Clone)]
pub struct PageSession {
    page_number: u32,
    scale: f64,
    spans: Vec<Span>,
    tracker: SelectionTracker,
    picker_range: Option<(u32, u32)>,
    params: EngineParams,
}

impl PageSession {
    pub fn new(page_number: u32, params: EngineParams) -> Self {
        Self {
            page_number,
            scale: 1.0,
            spans: Vec::new(),
            tracker: SelectionTracker::new(),
            picker_range: None,
            params,
        }
    }

    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    pub const fn scale(&self) -> f64 {
        self.scale
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub const fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Rebuilds the span list after a page (re)render.
    pub fn rebuild<I: TextItem>(
        &mut self,
        items: &[I],
        page_transform: Matrix,
        scale: f64,
        measure: Option<&dyn TextMeasure>,
    ) {
        self.scale = scale;
        self.spans = build_spans(items, page_transform, scale, measure, &self.params);
        self.tracker.cancel();
        self.picker_range = None;
        debug!(
            page = self.page_number,
            spans = self.spans.len(),
            scale,
            "rebuilt span list"
        );
    }

    /// Pointer-down. Starts a drag when a span is hit; a miss clears any
    /// lingering selection instead.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        match hit_test(&self.spans, x, y, &self.params) {
            Some(span) => {
                self.tracker.begin(span.id);
                true
            }
            None => {
                self.tracker.cancel();
                false
            }
        }
    }

    /// Pointer-move during a drag: re-hit-tests and moves the endpoint. A
    /// miss means "selection unchanged this move".
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.tracker.is_dragging() {
            return;
        }
        if let Some(span) = hit_test(&self.spans, x, y, &self.params) {
            self.tracker.extend(span.id);
        }
    }

    /// Pointer-up: ends the gesture and commits. Selections covering fewer
    /// than the minimum span count are discarded silently — a plain click
    /// must not produce an accidental one-word highlight.
    pub fn pointer_up(&mut self) -> Option<HighlightRequest> {
        let (lo, hi) = self.tracker.finish()?;
        self.checked_request(lo, hi)
    }

    /// The pointer left the page mid-drag; same exit as pointer-up.
    pub fn pointer_leave(&mut self) -> Option<HighlightRequest> {
        self.pointer_up()
    }

    /// External cancel (picker dismissed): discards uncommitted state with
    /// no persisted side effect.
    pub fn cancel_selection(&mut self) {
        self.tracker.cancel();
        self.picker_range = None;
    }

    /// Keeps a committed range visible while the external picker is open.
    pub fn set_picker_selection(&mut self, range: Option<(u32, u32)>) {
        self.picker_range = range;
    }

    /// The live range: the drag in progress, else the picker range.
    pub fn selected_range(&self) -> Option<(u32, u32)> {
        self.tracker.range().or(self.picker_range)
    }

    pub fn selected_spans(&self) -> Vec<&Span> {
        match self.selected_range() {
            Some((lo, hi)) => self.spans_in_range(lo, hi),
            None => Vec::new(),
        }
    }

    /// Live selection regions for drawing, scaled units.
    pub fn selection_rects(&self) -> Vec<Rect> {
        selection_overlay(&self.selected_spans(), &self.params)
    }

    /// Replays a span range into a creation request, subject to the same
    /// minimum-size rule as a live commit.
    pub fn request_for_range(&self, start: u32, end: u32) -> Option<HighlightRequest> {
        self.checked_request(start.min(end), start.max(end))
    }

    fn checked_request(&self, lo: u32, hi: u32) -> Option<HighlightRequest> {
        let selected = self.spans_in_range(lo, hi);
        if selected.len() < self.params.min_selection_spans {
            return None;
        }

        let position_data = PositionData::new(compile_rects(&selected, self.scale, &self.params));
        let highlighted_text = compile_text(&selected, &self.params);
        let last = selected[selected.len() - 1];
        let anchor: Point = (last.x + last.w / 2.0, last.y - self.params.anchor_gap);

        debug!(
            page = self.page_number,
            rects = position_data.rects.len(),
            chars = highlighted_text.len(),
            "selection committed"
        );

        Some(HighlightRequest {
            page_number: self.page_number,
            position_data,
            highlighted_text,
            span_start: lo,
            span_end: hi,
            anchor,
        })
    }

    fn spans_in_range(&self, lo: u32, hi: u32) -> Vec<&Span> {
        self.spans
            .iter()
            .filter(|s| s.id >= lo && s.id <= hi)
            .collect()
    }
}

//! Word-level span reconstruction.
//!
//! Positioned text items carry no word boundaries: an item may hold a whole
//! phrase placed by a single transform. The builder tokenizes each item on
//! whitespace and distributes the item's total width across its words in
//! proportion to measured widths, yielding one interactive span per word
//! with contiguous x coverage. Span ids are dense and strictly increasing in
//! emission order; range selection depends on that.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::geom::{Matrix, mult_matrix, scale_x_of, scale_y_of};
use crate::measure::TextMeasure;
use crate::params::EngineParams;

use super::item::TextItem;

/// Sentinel for the line tracker, far outside any page.
const OUT_OF_RANGE_Y: f64 = -999.0;

/// Grid size for the vertical fallback grouping key.
const LINE_KEY_QUANTUM: f64 = 4.0;

/// A single word-level interactive text region, in scaled screen units.
///
/// Immutable once built; the owning page rebuilds its span list from
/// scratch on every render or scale change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Dense 0-based index, strictly increasing in emission order.
    pub id: u32,
    pub text: SmolStr,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub font_size: f64,
    /// Visual-line cluster id shared by all spans on the same line. Always
    /// assigned by the builder; foreign span collections may lack it and
    /// fall back to vertical quantization when grouped.
    #[serde(default)]
    pub line_index: Option<u32>,
}

impl Span {
    /// Right edge.
    pub fn x1(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge.
    pub fn y1(&self) -> f64 {
        self.y + self.h
    }
}

/// Single-pass visual-line clusterer.
///
/// A line boundary is detected as a transition: a new index is assigned
/// whenever the vertical position moves more than the tolerance away from
/// the previous distinct line. Items are taken in emission order and never
/// sorted, so two far-apart items sharing a y coordinate land on different
/// lines. That source-order dependency is accepted behavior, not a defect.
#[derive(Debug, Clone)]
pub struct LineTracker {
    last_y: f64,
    line_index: u32,
    tolerance: f64,
}

impl LineTracker {
    pub fn new(tolerance: f64) -> Self {
        Self {
            last_y: OUT_OF_RANGE_Y,
            line_index: 0,
            tolerance,
        }
    }

    /// Feeds the next item's vertical position, returning its line index.
    pub fn observe(&mut self, y: f64) -> u32 {
        if (y - self.last_y).abs() > self.tolerance {
            self.line_index += 1;
            self.last_y = y;
        }
        self.line_index
    }
}

/// On-screen bounds of a whole item, before tokenization.
struct ItemBounds {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

fn item_bounds<I: TextItem>(item: &I, tx: Matrix, params: &EngineParams) -> ItemBounds {
    let scale_x = scale_x_of(tx);
    // The transform's vertical scale is the canonical font size. The item's
    // self-reported height is unreliable: zero for some sources, a full
    // em-box for others.
    let font_size = scale_y_of(tx);

    let width = match item.width() {
        Some(w) if w > 0.0 => w * scale_x,
        _ => {
            item.text().chars().count().max(1) as f64 * font_size * params.fallback_width_ratio
        }
    };

    // The translation sits on the text baseline; shift up by the ascender
    // portion of the font size to reach the top edge.
    ItemBounds {
        x: tx.4,
        y: tx.5 - font_size * params.baseline_ratio,
        w: width,
        h: font_size,
    }
}

/// Splits text into alternating word and whitespace runs, keeping both so
/// inter-word gaps take their share of the item width.
fn split_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut prev_space = None;
    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        if let Some(p) = prev_space
            && p != space
        {
            runs.push(&text[start..i]);
            start = i;
        }
        prev_space = Some(space);
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }
    runs
}

/// Builds word-level spans from a page's positioned text items.
///
/// Blank items are skipped. Items without a usable declared width fall back
/// to a per-character approximation. Without a measurer the builder emits
/// one span per whole item — coarser selection granularity, never a
/// failure.
pub fn build_spans<I: TextItem>(
    items: &[I],
    page_transform: Matrix,
    scale: f64,
    measure: Option<&dyn TextMeasure>,
    params: &EngineParams,
) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut lines = LineTracker::new(params.line_tolerance);
    let mut next_id: u32 = 0;

    for item in items {
        if item.text().trim().is_empty() {
            continue;
        }
        let tx = mult_matrix(item.transform(), page_transform);
        let b = item_bounds(item, tx, params);
        let line_index = lines.observe(b.y);
        let font_size = b.h;

        let Some(measure) = measure else {
            spans.push(Span {
                id: next_id,
                text: item.text().into(),
                x: b.x,
                y: b.y,
                w: b.w,
                h: b.h,
                font_size,
                line_index: Some(line_index),
            });
            next_id += 1;
            continue;
        };

        let total_width = match item.width() {
            Some(w) if w > 0.0 => w * scale,
            _ => b.w,
        };

        let runs = split_runs(item.text());
        let measured: Vec<f64> = runs.iter().map(|r| measure.measure(r, font_size)).collect();
        let total_measured: f64 = measured.iter().sum();
        let factor = if total_measured > 0.0 {
            total_width / total_measured
        } else {
            1.0
        };

        let mut offset_x = 0.0;
        for (run, m) in runs.iter().zip(&measured) {
            let run_width = m * factor;
            if run.chars().all(char::is_whitespace) {
                offset_x += run_width;
                continue;
            }
            spans.push(Span {
                id: next_id,
                text: (*run).into(),
                x: b.x + offset_x,
                y: b.y,
                w: run_width,
                h: font_size,
                font_size,
                line_index: Some(line_index),
            });
            next_id += 1;
            offset_x += run_width;
        }
    }

    spans
}

/// Partitions spans into visual lines.
///
/// Spans carrying a line index group by it; spans without one fall back to
/// their vertical position snapped to a 4-unit grid. Groups come back in
/// ascending key order. Selection math and rectangle compilation both go
/// through here, so both use the same definition of a visual line.
pub fn group_by_line<'a, I>(spans: I) -> Vec<Vec<&'a Span>>
where
    I: IntoIterator<Item = &'a Span>,
{
    let mut lines: BTreeMap<i64, Vec<&Span>> = BTreeMap::new();
    for span in spans {
        let key = match span.line_index {
            Some(i) => i64::from(i),
            None => ((span.y / LINE_KEY_QUANTUM).round() * LINE_KEY_QUANTUM) as i64,
        };
        lines.entry(key).or_default().push(span);
    }
    lines.into_values().collect()
}

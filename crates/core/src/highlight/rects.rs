//! Per-line rectangle compilation.

use crate::geom::Rect;
use crate::layout::{Span, group_by_line};
use crate::params::EngineParams;

/// Padded per-line boxes for a span collection, in scaled screen units.
///
/// Per line: the union of the spans' horizontal extent, the median of their
/// vertical positions (one outlier span, e.g. a superscript, must not skew
/// the line's anchor), and the tallest span's height, padded for visual
/// comfort. Shared by live selection drawing and persisted compilation.
pub fn line_boxes(spans: &[&Span], params: &EngineParams) -> Vec<Rect> {
    group_by_line(spans.iter().copied())
        .into_iter()
        .map(|line| {
            let min_x = line.iter().map(|s| s.x).fold(f64::INFINITY, f64::min);
            let max_x = line.iter().map(|s| s.x1()).fold(f64::NEG_INFINITY, f64::max);
            let y = median_y(&line);
            let h = line.iter().map(|s| s.h).fold(f64::NEG_INFINITY, f64::max);

            Rect {
                x: min_x - params.rect_pad_x,
                y: y - params.rect_pad_top,
                width: max_x - min_x + 2.0 * params.rect_pad_x,
                height: h + params.rect_pad_top + params.rect_pad_bottom,
            }
        })
        .collect()
}

/// Compiles selected spans into one rectangle per visual line, in
/// document-native units.
///
/// Everything is divided by the current scale before returning — the
/// output never depends on the zoom it was created at, which is what lets
/// a highlight made at 130% render correctly at 50% and 300%.
pub fn compile_rects(spans: &[&Span], scale: f64, params: &EngineParams) -> Vec<Rect> {
    line_boxes(spans, params)
        .into_iter()
        .map(|r| r.to_native(scale))
        .collect()
}

fn median_y(line: &[&Span]) -> f64 {
    let mut ys: Vec<f64> = line.iter().map(|s| s.y).collect();
    ys.sort_by(f64::total_cmp);
    ys[ys.len() / 2]
}

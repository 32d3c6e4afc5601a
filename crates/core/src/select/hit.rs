//! Padded nearest-span hit testing.

use crate::layout::Span;
use crate::params::EngineParams;

/// Finds the span at a pointer position, with forgiving padding.
///
/// Vertical containment is tested with `hit_pad_y` slack; among vertically
/// containing spans, horizontal containment with `hit_pad_x` slack returns
/// immediately — spans do not horizontally overlap after construction, so
/// the first match is the only match. Failing that, the horizontally
/// nearest span within `hit_max_gap` wins, so a pointer just past a line
/// edge still lands on the line. Returns `None` when nothing qualifies.
///
/// Pure and allocation-free; this runs on every pointer move of a drag.
pub fn hit_test<'a>(spans: &'a [Span], x: f64, y: f64, params: &EngineParams) -> Option<&'a Span> {
    let mut best: Option<&Span> = None;
    let mut best_dist = f64::INFINITY;

    for span in spans {
        let in_y = y >= span.y - params.hit_pad_y && y <= span.y1() + params.hit_pad_y;
        if !in_y {
            continue;
        }
        let in_x = x >= span.x - params.hit_pad_x && x <= span.x1() + params.hit_pad_x;
        if in_x {
            return Some(span);
        }
        let dx = if x < span.x { span.x - x } else { x - span.x1() };
        if dx < best_dist && dx < params.hit_max_gap {
            best_dist = dx;
            best = Some(span);
        }
    }

    best
}

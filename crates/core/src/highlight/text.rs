//! Reading-order text compilation.

use itertools::Itertools;

use crate::layout::Span;
use crate::params::EngineParams;

/// Joins selected spans into the excerpt stored alongside a highlight.
///
/// Spans must be ordered by id. The source's own whitespace is unreliable
/// after per-word splitting, so spacing is inferred: a single space is
/// inserted at every line change and at every same-line gap wider than
/// `word_gap`. Tightly adjacent spans (a word split across items, a
/// hyphenated break) concatenate directly.
pub fn compile_text(spans: &[&Span], params: &EngineParams) -> String {
    let Some(first) = spans.first() else {
        return String::new();
    };

    let mut text = String::from(first.text.as_str());
    for (prev, cur) in spans.iter().tuple_windows() {
        let same_line = (cur.y - prev.y).abs() < params.same_line_eps;
        if !same_line || cur.x - prev.x1() > params.word_gap {
            text.push(' ');
        }
        text.push_str(&cur.text);
    }

    text.trim().to_string()
}

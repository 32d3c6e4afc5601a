//! Tests for span reconstruction: tokenization, width distribution, line
//! clustering, and the degraded whole-item mode.

use spanmark_core::geom::MATRIX_IDENTITY;
use spanmark_core::layout::{PageTextItem, build_spans};
use spanmark_core::measure::FixedTextMeasure;
use spanmark_core::params::EngineParams;

const EPS: f64 = 1e-9;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPS, "{a} != {b}");
}

#[test]
fn item_splits_into_one_span_per_word() {
    let items = vec![PageTextItem::new(
        "Net income",
        (12.0, 0.0, 0.0, 12.0, 10.0, 100.0),
        Some(60.0),
    )];
    let measure = FixedTextMeasure::new(0.5);
    let spans = build_spans(
        &items,
        MATRIX_IDENTITY,
        1.0,
        Some(&measure),
        &EngineParams::default(),
    );

    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].text, "Net");
    assert_eq!(spans[1].text, "income");
    assert_eq!(spans[0].id, 0);
    assert_eq!(spans[1].id, 1);

    // Item width 60 distributed over "Net"(3) + " "(1) + "income"(6) chars
    // at equal advances: 18 + 6 + 36.
    assert_close(spans[0].x, 10.0);
    assert_close(spans[0].w, 18.0);
    assert_close(spans[1].x, 34.0);
    assert_close(spans[1].w, 36.0);

    // Font size comes from the transform's vertical scale; the top edge
    // sits an ascender above the baseline.
    assert_close(spans[0].font_size, 12.0);
    assert_close(spans[0].h, 12.0);
    assert_close(spans[0].y, 100.0 - 12.0 * 0.85);
    assert_eq!(spans[0].line_index, Some(1));
    assert_eq!(spans[1].line_index, Some(1));
}

#[test]
fn no_measurer_degrades_to_whole_item_spans() {
    let items = vec![PageTextItem::new(
        "Net income",
        (12.0, 0.0, 0.0, 12.0, 10.0, 100.0),
        Some(60.0),
    )];
    let spans = build_spans(&items, MATRIX_IDENTITY, 1.0, None, &EngineParams::default());

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].text, "Net income");
    assert_close(spans[0].x, 10.0);
    // Declared width times the transform's horizontal scale.
    assert_close(spans[0].w, 60.0 * 12.0);
}

#[test]
fn missing_width_falls_back_to_char_count() {
    let items = vec![PageTextItem::new(
        "abc",
        (12.0, 0.0, 0.0, 12.0, 0.0, 50.0),
        None,
    )];
    let measure = FixedTextMeasure::new(0.5);
    let spans = build_spans(
        &items,
        MATRIX_IDENTITY,
        1.0,
        Some(&measure),
        &EngineParams::default(),
    );

    assert_eq!(spans.len(), 1);
    // 3 chars * font size 12 * 0.5
    assert_close(spans[0].w, 18.0);
}

#[test]
fn zero_width_is_treated_as_missing() {
    let items = vec![PageTextItem::new(
        "abc",
        (12.0, 0.0, 0.0, 12.0, 0.0, 50.0),
        Some(0.0),
    )];
    let spans = build_spans(&items, MATRIX_IDENTITY, 1.0, None, &EngineParams::default());
    assert_eq!(spans.len(), 1);
    assert_close(spans[0].w, 18.0);
}

#[test]
fn blank_items_are_skipped_and_ids_stay_dense() {
    let items = vec![
        PageTextItem::new("   ", (10.0, 0.0, 0.0, 10.0, 0.0, 100.0), Some(5.0)),
        PageTextItem::new("a b", (10.0, 0.0, 0.0, 10.0, 0.0, 100.0), Some(20.0)),
        PageTextItem::new("", (10.0, 0.0, 0.0, 10.0, 30.0, 100.0), None),
        PageTextItem::new("c", (10.0, 0.0, 0.0, 10.0, 40.0, 100.0), Some(10.0)),
    ];
    let measure = FixedTextMeasure::new(0.5);
    let spans = build_spans(
        &items,
        MATRIX_IDENTITY,
        1.0,
        Some(&measure),
        &EngineParams::default(),
    );

    let ids: Vec<u32> = spans.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    let words: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(words, vec!["a", "b", "c"]);
}

#[test]
fn nearby_baselines_share_a_line() {
    let items = vec![
        PageTextItem::new("one", (10.0, 0.0, 0.0, 10.0, 0.0, 100.0), Some(15.0)),
        PageTextItem::new("two", (10.0, 0.0, 0.0, 10.0, 40.0, 101.0), Some(15.0)),
        PageTextItem::new("three", (10.0, 0.0, 0.0, 10.0, 0.0, 120.0), Some(25.0)),
    ];
    let measure = FixedTextMeasure::new(0.5);
    let spans = build_spans(
        &items,
        MATRIX_IDENTITY,
        1.0,
        Some(&measure),
        &EngineParams::default(),
    );

    let lines: Vec<Option<u32>> = spans.iter().map(|s| s.line_index).collect();
    assert_eq!(lines, vec![Some(1), Some(1), Some(2)]);
}

#[test]
fn clustering_follows_emission_order_not_position() {
    // The same vertical position revisited after a jump starts a new line;
    // the clusterer never sorts.
    let items = vec![
        PageTextItem::new("top", (10.0, 0.0, 0.0, 10.0, 0.0, 100.0), Some(15.0)),
        PageTextItem::new("bottom", (10.0, 0.0, 0.0, 10.0, 0.0, 200.0), Some(30.0)),
        PageTextItem::new("top2", (10.0, 0.0, 0.0, 10.0, 40.0, 100.0), Some(20.0)),
    ];
    let measure = FixedTextMeasure::new(0.5);
    let spans = build_spans(
        &items,
        MATRIX_IDENTITY,
        1.0,
        Some(&measure),
        &EngineParams::default(),
    );

    let lines: Vec<Option<u32>> = spans.iter().map(|s| s.line_index).collect();
    assert_eq!(lines, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn rebuilding_from_the_same_items_is_deterministic() {
    let items = vec![
        PageTextItem::new("one two", (10.0, 0.0, 0.0, 10.0, 0.0, 100.0), Some(35.0)),
        PageTextItem::new("three", (10.0, 0.0, 0.0, 10.0, 0.0, 120.0), Some(25.0)),
        PageTextItem::new("four", (10.0, 0.0, 0.0, 10.0, 40.0, 119.0), Some(20.0)),
    ];
    let measure = FixedTextMeasure::new(0.5);
    let params = EngineParams::default();
    let first = build_spans(&items, MATRIX_IDENTITY, 1.0, Some(&measure), &params);
    let second = build_spans(&items, MATRIX_IDENTITY, 1.0, Some(&measure), &params);
    assert_eq!(first, second);
}

#[test]
fn page_transform_scales_geometry() {
    let items = vec![PageTextItem::new(
        "word",
        (12.0, 0.0, 0.0, 12.0, 10.0, 100.0),
        Some(20.0),
    )];
    let measure = FixedTextMeasure::new(0.5);
    let scale = 2.0;
    let page_transform = (scale, 0.0, 0.0, scale, 0.0, 0.0);
    let spans = build_spans(
        &items,
        page_transform,
        scale,
        Some(&measure),
        &EngineParams::default(),
    );

    assert_eq!(spans.len(), 1);
    assert_close(spans[0].font_size, 24.0);
    assert_close(spans[0].x, 20.0);
    assert_close(spans[0].y, 200.0 - 24.0 * 0.85);
    // Declared width times the requested scale.
    assert_close(spans[0].w, 40.0);
}

#[test]
fn width_distribution_respects_measured_proportions() {
    // Total width 100 over "ab"(2 chars) and "cdef"(4 chars) plus one
    // space: proportional shares 2/7, 1/7, 4/7.
    let items = vec![PageTextItem::new(
        "ab cdef",
        (10.0, 0.0, 0.0, 10.0, 0.0, 100.0),
        Some(100.0),
    )];
    let measure = FixedTextMeasure::new(0.5);
    let spans = build_spans(
        &items,
        MATRIX_IDENTITY,
        1.0,
        Some(&measure),
        &EngineParams::default(),
    );

    assert_eq!(spans.len(), 2);
    assert_close(spans[0].w, 100.0 * 2.0 / 7.0);
    assert_close(spans[1].w, 100.0 * 4.0 / 7.0);
    assert_close(spans[1].x, 100.0 * 3.0 / 7.0);
}

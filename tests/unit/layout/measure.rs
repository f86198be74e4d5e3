use super::*;
use crate::layout::config::MaxLines;

fn items(widths: &[u32], height: u32) -> Vec<SizePx> {
    widths.iter().map(|&w| SizePx::new(w, height)).collect()
}

fn slot(m: &FlowMeasure, idx: usize) -> ItemSlot {
    m.slots[idx].expect("item should be placed")
}

#[test]
fn three_items_wrap_after_second_with_spacing() {
    let cfg = FlowConfig::default().with_spacing(10, 0);
    let m = measure_flow(
        &items(&[50, 50, 50], 20),
        &cfg,
        MeasureSpec::exactly(120),
        MeasureSpec::unspecified(),
        Edges::default(),
    );

    assert_eq!(slot(&m, 0).origin, PointPx::new(0, 0));
    assert_eq!(slot(&m, 1).origin, PointPx::new(60, 0));
    assert_eq!(slot(&m, 2).origin, PointPx::new(0, 20));
    assert_eq!(slot(&m, 2).line, 1);
    assert_eq!(slot(&m, 2).position, 0);
    assert_eq!(m.lines.len(), 2);
    assert_eq!(m.lines[0].leftover, 10);
    assert_eq!(m.lines[1].leftover, 70);
    assert_eq!(m.content_width, 110);
    assert_eq!(m.content_height, 40);
    assert_eq!(m.measured, SizePx::new(120, 40));
}

#[test]
fn item_that_fits_only_without_spacing_is_placed_flush() {
    let cfg = FlowConfig::default().with_spacing(10, 0);
    let m = measure_flow(
        &items(&[50, 50, 10], 10),
        &cfg,
        MeasureSpec::exactly(120),
        MeasureSpec::unspecified(),
        Edges::default(),
    );

    assert_eq!(slot(&m, 2).origin, PointPx::new(110, 0));
    assert_eq!(slot(&m, 2).line, 0);
    assert_eq!(slot(&m, 2).position, 2);
    assert_eq!(m.lines.len(), 1);
    assert_eq!(m.lines[0].leftover, 0);
}

#[test]
fn exact_fit_with_spacing_stays_on_line() {
    let cfg = FlowConfig::default().with_spacing(10, 0);
    let m = measure_flow(
        &items(&[55, 55], 10),
        &cfg,
        MeasureSpec::exactly(120),
        MeasureSpec::unspecified(),
        Edges::default(),
    );
    assert_eq!(slot(&m, 1).origin, PointPx::new(65, 0));
    assert_eq!(m.lines[0].leftover, 0);
}

#[test]
fn unbounded_width_keeps_everything_on_one_line() {
    let cfg = FlowConfig::default().with_spacing(5, 7);
    let m = measure_flow(
        &items(&[400, 900, 30], 12),
        &cfg,
        MeasureSpec::unspecified(),
        MeasureSpec::unspecified(),
        Edges::default(),
    );

    assert_eq!(m.lines.len(), 1);
    assert_eq!(m.lines[0].leftover, 0);
    assert_eq!(slot(&m, 1).origin, PointPx::new(405, 0));
    assert_eq!(slot(&m, 2).origin, PointPx::new(1310, 0));
    assert!(m.slots.iter().all(|s| s.is_some_and(|s| s.line == 0)));
    assert_eq!(m.measured, SizePx::new(1340, 12));
}

#[test]
fn line_limit_drops_items_after_last_line() {
    let cfg = FlowConfig::default().with_max_lines(MaxLines::new(1).unwrap());
    let m = measure_flow(
        &items(&[200; 5], 10),
        &cfg,
        MeasureSpec::exactly(100),
        MeasureSpec::unspecified(),
        Edges::default(),
    );

    assert_eq!(slot(&m, 0).origin, PointPx::new(0, 0));
    assert_eq!(slot(&m, 0).line, 0);
    assert!(m.slots[1..].iter().all(Option::is_none));
    assert!(m.is_truncated());
    assert_eq!(m.placed_count(), 1);
    assert_eq!(m.lines.len(), 1);
    assert_eq!(m.lines[0].leftover, -100);
    assert_eq!(m.lines[0].items(), 0..1);
    assert_eq!(m.measured, SizePx::new(100, 10));
}

#[test]
fn oversized_items_each_get_their_own_line() {
    let cfg = FlowConfig::default().with_spacing(0, 3);
    let m = measure_flow(
        &items(&[200, 200, 200], 10),
        &cfg,
        MeasureSpec::exactly(100),
        MeasureSpec::unspecified(),
        Edges::default(),
    );

    assert_eq!(m.lines.len(), 3);
    for (i, line) in m.lines.iter().enumerate() {
        assert_eq!(line.items(), i..i + 1);
        assert_eq!(line.leftover, -100);
    }
    assert_eq!(slot(&m, 1).origin, PointPx::new(0, 13));
    assert_eq!(slot(&m, 2).origin, PointPx::new(0, 26));
}

#[test]
fn next_line_starts_below_tallest_item_so_far() {
    let cfg = FlowConfig::default().with_spacing(0, 4);
    let sizes = vec![SizePx::new(60, 10), SizePx::new(60, 30), SizePx::new(60, 5)];
    let m = measure_flow(
        &sizes,
        &cfg,
        MeasureSpec::exactly(100),
        MeasureSpec::exactly(100),
        Edges::default(),
    );

    assert_eq!(slot(&m, 1).origin, PointPx::new(0, 14));
    assert_eq!(slot(&m, 2).origin, PointPx::new(0, 48));
    assert_eq!(m.content_height, 53);
    assert_eq!(m.leftover_vertical, 47);
}

#[test]
fn vertical_leftover_only_for_bounded_height_and_never_negative() {
    let cfg = FlowConfig::default();
    let sizes = items(&[10, 10], 80);

    let m = measure_flow(
        &sizes,
        &cfg,
        MeasureSpec::exactly(100),
        MeasureSpec::at_most(100),
        Edges::default(),
    );
    assert_eq!(m.leftover_vertical, 20);
    assert_eq!(m.measured.height, 80);

    let m = measure_flow(
        &sizes,
        &cfg,
        MeasureSpec::exactly(100),
        MeasureSpec::unspecified(),
        Edges::default(),
    );
    assert_eq!(m.leftover_vertical, 0);

    let m = measure_flow(
        &sizes,
        &cfg,
        MeasureSpec::exactly(100),
        MeasureSpec::exactly(50),
        Edges::default(),
    );
    assert_eq!(m.leftover_vertical, 0);
    assert_eq!(m.measured.height, 50);
}

#[test]
fn padding_shrinks_content_box_and_grows_reported_size() {
    let padding = Edges {
        left: 10,
        top: 5,
        right: 10,
        bottom: 5,
    };
    let m = measure_flow(
        &items(&[40, 40, 40], 20),
        &FlowConfig::default(),
        MeasureSpec::at_most(110),
        MeasureSpec::at_most(200),
        padding,
    );

    // 90px of content width: two items per line.
    assert_eq!(m.lines.len(), 2);
    assert_eq!(m.lines[0].leftover, 10);
    assert_eq!(m.lines[1].leftover, 50);
    assert_eq!(m.padding, padding);
    assert_eq!(m.measured, SizePx::new(100, 50));
    assert_eq!(m.leftover_vertical, 190 - 40);
}

#[test]
fn empty_sequence_produces_no_lines() {
    let padding = Edges::uniform(4);
    let m = measure_flow(
        &[],
        &FlowConfig::default(),
        MeasureSpec::at_most(100),
        MeasureSpec::unspecified(),
        padding,
    );
    assert!(m.lines.is_empty());
    assert!(m.slots.is_empty());
    assert!(!m.is_truncated());
    assert_eq!(m.measured, SizePx::new(8, 8));
}

#[test]
fn positions_within_line_ascend_in_source_order() {
    let cfg = FlowConfig::default().with_spacing(4, 4);
    let m = measure_flow(
        &items(&[30, 30, 30, 30, 30, 30, 30], 10),
        &cfg,
        MeasureSpec::exactly(100),
        MeasureSpec::unspecified(),
        Edges::default(),
    );

    for line in &m.lines {
        for (pos, idx) in line.items().enumerate() {
            let s = slot(&m, idx);
            assert_eq!(s.position, pos);
        }
    }
    assert_eq!(m.lines.iter().map(|l| l.item_count).sum::<usize>(), 7);
}

#[test]
fn truncated_walk_reports_no_more_lines_than_the_limit() {
    let cfg = FlowConfig::default().with_max_lines(MaxLines::new(2).unwrap());
    let m = measure_flow(
        &items(&[60, 60, 60], 10),
        &cfg,
        MeasureSpec::exactly(100),
        MeasureSpec::unspecified(),
        Edges::default(),
    );
    assert!(m.is_truncated());
    assert_eq!(m.lines.len(), 2);
    assert_eq!(m.lines[1].items(), 1..2);
    assert!(m.slots[2].is_none());
}

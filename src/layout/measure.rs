//! Pass 1: walk items in order, assign relative positions and decide line breaks.
//!
//! All coordinates produced here are relative to the content box (padding excluded). Pass 2
//! ([`crate::place_flow`]) turns them into absolute positions.

use std::ops::Range;

use crate::{
    foundation::core::{Edges, PointPx, SizePx},
    foundation::math::{to_extent, to_px},
    layout::config::FlowConfig,
    layout::spec::{MeasureSpec, resolve_size},
};

/// Relative placement of one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemSlot {
    /// Position inside the content box.
    pub origin: PointPx,
    /// Line the item landed on.
    pub line: usize,
    /// Index of the item within its line.
    pub position: usize,
}

/// One closed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineInfo {
    /// Content width minus used width. Negative when a lone item is wider than the line.
    pub leftover: i32,
    /// Index of the first item on the line.
    pub first_item: usize,
    /// Number of items on the line.
    pub item_count: usize,
}

impl LineInfo {
    /// Item indices on this line.
    pub fn items(&self) -> Range<usize> {
        self.first_item..self.first_item + self.item_count
    }
}

/// Everything Pass 1 learns about one arrangement.
///
/// A fresh value is produced by every call to [`measure_flow`]; nothing is carried over
/// from earlier passes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowMeasure {
    /// Per item, in source order. `None` marks an item dropped by the line limit.
    pub slots: Vec<Option<ItemSlot>>,
    /// Intrinsic item sizes the pass ran with.
    pub sizes: Vec<SizePx>,
    /// Lines in order; indices are contiguous from 0.
    ///
    /// When the line limit cuts the walk short, the last entry is the final closed line, so
    /// `lines.len()` never exceeds the limit.
    pub lines: Vec<LineInfo>,
    /// Widest line, padding excluded.
    pub content_width: u32,
    /// Bottom of the lowest item, padding excluded.
    pub content_height: u32,
    /// Unused height when the height is bounded, otherwise 0. Never negative.
    pub leftover_vertical: i32,
    /// Padding the pass ran with.
    pub padding: Edges,
    /// Container size reported back to the host, padding included and reconciled.
    pub measured: SizePx,
}

impl FlowMeasure {
    /// Number of lines produced.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of items that received a slot.
    pub fn placed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether the line limit cut the walk short.
    pub fn is_truncated(&self) -> bool {
        self.placed_count() < self.slots.len()
    }
}

/// Run Pass 1 over `sizes`.
///
/// Wrapping only happens when `width` is bounded; with an unspecified width every item goes on
/// line 0. Spacing is added before an item only when item plus spacing still fits (`<=`), while
/// the wrap itself triggers only on a strict overflow (`>`), so an item that fits without the
/// spacing is placed flush against its neighbour.
#[tracing::instrument(skip(sizes, config), fields(items = sizes.len()))]
pub fn measure_flow(
    sizes: &[SizePx],
    config: &FlowConfig,
    width: MeasureSpec,
    height: MeasureSpec,
    padding: Edges,
) -> FlowMeasure {
    let content_w = width.content_space(padding.horizontal());
    let content_h = height.content_space(padding.vertical());
    let h_spacing = to_px(config.child_horizontal_spacing);
    let v_spacing = to_px(config.child_vertical_spacing);

    let mut slots = vec![None; sizes.len()];
    let mut lines = Vec::new();

    let mut next_x = 0i32;
    let mut next_y = 0i32;
    let mut position = 0usize;
    let mut line = 0usize;
    let mut line_start = 0usize;
    let mut used_w = 0i32;
    let mut used_h = 0i32;
    let mut truncated = false;

    for (idx, size) in sizes.iter().enumerate() {
        let w = to_px(size.width);
        let h = to_px(size.height);

        if position > 0 && content_w.fits(next_x.saturating_add(h_spacing).saturating_add(w)) {
            next_x = next_x.saturating_add(h_spacing);
        }

        // A lone item wider than the line stays where it is.
        if position > 0 && content_w.overflows(next_x.saturating_add(w)) {
            lines.push(LineInfo {
                leftover: content_w.leftover(next_x),
                first_item: line_start,
                item_count: position,
            });
            line += 1;

            if config.max_line.excludes(line) {
                tracing::debug!(
                    dropped = sizes.len() - idx,
                    max_line = ?config.max_line.limit(),
                    "line limit reached"
                );
                truncated = true;
                break;
            }

            position = 0;
            next_x = 0;
            next_y = used_h.saturating_add(v_spacing);
            line_start = idx;
        }

        slots[idx] = Some(ItemSlot {
            origin: PointPx::new(next_x, next_y),
            line,
            position,
        });

        next_x = next_x.saturating_add(w);
        used_h = used_h.max(next_y.saturating_add(h));
        used_w = used_w.max(next_x);
        position += 1;
    }

    if !truncated && position > 0 {
        lines.push(LineInfo {
            leftover: content_w.leftover(next_x),
            first_item: line_start,
            item_count: position,
        });
    }

    let leftover_vertical = if height.is_fixed() {
        content_h.leftover(used_h).max(0)
    } else {
        0
    };

    let content_width = to_extent(used_w);
    let content_height = to_extent(used_h);
    let measured = SizePx::new(
        resolve_size(content_width.saturating_add(padding.horizontal()), width),
        resolve_size(content_height.saturating_add(padding.vertical()), height),
    );

    tracing::trace!(lines = lines.len(), content_width, content_height, "flow measured");

    FlowMeasure {
        slots,
        sizes: sizes.to_vec(),
        lines,
        content_width,
        content_height,
        leftover_vertical,
        padding,
        measured,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;

//! Pass 2: turn relative slots into absolute bounds using the configured gravity.

use crate::{
    foundation::core::{BoundsPx, PointPx},
    foundation::math::to_px,
    layout::config::FlowConfig,
    layout::measure::FlowMeasure,
};

/// Absolute bounds per item, keyed by item index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowPlacement {
    bounds: Vec<Option<BoundsPx>>,
}

impl FlowPlacement {
    /// Bounds of item `idx`, or `None` when it was dropped (or out of range).
    pub fn get(&self, idx: usize) -> Option<BoundsPx> {
        self.bounds.get(idx).copied().flatten()
    }

    /// Placed items as `(index, bounds)` in source order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, BoundsPx)> + '_ {
        self.bounds
            .iter()
            .enumerate()
            .filter_map(|(idx, b)| b.map(|b| (idx, b)))
    }

    /// Number of items, placed or not.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Whether there are no items at all.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Raw per-item view.
    pub fn as_slice(&self) -> &[Option<BoundsPx>] {
        &self.bounds
    }
}

/// Run Pass 2 over a finished Pass-1 result.
///
/// Horizontal gravity is applied to each line's own leftover width; vertical gravity is applied
/// once to the container's leftover height, so all lines move together. Dropped items stay
/// `None`.
#[tracing::instrument(skip_all, fields(items = measure.slots.len(), lines = measure.lines.len()))]
pub fn place_flow(measure: &FlowMeasure, config: &FlowConfig) -> FlowPlacement {
    let gravity = config.gravity;
    let dy = to_px(measure.padding.top)
        .saturating_add(gravity.vertical.offset(measure.leftover_vertical));
    let left = to_px(measure.padding.left);

    let bounds = measure
        .slots
        .iter()
        .zip(&measure.sizes)
        .map(|(slot, size)| {
            let slot = slot.as_ref()?;
            let line = measure.lines.get(slot.line)?;
            let dx = left.saturating_add(gravity.horizontal.offset(line.leftover));
            let origin = PointPx::new(
                slot.origin.x.saturating_add(dx),
                slot.origin.y.saturating_add(dy),
            );
            Some(BoundsPx::from_origin_size(origin, *size))
        })
        .collect();

    FlowPlacement { bounds }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/place.rs"]
mod tests;

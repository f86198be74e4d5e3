use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::{
    foundation::core::{BoundsPx, Edges, SizePx},
    foundation::error::{FlowError, FlowResult},
    layout::config::FlowConfig,
    layout::measure::{LineInfo, measure_flow},
    layout::place::place_flow,
    layout::spec::MeasureSpec,
};

/// A complete flow problem: container constraints, settings and item sizes.
///
/// This is the JSON-facing form used by the `flowwrap layout` command; hosts embedding the
/// library normally drive [`crate::FlowLayout`] directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayoutRequest {
    /// Width constraint of the container.
    #[serde(default)]
    pub width: MeasureSpec,
    /// Height constraint of the container.
    #[serde(default)]
    pub height: MeasureSpec,
    /// Container padding.
    #[serde(default)]
    pub padding: Edges,
    /// Spacing, gravity and line limit.
    #[serde(default)]
    pub config: FlowConfig,
    /// Intrinsic item sizes in source order.
    #[serde(default)]
    pub items: Vec<SizePx>,
}

/// Final placement of one item in a [`LayoutResponse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlacedItem {
    /// Line index.
    pub line: usize,
    /// Index within the line.
    pub position: usize,
    /// Absolute bounds, padding included.
    pub bounds: BoundsPx,
}

/// Solved flow problem.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayoutResponse {
    /// Container size after reconciliation with the constraints.
    pub size: SizePx,
    /// Content width, padding excluded.
    pub content_width: u32,
    /// Content height, padding excluded.
    pub content_height: u32,
    /// Unused height distributed by vertical gravity.
    pub leftover_vertical: i32,
    /// Lines in order.
    pub lines: Vec<LineInfo>,
    /// Per item; `null` for items dropped by the line limit.
    pub items: Vec<Option<PlacedItem>>,
}

impl LayoutRequest {
    /// Parse a request from a JSON reader.
    pub fn from_reader<R: Read>(r: R) -> FlowResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FlowError::serde(format!("parse layout request JSON: {e}")))
    }

    /// Parse a request from a JSON string.
    pub fn from_json_str(s: &str) -> FlowResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FlowError::serde(format!("parse layout request JSON: {e}")))
    }

    /// Parse a request from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlowError::Other(anyhow::anyhow!(
                "open layout request '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Run both passes.
    pub fn solve(&self) -> LayoutResponse {
        let measure = measure_flow(
            &self.items,
            &self.config,
            self.width,
            self.height,
            self.padding,
        );
        let placement = place_flow(&measure, &self.config);

        let items = measure
            .slots
            .iter()
            .zip(placement.as_slice())
            .map(|(slot, bounds)| {
                let (slot, bounds) = (slot.as_ref()?, (*bounds)?);
                Some(PlacedItem {
                    line: slot.line,
                    position: slot.position,
                    bounds,
                })
            })
            .collect();

        LayoutResponse {
            size: measure.measured,
            content_width: measure.content_width,
            content_height: measure.content_height,
            leftover_vertical: measure.leftover_vertical,
            lines: measure.lines,
            items,
        }
    }
}

impl LayoutResponse {
    /// Number of items that were placed.
    pub fn placed_count(&self) -> usize {
        self.items.iter().flatten().count()
    }

    /// Pretty JSON rendering.
    pub fn to_json_pretty(&self) -> FlowResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FlowError::serde(format!("write layout response JSON: {e}")))
    }

    /// Write pretty JSON to `w`.
    pub fn write_json<W: Write>(&self, w: W) -> FlowResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| FlowError::serde(format!("write layout response JSON: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/request/json.rs"]
mod tests;

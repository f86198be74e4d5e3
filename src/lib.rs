//! flowwrap arranges fixed-size items left to right, wrapping onto new lines when the
//! container's width runs out.
//!
//! # Passes
//!
//! 1. **Measure & wrap** ([`measure_flow`]): walk the items in order, assign each a position
//!    relative to the content box, decide where lines break and how much width each line leaves
//!    unused. Produces a [`FlowMeasure`].
//! 2. **Place** ([`place_flow`]): shift every line by its horizontal gravity offset and the whole
//!    block by the vertical gravity offset, producing absolute [`BoundsPx`] per item.
//!
//! Hosts with their own view tree implement [`Measurable`] and [`Placeable`] on their children
//! and drive a [`FlowLayout`], which runs both passes in the measure/layout order a UI toolkit
//! expects. [`LayoutRequest`] describes the same problem as JSON.
//!
//! Both passes are pure: the same input always produces the same output, and nothing from a
//! previous measurement survives into the next one.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod demo;
mod foundation;
mod layout;
mod request;

pub use demo::labels::{
    MAX_LABEL_LEN, MAX_LABELS, SAMPLE_TEXT, TextItem, TextMetrics, random_labels,
};
pub use demo::scene::{DemoPanel, DemoScene};
pub use foundation::core::{BoundsPx, Edges, Point, PointPx, Rect, SizePx};
pub use foundation::error::{FlowError, FlowResult};
pub use foundation::math::Rng64;
pub use layout::config::{Align, FlowConfig, Gravity, MaxLines};
pub use layout::container::{FlowLayout, Measurable, Placeable};
pub use layout::measure::{FlowMeasure, ItemSlot, LineInfo, measure_flow};
pub use layout::place::{FlowPlacement, place_flow};
pub use layout::spec::{
    AvailableSpace, MeasureMode, MeasureSpec, child_measure_spec, resolve_size,
};
pub use request::json::{LayoutRequest, LayoutResponse, PlacedItem};

use crate::{
    foundation::core::{BoundsPx, Edges, SizePx},
    foundation::error::{FlowError, FlowResult},
    layout::config::FlowConfig,
    layout::measure::{FlowMeasure, measure_flow},
    layout::place::{FlowPlacement, place_flow},
    layout::spec::{MeasureSpec, child_measure_spec},
};

/// A child that can report its intrinsic size under a parent's constraints.
pub trait Measurable {
    /// Desired size for the given child constraints.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> SizePx;
}

/// A child that accepts its final bounding box.
pub trait Placeable {
    /// Apply the absolute bounds computed by the container.
    fn place(&mut self, bounds: BoundsPx);
}

impl Measurable for SizePx {
    fn measure(&self, _width: MeasureSpec, _height: MeasureSpec) -> SizePx {
        *self
    }
}

impl<T: Measurable + ?Sized> Measurable for &T {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> SizePx {
        (**self).measure(width, height)
    }
}

impl<T: Measurable + ?Sized> Measurable for Box<T> {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> SizePx {
        (**self).measure(width, height)
    }
}

/// Flow container driven by the host's measure/layout lifecycle.
///
/// [`FlowLayout::measure`] runs the wrap pass and keeps its result until the next measure;
/// [`FlowLayout::layout`] runs the placement pass over that result and hands bounds to the
/// children.
#[derive(Clone, Debug, Default)]
pub struct FlowLayout {
    config: FlowConfig,
    padding: Edges,
    last: Option<FlowMeasure>,
}

impl FlowLayout {
    /// Container with the given settings.
    pub fn new(config: FlowConfig, padding: Edges) -> Self {
        Self {
            config,
            padding,
            last: None,
        }
    }

    /// Current settings.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Current padding.
    pub fn padding(&self) -> Edges {
        self.padding
    }

    /// Replace the settings. The previous measurement no longer applies.
    pub fn set_config(&mut self, config: FlowConfig) {
        self.config = config;
        self.last = None;
    }

    /// Replace the padding. The previous measurement no longer applies.
    pub fn set_padding(&mut self, padding: Edges) {
        self.padding = padding;
        self.last = None;
    }

    /// Result of the most recent [`FlowLayout::measure`], if still valid.
    pub fn last_measure(&self) -> Option<&FlowMeasure> {
        self.last.as_ref()
    }

    /// Measure every child and run the wrap pass. Returns the container size for the host.
    pub fn measure<M: Measurable>(
        &mut self,
        children: &[M],
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> SizePx {
        let child_w = child_measure_spec(width, self.padding.horizontal());
        let child_h = child_measure_spec(height, self.padding.vertical());
        let sizes: Vec<SizePx> = children
            .iter()
            .map(|c| c.measure(child_w, child_h))
            .collect();

        let measure = measure_flow(&sizes, &self.config, width, height, self.padding);
        let size = measure.measured;
        self.last = Some(measure);
        size
    }

    /// Absolute bounds for the last measurement without touching any children.
    pub fn placement(&self) -> FlowResult<FlowPlacement> {
        let measure = self
            .last
            .as_ref()
            .ok_or_else(|| FlowError::layout("layout requested before measure"))?;
        Ok(place_flow(measure, &self.config))
    }

    /// Place every child that survived the line limit. Returns how many were placed.
    pub fn layout<P: Placeable>(&self, children: &mut [P]) -> FlowResult<usize> {
        let placement = self.placement()?;
        if placement.len() != children.len() {
            return Err(FlowError::layout(format!(
                "measured {} children but asked to lay out {}",
                placement.len(),
                children.len()
            )));
        }

        let mut placed = 0usize;
        for (idx, bounds) in placement.iter() {
            children[idx].place(bounds);
            placed += 1;
        }
        Ok(placed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/container.rs"]
mod tests;

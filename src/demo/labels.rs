use crate::{
    foundation::core::{BoundsPx, Edges, SizePx},
    foundation::math::Rng64,
    layout::container::{Measurable, Placeable},
    layout::spec::MeasureSpec,
};

/// Source text the demo cuts its labels from.
pub const SAMPLE_TEXT: &str = "A flow layout places its children from left to right and starts \
a new line whenever the next child would not fit in the space that is left, which makes it a \
good fit for tags, chips and other short labels of varying length.";

/// Upper bound on generated labels per container.
pub const MAX_LABELS: usize = 10;

/// Upper bound on characters per label.
pub const MAX_LABEL_LEN: usize = 30;

/// Cut `1..=max_count` labels of `1..=max_len` characters out of [`SAMPLE_TEXT`].
///
/// Labels are consecutive slices; the cursor wraps back to the start of the text when it runs
/// off the end. Surrounding whitespace is trimmed and blank slices are skipped.
pub fn random_labels(rng: &mut Rng64, max_count: usize, max_len: usize) -> Vec<String> {
    let chars: Vec<char> = SAMPLE_TEXT.chars().collect();
    let count = rng.next_below(max_count.max(1)) + 1;

    let mut labels = Vec::with_capacity(count);
    let mut start = 0usize;
    for _ in 0..count {
        let len = rng.next_below(max_len.max(1)) + 1;
        if start >= chars.len() {
            start = 0;
        }
        let end = (start + len).min(chars.len());
        let label: String = chars[start..end].iter().collect();
        start = end;

        let label = label.trim();
        if !label.is_empty() {
            labels.push(label.to_string());
        }
    }
    labels
}

/// Fixed-advance text metrics used to size demo chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextMetrics {
    /// Horizontal advance per character.
    pub glyph_advance: u32,
    /// Height of one text line.
    pub line_height: u32,
    /// Space between the chip edge and its text.
    pub inset: Edges,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            glyph_advance: 7,
            line_height: 14,
            inset: Edges {
                left: 6,
                top: 4,
                right: 6,
                bottom: 4,
            },
        }
    }
}

/// A single-line text chip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextItem {
    /// Text shown in the chip.
    pub label: String,
    /// Sizing rules.
    pub metrics: TextMetrics,
    /// Bounds from the last layout, if the chip was placed.
    pub bounds: Option<BoundsPx>,
}

impl TextItem {
    /// Chip for `label` with the given metrics.
    pub fn new(label: impl Into<String>, metrics: TextMetrics) -> Self {
        Self {
            label: label.into(),
            metrics,
            bounds: None,
        }
    }

    /// Size of the chip; labels never wrap, so constraints are not consulted.
    pub fn intrinsic_size(&self) -> SizePx {
        let chars = u32::try_from(self.label.chars().count()).unwrap_or(u32::MAX);
        SizePx::new(
            chars
                .saturating_mul(self.metrics.glyph_advance)
                .saturating_add(self.metrics.inset.horizontal()),
            self.metrics
                .line_height
                .saturating_add(self.metrics.inset.vertical()),
        )
    }
}

impl Measurable for TextItem {
    fn measure(&self, _width: MeasureSpec, _height: MeasureSpec) -> SizePx {
        self.intrinsic_size()
    }
}

impl Placeable for TextItem {
    fn place(&mut self, bounds: BoundsPx) {
        self.bounds = Some(bounds);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/labels.rs"]
mod tests;

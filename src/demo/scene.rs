use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::{
    demo::labels::{MAX_LABEL_LEN, MAX_LABELS, TextItem, TextMetrics, random_labels},
    foundation::core::{BoundsPx, Edges, SizePx},
    foundation::error::{FlowError, FlowResult},
    foundation::math::{Rng64, to_px},
    layout::config::{Align, FlowConfig, Gravity},
    layout::container::FlowLayout,
    layout::spec::MeasureSpec,
};

const PANEL_GAP: u32 = 16;
const SINGLE_LINE_HEIGHT: u32 = 48;

const BACKGROUND: Rgba<u8> = Rgba([250, 250, 250, 255]);
const PANEL: Rgba<u8> = Rgba([226, 232, 240, 255]);
const CHIP: Rgba<u8> = Rgba([59, 130, 246, 255]);
const CHIP_EDGE: Rgba<u8> = Rgba([30, 64, 175, 255]);
const GLYPH: Rgba<u8> = Rgba([239, 246, 255, 255]);

/// One flow container filled with text chips, already measured and laid out.
#[derive(Clone, Debug)]
pub struct DemoPanel {
    /// The container.
    pub flow: FlowLayout,
    /// Chips in insertion order.
    pub items: Vec<TextItem>,
    /// Size reported by the container.
    pub size: SizePx,
}

impl DemoPanel {
    fn build(
        mut flow: FlowLayout,
        labels: Vec<String>,
        metrics: TextMetrics,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> FlowResult<Self> {
        let mut items: Vec<TextItem> = labels
            .into_iter()
            .map(|label| TextItem::new(label, metrics))
            .collect();
        let size = flow.measure(&items, width, height);
        flow.layout(&mut items)?;
        Ok(Self { flow, items, size })
    }
}

/// Two containers fed with random labels: one wraps at a fixed width, the other has
/// unbounded width and keeps everything on a single line.
#[derive(Clone, Debug)]
pub struct DemoScene {
    /// Fixed-width container, lines centered.
    pub wrapping: DemoPanel,
    /// Unbounded-width container, vertically centered in a fixed-height strip.
    pub single_line: DemoPanel,
}

impl DemoScene {
    /// Build both panels from `seed`; the wrapping panel is `width` pixels wide.
    #[tracing::instrument]
    pub fn generate(seed: u64, width: u32) -> FlowResult<Self> {
        let mut rng = Rng64::new(seed);
        let metrics = TextMetrics::default();

        let wrapping = DemoPanel::build(
            FlowLayout::new(
                FlowConfig::default()
                    .with_spacing(8, 8)
                    .with_gravity(Gravity::new(Align::Center, Align::Start)),
                Edges::uniform(8),
            ),
            random_labels(&mut rng, MAX_LABELS, MAX_LABEL_LEN),
            metrics,
            MeasureSpec::exactly(width),
            MeasureSpec::unspecified(),
        )?;

        let single_line = DemoPanel::build(
            FlowLayout::new(
                FlowConfig::default()
                    .with_spacing(8, 0)
                    .with_gravity(Gravity::new(Align::Start, Align::Center)),
                Edges::uniform(8),
            ),
            random_labels(&mut rng, MAX_LABELS, MAX_LABEL_LEN),
            metrics,
            MeasureSpec::unspecified(),
            MeasureSpec::exactly(SINGLE_LINE_HEIGHT),
        )?;

        tracing::debug!(
            wrapping_items = wrapping.items.len(),
            single_line_items = single_line.items.len(),
            "demo scene generated"
        );
        Ok(Self {
            wrapping,
            single_line,
        })
    }

    /// Pixel size of [`DemoScene::render`]'s output.
    pub fn canvas_size(&self) -> SizePx {
        SizePx::new(
            self.wrapping.size.width.max(self.single_line.size.width).max(1),
            self.wrapping
                .size
                .height
                .saturating_add(PANEL_GAP)
                .saturating_add(self.single_line.size.height),
        )
    }

    /// Paint both panels, wrapping panel on top.
    pub fn render(&self) -> RgbaImage {
        let size = self.canvas_size();
        let mut img = RgbaImage::from_pixel(size.width, size.height, BACKGROUND);
        paint_panel(&mut img, &self.wrapping, 0);
        paint_panel(
            &mut img,
            &self.single_line,
            to_px(self.wrapping.size.height.saturating_add(PANEL_GAP)),
        );
        img
    }

    /// Render and write a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> FlowResult<()> {
        let path = path.as_ref();
        self.render()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| {
                FlowError::Other(anyhow::anyhow!("write png '{}': {e}", path.display()))
            })
    }
}

fn paint_panel(img: &mut RgbaImage, panel: &DemoPanel, top: i32) {
    fill(
        img,
        BoundsPx {
            x: 0,
            y: top,
            width: panel.size.width,
            height: panel.size.height,
        },
        PANEL,
    );

    for item in &panel.items {
        let Some(b) = item.bounds else {
            continue;
        };
        let b = BoundsPx { y: b.y + top, ..b };
        fill(img, b, CHIP);
        outline(img, b, CHIP_EDGE);

        // One bar per visible character stands in for the glyph.
        let m = item.metrics;
        let advance = to_px(m.glyph_advance);
        for (i, ch) in item.label.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let glyph = BoundsPx {
                x: b.x + to_px(m.inset.left) + (i as i32) * advance + 1,
                y: b.y + to_px(m.inset.top) + 3,
                width: m.glyph_advance.saturating_sub(2),
                height: m.line_height.saturating_sub(6),
            };
            fill(img, glyph, GLYPH);
        }
    }
}

fn fill(img: &mut RgbaImage, b: BoundsPx, color: Rgba<u8>) {
    let x0 = b.x.max(0);
    let y0 = b.y.max(0);
    let x1 = b.right().min(to_px(img.width()));
    let y1 = b.bottom().min(to_px(img.height()));
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

fn outline(img: &mut RgbaImage, b: BoundsPx, color: Rgba<u8>) {
    let row = |y| BoundsPx {
        x: b.x,
        y,
        width: b.width,
        height: 1,
    };
    let col = |x| BoundsPx {
        x,
        y: b.y,
        width: 1,
        height: b.height,
    };
    fill(img, row(b.y), color);
    fill(img, row(b.bottom() - 1), color);
    fill(img, col(b.x), color);
    fill(img, col(b.right() - 1), color);
}

#[cfg(test)]
#[path = "../../tests/unit/demo/scene.rs"]
mod tests;

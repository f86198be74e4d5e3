use crate::foundation::math::to_px;

pub use kurbo::{Point, Rect};

/// Intrinsic size of an item in whole pixels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SizePx {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SizePx {
    /// Zero-sized extent.
    pub const ZERO: Self = Self::new(0, 0);

    /// Build a size from width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Integer position; may be negative when a lone item overflows its line and is centered.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PointPx {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl PointPx {
    /// Build a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<PointPx> for Point {
    fn from(p: PointPx) -> Self {
        Point::new(f64::from(p.x), f64::from(p.y))
    }
}

/// Final bounding box handed to a placed item: `[x, y, x + width, y + height]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BoundsPx {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl BoundsPx {
    /// Build bounds from an origin and a size.
    pub fn from_origin_size(origin: PointPx, size: SizePx) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Top-left corner.
    pub fn origin(self) -> PointPx {
        PointPx::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(self) -> SizePx {
        SizePx::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    pub fn right(self) -> i32 {
        self.x.saturating_add(to_px(self.width))
    }

    /// Bottom edge (exclusive).
    pub fn bottom(self) -> i32 {
        self.y.saturating_add(to_px(self.height))
    }

    /// Whether the two boxes share any area.
    pub fn intersects(self, other: BoundsPx) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Floating-point rectangle for renderers built on kurbo.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.right()),
            f64::from(self.bottom()),
        )
    }
}

impl From<BoundsPx> for Rect {
    fn from(b: BoundsPx) -> Self {
        b.to_rect()
    }
}

/// Padding edges in pixels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Edges {
    /// Left padding.
    #[serde(default)]
    pub left: u32,
    /// Top padding.
    #[serde(default)]
    pub top: u32,
    /// Right padding.
    #[serde(default)]
    pub right: u32,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: u32,
}

impl Edges {
    /// Same padding on every side.
    pub const fn uniform(v: u32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    /// Left plus right.
    pub fn horizontal(self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom.
    pub fn vertical(self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

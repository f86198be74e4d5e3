//! Parent-to-child size constraints and the reconciliation rules that go with them.

use crate::foundation::math::to_px;

/// How strictly a [`MeasureSpec`] size binds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureMode {
    /// No bound; the size field is advisory only.
    #[default]
    Unspecified,
    /// The container must take exactly this size.
    Exactly,
    /// The container may take up to this size.
    AtMost,
}

/// One axis of a measurement constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MeasureSpec {
    /// Constraint mode.
    #[serde(default)]
    pub mode: MeasureMode,
    /// Constraint size in pixels.
    #[serde(default)]
    pub size: u32,
}

impl MeasureSpec {
    /// Exact size constraint.
    pub const fn exactly(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    /// Upper-bound constraint.
    pub const fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// No constraint.
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }

    /// Whether this axis is bounded (exact or at-most).
    pub fn is_fixed(self) -> bool {
        self.mode != MeasureMode::Unspecified
    }

    /// Space left for content once `padding` is taken off a bounded axis.
    pub fn content_space(self, padding: u32) -> AvailableSpace {
        match self.mode {
            MeasureMode::Unspecified => AvailableSpace::Unbounded,
            MeasureMode::Exactly | MeasureMode::AtMost => {
                AvailableSpace::Definite(to_px(self.size.saturating_sub(padding)))
            }
        }
    }
}

/// Content-box extent along one axis during a flow pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvailableSpace {
    /// A known number of pixels.
    Definite(i32),
    /// No bound; nothing can overflow.
    Unbounded,
}

impl AvailableSpace {
    /// Whether `extent` pixels fit (inclusive).
    pub fn fits(self, extent: i32) -> bool {
        match self {
            AvailableSpace::Definite(limit) => extent <= limit,
            AvailableSpace::Unbounded => true,
        }
    }

    /// Whether `extent` pixels overflow (strict).
    pub fn overflows(self, extent: i32) -> bool {
        !self.fits(extent)
    }

    /// Signed remainder after `used` pixels; unbounded space has nothing to distribute.
    pub fn leftover(self, used: i32) -> i32 {
        match self {
            AvailableSpace::Definite(limit) => limit.saturating_sub(used),
            AvailableSpace::Unbounded => 0,
        }
    }
}

/// Reconcile a desired size with the constraint it was measured against.
pub fn resolve_size(size: u32, spec: MeasureSpec) -> u32 {
    match spec.mode {
        MeasureMode::Exactly => spec.size,
        MeasureMode::AtMost => size.min(spec.size),
        MeasureMode::Unspecified => size,
    }
}

/// Constraint handed to a wrap-content child of a container measured with `parent`.
pub fn child_measure_spec(parent: MeasureSpec, padding: u32) -> MeasureSpec {
    let size = parent.size.saturating_sub(padding);
    match parent.mode {
        MeasureMode::Exactly | MeasureMode::AtMost => MeasureSpec::at_most(size),
        MeasureMode::Unspecified => MeasureSpec {
            mode: MeasureMode::Unspecified,
            size,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/spec.rs"]
mod tests;

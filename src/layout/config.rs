//! Flow container configuration: spacing, line limit and gravity.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::foundation::error::{FlowError, FlowResult};

/// Distribution rule for leftover space along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Keep items at the leading edge.
    #[default]
    Start,
    /// Split leftover space evenly (truncating toward zero).
    Center,
    /// Push items to the trailing edge.
    End,
}

impl Align {
    /// Offset contributed by `leftover` pixels under this alignment.
    pub fn offset(self, leftover: i32) -> i32 {
        match self {
            Align::Start => 0,
            Align::Center => leftover / 2,
            Align::End => leftover,
        }
    }
}

/// Horizontal (per line) and vertical (whole container) alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gravity {
    /// Applied to each line's leftover width.
    pub horizontal: Align,
    /// Applied once to the container's leftover height.
    pub vertical: Align,
}

impl Gravity {
    /// Build a gravity from its two axes.
    pub const fn new(horizontal: Align, vertical: Align) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Gravity {
    /// `center_horizontal`: lines are centered, the block sits at the top.
    fn default() -> Self {
        Self::new(Align::Center, Align::Start)
    }
}

impl FromStr for Gravity {
    type Err = FlowError;

    fn from_str(s: &str) -> FlowResult<Self> {
        let mut horizontal = None;
        let mut vertical = None;

        fn set(slot: &mut Option<Align>, value: Align, axis: &str, src: &str) -> FlowResult<()> {
            match *slot {
                Some(prev) if prev != value => Err(FlowError::config(format!(
                    "conflicting {axis} gravity in '{src}'"
                ))),
                _ => {
                    *slot = Some(value);
                    Ok(())
                }
            }
        }

        for token in s.split('|').map(str::trim).filter(|t| !t.is_empty()) {
            match token {
                "left" | "start" => set(&mut horizontal, Align::Start, "horizontal", s)?,
                "right" | "end" => set(&mut horizontal, Align::End, "horizontal", s)?,
                "center_horizontal" => set(&mut horizontal, Align::Center, "horizontal", s)?,
                "top" => set(&mut vertical, Align::Start, "vertical", s)?,
                "bottom" => set(&mut vertical, Align::End, "vertical", s)?,
                "center_vertical" => set(&mut vertical, Align::Center, "vertical", s)?,
                "center" => {
                    set(&mut horizontal, Align::Center, "horizontal", s)?;
                    set(&mut vertical, Align::Center, "vertical", s)?;
                }
                other => {
                    return Err(FlowError::config(format!(
                        "unknown gravity token '{other}'"
                    )));
                }
            }
        }

        Ok(Self::new(
            horizontal.unwrap_or_default(),
            vertical.unwrap_or_default(),
        ))
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.horizontal == Align::Center && self.vertical == Align::Center {
            return f.write_str("center");
        }
        let h = match self.horizontal {
            Align::Start => "left",
            Align::Center => "center_horizontal",
            Align::End => "right",
        };
        let v = match self.vertical {
            Align::Start => "top",
            Align::Center => "center_vertical",
            Align::End => "bottom",
        };
        write!(f, "{h}|{v}")
    }
}

impl TryFrom<String> for Gravity {
    type Error = FlowError;

    fn try_from(value: String) -> FlowResult<Self> {
        value.parse()
    }
}

impl From<Gravity> for String {
    fn from(value: Gravity) -> Self {
        value.to_string()
    }
}

/// Upper bound on the number of lines; items past it are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MaxLines(Option<NonZeroU32>);

impl MaxLines {
    /// No limit.
    pub const UNLIMITED: Self = Self(None);

    /// Limit to `n` lines; `n` must be positive.
    pub fn new(n: u32) -> FlowResult<Self> {
        NonZeroU32::new(n)
            .map(|n| Self(Some(n)))
            .ok_or_else(|| FlowError::config("maxLine must be > 0"))
    }

    /// Configured limit, if any.
    pub fn limit(self) -> Option<u32> {
        self.0.map(NonZeroU32::get)
    }

    /// Whether a line with index `line` would exceed the limit.
    pub fn excludes(self, line: usize) -> bool {
        self.0.is_some_and(|n| line >= n.get() as usize)
    }
}

impl TryFrom<i64> for MaxLines {
    type Error = FlowError;

    fn try_from(value: i64) -> FlowResult<Self> {
        match value {
            -1 => Ok(Self::UNLIMITED),
            v if v > 0 => {
                let n = u32::try_from(v)
                    .map_err(|_| FlowError::config(format!("maxLine {v} is out of range")))?;
                Self::new(n)
            }
            v => Err(FlowError::config(format!(
                "maxLine must be > 0 or -1 (unlimited), got {v}"
            ))),
        }
    }
}

impl From<MaxLines> for i64 {
    fn from(value: MaxLines) -> Self {
        value.limit().map_or(-1, i64::from)
    }
}

/// Flow container settings. Immutable for the duration of one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowConfig {
    /// Gap between neighbouring items on a line.
    #[serde(default)]
    pub child_horizontal_spacing: u32,
    /// Gap between lines.
    #[serde(default)]
    pub child_vertical_spacing: u32,
    /// Leftover-space distribution.
    #[serde(default)]
    pub gravity: Gravity,
    /// Line limit.
    #[serde(default)]
    pub max_line: MaxLines,
}

impl FlowConfig {
    /// Set both spacings.
    pub fn with_spacing(mut self, horizontal: u32, vertical: u32) -> Self {
        self.child_horizontal_spacing = horizontal;
        self.child_vertical_spacing = vertical;
        self
    }

    /// Set the gravity.
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the line limit.
    pub fn with_max_lines(mut self, max_line: MaxLines) -> Self {
        self.max_line = max_line;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;

//! Demo content for eyeballing the flow arrangement: random text chips in two containers.

pub(crate) mod labels;
pub(crate) mod scene;

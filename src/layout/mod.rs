//! Wrapping flow arrangement: a measure/wrap pass followed by a placement pass.

pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod measure;
pub(crate) mod place;
pub(crate) mod spec;

/// Convenience result type used across flowwrap.
pub type FlowResult<T> = Result<T, FlowError>;

/// Top-level error taxonomy used by the configuration, container and request APIs.
///
/// The flow passes themselves are total; errors only come from the surfaces around them.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// Invalid configuration value (gravity token, line limit, ...).
    #[error("config error: {0}")]
    Config(String),

    /// Container used out of lifecycle order.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlowError {
    /// Build a [`FlowError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FlowError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`FlowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across wavyglow.
pub type GlowResult<T> = Result<T, GlowError>;

/// Top-level error taxonomy. Geometry never fails; rendering and configuration can.
#[derive(thiserror::Error, Debug)]
pub enum GlowError {
    /// Invalid caller-provided values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or compositing layers.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while loading or checking a glow configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlowError {
    /// Build a [`GlowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlowError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GlowError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`GlowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

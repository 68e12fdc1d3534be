/// Convenience result type used across Ocula.
pub type OculaResult<T> = Result<T, OculaError>;

/// Top-level error taxonomy for the fallible edges of the engine.
///
/// The per-frame motion path never returns errors; these cover configuration,
/// asset preparation and rasterization.
#[derive(thiserror::Error, Debug)]
pub enum OculaError {
    /// Invalid caller-provided data (tables, sizes, palettes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Image or SVG data that could not be prepared.
    #[error("asset error: {0}")]
    Asset(String),

    /// Failures while rasterizing a display list.
    #[error("render error: {0}")]
    Render(String),

    /// Session configuration that could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OculaError {
    /// Build a [`OculaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`OculaError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`OculaError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`OculaError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

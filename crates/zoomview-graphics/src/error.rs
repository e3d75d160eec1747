use thiserror::Error;

/// Invalid dimensions handed to [`crate::ViewportGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("{what} must not be negative, got {value}")]
    NegativeDimension { what: &'static str, value: f32 },
    #[error("{what} must be finite, got {value}")]
    NonFiniteDimension { what: &'static str, value: f32 },
}

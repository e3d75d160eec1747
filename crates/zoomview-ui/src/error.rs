use thiserror::Error;
use zoomview_graphics::GeometryError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("invalid scale range: min {min}, max {max}")]
    InvalidScaleRange { min: f32, max: f32 },
    #[error("surface reports an invalid image size {width}x{height}")]
    InvalidImageSize { width: f32, height: f32 },
    #[error("surface reports an invalid starting scale {scale}")]
    InvalidStartingScale { scale: f32 },
}

//! Pure math/data for zoomview
//!
//! This crate contains the geometry primitives, polar vectors and viewport
//! boundary calculation used by the gesture engine.

mod boundary;
mod error;
mod geometry;
mod vector;

pub use boundary::*;
pub use error::*;
pub use geometry::*;
pub use vector::*;

pub mod prelude {
    pub use crate::boundary::{BoundaryRect, ViewportGeometry};
    pub use crate::error::GeometryError;
    pub use crate::geometry::{distance, midpoint, Point, Rect, Size};
    pub use crate::vector::PolarVector;
}

//! Gesture-driven pan and zoom for an image surface.
//!
//! The [`GestureImageController`] consumes [`TouchEvent`]s and
//! [`GestureSignal`]s and keeps the [`Transform`] of its [`RenderSurface`]
//! inside the boundary allowed at the current scale.

mod config;
mod controller;
mod error;
mod listener;
mod surface;

pub use config::ZoomConfig;
pub use controller::GestureImageController;
pub use error::ControllerError;
pub use listener::GestureImageListener;
pub use surface::{RenderSurface, Transform};

pub use zoomview_animation::{FlingConfig, FlingDecay, FlingStep};
pub use zoomview_core::FrameClock;
pub use zoomview_foundation::{GestureInput, GestureSignal, TouchEvent};
pub use zoomview_graphics::{BoundaryRect, Point, Rect, Size, ViewportGeometry};

pub mod prelude {
    pub use crate::config::ZoomConfig;
    pub use crate::controller::GestureImageController;
    pub use crate::listener::GestureImageListener;
    pub use crate::surface::{RenderSurface, Transform};
    pub use zoomview_core::FrameClock;
    pub use zoomview_foundation::{GestureSignal, TouchEvent};
    pub use zoomview_graphics::{Point, Size};
}

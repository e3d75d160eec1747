//! Core runtime pieces for zoomview: the frame clock that drives animations.

mod frame_clock;

pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};

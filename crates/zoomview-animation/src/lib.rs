//! Fling physics and the frame-driven fling animation for zoomview.

mod decay_spec;
mod fling;

pub use decay_spec::{
    FlingConfig, FlingDecay, FlingState, FlingStep, DEFAULT_DECAY_FACTOR, DEFAULT_STOP_THRESHOLD,
    NOMINAL_FRAME_NANOS,
};
pub use fling::FlingAnimation;

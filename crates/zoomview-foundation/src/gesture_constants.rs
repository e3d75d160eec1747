//! Shared gesture constants.
//!
//! Scale limits are multipliers of the image's intrinsic size. Velocities
//! and thresholds are in logical pixels per second.

/// Smallest scale a pinch may reach unless configured otherwise.
pub const DEFAULT_MIN_SCALE: f32 = 0.75;

/// Largest scale a pinch may reach unless configured otherwise.
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Per-frame velocity multiplier of a fling.
pub const DEFAULT_FLING_DECAY_FACTOR: f32 = zoomview_animation::DEFAULT_DECAY_FACTOR;

/// Velocity under which a fling comes to rest.
pub const DEFAULT_FLING_STOP_THRESHOLD: f32 = zoomview_animation::DEFAULT_STOP_THRESHOLD;

/// Two scales closer than this are treated as equal by double tap.
pub const SCALE_EPSILON: f32 = 1e-4;

/// Nominal frame interval, ~60 FPS.
pub const FRAME_INTERVAL_NANOS: u64 = zoomview_animation::NOMINAL_FRAME_NANOS;

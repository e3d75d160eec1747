//! Decay physics for fling animations.
//!
//! A fling starts with the release velocity and loses speed every tick until
//! the velocity magnitude drops under the stop threshold. The physics here is
//! independent of any clock; [`crate::FlingAnimation`] feeds it frame deltas.

use zoomview_graphics::Point;

/// Per-tick velocity multiplier used by the default exponential decay.
pub const DEFAULT_DECAY_FACTOR: f32 = 0.95;

/// Velocity magnitude (px/sec) under which a fling stops.
pub const DEFAULT_STOP_THRESHOLD: f32 = 10.0;

/// Frame interval assumed for the first tick of a fling, ~60 FPS.
pub const NOMINAL_FRAME_NANOS: u64 = 16_666_667;

/// Lower bound for the stop threshold so exponential decay always ends.
const MIN_STOP_THRESHOLD: f32 = 0.01;

/// How velocity shrinks from one tick to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlingDecay {
    /// Multiply the velocity by `factor` every tick. `factor` must lie in
    /// `[0, 1)`; anything else falls back to [`DEFAULT_DECAY_FACTOR`].
    Exponential { factor: f32 },
    /// Take `step` px/sec off the velocity magnitude every tick, keeping the
    /// direction and stopping at zero. A zero or non-finite step stops the
    /// fling on the first tick.
    Linear { step: f32 },
}

impl Default for FlingDecay {
    fn default() -> Self {
        FlingDecay::Exponential {
            factor: DEFAULT_DECAY_FACTOR,
        }
    }
}

impl FlingDecay {
    /// Velocity after one tick of decay.
    pub fn apply(&self, velocity: Point) -> Point {
        match *self {
            FlingDecay::Exponential { factor } => {
                let factor = if factor.is_finite() && (0.0..1.0).contains(&factor) {
                    factor
                } else {
                    DEFAULT_DECAY_FACTOR
                };
                velocity * factor
            }
            FlingDecay::Linear { step } => {
                let magnitude = velocity.length();
                let step = step.abs();
                if magnitude == 0.0 || !step.is_finite() || step == 0.0 {
                    return Point::ZERO;
                }
                let remaining = (magnitude - step).max(0.0);
                velocity * (remaining / magnitude)
            }
        }
    }
}

/// Tunables for a fling run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingConfig {
    pub decay: FlingDecay,
    pub stop_threshold: f32,
    pub nominal_frame_nanos: u64,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            decay: FlingDecay::default(),
            stop_threshold: DEFAULT_STOP_THRESHOLD,
            nominal_frame_nanos: NOMINAL_FRAME_NANOS,
        }
    }
}

impl FlingConfig {
    pub fn with_decay(mut self, decay: FlingDecay) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_stop_threshold(mut self, stop_threshold: f32) -> Self {
        self.stop_threshold = stop_threshold;
        self
    }

    pub fn with_nominal_frame_nanos(mut self, nanos: u64) -> Self {
        self.nominal_frame_nanos = nanos;
        self
    }

    /// Stop threshold actually used, never below a small positive floor.
    pub fn effective_stop_threshold(&self) -> f32 {
        if self.stop_threshold.is_finite() && self.stop_threshold > MIN_STOP_THRESHOLD {
            self.stop_threshold
        } else {
            MIN_STOP_THRESHOLD
        }
    }

    /// Whether a release velocity is worth animating at all.
    pub fn should_start(&self, velocity: Point) -> bool {
        velocity.is_finite() && velocity.length() >= self.effective_stop_threshold()
    }
}

/// Output of one fling tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingStep {
    /// Displacement produced by this tick.
    pub delta: Point,
    /// Displacement accumulated since the fling started.
    pub total: Point,
    /// Velocity after this tick's decay.
    pub velocity: Point,
    /// 1-based tick index.
    pub tick: u32,
    /// True when this is the last tick of the run.
    pub finished: bool,
}

/// Running fling physics.
#[derive(Debug, Clone, PartialEq)]
pub struct FlingState {
    config: FlingConfig,
    velocity: Point,
    total: Point,
    ticks: u32,
}

impl FlingState {
    pub fn new(velocity: Point, config: FlingConfig) -> Self {
        Self {
            config,
            velocity,
            total: Point::ZERO,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &FlingConfig {
        &self.config
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn total(&self) -> Point {
        self.total
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Moves by `velocity * dt_seconds`, then decays the velocity.
    pub fn step(&mut self, dt_seconds: f32) -> FlingStep {
        let dt = if dt_seconds.is_finite() && dt_seconds > 0.0 {
            dt_seconds
        } else {
            0.0
        };
        let delta = self.velocity * dt;
        self.total += delta;
        self.velocity = self.config.decay.apply(self.velocity);
        self.ticks += 1;

        let finished =
            !self.velocity.is_finite() || self.velocity.length() < self.config.effective_stop_threshold();

        FlingStep {
            delta,
            total: self.total,
            velocity: self.velocity,
            tick: self.ticks,
            finished,
        }
    }
}

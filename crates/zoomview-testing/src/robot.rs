//! Scripted gesture driver
//!
//! [`GestureRobot`] wraps a controller and its frame clock, turns high level
//! gestures (drag, pinch, fling) into the raw event sequences a host would
//! deliver, and advances frames at a fixed interval.
//!
//! # Example
//!
//! ```
//! use zoomview_testing::{GestureRobot, RecordingSurface};
//! use zoomview_graphics::Size;
//!
//! let viewport = Size::new(1000.0, 1000.0);
//! let surface = RecordingSurface::centered(Size::new(2000.0, 2000.0), viewport);
//! let mut robot = GestureRobot::new(surface.clone(), viewport).unwrap();
//!
//! robot.drag((500.0, 500.0), (600.0, 500.0), 4);
//! assert_eq!(surface.transform().x, 600.0);
//! ```

use zoomview_core::FrameClock;
use zoomview_foundation::FRAME_INTERVAL_NANOS;
use zoomview_graphics::{Point, Size};
use zoomview_ui::{
    ControllerError, GestureImageController, GestureSignal, RenderSurface, TouchEvent, Transform,
    ZoomConfig,
};

/// Upper bound on frames pumped by [`GestureRobot::run_until_idle`].
pub const MAX_IDLE_FRAMES: usize = 10_000;

pub struct GestureRobot<S: RenderSurface + 'static> {
    controller: GestureImageController<S>,
    frame_clock: FrameClock,
    frame_time_nanos: u64,
    frame_interval_nanos: u64,
}

impl<S: RenderSurface + 'static> GestureRobot<S> {
    /// Robot with the default configuration.
    pub fn new(surface: S, viewport: Size) -> Result<Self, ControllerError> {
        Self::with_config(surface, viewport, ZoomConfig::default())
    }

    pub fn with_config(
        surface: S,
        viewport: Size,
        config: ZoomConfig,
    ) -> Result<Self, ControllerError> {
        let frame_clock = FrameClock::new();
        let controller = GestureImageController::new(surface, viewport, frame_clock.clone(), config)?;
        Ok(Self {
            controller,
            frame_clock,
            frame_time_nanos: 0,
            frame_interval_nanos: FRAME_INTERVAL_NANOS,
        })
    }

    /// Changes the time between frames produced by [`GestureRobot::advance_frame`].
    pub fn set_frame_interval(&mut self, nanos: u64) {
        self.frame_interval_nanos = nanos;
    }

    pub fn controller(&self) -> &GestureImageController<S> {
        &self.controller
    }

    pub fn frame_clock(&self) -> &FrameClock {
        &self.frame_clock
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn transform(&self) -> Transform {
        self.controller.transform()
    }

    pub fn down(&mut self, x: f32, y: f32) -> &mut Self {
        self.controller.on_touch_event(&TouchEvent::down(x, y));
        self
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.controller.on_touch_event(&TouchEvent::move_to(x, y));
        self
    }

    pub fn move_pointers(&mut self, first: Point, second: Point) -> &mut Self {
        self.controller
            .on_touch_event(&TouchEvent::pinch(first, second));
        self
    }

    pub fn up(&mut self) -> &mut Self {
        self.controller.on_touch_event(&TouchEvent::Up);
        self
    }

    /// Down at `from`, `steps` evenly spaced moves ending at `to`, then up.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) -> &mut Self {
        self.down(from.0, from.1);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_to(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        }
        self.up()
    }

    /// Horizontal two-finger pinch around `center`, spreading the fingers
    /// from `from_distance` to `to_distance` in `steps` moves. Leaves the
    /// fingers down; call [`GestureRobot::up`] to release.
    pub fn pinch(
        &mut self,
        center: Point,
        from_distance: f32,
        to_distance: f32,
        steps: usize,
    ) -> &mut Self {
        let half = from_distance / 2.0;
        self.down(center.x - half, center.y);
        self.spread(center, from_distance);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.spread(center, from_distance + (to_distance - from_distance) * t);
        }
        self
    }

    fn spread(&mut self, center: Point, distance: f32) {
        let half = distance / 2.0;
        self.move_pointers(
            Point::new(center.x - half, center.y),
            Point::new(center.x + half, center.y),
        );
    }

    pub fn tap(&mut self, x: f32, y: f32) -> &mut Self {
        self.down(x, y).up();
        self.controller
            .on_gesture_signal(&GestureSignal::SingleTapConfirmed(Point::new(x, y)));
        self
    }

    pub fn double_tap(&mut self, x: f32, y: f32) -> &mut Self {
        self.down(x, y).up();
        self.controller
            .on_gesture_signal(&GestureSignal::DoubleTap(Point::new(x, y)));
        self
    }

    /// Sends a single-pointer fling signal. Returns whether it started.
    pub fn fling(&mut self, vx: f32, vy: f32) -> bool {
        self.controller
            .on_gesture_signal(&GestureSignal::fling(vx, vy))
    }

    /// Drains one frame. Returns how many callbacks ran.
    pub fn advance_frame(&mut self) -> usize {
        self.frame_time_nanos += self.frame_interval_nanos;
        self.frame_clock.drain_frame_callbacks(self.frame_time_nanos)
    }

    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.advance_frame();
        }
    }

    /// Pumps frames until nothing is scheduled. Returns the frame count.
    ///
    /// Panics after [`MAX_IDLE_FRAMES`] frames.
    pub fn run_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.frame_clock.has_frame_callbacks() {
            assert!(
                frames < MAX_IDLE_FRAMES,
                "frame loop still busy after {MAX_IDLE_FRAMES} frames"
            );
            self.advance_frame();
            frames += 1;
        }
        frames
    }
}

//! Fling animation driver.
//!
//! Steps [`FlingState`] once per frame using the frame clock and hands every
//! step to a move callback supplied by the caller.

use crate::decay_spec::{FlingConfig, FlingState, FlingStep};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use zoomview_core::{FrameCallbackRegistration, FrameClock};
use zoomview_graphics::Point;

/// State of the active run.
struct FlingRun {
    /// Identifies the run so stale callbacks from a replaced run do nothing.
    run_id: u64,
    physics: FlingState,
    /// Frame time of the previous tick, `None` before the first tick.
    last_frame_time_nanos: Option<u64>,
    /// Pending frame callback. Dropping it cancels the next tick.
    registration: Option<FrameCallbackRegistration>,
}

/// Schedules the next tick of run `run_id`.
///
/// The callback holds the state weakly, so dropping the owning
/// [`FlingAnimation`] ends the loop.
fn schedule_next_frame<F>(
    state: &Rc<RefCell<Option<FlingRun>>>,
    frame_clock: FrameClock,
    run_id: u64,
    on_move: F,
) where
    F: Fn(FlingStep) -> bool + 'static,
{
    let weak_state: Weak<RefCell<Option<FlingRun>>> = Rc::downgrade(state);
    let frame_clock_for_closure = frame_clock.clone();

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let Some(state) = weak_state.upgrade() else {
            return;
        };

        let step = {
            let mut guard = state.borrow_mut();
            let Some(run) = guard.as_mut() else {
                return;
            };
            if run.run_id != run_id {
                return;
            }

            // this callback has fired, its registration is spent
            run.registration = None;

            let dt_nanos = match run.last_frame_time_nanos {
                Some(previous) => frame_time_nanos.saturating_sub(previous),
                None => run.physics.config().nominal_frame_nanos,
            };
            run.last_frame_time_nanos = Some(frame_time_nanos);

            let step = run.physics.step(dt_nanos as f32 / 1_000_000_000.0);
            if step.finished {
                guard.take();
            }
            step
        };

        let keep_going = on_move(step);

        if step.finished {
            log::debug!(
                "fling finished after {} ticks, total ({}, {})",
                step.tick,
                step.total.x,
                step.total.y
            );
            return;
        }

        // on_move may have cancelled or replaced this run
        let still_current = state
            .borrow()
            .as_ref()
            .is_some_and(|run| run.run_id == run_id);
        if still_current && !keep_going {
            state.borrow_mut().take();
            log::debug!("fling stopped by its move callback after {} ticks", step.tick);
            return;
        }
        if still_current {
            schedule_next_frame(&state, frame_clock_for_closure.clone(), run_id, on_move);
        }
    });

    if let Some(run) = state.borrow_mut().as_mut() {
        if run.run_id == run_id {
            run.registration = Some(registration);
        }
    }
}

/// Drives inertial motion after a fling.
///
/// At most one run is active at a time. Starting a new run or calling
/// [`FlingAnimation::cancel`] drops the pending frame callback of the
/// previous one, so a cancelled run never ticks again.
pub struct FlingAnimation {
    state: Rc<RefCell<Option<FlingRun>>>,
    frame_clock: FrameClock,
    config: Cell<FlingConfig>,
    next_run_id: Cell<u64>,
}

impl FlingAnimation {
    pub fn new(frame_clock: FrameClock, config: FlingConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            frame_clock,
            config: Cell::new(config),
            next_run_id: Cell::new(1),
        }
    }

    pub fn config(&self) -> FlingConfig {
        self.config.get()
    }

    /// Replaces the configuration used by later runs.
    pub fn set_config(&self, config: FlingConfig) {
        self.config.set(config);
    }

    /// Starts a run with `velocity` in px/sec.
    ///
    /// Any previous run is cancelled first. Returns `false` without
    /// scheduling anything when the velocity is not finite or is slower than
    /// the stop threshold. `on_move` is called once per frame with the step
    /// produced by that frame; the last step has `finished` set. Returning
    /// `false` from `on_move` ends the run early, e.g. when the motion hit a
    /// bound.
    pub fn start<F>(&self, velocity: Point, on_move: F) -> bool
    where
        F: Fn(FlingStep) -> bool + 'static,
    {
        self.cancel();

        let config = self.config.get();
        if !velocity.is_finite() {
            log::warn!(
                "ignoring fling with non-finite velocity ({}, {})",
                velocity.x,
                velocity.y
            );
            return false;
        }
        if !config.should_start(velocity) {
            log::debug!(
                "fling velocity {} below threshold {}, not starting",
                velocity.length(),
                config.effective_stop_threshold()
            );
            return false;
        }

        let run_id = self.next_run_id.get();
        self.next_run_id.set(run_id.wrapping_add(1));

        *self.state.borrow_mut() = Some(FlingRun {
            run_id,
            physics: FlingState::new(velocity, config),
            last_frame_time_nanos: None,
            registration: None,
        });
        log::debug!("fling started with velocity ({}, {})", velocity.x, velocity.y);

        schedule_next_frame(&self.state, self.frame_clock.clone(), run_id, on_move);
        true
    }

    /// Stops the active run. Returns `true` if one was running.
    pub fn cancel(&self) -> bool {
        let run = self.state.borrow_mut().take();
        match run {
            Some(run) => {
                log::debug!("fling cancelled after {} ticks", run.physics.ticks());
                // dropping the run drops its registration
                drop(run);
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// Current velocity of the active run.
    pub fn velocity(&self) -> Option<Point> {
        self.state.borrow().as_ref().map(|run| run.physics.velocity())
    }
}

#[cfg(test)]
#[path = "tests/fling_tests.rs"]
mod tests;

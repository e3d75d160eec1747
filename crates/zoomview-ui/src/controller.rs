//! Gesture state machine.
//!
//! [`GestureImageController`] turns touch events and recognizer signals into
//! a bounded transform on its [`RenderSurface`]. Drag, pinch, double tap and
//! fling all funnel into the same commit path: compute the full transform,
//! clamp it to the boundary, write it to the surface, then notify the
//! listener once the controller state is no longer borrowed.

use crate::config::{is_positive_scale, ZoomConfig};
use crate::error::ControllerError;
use crate::listener::GestureImageListener;
use crate::surface::{RenderSurface, Transform};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use zoomview_animation::{FlingAnimation, FlingConfig, FlingStep};
use zoomview_core::FrameClock;
use zoomview_foundation::{
    classify, ClassifierContext, GestureInput, GestureIntent, GestureSignal, TouchEvent,
    SCALE_EPSILON,
};
use zoomview_graphics::{
    distance, midpoint, BoundaryRect, Point, PolarVector, Rect, Size, ViewportGeometry,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Notification {
    Scale(f32),
    Position(Point),
    Touch(Point),
    TouchDrawable(Point),
    TouchOutsideDrawable(Point),
}

type Notifications = SmallVec<[Notification; 2]>;

fn dispatch(listener: Option<Rc<dyn GestureImageListener>>, notifications: Notifications) {
    let Some(listener) = listener else {
        return;
    };
    for notification in notifications {
        match notification {
            Notification::Scale(scale) => listener.on_scale(scale),
            Notification::Position(p) => listener.on_position(p.x, p.y),
            Notification::Touch(p) => listener.on_touch(p.x, p.y),
            Notification::TouchDrawable(p) => listener.on_touch_drawable(p.x, p.y),
            Notification::TouchOutsideDrawable(p) => listener.on_touch_outside_drawable(p.x, p.y),
        }
    }
}

/// Two-finger tracking. `scale_vector` is `None` until a pinch has a
/// non-zero initial distance.
#[derive(Clone, Copy, Debug, Default)]
struct PinchState {
    initial_distance: f32,
    last_distance: f32,
    scale_vector: Option<PolarVector>,
}

struct GestureState<S> {
    surface: S,
    geometry: ViewportGeometry,
    boundary: BoundaryRect,

    min_scale: f32,
    max_scale: f32,
    double_tap_scale: Option<f32>,
    starting_scale: f32,
    current_scale: f32,
    last_scale: f32,

    current: Point,
    last: Point,
    next: Point,
    pinch: PinchState,

    touched: bool,
    multi_touch: bool,

    listener: Option<Weak<dyn GestureImageListener>>,
}

impl<S: RenderSurface> GestureState<S> {
    fn listener(&self) -> Option<Rc<dyn GestureImageListener>> {
        self.listener.as_ref().and_then(Weak::upgrade)
    }

    fn transform(&self) -> Transform {
        Transform::new(self.current_scale, self.next.x, self.next.y)
    }

    fn classifier_context(&self) -> ClassifierContext {
        ClassifierContext {
            touched: self.touched,
            multi_touch: self.multi_touch,
            pinch_active: self.pinch.scale_vector.is_some(),
            drawable: self.screen_drawable(),
        }
    }

    /// Drawable bounds at the current scale, offset by the viewport center.
    fn screen_drawable(&self) -> Rect {
        let center = self.geometry.center();
        self.surface
            .drawable_bounds()
            .scale(self.current_scale)
            .translate(center.x, center.y)
    }

    fn double_tap_scale(&self) -> f32 {
        self.double_tap_scale.unwrap_or(self.max_scale / 2.0)
    }

    /// Upper bound first, then lower bound, so an inverted range resolves to
    /// `max_scale` instead of panicking.
    fn clamp_scale(&self, scale: f32) -> f32 {
        let scale = if scale.is_nan() {
            self.starting_scale
        } else {
            scale
        };
        if scale > self.max_scale {
            self.max_scale
        } else if scale < self.min_scale {
            self.min_scale
        } else {
            scale
        }
    }

    fn set_current_scale(&mut self, scale: f32) {
        self.current_scale = scale;
        self.boundary = self.geometry.boundary(scale);
    }

    fn commit(&mut self) {
        let transform = self.transform();
        self.surface.commit(transform);
    }

    fn commit_and_notify(&mut self, notifications: &mut Notifications) {
        self.commit();
        notifications.push(Notification::Scale(self.current_scale));
        notifications.push(Notification::Position(self.next));
        self.surface.redraw();
    }

    fn touch_down(&mut self, point: Point, notifications: &mut Notifications) {
        self.last = point;
        self.current = point;
        notifications.push(Notification::Touch(point));
        self.touched = true;
    }

    fn resync(&mut self, point: Point) {
        self.touched = true;
        self.last = point;
        self.current = point;
        self.next = Point::new(self.surface.x(), self.surface.y());
    }

    /// Moves the image by the pointer travel since the last drag. Returns
    /// `true` when a new position was committed.
    fn drag_to(&mut self, point: Point, notifications: &mut Notifications) -> bool {
        if !point.is_finite() {
            log::warn!("ignoring drag to non-finite point ({}, {})", point.x, point.y);
            return false;
        }
        self.current = point;
        let diff = self.current - self.last;
        if !diff.is_finite() {
            // the anchor itself was bad, restart the drag from here
            self.last = point;
            return false;
        }
        if diff.x == 0.0 && diff.y == 0.0 {
            return false;
        }

        if self.boundary.can_drag_x {
            self.next.x += diff.x;
        }
        if self.boundary.can_drag_y {
            self.next.y += diff.y;
        }
        self.next = self.boundary.clamp(self.next);
        self.last = self.current;

        if !self.boundary.can_drag() {
            return false;
        }
        self.commit();
        notifications.push(Notification::Position(self.next));
        true
    }

    fn pinch_start(&mut self, first: Point, second: Point) {
        self.multi_touch = true;
        let initial_distance = distance(first, second);
        if !initial_distance.is_finite() || initial_distance <= 0.0 {
            return;
        }
        let anchor = midpoint(first, second);
        self.pinch = PinchState {
            initial_distance,
            last_distance: initial_distance,
            scale_vector: Some(PolarVector::between(anchor, self.next).normalized_by(self.last_scale)),
        };
        log::trace!(
            "pinch started at ({}, {}) with distance {initial_distance}",
            anchor.x,
            anchor.y
        );
    }

    fn pinch_update(&mut self, first: Point, second: Point, notifications: &mut Notifications) {
        self.multi_touch = true;
        let Some(scale_vector) = self.pinch.scale_vector else {
            self.pinch_start(first, second);
            return;
        };

        let distance = distance(first, second);
        if !distance.is_finite() || distance == self.pinch.last_distance {
            return;
        }
        self.pinch.last_distance = distance;

        let scale = self.clamp_scale(distance / self.pinch.initial_distance * self.last_scale);
        self.set_current_scale(scale);
        self.next = self.boundary.clamp(scale_vector.endpoint_at_scale(scale));
        self.commit_and_notify(notifications);
    }

    fn release(&mut self, notifications: &mut Notifications) {
        self.multi_touch = false;
        self.pinch = PinchState::default();
        self.last_scale = self.current_scale;
        self.touched = false;

        let center = self.geometry.center();
        if !self.boundary.can_drag_x {
            self.next.x = center.x;
        }
        if !self.boundary.can_drag_y {
            self.next.y = center.y;
        }
        self.next = self.boundary.clamp(self.next);
        self.commit_and_notify(notifications);
    }

    fn double_tap(&mut self, notifications: &mut Notifications) {
        if (self.current_scale - self.starting_scale).abs() <= SCALE_EPSILON {
            let scale = self.clamp_scale(self.double_tap_scale());
            self.set_current_scale(scale);
        } else {
            self.set_current_scale(self.starting_scale);
            self.next = self.geometry.center();
            self.surface.reset();
        }
        self.pinch = PinchState::default();
        self.last_scale = self.current_scale;
        self.next = self.boundary.clamp(self.next);
        self.commit_and_notify(notifications);
    }

    fn reset(&mut self) {
        self.pinch = PinchState::default();
        self.multi_touch = false;
        self.set_current_scale(self.starting_scale);
        self.last_scale = self.starting_scale;
        self.next = self.geometry.center();
        self.surface.reset();
        self.commit();
        self.surface.redraw();
    }
}

/// Interprets gestures for one image surface.
///
/// Single-threaded: the controller, its surface and its [`FrameClock`] live
/// on the UI thread. Fling ticks run from
/// [`FrameClock::drain_frame_callbacks`] and reach the controller state
/// through a weak handle, so dropping the controller ends any fling.
pub struct GestureImageController<S: RenderSurface + 'static> {
    state: Rc<RefCell<GestureState<S>>>,
    fling: FlingAnimation,
}

impl<S: RenderSurface + 'static> GestureImageController<S> {
    /// Creates a controller for `surface` shown in a viewport of `display`.
    ///
    /// The surface's scale becomes the starting scale and its position the
    /// initial translation.
    pub fn new(
        surface: S,
        display: Size,
        frame_clock: FrameClock,
        config: ZoomConfig,
    ) -> Result<Self, ControllerError> {
        config.validate()?;

        let image = Size::new(surface.image_width(), surface.image_height());
        if !image.width.is_finite()
            || !image.height.is_finite()
            || image.width < 0.0
            || image.height < 0.0
        {
            return Err(ControllerError::InvalidImageSize {
                width: image.width,
                height: image.height,
            });
        }
        let geometry = ViewportGeometry::new(display, image)?;

        let starting_scale = surface.scale();
        if !is_positive_scale(starting_scale) {
            return Err(ControllerError::InvalidStartingScale {
                scale: starting_scale,
            });
        }

        let next = Point::new(surface.x(), surface.y());
        log::debug!(
            "gesture controller for {}x{} image in {}x{} viewport, starting scale {starting_scale}",
            image.width,
            image.height,
            display.width,
            display.height
        );

        let state = GestureState {
            surface,
            geometry,
            boundary: geometry.boundary(starting_scale),
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            double_tap_scale: config.double_tap_scale,
            starting_scale,
            current_scale: starting_scale,
            last_scale: starting_scale,
            current: Point::ZERO,
            last: Point::ZERO,
            next,
            pinch: PinchState::default(),
            touched: false,
            multi_touch: false,
            listener: None,
        };

        Ok(Self {
            state: Rc::new(RefCell::new(state)),
            fling: FlingAnimation::new(frame_clock, config.fling),
        })
    }

    /// Feeds any input. Returns whether it was consumed.
    pub fn handle(&self, input: impl Into<GestureInput>) -> bool {
        match input.into() {
            GestureInput::Touch(event) => self.on_touch_event(&event),
            GestureInput::Signal(signal) => self.on_gesture_signal(&signal),
        }
    }

    /// Applies a raw touch event. Touch events are always consumed.
    pub fn on_touch_event(&self, event: &TouchEvent) -> bool {
        let intent = self.intent_for(GestureInput::Touch(event.clone()));
        self.apply(intent);
        true
    }

    /// Applies a recognizer signal. Returns `false` for rejected flings.
    pub fn on_gesture_signal(&self, signal: &GestureSignal) -> bool {
        let intent = self.intent_for(GestureInput::Signal(*signal));
        self.apply(intent)
    }

    fn intent_for(&self, input: GestureInput) -> GestureIntent {
        let context = self.state.borrow().classifier_context();
        classify(&input, &context)
    }

    fn apply(&self, intent: GestureIntent) -> bool {
        match intent {
            GestureIntent::TouchDown(point) => {
                self.stop_fling();
                self.update(|state, notes| state.touch_down(point, notes));
                true
            }
            GestureIntent::Resync(point) => {
                self.state.borrow_mut().resync(point);
                true
            }
            GestureIntent::Drag(point) => {
                self.update(|state, notes| {
                    if state.drag_to(point, notes) {
                        state.surface.redraw();
                    }
                });
                true
            }
            GestureIntent::PinchStart { first, second } => {
                self.state.borrow_mut().pinch_start(first, second);
                true
            }
            GestureIntent::PinchUpdate { first, second } => {
                self.update(|state, notes| state.pinch_update(first, second, notes));
                true
            }
            GestureIntent::Release => {
                self.update(|state, notes| state.release(notes));
                true
            }
            GestureIntent::TapInside(point) => {
                self.update(|_, notes| notes.push(Notification::TouchDrawable(point)));
                true
            }
            GestureIntent::TapOutside(point) => {
                self.update(|_, notes| notes.push(Notification::TouchOutsideDrawable(point)));
                true
            }
            GestureIntent::DoubleTapToggle(_) => {
                self.stop_fling();
                self.update(|state, notes| state.double_tap(notes));
                true
            }
            GestureIntent::FlingStart(velocity) => self.start_fling(velocity),
            GestureIntent::Ignore(reason) => {
                log::trace!("ignoring input: {reason:?}");
                false
            }
        }
    }

    /// Runs `f` with the state borrowed, then notifies the listener.
    fn update(&self, f: impl FnOnce(&mut GestureState<S>, &mut Notifications)) {
        update_state(&self.state, f);
    }

    fn start_fling(&self, velocity: Point) -> bool {
        self.stop_fling();

        let weak_state = Rc::downgrade(&self.state);
        let started = self.fling.start(velocity, move |step: FlingStep| {
            if let Some(state) = weak_state.upgrade() {
                let mut keep_going = false;
                update_state(&state, |state, notes| {
                    let before = state.next;
                    let target = state.last + step.delta;
                    if state.drag_to(target, notes) {
                        state.surface.redraw();
                    }
                    // pinned against the boundary on every draggable axis
                    let stuck = state.next == before;
                    if step.finished || stuck {
                        state.surface.animation_stopped();
                    }
                    keep_going = !stuck;
                });
                keep_going
            } else {
                false
            }
        });
        if started {
            self.state.borrow_mut().surface.animation_started();
        }
        started
    }

    fn stop_fling(&self) {
        if self.fling.cancel() {
            self.state.borrow_mut().surface.animation_stopped();
        }
    }

    /// Cancels any fling and returns to the starting scale, centered.
    pub fn reset(&self) {
        self.stop_fling();
        self.state.borrow_mut().reset();
    }

    pub fn transform(&self) -> Transform {
        self.state.borrow().transform()
    }

    pub fn boundary(&self) -> BoundaryRect {
        self.state.borrow().boundary
    }

    pub fn geometry(&self) -> ViewportGeometry {
        self.state.borrow().geometry
    }

    pub fn starting_scale(&self) -> f32 {
        self.state.borrow().starting_scale
    }

    pub fn min_scale(&self) -> f32 {
        self.state.borrow().min_scale
    }

    pub fn set_min_scale(&self, min_scale: f32) {
        if !is_positive_scale(min_scale) {
            log::warn!("ignoring invalid min scale {min_scale}");
            return;
        }
        self.state.borrow_mut().min_scale = min_scale;
    }

    pub fn max_scale(&self) -> f32 {
        self.state.borrow().max_scale
    }

    pub fn set_max_scale(&self, max_scale: f32) {
        if !is_positive_scale(max_scale) {
            log::warn!("ignoring invalid max scale {max_scale}");
            return;
        }
        self.state.borrow_mut().max_scale = max_scale;
    }

    /// Scale a double tap zooms to, half of the max scale unless set.
    pub fn double_tap_scale(&self) -> f32 {
        self.state.borrow().double_tap_scale()
    }

    pub fn set_double_tap_scale(&self, scale: f32) {
        if !is_positive_scale(scale) {
            log::warn!("ignoring invalid double tap scale {scale}");
            return;
        }
        self.state.borrow_mut().double_tap_scale = Some(scale);
    }

    pub fn set_fling_config(&self, config: FlingConfig) {
        self.fling.set_config(config);
    }

    pub fn is_flinging(&self) -> bool {
        self.fling.is_running()
    }

    pub fn is_touched(&self) -> bool {
        self.state.borrow().touched
    }

    pub fn is_multi_touch(&self) -> bool {
        self.state.borrow().multi_touch
    }

    pub fn set_listener<L: GestureImageListener + 'static>(&self, listener: &Rc<L>) {
        let weak = Rc::downgrade(listener) as Weak<dyn GestureImageListener>;
        self.state.borrow_mut().listener = Some(weak);
    }

    pub fn clear_listener(&self) {
        self.state.borrow_mut().listener = None;
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.borrow().surface)
    }

    pub fn with_surface_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.state.borrow_mut().surface)
    }
}

fn update_state<S: RenderSurface>(
    state: &RefCell<GestureState<S>>,
    f: impl FnOnce(&mut GestureState<S>, &mut Notifications),
) {
    let mut notifications = Notifications::new();
    let listener = {
        let mut state = state.borrow_mut();
        f(&mut state, &mut notifications);
        state.listener()
    };
    dispatch(listener, notifications);
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

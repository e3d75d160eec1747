//! Surfaces and listeners that record what the controller does to them.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use zoomview_graphics::{Rect, Size};
use zoomview_ui::{GestureImageListener, RenderSurface, Transform};

/// Everything a [`RecordingSurface`] has seen.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceRecord {
    pub image: Size,
    pub drawable: Option<Rect>,
    pub transform: Transform,
    pub commits: Vec<Transform>,
    pub redraws: usize,
    pub resets: usize,
    pub animations_started: usize,
    pub animations_stopped: usize,
}

/// Render surface backed by shared state.
///
/// Clones share the same record, so a test can keep one clone to inspect
/// after handing the other to a controller.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    record: Rc<RefCell<SurfaceRecord>>,
}

impl RecordingSurface {
    /// Image of `image` size at scale 1, centered in a `viewport`.
    pub fn centered(image: Size, viewport: Size) -> Self {
        let center = viewport.center();
        Self::new(image, Transform::new(1.0, center.x, center.y))
    }

    pub fn new(image: Size, transform: Transform) -> Self {
        Self {
            record: Rc::new(RefCell::new(SurfaceRecord {
                image,
                drawable: None,
                transform,
                commits: Vec::new(),
                redraws: 0,
                resets: 0,
                animations_started: 0,
                animations_stopped: 0,
            })),
        }
    }

    /// Overrides the drawable bounds reported to the controller.
    pub fn with_drawable(self, drawable: Rect) -> Self {
        self.record.borrow_mut().drawable = Some(drawable);
        self
    }

    pub fn record(&self) -> Ref<'_, SurfaceRecord> {
        self.record.borrow()
    }

    pub fn transform(&self) -> Transform {
        self.record.borrow().transform
    }

    pub fn redraws(&self) -> usize {
        self.record.borrow().redraws
    }

    pub fn commit_count(&self) -> usize {
        self.record.borrow().commits.len()
    }
}

impl RenderSurface for RecordingSurface {
    fn set_scale(&mut self, scale: f32) {
        self.record.borrow_mut().transform.scale = scale;
    }

    fn set_position(&mut self, x: f32, y: f32) {
        let mut record = self.record.borrow_mut();
        record.transform.x = x;
        record.transform.y = y;
    }

    fn redraw(&mut self) {
        self.record.borrow_mut().redraws += 1;
    }

    fn image_width(&self) -> f32 {
        self.record.borrow().image.width
    }

    fn image_height(&self) -> f32 {
        self.record.borrow().image.height
    }

    fn x(&self) -> f32 {
        self.record.borrow().transform.x
    }

    fn y(&self) -> f32 {
        self.record.borrow().transform.y
    }

    fn scale(&self) -> f32 {
        self.record.borrow().transform.scale
    }

    fn reset(&mut self) {
        self.record.borrow_mut().resets += 1;
    }

    fn drawable_bounds(&self) -> Rect {
        let record = self.record.borrow();
        record.drawable.unwrap_or_else(|| Rect::centered(record.image))
    }

    fn animation_started(&mut self) {
        self.record.borrow_mut().animations_started += 1;
    }

    fn animation_stopped(&mut self) {
        self.record.borrow_mut().animations_stopped += 1;
    }

    fn commit(&mut self, transform: Transform) {
        let mut record = self.record.borrow_mut();
        record.transform = transform;
        record.commits.push(transform);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListenerEvent {
    Scale(f32),
    Position(f32, f32),
    Touch(f32, f32),
    TouchDrawable(f32, f32),
    TouchOutsideDrawable(f32, f32),
}

/// Listener that keeps every notification in order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: RefCell<Vec<ListenerEvent>>,
}

impl RecordingListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ListenerEvent> {
        self.events.borrow().clone()
    }

    /// Returns the recorded events and clears the log.
    pub fn take(&self) -> Vec<ListenerEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn last_position(&self) -> Option<(f32, f32)> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            ListenerEvent::Position(x, y) => Some((*x, *y)),
            _ => None,
        })
    }

    pub fn last_scale(&self) -> Option<f32> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            ListenerEvent::Scale(scale) => Some(*scale),
            _ => None,
        })
    }
}

impl GestureImageListener for RecordingListener {
    fn on_scale(&self, scale: f32) {
        self.events.borrow_mut().push(ListenerEvent::Scale(scale));
    }

    fn on_position(&self, x: f32, y: f32) {
        self.events.borrow_mut().push(ListenerEvent::Position(x, y));
    }

    fn on_touch(&self, x: f32, y: f32) {
        self.events.borrow_mut().push(ListenerEvent::Touch(x, y));
    }

    fn on_touch_drawable(&self, x: f32, y: f32) {
        self.events
            .borrow_mut()
            .push(ListenerEvent::TouchDrawable(x, y));
    }

    fn on_touch_outside_drawable(&self, x: f32, y: f32) {
        self.events
            .borrow_mut()
            .push(ListenerEvent::TouchOutsideDrawable(x, y));
    }
}

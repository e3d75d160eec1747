use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct FrameClockInner {
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    last_frame_time_nanos: Cell<Option<u64>>,
}

impl FrameClockInner {
    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }

    fn is_pending(&self, id: FrameCallbackId) -> bool {
        self.frame_callbacks
            .borrow()
            .iter()
            .any(|entry| entry.id == id)
    }
}

/// Frame callback scheduler driven by the host's display refresh.
///
/// Callbacks are one-shot. Everything registered before a call to
/// [`FrameClock::drain_frame_callbacks`] runs in that drain; callbacks
/// registered while draining wait for the next frame. The clock is meant to
/// live on the UI thread next to the state it animates.
#[derive(Clone)]
pub struct FrameClock {
    inner: Rc<FrameClockInner>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(FrameClockInner {
                frame_callbacks: RefCell::new(VecDeque::new()),
                next_frame_callback_id: Cell::new(1),
                last_frame_time_nanos: Cell::new(None),
            }),
        }
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.inner.register_frame_callback(Box::new(callback));
        FrameCallbackRegistration::new(Rc::downgrade(&self.inner), id)
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |nanos| {
            let millis = nanos / 1_000_000;
            callback(millis);
        })
    }

    /// Runs every callback queued before this call. Returns how many ran.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        let mut callbacks = self.inner.frame_callbacks.borrow_mut();
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        self.inner.last_frame_time_nanos.set(Some(frame_time_nanos));
        let count = pending.len();
        for callback in pending {
            callback(frame_time_nanos);
        }
        if count > 0 {
            log::trace!("drained {count} frame callbacks at {frame_time_nanos}ns");
        }
        count
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.inner.frame_callbacks.borrow().is_empty()
    }

    pub fn pending_frame_callbacks(&self) -> usize {
        self.inner.frame_callbacks.borrow().len()
    }

    /// Timestamp of the most recent drain, if any.
    pub fn last_frame_time_nanos(&self) -> Option<u64> {
        self.inner.last_frame_time_nanos.get()
    }
}

/// Handle to a queued frame callback. Dropping it cancels the callback.
pub struct FrameCallbackRegistration {
    clock: Weak<FrameClockInner>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(clock: Weak<FrameClockInner>, id: FrameCallbackId) -> Self {
        Self {
            clock,
            id: Some(id),
        }
    }

    pub fn inactive() -> Self {
        Self {
            clock: Weak::new(),
            id: None,
        }
    }

    pub fn id(&self) -> Option<FrameCallbackId> {
        self.id
    }

    /// True while the callback is still waiting for a frame.
    pub fn is_pending(&self) -> bool {
        match (self.id, self.clock.upgrade()) {
            (Some(id), Some(clock)) => clock.is_pending(id),
            _ => false,
        }
    }

    pub fn cancel(mut self) {
        self.cancel_in_place();
    }

    fn cancel_in_place(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(clock) = self.clock.upgrade() {
                clock.cancel_frame_callback(id);
            }
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_in_place();
    }
}

#[cfg(test)]
#[path = "tests/frame_clock_tests.rs"]
mod tests;

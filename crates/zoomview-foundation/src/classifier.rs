//! Maps touch events and recognizer signals to gesture intents.
//!
//! Classification is pure: the state machine passes the bits of its state
//! that matter in a [`ClassifierContext`] and applies the returned intent.

use crate::input::{GestureInput, GestureSignal, TouchEvent};
use zoomview_graphics::{Point, Rect};

/// State of the gesture machine that classification depends on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierContext {
    /// A touch-down (or a re-sync) has been seen for the current gesture.
    pub touched: bool,
    /// Two or more pointers have been down since the last touch-up.
    pub multi_touch: bool,
    /// A pinch has recorded its initial distance.
    pub pinch_active: bool,
    /// Drawable bounds in screen coordinates, used for tap hit testing.
    pub drawable: Rect,
}

/// What the state machine should do with an input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureIntent {
    TouchDown(Point),
    /// Single-pointer move without a prior touch-down. Restarts drag tracking
    /// at the given point without moving the image.
    Resync(Point),
    Drag(Point),
    PinchStart { first: Point, second: Point },
    PinchUpdate { first: Point, second: Point },
    Release,
    TapInside(Point),
    TapOutside(Point),
    DoubleTapToggle(Point),
    /// Start a fling with this velocity in px/sec.
    FlingStart(Point),
    Ignore(IgnoreReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Move event without any pointer.
    NoPointers,
    /// Single pointer left on screen after a pinch, until touch-up.
    PinchInProgress,
    /// Fling released with more than one pointer down.
    MultiPointerFling,
    /// Fling arrived before the pinch that preceded it was released.
    FlingDuringPinch,
}

pub fn classify(input: &GestureInput, context: &ClassifierContext) -> GestureIntent {
    match input {
        GestureInput::Touch(event) => classify_touch(event, context),
        GestureInput::Signal(signal) => classify_signal(signal, context),
    }
}

pub fn classify_touch(event: &TouchEvent, context: &ClassifierContext) -> GestureIntent {
    match event {
        TouchEvent::Down(point) => GestureIntent::TouchDown(*point),
        TouchEvent::Up => GestureIntent::Release,
        TouchEvent::Move { pointers } => match pointers.as_slice() {
            [] => GestureIntent::Ignore(IgnoreReason::NoPointers),
            [point] => {
                if !context.touched {
                    GestureIntent::Resync(*point)
                } else if context.multi_touch {
                    GestureIntent::Ignore(IgnoreReason::PinchInProgress)
                } else {
                    GestureIntent::Drag(*point)
                }
            }
            [first, second, ..] => {
                if context.pinch_active {
                    GestureIntent::PinchUpdate {
                        first: *first,
                        second: *second,
                    }
                } else {
                    GestureIntent::PinchStart {
                        first: *first,
                        second: *second,
                    }
                }
            }
        },
    }
}

pub fn classify_signal(signal: &GestureSignal, context: &ClassifierContext) -> GestureIntent {
    match *signal {
        GestureSignal::SingleTapConfirmed(point) => {
            if context.drawable.contains(point.x, point.y) {
                GestureIntent::TapInside(point)
            } else {
                GestureIntent::TapOutside(point)
            }
        }
        GestureSignal::DoubleTap(point) => GestureIntent::DoubleTapToggle(point),
        GestureSignal::Fling {
            velocity,
            pointer_count,
        } => {
            if pointer_count != 1 {
                log::debug!("rejecting fling released with {pointer_count} pointers");
                GestureIntent::Ignore(IgnoreReason::MultiPointerFling)
            } else if context.multi_touch {
                log::debug!("rejecting fling while a pinch is still active");
                GestureIntent::Ignore(IgnoreReason::FlingDuringPinch)
            } else {
                GestureIntent::FlingStart(velocity)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;

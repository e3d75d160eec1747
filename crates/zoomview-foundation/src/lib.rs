//! Input model and gesture classification for zoomview.

mod classifier;
pub mod gesture_constants;
mod input;

pub use classifier::{
    classify, classify_signal, classify_touch, ClassifierContext, GestureIntent, IgnoreReason,
};
pub use gesture_constants::*;
pub use input::{GestureInput, GestureSignal, Pointers, TouchEvent};

pub mod prelude {
    pub use crate::classifier::{ClassifierContext, GestureIntent};
    pub use crate::input::{GestureInput, GestureSignal, TouchEvent};
}

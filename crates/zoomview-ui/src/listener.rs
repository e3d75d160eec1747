/// Observer of transform changes and touches.
///
/// The controller keeps only a weak reference, so a listener lives exactly as
/// long as its owner keeps it. Every method defaults to doing nothing.
pub trait GestureImageListener {
    fn on_scale(&self, _scale: f32) {}

    fn on_position(&self, _x: f32, _y: f32) {}

    /// Raw touch-down position.
    fn on_touch(&self, _x: f32, _y: f32) {}

    /// Confirmed single tap on the drawable.
    fn on_touch_drawable(&self, _x: f32, _y: f32) {}

    /// Confirmed single tap outside the drawable.
    fn on_touch_outside_drawable(&self, _x: f32, _y: f32) {}
}

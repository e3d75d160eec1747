use zoomview_graphics::{Point, Rect, Size};

/// Scale and translation applied to the image.
///
/// `x` and `y` place the image center in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

impl Transform {
    pub const fn new(scale: f32, x: f32, y: f32) -> Self {
        Self { scale, x, y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The view that paints the image with the current transform.
///
/// The controller owns its surface and only ever writes a fully computed
/// transform through [`RenderSurface::commit`].
pub trait RenderSurface {
    fn set_scale(&mut self, scale: f32);

    fn set_position(&mut self, x: f32, y: f32);

    /// Asks the host to repaint.
    fn redraw(&mut self);

    fn image_width(&self) -> f32;

    fn image_height(&self) -> f32;

    fn x(&self) -> f32;

    fn y(&self) -> f32;

    fn scale(&self) -> f32;

    /// Called when the transform is reset to its starting state.
    fn reset(&mut self) {}

    /// Drawable bounds in image-local coordinates around the image center.
    fn drawable_bounds(&self) -> Rect {
        Rect::centered(Size::new(self.image_width(), self.image_height()))
    }

    fn animation_started(&mut self) {}

    fn animation_stopped(&mut self) {}

    fn commit(&mut self, transform: Transform) {
        self.set_scale(transform.scale);
        self.set_position(transform.x, transform.y);
    }
}

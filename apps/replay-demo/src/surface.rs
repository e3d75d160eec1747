use zoomview_graphics::Size;
use zoomview_ui::{GestureImageListener, RenderSurface, Transform};

/// Surface that keeps the transform in memory and logs every change.
pub struct LoggingSurface {
    image: Size,
    transform: Transform,
    frames_drawn: usize,
}

impl LoggingSurface {
    pub fn new(image: Size, transform: Transform) -> Self {
        Self {
            image,
            transform,
            frames_drawn: 0,
        }
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }
}

impl RenderSurface for LoggingSurface {
    fn set_scale(&mut self, scale: f32) {
        self.transform.scale = scale;
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.transform.x = x;
        self.transform.y = y;
    }

    fn redraw(&mut self) {
        self.frames_drawn += 1;
        log::trace!(
            "redraw #{} at scale {:.3} ({:.1}, {:.1})",
            self.frames_drawn,
            self.transform.scale,
            self.transform.x,
            self.transform.y
        );
    }

    fn image_width(&self) -> f32 {
        self.image.width
    }

    fn image_height(&self) -> f32 {
        self.image.height
    }

    fn x(&self) -> f32 {
        self.transform.x
    }

    fn y(&self) -> f32 {
        self.transform.y
    }

    fn scale(&self) -> f32 {
        self.transform.scale
    }

    fn reset(&mut self) {
        log::info!("surface reset");
    }

    fn animation_started(&mut self) {
        log::info!("fling started");
    }

    fn animation_stopped(&mut self) {
        log::info!("fling stopped");
    }
}

/// Listener that forwards notifications to the log.
pub struct LogListener;

impl GestureImageListener for LogListener {
    fn on_scale(&self, scale: f32) {
        log::debug!("scale -> {scale:.3}");
    }

    fn on_position(&self, x: f32, y: f32) {
        log::debug!("position -> ({x:.1}, {y:.1})");
    }

    fn on_touch(&self, x: f32, y: f32) {
        log::debug!("touch at ({x:.1}, {y:.1})");
    }

    fn on_touch_drawable(&self, x: f32, y: f32) {
        log::info!("tap on image at ({x:.1}, {y:.1})");
    }

    fn on_touch_outside_drawable(&self, x: f32, y: f32) {
        log::info!("tap outside image at ({x:.1}, {y:.1})");
    }
}

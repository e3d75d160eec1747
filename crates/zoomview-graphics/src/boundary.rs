//! Viewport geometry and the translation range allowed at a given scale.

use crate::error::GeometryError;
use crate::geometry::{Point, Size};

/// Display and image sizes of one viewport, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportGeometry {
    display: Size,
    image: Size,
    center: Point,
}

impl ViewportGeometry {
    /// Creates the geometry, rejecting negative or non-finite dimensions.
    pub fn new(display: Size, image: Size) -> Result<Self, GeometryError> {
        check_dimension("display width", display.width)?;
        check_dimension("display height", display.height)?;
        check_dimension("image width", image.width)?;
        check_dimension("image height", image.height)?;
        Ok(Self {
            display,
            image,
            center: display.center(),
        })
    }

    pub fn display(&self) -> Size {
        self.display
    }

    pub fn image(&self) -> Size {
        self.image
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Image size at `scale`, rounded to whole pixels.
    pub fn effective_size(&self, scale: f32) -> Size {
        Size::new(
            (self.image.width * scale).round(),
            (self.image.height * scale).round(),
        )
    }

    pub fn boundary(&self, scale: f32) -> BoundaryRect {
        BoundaryRect::calculate(self, scale)
    }
}

fn check_dimension(what: &'static str, value: f32) -> Result<(), GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFiniteDimension { what, value });
    }
    if value < 0.0 {
        return Err(GeometryError::NegativeDimension { what, value });
    }
    Ok(())
}

/// Valid range for the image center plus per-axis drag capability.
///
/// On an axis where the scaled image overflows the display the range is
/// symmetric about the viewport center. Otherwise both edges collapse onto
/// the center coordinate and dragging is disabled on that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub can_drag_x: bool,
    pub can_drag_y: bool,
}

impl BoundaryRect {
    pub fn calculate(geometry: &ViewportGeometry, scale: f32) -> Self {
        let effective = geometry.effective_size(scale);
        let display = geometry.display;
        let center = geometry.center;

        let can_drag_x = effective.width > display.width;
        let can_drag_y = effective.height > display.height;

        let (left, right) = if can_drag_x {
            let diff = (effective.width - display.width) / 2.0;
            (center.x - diff, center.x + diff)
        } else {
            (center.x, center.x)
        };
        let (top, bottom) = if can_drag_y {
            let diff = (effective.height - display.height) / 2.0;
            (center.y - diff, center.y + diff)
        } else {
            (center.y, center.y)
        };

        Self {
            left,
            top,
            right,
            bottom,
            can_drag_x,
            can_drag_y,
        }
    }

    pub fn can_drag(&self) -> bool {
        self.can_drag_x || self.can_drag_y
    }

    /// Pins each coordinate into its range independently. A NaN coordinate
    /// lands on the middle of its range.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            clamp_axis(point.x, self.left, self.right),
            clamp_axis(point.y, self.top, self.bottom),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        (min + max) / 2.0
    } else if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
#[path = "tests/boundary_tests.rs"]
mod tests;

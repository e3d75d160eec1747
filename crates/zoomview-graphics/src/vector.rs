//! Polar vectors used to anchor pinch scaling.

use crate::geometry::{angle, distance, endpoint_from_polar, Point};

/// A vector stored as origin, angle (radians) and length.
///
/// Built once from two points, it can rebuild its endpoint for a different
/// length without touching its own fields. The pinch code stores the length
/// divided by the scale at pinch start and asks for the endpoint at each new
/// scale, which keeps the image point under the fingers in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarVector {
    origin: Point,
    angle: f32,
    length: f32,
}

impl PolarVector {
    pub fn new(origin: Point, angle: f32, length: f32) -> Self {
        Self {
            origin,
            angle,
            length,
        }
    }

    /// Vector pointing from `start` to `end`.
    pub fn between(start: Point, end: Point) -> Self {
        Self {
            origin: start,
            angle: angle(start, end),
            length: distance(start, end),
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Same direction and origin, length divided by `scale`.
    ///
    /// A zero or non-finite `scale` leaves the length unchanged.
    pub fn normalized_by(self, scale: f32) -> Self {
        if scale == 0.0 || !scale.is_finite() {
            return self;
        }
        Self {
            length: self.length / scale,
            ..self
        }
    }

    pub fn end(&self) -> Point {
        endpoint_from_polar(self.origin, self.angle, self.length)
    }

    /// Endpoint with the length multiplied by `scale`.
    pub fn endpoint_at_scale(&self, scale: f32) -> Point {
        endpoint_from_polar(self.origin, self.angle, self.length * scale)
    }
}

//! Geometric primitives: Point, Size, Rect

use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean length of the point seen as a vector from the origin.
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        distance(*self, other)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Distance between two points.
pub fn distance(p1: Point, p2: Point) -> f32 {
    (p2 - p1).length()
}

/// Point halfway between `p1` and `p2`.
pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

/// Angle in radians of the direction from `p1` to `p2`.
pub fn angle(p1: Point, p2: Point) -> f32 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

/// Endpoint reached by travelling `length` from `origin` along `angle` (radians).
pub fn endpoint_from_polar(origin: Point, angle: f32, length: f32) -> Point {
    Point::new(
        origin.x + angle.cos() * length,
        origin.y + angle.sin() * length,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of the given size whose center sits on the origin.
    pub fn centered(size: Size) -> Self {
        Self {
            x: -size.width / 2.0,
            y: -size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Scales every edge about the origin.
    pub fn scale(&self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn midpoint_and_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(30.0, 40.0);
        assert_eq!(midpoint(a, b), Point::new(15.0, 20.0));
        assert_eq!(distance(a, b), 50.0);
        assert_eq!(b.distance_to(a), 50.0);
    }

    #[test]
    fn polar_endpoint_matches_angle() {
        let origin = Point::new(10.0, 10.0);
        let target = Point::new(10.0, 30.0);
        let theta = angle(origin, target);
        assert!((theta - FRAC_PI_2).abs() < 1e-6);

        let end = endpoint_from_polar(origin, theta, 20.0);
        assert!((end.x - target.x).abs() < 1e-4);
        assert!((end.y - target.y).abs() < 1e-4);
    }

    #[test]
    fn rect_edges_and_scale() {
        let rect = Rect::centered(Size::new(200.0, 100.0));
        assert_eq!(rect.left(), -100.0);
        assert_eq!(rect.bottom(), 50.0);

        let scaled = rect.scale(2.0).translate(500.0, 500.0);
        assert_eq!(scaled.left(), 300.0);
        assert_eq!(scaled.right(), 700.0);
        assert!(scaled.contains(700.0, 600.0));
        assert!(!scaled.contains(700.1, 600.0));
    }
}

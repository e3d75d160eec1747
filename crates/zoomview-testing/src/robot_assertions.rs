//! Assertion utilities for gesture tests
//!
//! Transform math runs in `f32`, so positions and scales are compared with a
//! tolerance rather than exactly.

use zoomview_graphics::{BoundaryRect, Point};
use zoomview_ui::Transform;

/// Default tolerance for transform comparisons.
pub const TRANSFORM_TOLERANCE: f32 = 1e-3;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a point is approximately equal to another.
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that a transform is approximately equal to another.
pub fn assert_transform_approx_eq(actual: Transform, expected: Transform, tolerance: f32, msg: &str) {
    assert_approx_eq(
        actual.scale,
        expected.scale,
        tolerance,
        &format!("{} - scale", msg),
    );
    assert_point_approx_eq(
        actual.position(),
        expected.position(),
        tolerance,
        msg,
    );
}

/// Assert that a scale lies within `[min, max]`.
pub fn assert_scale_within(scale: f32, min: f32, max: f32, msg: &str) {
    assert!(
        scale >= min && scale <= max,
        "{}: scale {} outside [{}, {}]",
        msg,
        scale,
        min,
        max
    );
}

/// Assert that a position lies inside the boundary and sits on the center
/// of every axis that cannot be dragged.
pub fn assert_within_boundary(position: Point, boundary: &BoundaryRect, center: Point, msg: &str) {
    assert!(
        boundary.contains(position),
        "{}: position {:?} outside boundary {:?}",
        msg,
        position,
        boundary
    );
    if !boundary.can_drag_x {
        assert_eq!(position.x, center.x, "{}: x not centered", msg);
    }
    if !boundary.can_drag_y {
        assert_eq!(position.y, center.y, "{}: y not centered", msg);
    }
}

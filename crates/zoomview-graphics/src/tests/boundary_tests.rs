use super::*;

fn viewport(image: f32) -> ViewportGeometry {
    ViewportGeometry::new(Size::new(1000.0, 1000.0), Size::new(image, image))
        .expect("valid geometry")
}

#[test]
fn small_image_disables_drag_and_collapses_to_center() {
    let geometry = viewport(500.0);
    let bounds = geometry.boundary(1.0);

    assert!(!bounds.can_drag_x);
    assert!(!bounds.can_drag_y);
    assert_eq!(bounds.left, 500.0);
    assert_eq!(bounds.right, 500.0);
    assert_eq!(bounds.top, 500.0);
    assert_eq!(bounds.bottom, 500.0);

    let clamped = bounds.clamp(Point::new(120.0, 880.0));
    assert_eq!(clamped, geometry.center());
}

#[test]
fn large_image_is_symmetric_about_center() {
    let geometry = viewport(2000.0);
    let bounds = geometry.boundary(1.0);

    assert!(bounds.can_drag_x && bounds.can_drag_y);
    assert_eq!(bounds.left, 500.0 - 500.0);
    assert_eq!(bounds.right, 500.0 + 500.0);

    assert_eq!(bounds.clamp(Point::new(-300.0, 1800.0)), Point::new(0.0, 1000.0));
    assert_eq!(bounds.clamp(Point::new(250.0, 750.0)), Point::new(250.0, 750.0));
}

#[test]
fn boundary_grows_with_scale() {
    let geometry = viewport(500.0);

    // 500 * 2 = 1000 does not exceed the display
    assert!(!geometry.boundary(2.0).can_drag_x);

    let bounds = geometry.boundary(3.0);
    assert!(bounds.can_drag_x);
    assert_eq!(bounds.left, 500.0 - 250.0);
    assert_eq!(bounds.right, 500.0 + 250.0);
}

#[test]
fn axes_are_independent() {
    let geometry = ViewportGeometry::new(Size::new(800.0, 600.0), Size::new(1600.0, 300.0))
        .expect("valid geometry");
    let bounds = geometry.boundary(1.0);

    assert!(bounds.can_drag_x);
    assert!(!bounds.can_drag_y);
    assert_eq!(bounds.clamp(Point::new(0.0, 0.0)), Point::new(0.0, 300.0));
}

#[test]
fn effective_size_is_rounded() {
    let geometry = viewport(333.0);
    assert_eq!(geometry.effective_size(1.5).width, 500.0);
}

#[test]
fn invalid_dimensions_fail_construction() {
    let err = ViewportGeometry::new(Size::new(-1.0, 100.0), Size::new(10.0, 10.0)).unwrap_err();
    assert!(matches!(
        err,
        GeometryError::NegativeDimension { what: "display width", .. }
    ));

    let err = ViewportGeometry::new(Size::new(100.0, 100.0), Size::new(10.0, f32::INFINITY))
        .unwrap_err();
    assert!(matches!(
        err,
        GeometryError::NonFiniteDimension { what: "image height", .. }
    ));
}

#[test]
fn clamp_maps_nan_into_the_range() {
    let geometry = viewport(2000.0);
    let bounds = geometry.boundary(1.0);

    let clamped = bounds.clamp(Point::new(f32::NAN, 1200.0));
    assert_eq!(clamped, Point::new(500.0, 1000.0));
    assert!(bounds.contains(clamped));
}

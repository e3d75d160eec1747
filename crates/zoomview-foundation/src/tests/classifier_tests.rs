use super::*;
use zoomview_graphics::Size;

fn context() -> ClassifierContext {
    ClassifierContext {
        touched: true,
        multi_touch: false,
        pinch_active: false,
        drawable: Rect::centered(Size::new(200.0, 100.0)).translate(500.0, 500.0),
    }
}

#[test]
fn single_pointer_moves() {
    let drag = TouchEvent::move_to(10.0, 20.0);
    assert_eq!(
        classify_touch(&drag, &context()),
        GestureIntent::Drag(Point::new(10.0, 20.0))
    );

    let untouched = ClassifierContext {
        touched: false,
        ..context()
    };
    assert_eq!(
        classify_touch(&drag, &untouched),
        GestureIntent::Resync(Point::new(10.0, 20.0))
    );

    let after_pinch = ClassifierContext {
        multi_touch: true,
        ..context()
    };
    assert_eq!(
        classify_touch(&drag, &after_pinch),
        GestureIntent::Ignore(IgnoreReason::PinchInProgress)
    );
}

#[test]
fn two_pointers_start_then_update_a_pinch() {
    let a = Point::new(100.0, 100.0);
    let b = Point::new(200.0, 100.0);
    let event = TouchEvent::pinch(a, b);

    assert_eq!(
        classify_touch(&event, &context()),
        GestureIntent::PinchStart { first: a, second: b }
    );

    let pinching = ClassifierContext {
        multi_touch: true,
        pinch_active: true,
        ..context()
    };
    assert_eq!(
        classify_touch(&event, &pinching),
        GestureIntent::PinchUpdate { first: a, second: b }
    );
}

#[test]
fn extra_pointers_are_ignored_beyond_the_first_two() {
    let event = TouchEvent::moved([
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(99.0, 99.0),
    ]);
    assert_eq!(event.pointer_count(), 3);
    assert_eq!(
        classify_touch(&event, &context()),
        GestureIntent::PinchStart {
            first: Point::new(0.0, 0.0),
            second: Point::new(10.0, 0.0)
        }
    );

    let empty = TouchEvent::moved(std::iter::empty::<Point>());
    assert_eq!(
        classify_touch(&empty, &context()),
        GestureIntent::Ignore(IgnoreReason::NoPointers)
    );
}

#[test]
fn down_and_up_map_directly() {
    assert_eq!(
        classify(&TouchEvent::down(1.0, 2.0).into(), &context()),
        GestureIntent::TouchDown(Point::new(1.0, 2.0))
    );
    assert_eq!(
        classify(&TouchEvent::Up.into(), &context()),
        GestureIntent::Release
    );
}

#[test]
fn single_tap_hit_test_is_inclusive() {
    let inside = GestureSignal::SingleTapConfirmed(Point::new(600.0, 550.0));
    let outside = GestureSignal::SingleTapConfirmed(Point::new(601.0, 550.0));

    assert_eq!(
        classify_signal(&inside, &context()),
        GestureIntent::TapInside(Point::new(600.0, 550.0))
    );
    assert_eq!(
        classify_signal(&outside, &context()),
        GestureIntent::TapOutside(Point::new(601.0, 550.0))
    );
}

#[test]
fn fling_requires_single_pointer_and_no_pinch() {
    let fling = GestureSignal::fling(500.0, 0.0);
    assert_eq!(
        classify_signal(&fling, &context()),
        GestureIntent::FlingStart(Point::new(500.0, 0.0))
    );

    let two_fingers = GestureSignal::Fling {
        velocity: Point::new(500.0, 0.0),
        pointer_count: 2,
    };
    assert_eq!(
        classify_signal(&two_fingers, &context()),
        GestureIntent::Ignore(IgnoreReason::MultiPointerFling)
    );

    let pinching = ClassifierContext {
        multi_touch: true,
        ..context()
    };
    assert_eq!(
        classify_signal(&fling, &pinching),
        GestureIntent::Ignore(IgnoreReason::FlingDuringPinch)
    );
}

#[test]
fn double_tap_always_toggles() {
    let signal = GestureSignal::DoubleTap(Point::new(5.0, 5.0));
    assert_eq!(
        classify(&signal.into(), &context()),
        GestureIntent::DoubleTapToggle(Point::new(5.0, 5.0))
    );
}

use zoomview_graphics::Point;
use zoomview_ui::{GestureSignal, TouchEvent};

/// One entry of a replayed session.
pub enum Step {
    Touch(TouchEvent),
    Signal(GestureSignal),
    /// Runs the frame loop until no fling is scheduled.
    Settle,
    /// Prints the current transform with a label.
    Checkpoint(&'static str),
}

fn drag(steps: &mut Vec<Step>, from: Point, to: Point, moves: usize) {
    steps.push(Step::Touch(TouchEvent::down(from.x, from.y)));
    for i in 1..=moves {
        let t = i as f32 / moves as f32;
        let point = from + (to - from) * t;
        steps.push(Step::Touch(TouchEvent::move_to(point.x, point.y)));
    }
    steps.push(Step::Touch(TouchEvent::Up));
}

fn pinch(steps: &mut Vec<Step>, anchor: Point, from: f32, to: f32, moves: usize) {
    steps.push(Step::Touch(TouchEvent::down(anchor.x - from / 2.0, anchor.y)));
    for i in 0..=moves {
        let half = (from + (to - from) * i as f32 / moves as f32) / 2.0;
        steps.push(Step::Touch(TouchEvent::pinch(
            Point::new(anchor.x - half, anchor.y),
            Point::new(anchor.x + half, anchor.y),
        )));
    }
    steps.push(Step::Touch(TouchEvent::Up));
}

/// Session exercising drag, pinch, fling, tap and double tap on a viewport
/// whose center is `center`.
pub fn demo_session(center: Point) -> Vec<Step> {
    let mut steps = Vec::new();

    drag(
        &mut steps,
        center,
        center + Point::new(-180.0, 60.0),
        12,
    );
    steps.push(Step::Checkpoint("after drag"));

    pinch(&mut steps, center + Point::new(120.0, -80.0), 120.0, 300.0, 20);
    steps.push(Step::Checkpoint("after pinch"));

    drag(&mut steps, center, center + Point::new(40.0, 0.0), 4);
    steps.push(Step::Signal(GestureSignal::fling(2_400.0, -900.0)));
    steps.push(Step::Settle);
    steps.push(Step::Checkpoint("after fling"));

    steps.push(Step::Signal(GestureSignal::SingleTapConfirmed(center)));
    steps.push(Step::Signal(GestureSignal::SingleTapConfirmed(Point::new(2.0, 2.0))));

    steps.push(Step::Signal(GestureSignal::DoubleTap(center)));
    steps.push(Step::Checkpoint("after double tap"));
    steps.push(Step::Signal(GestureSignal::DoubleTap(center)));
    steps.push(Step::Checkpoint("after second double tap"));

    steps
}

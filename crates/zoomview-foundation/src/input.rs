use smallvec::SmallVec;
use zoomview_graphics::Point;

/// Pointer positions of one move event. Two inline slots cover a pinch.
pub type Pointers = SmallVec<[Point; 2]>;

/// Raw touch events as delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum TouchEvent {
    /// First pointer went down.
    Down(Point),
    /// One or more pointers moved. Only the first two are looked at.
    Move { pointers: Pointers },
    /// Last pointer went up.
    Up,
}

impl TouchEvent {
    pub fn down(x: f32, y: f32) -> Self {
        TouchEvent::Down(Point::new(x, y))
    }

    /// Move event with a single pointer.
    pub fn move_to(x: f32, y: f32) -> Self {
        let mut pointers = Pointers::new();
        pointers.push(Point::new(x, y));
        TouchEvent::Move { pointers }
    }

    /// Move event with two pointers.
    pub fn pinch(first: Point, second: Point) -> Self {
        let mut pointers = Pointers::new();
        pointers.push(first);
        pointers.push(second);
        TouchEvent::Move { pointers }
    }

    pub fn moved(points: impl IntoIterator<Item = Point>) -> Self {
        TouchEvent::Move {
            pointers: points.into_iter().collect(),
        }
    }

    pub fn pointer_count(&self) -> usize {
        match self {
            TouchEvent::Down(_) => 1,
            TouchEvent::Move { pointers } => pointers.len(),
            TouchEvent::Up => 0,
        }
    }
}

/// Output of the host's tap and fling recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSignal {
    SingleTapConfirmed(Point),
    DoubleTap(Point),
    /// Release velocity in px/sec and the number of pointers down at release.
    Fling { velocity: Point, pointer_count: usize },
}

impl GestureSignal {
    pub fn fling(vx: f32, vy: f32) -> Self {
        GestureSignal::Fling {
            velocity: Point::new(vx, vy),
            pointer_count: 1,
        }
    }
}

/// Anything the gesture state machine consumes.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureInput {
    Touch(TouchEvent),
    Signal(GestureSignal),
}

impl From<TouchEvent> for GestureInput {
    fn from(event: TouchEvent) -> Self {
        GestureInput::Touch(event)
    }
}

impl From<GestureSignal> for GestureInput {
    fn from(signal: GestureSignal) -> Self {
        GestureInput::Signal(signal)
    }
}

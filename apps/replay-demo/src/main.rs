mod script;
mod surface;

use script::Step;
use std::rc::Rc;
use std::time::Duration;
use surface::{LogListener, LoggingSurface};
use web_time::Instant;
use zoomview_core::FrameClock;
use zoomview_foundation::FRAME_INTERVAL_NANOS;
use zoomview_graphics::Size;
use zoomview_ui::{GestureImageController, Transform, ZoomConfig};

const VIEWPORT: Size = Size::new(1080.0, 1920.0);
const IMAGE: Size = Size::new(3000.0, 2000.0);

/// Upper bound on how long one fling may keep the frame loop alive.
const MAX_SETTLE: Duration = Duration::from_secs(10);

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== zoomview gesture replay ===");
    println!(
        "{}x{} image in a {}x{} viewport",
        IMAGE.width, IMAGE.height, VIEWPORT.width, VIEWPORT.height
    );
    println!("Set RUST_LOG=debug to see every listener notification");
    println!();

    let center = VIEWPORT.center();
    let surface = LoggingSurface::new(IMAGE, Transform::new(1.0, center.x, center.y));
    let clock = FrameClock::new();
    let controller =
        GestureImageController::new(surface, VIEWPORT, clock.clone(), ZoomConfig::default())?;
    let listener = Rc::new(LogListener);
    controller.set_listener(&listener);

    let started = Instant::now();
    for step in script::demo_session(center) {
        match step {
            Step::Touch(event) => {
                controller.on_touch_event(&event);
            }
            Step::Signal(signal) => {
                if !controller.on_gesture_signal(&signal) {
                    log::warn!("signal rejected: {signal:?}");
                }
            }
            Step::Settle => {
                let frames = settle(&clock, started);
                log::info!("frame loop idle after {frames} frames");
            }
            Step::Checkpoint(label) => print_transform(label, controller.transform()),
        }
    }

    let frames_drawn = controller.with_surface(LoggingSurface::frames_drawn);
    println!();
    println!("{frames_drawn} redraws requested");
    Ok(())
}

/// Drains frames in real time until nothing is scheduled.
fn settle(clock: &FrameClock, started: Instant) -> usize {
    let deadline = Instant::now() + MAX_SETTLE;
    let interval = Duration::from_nanos(FRAME_INTERVAL_NANOS);
    let mut frames = 0;
    while clock.has_frame_callbacks() {
        if Instant::now() >= deadline {
            log::warn!("frame loop still busy after {MAX_SETTLE:?}, giving up");
            break;
        }
        std::thread::sleep(interval);
        let frame_time_nanos = started.elapsed().as_nanos() as u64;
        clock.drain_frame_callbacks(frame_time_nanos);
        frames += 1;
    }
    frames
}

fn print_transform(label: &str, transform: Transform) {
    println!(
        "{label:<24} scale {:>6.3}  x {:>8.1}  y {:>8.1}",
        transform.scale, transform.x, transform.y
    );
}

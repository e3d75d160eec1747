use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use zoomview_core::FrameClock;
use zoomview_foundation::FRAME_INTERVAL_NANOS;
use zoomview_ui::{
    GestureImageController, GestureSignal, Point, RenderSurface, Size, TouchEvent, ZoomConfig,
};

const VIEWPORT: Size = Size::new(1080.0, 1920.0);
const PINCH_STEP_SAMPLES: &[usize] = &[16, 128];
const FLING_VELOCITY_SAMPLES: &[f32] = &[2_000.0, 8_000.0];

struct NullSurface {
    scale: f32,
    x: f32,
    y: f32,
}

impl RenderSurface for NullSurface {
    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn redraw(&mut self) {}

    fn image_width(&self) -> f32 {
        4000.0
    }

    fn image_height(&self) -> f32 {
        3000.0
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn scale(&self) -> f32 {
        self.scale
    }
}

fn controller(clock: &FrameClock) -> GestureImageController<NullSurface> {
    let center = VIEWPORT.center();
    let surface = NullSurface {
        scale: 1.0,
        x: center.x,
        y: center.y,
    };
    match GestureImageController::new(surface, VIEWPORT, clock.clone(), ZoomConfig::default()) {
        Ok(controller) => controller,
        Err(err) => panic!("bench controller: {err}"),
    }
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch");
    for &steps in PINCH_STEP_SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            let clock = FrameClock::new();
            let controller = controller(&clock);
            let anchor = VIEWPORT.center();
            b.iter(|| {
                controller.on_touch_event(&TouchEvent::down(anchor.x - 50.0, anchor.y));
                for step in 0..=steps {
                    let half = 50.0 + step as f32;
                    controller.on_touch_event(&TouchEvent::pinch(
                        Point::new(anchor.x - half, anchor.y),
                        Point::new(anchor.x + half, anchor.y),
                    ));
                }
                controller.on_touch_event(&TouchEvent::Up);
                black_box(controller.transform());
                controller.reset();
            });
        });
    }
    group.finish();
}

fn bench_fling(c: &mut Criterion) {
    let mut group = c.benchmark_group("fling");
    for &velocity in FLING_VELOCITY_SAMPLES {
        group.bench_with_input(
            BenchmarkId::from_parameter(velocity),
            &velocity,
            |b, &velocity| {
                let clock = FrameClock::new();
                let controller = controller(&clock);
                b.iter(|| {
                    controller.on_gesture_signal(&GestureSignal::fling(velocity, -velocity));
                    let mut frame_time = 0;
                    while clock.has_frame_callbacks() {
                        frame_time += FRAME_INTERVAL_NANOS;
                        clock.drain_frame_callbacks(frame_time);
                    }
                    black_box(controller.transform());
                    controller.reset();
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_pinch, bench_fling);
criterion_main!(benches);

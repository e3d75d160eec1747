use zoomview_graphics::Size;
use zoomview_testing::robot_assertions::{assert_approx_eq, assert_scale_within};
use zoomview_testing::{GestureRobot, RecordingSurface};
use zoomview_ui::{FlingConfig, FlingDecay, ZoomConfig};

const VIEWPORT: Size = Size::new(1000.0, 1000.0);
const ONE_SECOND_NANOS: u64 = 1_000_000_000;

#[test]
fn linear_fling_runs_ten_ticks_for_1650_pixels() {
    let fling = FlingConfig::default()
        .with_decay(FlingDecay::Linear { step: 30.0 })
        .with_stop_threshold(5.0)
        .with_nominal_frame_nanos(ONE_SECOND_NANOS);
    let surface = RecordingSurface::centered(Size::new(5000.0, 1000.0), VIEWPORT);
    let mut robot = GestureRobot::with_config(
        surface.clone(),
        VIEWPORT,
        ZoomConfig::default().with_fling(fling),
    )
    .expect("valid robot");
    robot.set_frame_interval(ONE_SECOND_NANOS);

    robot.down(500.0, 500.0).up();
    let start = surface.transform();
    let commits_before = surface.commit_count();

    assert!(robot.fling(300.0, 0.0));
    let frames = robot.run_until_idle();

    assert_eq!(frames, 10);
    assert_eq!(surface.commit_count() - commits_before, 10);
    assert_approx_eq(surface.transform().x - start.x, 1650.0, 1e-2, "fling displacement");
    assert_eq!(surface.transform().y, start.y);
}

#[test]
fn exponential_fling_settles_for_extreme_velocities() {
    for (vx, vy) in [(1.0e6, 0.0), (-40_000.0, 25_000.0), (12.0, -12.0)] {
        let surface = RecordingSurface::centered(Size::new(4000.0, 4000.0), VIEWPORT);
        let mut robot = GestureRobot::new(surface.clone(), VIEWPORT).expect("valid robot");
        robot.down(500.0, 500.0).up();

        assert!(robot.fling(vx, vy));
        let frames = robot.run_until_idle();
        assert!(frames > 0 && frames < 1_000, "{frames} frames for ({vx}, {vy})");

        let boundary = robot.controller().boundary();
        assert!(boundary.contains(surface.transform().position()));
        assert_scale_within(surface.transform().scale, 0.75, 5.0, "fling");
    }
}

// Host-side tests for orbit camera controls.

use profile_core::constants::ORBIT_MIN_DISTANCE;
use profile_core::*;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

fn controls() -> OrbitControls {
    OrbitControls::new(&Camera::default(), ControlsConfig::default())
}

fn idle_frame(dt: f32) -> FrameTime {
    FrameTime {
        elapsed: 0.0,
        delta: dt,
    }
}

#[test]
fn starts_from_the_initial_camera_position() {
    let c = controls();
    let s = c.spherical();
    assert!((s.radius - 8.0).abs() < 1e-6);
    assert!(s.theta.abs() < 1e-6);
    assert!((s.phi - FRAC_PI_2).abs() < 1e-6);
    assert!((c.eye() - glam::Vec3::new(0.0, 0.0, 8.0)).length() < 1e-5);
}

#[test]
fn spherical_round_trips_an_offset() {
    let v = glam::Vec3::new(1.5, -2.0, 3.0);
    let back = Spherical::from_offset(v).to_offset();
    assert!((back - v).length() < 1e-5);
}

#[test]
fn idle_autorotation_advances_azimuth_at_fixed_rate() {
    let mut c = controls();
    let n_seconds = 10.0;
    let steps = 600;
    let mut prev = c.azimuth();
    for _ in 0..steps {
        c.update(&idle_frame(n_seconds / steps as f32));
        // Auto-rotation turns the camera clockwise seen from above.
        assert!(c.azimuth() <= prev);
        prev = c.azimuth();
    }
    let expected = TAU / 60.0 * 0.5 * n_seconds;
    assert!((c.azimuth().abs() - expected).abs() < 1e-3);
}

#[test]
fn autorotation_completes_one_turn_every_two_minutes() {
    let c = controls();
    assert!((c.auto_rotation_angle(120.0) - TAU).abs() < 1e-4);
    assert!(c.auto_rotation_angle(60.0) < TAU);
}

#[test]
fn autorotation_preserves_distance_and_height() {
    let mut c = controls();
    for _ in 0..100 {
        c.update(&idle_frame(0.5));
    }
    let eye = c.eye();
    assert!((eye.length() - 8.0).abs() < 1e-4);
    assert!(eye.y.abs() < 1e-4);
}

#[test]
fn dragging_suspends_autorotation_immediately() {
    let mut c = controls();
    c.begin_rotate();
    assert_eq!(c.interaction(), Interaction::Rotating);
    let before = c.azimuth();
    c.update(&idle_frame(1.0));
    assert_eq!(c.azimuth(), before);
    c.end_interaction();
    c.update(&idle_frame(1.0));
    assert!(c.azimuth() < before);
}

#[test]
fn autorotation_can_be_disabled() {
    let mut c = OrbitControls::new(
        &Camera::default(),
        ControlsConfig {
            auto_rotate: false,
            ..ControlsConfig::default()
        },
    );
    c.update(&idle_frame(5.0));
    assert_eq!(c.azimuth(), 0.0);
}

#[test]
fn horizontal_drag_rotates_by_full_turn_per_viewport_height() {
    let mut c = controls();
    c.begin_rotate();
    c.rotate_by_pixels(400.0, 0.0, 800.0);
    assert!((c.azimuth() + PI).abs() < 1e-5);
}

#[test]
fn vertical_drag_is_clamped_away_from_poles() {
    let mut c = controls();
    c.begin_rotate();
    c.rotate_by_pixels(0.0, 10_000.0, 800.0);
    let phi = c.spherical().phi;
    assert!(phi > 0.0 && phi < 1e-3);
    c.rotate_by_pixels(0.0, -20_000.0, 800.0);
    let phi = c.spherical().phi;
    assert!(phi < PI && phi > PI - 1e-3);
}

#[test]
fn drag_without_press_is_ignored() {
    let mut c = controls();
    c.rotate_by_pixels(100.0, 100.0, 800.0);
    assert_eq!(c.azimuth(), 0.0);
}

#[test]
fn rotate_disabled_keeps_controls_idle() {
    let mut c = OrbitControls::new(
        &Camera::default(),
        ControlsConfig {
            enable_rotate: false,
            ..ControlsConfig::default()
        },
    );
    c.begin_rotate();
    assert_eq!(c.interaction(), Interaction::Idle);
}

#[test]
fn wheel_zooms_in_and_out_multiplicatively() {
    let mut c = controls();
    c.wheel(-100.0);
    assert!((c.distance() - 8.0 * 0.95).abs() < 1e-5);
    c.wheel(100.0);
    assert!((c.distance() - 8.0).abs() < 1e-5);
    c.wheel(0.0);
    assert!((c.distance() - 8.0).abs() < 1e-5);
}

#[test]
fn zoom_respects_distance_clamps() {
    let mut c = OrbitControls::new(
        &Camera::default(),
        ControlsConfig {
            min_distance: 7.0,
            max_distance: 9.0,
            ..ControlsConfig::default()
        },
    );
    for _ in 0..50 {
        c.wheel(-1.0);
    }
    assert!((c.distance() - 7.0).abs() < 1e-6);
    for _ in 0..50 {
        c.wheel(1.0);
    }
    assert!((c.distance() - 9.0).abs() < 1e-6);
}

#[test]
fn default_zoom_never_reaches_zero() {
    let mut c = controls();
    let mut cam = Camera::default();
    for i in 0..2500 {
        c.wheel(-1.0);
        assert!(c.distance() >= ORBIT_MIN_DISTANCE, "notch {}", i);
        c.apply_to(&mut cam);
        assert!(!cam.view_matrix().is_nan(), "notch {}", i);
        assert!(!cam.view_projection().is_nan(), "notch {}", i);
    }
    assert!((c.distance() - ORBIT_MIN_DISTANCE).abs() < 1e-6);
}

#[test]
fn zooming_back_out_after_hitting_the_floor() {
    let mut c = controls();
    for _ in 0..2500 {
        c.wheel(-1.0);
    }
    for _ in 0..100 {
        c.wheel(1.0);
    }
    // 0.5 / 0.95^100 is well past the starting distance.
    assert!(c.distance() > 8.0);
    let mut cam = Camera::default();
    c.apply_to(&mut cam);
    assert!(cam.view_matrix().is_finite());
}

#[test]
fn configured_min_distance_below_floor_is_raised() {
    let mut c = OrbitControls::new(
        &Camera::default(),
        ControlsConfig {
            min_distance: 0.01,
            ..ControlsConfig::default()
        },
    );
    c.begin_pinch(10.0);
    c.pinch_to(10_000.0);
    assert!((c.distance() - ORBIT_MIN_DISTANCE).abs() < 1e-6);
}

#[test]
fn long_idle_autorotation_keeps_azimuth_bounded() {
    let mut c = controls();
    for _ in 0..2000 {
        c.update(&idle_frame(100.0));
        assert!((-PI..=PI).contains(&c.azimuth()));
    }
    let before = c.azimuth();
    c.update(&idle_frame(1.0));
    let step = wrap_pi(c.azimuth() - before);
    assert!((step + TAU / 60.0 * 0.5).abs() < 1e-5, "step {}", step);
    assert!(c.eye().is_finite());
}

#[test]
fn zoom_disabled_ignores_wheel_and_pinch() {
    let mut c = OrbitControls::new(
        &Camera::default(),
        ControlsConfig {
            enable_zoom: false,
            ..ControlsConfig::default()
        },
    );
    c.wheel(-100.0);
    c.begin_pinch(100.0);
    c.pinch_to(200.0);
    assert!((c.distance() - 8.0).abs() < 1e-6);
}

#[test]
fn pinch_spreading_fingers_moves_closer() {
    let mut c = controls();
    c.begin_pinch(100.0);
    c.pinch_to(200.0);
    assert!((c.distance() - 4.0).abs() < 1e-5);
    c.pinch_to(100.0);
    assert!((c.distance() - 8.0).abs() < 1e-5);
    // Pinching also counts as interaction.
    let before = c.azimuth();
    c.update(&idle_frame(1.0));
    assert_eq!(c.azimuth(), before);
}

#[test]
fn pan_is_disabled_by_default() {
    let mut c = controls();
    c.begin_pan();
    assert_eq!(c.interaction(), Interaction::Idle);
    c.pan_by_pixels(100.0, 50.0, 800.0);
    let mut cam = Camera::default();
    c.apply_to(&mut cam);
    assert_eq!(cam.target, glam::Vec3::ZERO);
}

#[test]
fn pan_moves_target_when_enabled() {
    let mut c = OrbitControls::new(
        &Camera::default(),
        ControlsConfig {
            enable_pan: true,
            ..ControlsConfig::default()
        },
    );
    c.begin_pan();
    c.pan_by_pixels(100.0, 0.0, 800.0);
    let mut cam = Camera::default();
    c.apply_to(&mut cam);
    assert!(cam.target.x < 0.0);
    assert!((cam.eye - cam.target - glam::Vec3::new(0.0, 0.0, 8.0)).length() < 1e-5);
}

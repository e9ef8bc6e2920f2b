// Host-side tests for pure input functions.
// The front-end is wasm-only, so the pure-Rust module is included directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn tracker_reports_move_delta_for_pressed_pointer() {
    let mut pointers = PointerTracker::default();
    pointers.press(1, Vec2::new(10.0, 10.0));
    let delta = pointers.move_to(1, Vec2::new(14.0, 7.0));
    assert_eq!(delta, Some(Vec2::new(4.0, -3.0)));
    // Next delta is relative to the updated position.
    assert_eq!(pointers.move_to(1, Vec2::new(14.0, 8.0)), Some(Vec2::new(0.0, 1.0)));
}

#[test]
fn tracker_ignores_moves_of_unknown_pointers() {
    let mut pointers = PointerTracker::default();
    assert!(pointers.move_to(7, Vec2::ONE).is_none());
    assert!(pointers.is_empty());
}

#[test]
fn pressing_same_id_twice_does_not_duplicate() {
    let mut pointers = PointerTracker::default();
    pointers.press(3, Vec2::ZERO);
    pointers.press(3, Vec2::new(5.0, 5.0));
    assert_eq!(pointers.len(), 1);
    assert!(pointers.pinch_distance().is_none());
}

#[test]
fn release_reports_whether_pointer_was_tracked() {
    let mut pointers = PointerTracker::default();
    pointers.press(1, Vec2::ZERO);
    assert!(pointers.release(1));
    assert!(!pointers.release(1));
    assert!(pointers.is_empty());
}

#[test]
fn two_pointers_pinch() {
    let mut pointers = PointerTracker::default();
    pointers.press(1, Vec2::new(0.0, 0.0));
    pointers.press(2, Vec2::new(3.0, 4.0));
    assert_eq!(pointers.pinch_distance(), Some(5.0));
    assert_eq!(
        gesture_for(&pointers, BUTTON_PRIMARY, false),
        Gesture::Pinch(5.0)
    );
}

#[test]
fn single_pointer_gesture_follows_button() {
    let mut pointers = PointerTracker::default();
    pointers.press(1, Vec2::ZERO);
    assert_eq!(gesture_for(&pointers, BUTTON_PRIMARY, false), Gesture::Rotate);
    assert_eq!(gesture_for(&pointers, BUTTON_SECONDARY, false), Gesture::Pan);
    assert_eq!(gesture_for(&pointers, BUTTON_PRIMARY, true), Gesture::Pan);
    // Middle button falls back to rotate.
    assert_eq!(gesture_for(&pointers, 1, false), Gesture::Rotate);
}

#[test]
fn wheel_delta_normalises_lines_and_pages() {
    assert_eq!(wheel_delta_px(100.0, 0), 100.0);
    assert_eq!(wheel_delta_px(3.0, 1), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2), -800.0);
}

// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn left_button_rotates_and_modifier_pans() {
    assert_eq!(drag_mode(0, false), Some(DragMode::Rotate));
    assert_eq!(drag_mode(0, true), Some(DragMode::Pan));
    assert_eq!(drag_mode(2, false), Some(DragMode::Pan));
    assert_eq!(drag_mode(1, false), None);
}

#[test]
fn wheel_up_moves_closer() {
    assert_eq!(wheel_notches(-120.0), 1.0);
    assert_eq!(wheel_notches(3.0), -1.0);
    assert_eq!(wheel_notches(0.0), 0.0);
}

#[test]
fn drag_reports_deltas_between_moves() {
    let mut p = PointerState::default();
    assert!(p.drag(Vec2::new(5.0, 5.0)).is_none());

    p.start(DragMode::Rotate, Vec2::new(10.0, 20.0));
    let (mode, d) = p.drag(Vec2::new(13.0, 18.0)).expect("dragging");
    assert_eq!(mode, DragMode::Rotate);
    assert_eq!(d, Vec2::new(3.0, -2.0));
    let (_, d) = p.drag(Vec2::new(13.0, 28.0)).expect("dragging");
    assert_eq!(d, Vec2::new(0.0, 10.0));

    p.end();
    assert!(p.drag(Vec2::new(0.0, 0.0)).is_none());
}

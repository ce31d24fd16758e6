// Host-side tests for the keyboard debug panel and mouse mapping.

#![allow(dead_code)]
mod panel {
    include!("../src/panel.rs");
}
mod input {
    include!("../src/input.rs");
}

use haunt_core::{LightRig, PanelParam, AMBIENT_INTENSITY};
use panel::{action_for_key, KeyboardPanel, PanelAction, COARSE_STEPS};
use winit::dpi::PhysicalPosition;
use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

#[test]
fn keys_map_to_panel_actions() {
    assert_eq!(action_for_key(KeyCode::Tab, false), Some(PanelAction::Next));
    assert_eq!(action_for_key(KeyCode::ArrowUp, false), Some(PanelAction::Nudge(1.0)));
    assert_eq!(
        action_for_key(KeyCode::ArrowDown, true),
        Some(PanelAction::Nudge(-COARSE_STEPS))
    );
    assert_eq!(action_for_key(KeyCode::KeyQ, false), None);
}

#[test]
fn tab_cycles_through_every_parameter() {
    let mut rig = LightRig::default();
    let mut panel = KeyboardPanel::default();
    assert_eq!(panel.selected(), PanelParam::AmbientIntensity);
    for expected in PanelParam::ALL.iter().cycle().skip(1).take(PanelParam::ALL.len()) {
        panel.apply(PanelAction::Next, &mut rig);
        assert_eq!(panel.selected(), *expected);
    }
    assert_eq!(panel.selected(), PanelParam::AmbientIntensity);
}

#[test]
fn nudge_moves_selected_light_by_steps() {
    let mut rig = LightRig::default();
    let mut panel = KeyboardPanel::default();
    let v = panel.apply(PanelAction::Nudge(COARSE_STEPS), &mut rig);
    assert!((v - (AMBIENT_INTENSITY + 0.1)).abs() < 1e-4);
    assert_eq!(rig.ambient.intensity, v);
    assert!(panel.describe(&rig).starts_with("ambient intensity = "));
}

#[test]
fn nudge_stops_at_range_edges() {
    let mut rig = LightRig::default();
    let mut panel = KeyboardPanel::default();
    for _ in 0..50 {
        panel.apply(PanelAction::Nudge(-COARSE_STEPS), &mut rig);
    }
    assert_eq!(rig.ambient.intensity, 0.0);
}

#[test]
fn mouse_buttons_choose_drag_mode() {
    assert_eq!(input::drag_mode(MouseButton::Left, false), Some(input::DragMode::Rotate));
    assert_eq!(input::drag_mode(MouseButton::Left, true), Some(input::DragMode::Pan));
    assert_eq!(input::drag_mode(MouseButton::Right, false), Some(input::DragMode::Pan));
    assert_eq!(input::drag_mode(MouseButton::Middle, false), None);
}

#[test]
fn scroll_up_moves_closer() {
    assert_eq!(input::scroll_notches(MouseScrollDelta::LineDelta(0.0, 1.0)), 1.0);
    assert_eq!(input::scroll_notches(MouseScrollDelta::LineDelta(0.0, -2.0)), -2.0);
    let px = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 100.0));
    assert_eq!(input::scroll_notches(px), 2.0);
}

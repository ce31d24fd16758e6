use winit::event::{MouseButton, MouseScrollDelta};

const PIXELS_PER_LINE: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// Left button orbits (with Shift/Ctrl held it pans); right button pans.
pub fn drag_mode(button: MouseButton, modifier: bool) -> Option<DragMode> {
    match button {
        MouseButton::Left if modifier => Some(DragMode::Pan),
        MouseButton::Left => Some(DragMode::Rotate),
        MouseButton::Right => Some(DragMode::Pan),
        _ => None,
    }
}

/// Dolly notches for a scroll event; scrolling up moves closer.
pub fn scroll_notches(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(p) => (p.y / PIXELS_PER_LINE) as f32,
    }
}

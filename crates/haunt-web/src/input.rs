use glam::Vec2;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// Left button orbits (with a modifier held it pans); right button pans.
#[inline]
pub fn drag_mode(button: i16, modifier: bool) -> Option<DragMode> {
    match button {
        0 if modifier => Some(DragMode::Pan),
        0 => Some(DragMode::Rotate),
        2 => Some(DragMode::Pan),
        _ => None,
    }
}

/// One dolly notch per wheel event; scrolling up moves closer.
#[inline]
pub fn wheel_notches(delta_y: f64) -> f32 {
    if delta_y < 0.0 {
        1.0
    } else if delta_y > 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub mode: Option<DragMode>,
    pub last: Vec2,
}

impl PointerState {
    pub fn start(&mut self, mode: DragMode, at: Vec2) {
        self.mode = Some(mode);
        self.last = at;
    }

    /// Movement since the previous event while a drag is active.
    pub fn drag(&mut self, at: Vec2) -> Option<(DragMode, Vec2)> {
        let mode = self.mode?;
        let delta = at - self.last;
        self.last = at;
        Some((mode, delta))
    }

    pub fn end(&mut self) {
        self.mode = None;
    }
}

/// Pointer position in canvas backing pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    Vec2::new(
        x_css / w * canvas.width() as f32,
        y_css / h * canvas.height() as f32,
    )
}

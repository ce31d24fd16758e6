// Keyboard stand-in for the debug panel: Tab cycles the parameter,
// arrow keys nudge it by one step, or a hundred with Shift held.

use haunt_core::{LightRig, PanelParam};
use winit::keyboard::KeyCode;

pub const COARSE_STEPS: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelAction {
    Next,
    Nudge(f32),
}

pub fn action_for_key(code: KeyCode, shift: bool) -> Option<PanelAction> {
    let steps = if shift { COARSE_STEPS } else { 1.0 };
    match code {
        KeyCode::Tab => Some(PanelAction::Next),
        KeyCode::ArrowUp | KeyCode::ArrowRight => Some(PanelAction::Nudge(steps)),
        KeyCode::ArrowDown | KeyCode::ArrowLeft => Some(PanelAction::Nudge(-steps)),
        _ => None,
    }
}

pub struct KeyboardPanel {
    selected: PanelParam,
}

impl Default for KeyboardPanel {
    fn default() -> Self {
        Self {
            selected: PanelParam::ALL[0],
        }
    }
}

impl KeyboardPanel {
    pub fn selected(&self) -> PanelParam {
        self.selected
    }

    /// Apply `action`; returns the selected parameter's value afterwards.
    pub fn apply(&mut self, action: PanelAction, rig: &mut LightRig) -> f32 {
        match action {
            PanelAction::Next => {
                self.selected = self.selected().next();
                self.selected().get(rig)
            }
            PanelAction::Nudge(steps) => self.selected().nudge(rig, steps),
        }
    }

    pub fn describe(&self, rig: &LightRig) -> String {
        let param = self.selected();
        format!("{} = {:.3}", param.label(), param.get(rig))
    }
}

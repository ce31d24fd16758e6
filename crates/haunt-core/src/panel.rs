//! Debug panel parameters bound to the light rig.
//!
//! Frontends render these however suits them (DOM sliders on web, keyboard
//! nudges on desktop). All writes go through [`PanelParam::set`], which keeps
//! the rig inside the ranges the panel advertises.

use crate::constants::{PANEL_INTENSITY_RANGE, PANEL_POSITION_RANGE, PANEL_STEP};
use crate::error::SceneError;
use crate::lights::LightRig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelParam {
    AmbientIntensity,
    MoonIntensity,
    MoonX,
    MoonY,
    MoonZ,
}

impl PanelParam {
    pub const ALL: [PanelParam; 5] = [
        PanelParam::AmbientIntensity,
        PanelParam::MoonIntensity,
        PanelParam::MoonX,
        PanelParam::MoonY,
        PanelParam::MoonZ,
    ];

    /// Stable identifier, used for DOM ids.
    pub fn key(self) -> &'static str {
        match self {
            PanelParam::AmbientIntensity => "ambient-intensity",
            PanelParam::MoonIntensity => "moon-intensity",
            PanelParam::MoonX => "moon-x",
            PanelParam::MoonY => "moon-y",
            PanelParam::MoonZ => "moon-z",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelParam::AmbientIntensity => "ambient intensity",
            PanelParam::MoonIntensity => "moon intensity",
            PanelParam::MoonX => "moon x",
            PanelParam::MoonY => "moon y",
            PanelParam::MoonZ => "moon z",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, SceneError> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| SceneError::UnknownParam(key.to_string()))
    }

    /// Parse a `key=value` override such as `moon-x=-2.5`.
    pub fn parse_assignment(s: &str) -> Result<(Self, f32), SceneError> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| SceneError::InvalidConfig(format!("expected key=value, got {s:?}")))?;
        let param = Self::from_key(key.trim())?;
        let value = value
            .trim()
            .parse::<f32>()
            .map_err(|e| SceneError::InvalidConfig(format!("{}: {e}", param.key())))?;
        Ok((param, value))
    }

    pub fn range(self) -> (f32, f32) {
        match self {
            PanelParam::AmbientIntensity | PanelParam::MoonIntensity => PANEL_INTENSITY_RANGE,
            PanelParam::MoonX | PanelParam::MoonY | PanelParam::MoonZ => PANEL_POSITION_RANGE,
        }
    }

    pub fn step(self) -> f32 {
        PANEL_STEP
    }

    /// Clamp into range, then snap to the nearest step from the range minimum.
    pub fn constrain(self, value: f32) -> f32 {
        let (min, max) = self.range();
        if value.is_nan() {
            return min;
        }
        let step = self.step();
        let clamped = value.clamp(min, max);
        let snapped = min + ((clamped - min) / step).round() * step;
        snapped.clamp(min, max)
    }

    pub fn get(self, rig: &LightRig) -> f32 {
        match self {
            PanelParam::AmbientIntensity => rig.ambient.intensity,
            PanelParam::MoonIntensity => rig.moon.intensity,
            PanelParam::MoonX => rig.moon.position.x,
            PanelParam::MoonY => rig.moon.position.y,
            PanelParam::MoonZ => rig.moon.position.z,
        }
    }

    /// Write `value` (constrained) into the rig and return what was stored.
    pub fn set(self, rig: &mut LightRig, value: f32) -> f32 {
        let v = self.constrain(value);
        match self {
            PanelParam::AmbientIntensity => rig.ambient.intensity = v,
            PanelParam::MoonIntensity => rig.moon.intensity = v,
            PanelParam::MoonX => rig.moon.position.x = v,
            PanelParam::MoonY => rig.moon.position.y = v,
            PanelParam::MoonZ => rig.moon.position.z = v,
        }
        v
    }

    /// Move by `steps` increments from the current value.
    pub fn nudge(self, rig: &mut LightRig, steps: f32) -> f32 {
        let current = self.get(rig);
        self.set(rig, current + steps * self.step())
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

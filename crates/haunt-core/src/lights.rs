//! Light rig read by the renderer every frame.
//!
//! The ambient and moon lights are tweakable through the debug panel; the
//! door light is fixed and the ghost lights are driven by [`crate::ghosts`].

use crate::color::hex_linear;
use crate::constants::*;
use crate::ghosts::{ghost_positions, GHOST_COUNT};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Light shines from `position` towards the origin.
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the surface towards the light.
    pub fn direction(&self) -> Vec3 {
        self.position.try_normalize().unwrap_or(Vec3::Y)
    }
}

/// Light radiating from a point; contribution reaches zero at `distance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    pub distance: f32,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub moon: DirectionalLight,
    pub door: PointLight,
    pub ghosts: [PointLight; GHOST_COUNT],
}

impl Default for LightRig {
    fn default() -> Self {
        let start = ghost_positions(0.0);
        let ghost = |i: usize| PointLight {
            color: hex_linear(GHOST_COLORS[i]),
            intensity: GHOST_INTENSITY,
            distance: GHOST_DISTANCE,
            position: start[i],
        };
        Self {
            ambient: AmbientLight {
                color: hex_linear(MOON_COLOR),
                intensity: AMBIENT_INTENSITY,
            },
            moon: DirectionalLight {
                color: hex_linear(MOON_COLOR),
                intensity: MOON_INTENSITY,
                position: Vec3::from(MOON_POSITION),
            },
            door: PointLight {
                color: hex_linear(DOOR_LIGHT_COLOR),
                intensity: DOOR_LIGHT_INTENSITY,
                distance: DOOR_LIGHT_DISTANCE,
                position: Vec3::from(DOOR_LIGHT_POSITION),
            },
            ghosts: [ghost(0), ghost(1), ghost(2)],
        }
    }
}

impl LightRig {
    /// Move the ghost lights to where they are at elapsed time `t`.
    pub fn update_ghosts(&mut self, t: f64) {
        for (light, pos) in self.ghosts.iter_mut().zip(ghost_positions(t)) {
            light.position = pos;
        }
    }

    /// Door light followed by the ghosts, in the order the shader expects.
    pub fn point_lights(&self) -> [PointLight; GHOST_COUNT + 1] {
        [self.door, self.ghosts[0], self.ghosts[1], self.ghosts[2]]
    }
}

use crate::constants::{GRAVE_RADIUS_MIN, GRAVE_RADIUS_SPAN, GRAVE_TILT_SPAN, GRAVE_Y};
use glam::{Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

/// One headstone in the ring around the house.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GravePlacement {
    pub angle: f32,
    pub radius: f32,
    pub x: f32,
    pub z: f32,
    /// Lean about the Y and Z axes, each in [-0.2, 0.2) radians.
    pub tilt_y: f32,
    pub tilt_z: f32,
}

impl GravePlacement {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, GRAVE_Y, self.z)
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(glam::EulerRot::XYZ, 0.0, self.tilt_y, self.tilt_z)
    }
}

/// Scatter `count` graves between radius 3 and 9 around the origin.
///
/// The same seed always yields the same layout.
pub fn generate_graves(count: usize, seed: u64) -> Vec<GravePlacement> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let angle = rng.gen::<f32>() * TAU;
            let radius = GRAVE_RADIUS_MIN + rng.gen::<f32>() * GRAVE_RADIUS_SPAN;
            let tilt_y = (rng.gen::<f32>() - 0.5) * GRAVE_TILT_SPAN;
            let tilt_z = (rng.gen::<f32>() - 0.5) * GRAVE_TILT_SPAN;
            GravePlacement {
                // gen::<f32>() * TAU can round up to TAU itself
                angle: if angle >= TAU { 0.0 } else { angle },
                radius,
                x: angle.sin() * radius,
                z: angle.cos() * radius,
                tilt_y,
                tilt_z,
            }
        })
        .collect()
}

//! Closed-form ghost light motion.
//!
//! Each ghost is a point light circling the house. Positions are a pure
//! function of elapsed time, so there is no state to advance or reset: the
//! frame loop simply evaluates [`ghost_positions`] with the current clock.
//! Time stays in f64 through the trigonometry; only the result is narrowed,
//! so motion stays smooth after hours of uptime.

use glam::{DVec3, Vec3};

pub const GHOST_COUNT: usize = 3;

/// Inner ghost: radius 4 orbit, bobbing once every ~2s.
#[inline]
pub fn ghost_a(t: f64) -> Vec3 {
    let angle = t * 0.5;
    DVec3::new(angle.cos() * 4.0, (t * 3.0).sin(), angle.sin() * 4.0).as_vec3()
}

/// Middle ghost: radius 5 orbit in the opposite direction.
#[inline]
pub fn ghost_b(t: f64) -> Vec3 {
    let angle = -t * 0.32;
    DVec3::new(
        angle.cos() * 5.0,
        (t * 4.0).sin() + (t * 2.5).sin(),
        angle.sin() * 5.0,
    )
    .as_vec3()
}

/// Outer ghost: slow orbit whose x and z radii wobble independently in [6, 8].
#[inline]
pub fn ghost_c(t: f64) -> Vec3 {
    let angle = -t * 0.18;
    let radius_x = 7.0 + (t * 0.32).sin();
    let radius_z = 7.0 + (t * 0.5).sin();
    DVec3::new(
        angle.cos() * radius_x,
        (t * 4.0).sin() + (t * 2.5).sin(),
        angle.sin() * radius_z,
    )
    .as_vec3()
}

pub fn ghost_positions(t: f64) -> [Vec3; GHOST_COUNT] {
    [ghost_a(t), ghost_b(t), ghost_c(t)]
}

// Host-side tests for the closed-form ghost motion.

use haunt_core::{ghost_a, ghost_b, ghost_c, ghost_positions, LightRig};

fn sample_times() -> impl Iterator<Item = f64> {
    (0..2000).map(|i| i as f64 * 0.137)
}

fn horizontal(p: glam::Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

#[test]
fn ghost_a_stays_on_radius_four_circle() {
    for t in sample_times() {
        let p = ghost_a(t);
        assert!(
            (p.x * p.x + p.z * p.z - 16.0).abs() < 1e-3,
            "t={t} x²+z²={}",
            p.x * p.x + p.z * p.z
        );
        assert!(p.y.abs() <= 1.0 + 1e-6);
    }
}

#[test]
fn ghost_b_stays_on_radius_five_circle() {
    for t in sample_times() {
        let r = horizontal(ghost_b(t));
        assert!((r - 5.0).abs() < 1e-4, "t={t} r={r}");
    }
}

#[test]
fn ghost_c_radius_wobbles_between_six_and_eight() {
    for t in sample_times() {
        let r = horizontal(ghost_c(t));
        assert!((6.0 - 1e-4..=8.0 + 1e-4).contains(&r), "t={t} r={r}");
    }
}

#[test]
fn ghosts_start_at_known_positions() {
    let [a, b, c] = ghost_positions(0.0);
    assert_eq!(a, glam::Vec3::new(4.0, 0.0, 0.0));
    assert_eq!(b, glam::Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(c, glam::Vec3::new(7.0, 0.0, 0.0));
}

#[test]
fn motion_is_deterministic() {
    for t in [0.0, 1.5, 12.25, 600.0] {
        assert_eq!(ghost_positions(t), ghost_positions(t));
    }
}

#[test]
fn motion_stays_smooth_after_twelve_hours() {
    let start = 12.0 * 3600.0;
    for frame in 0..120 {
        let t = start + frame as f64 / 60.0;
        let exact = (t * 4.0).sin() + (t * 2.5).sin();
        let y = ghost_b(t).y as f64;
        assert!((y - exact).abs() < 1e-5, "t={t} y={y} exact={exact}");
    }
    // consecutive frames see distinct positions
    let a = ghost_a(start);
    let b = ghost_a(start + 1.0 / 60.0);
    assert!((a - b).length() > 1e-3);
}

#[test]
fn ghost_b_and_c_orbit_against_ghost_a() {
    let t = 0.5;
    assert!(ghost_a(t).z > 0.0);
    assert!(ghost_b(t).z < 0.0);
    assert!(ghost_c(t).z < 0.0);
}

#[test]
fn light_rig_follows_ghost_motion() {
    let mut rig = LightRig::default();
    rig.update_ghosts(3.0);
    let expected = ghost_positions(3.0);
    for (light, pos) in rig.ghosts.iter().zip(expected) {
        assert_eq!(light.position, pos);
    }
    // door light is untouched
    assert_eq!(rig.door, LightRig::default().door);
    assert_eq!(rig.point_lights()[0], rig.door);
}

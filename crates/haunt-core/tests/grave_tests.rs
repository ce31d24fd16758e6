// Host-side tests for the graveyard layout generator.

use haunt_core::{generate_graves, GRAVE_COUNT, GRAVE_Y};
use std::f32::consts::TAU;

#[test]
fn produces_fifty_graves_in_the_ring() {
    let graves = generate_graves(GRAVE_COUNT, 7);
    assert_eq!(graves.len(), 50);
    for g in &graves {
        assert!((3.0..=9.0).contains(&g.radius), "radius {}", g.radius);
        assert!((0.0..TAU).contains(&g.angle), "angle {}", g.angle);
        let r = (g.x * g.x + g.z * g.z).sqrt();
        assert!((r - g.radius).abs() < 1e-4);
        assert!(g.tilt_y.abs() <= 0.2 && g.tilt_z.abs() <= 0.2);
        assert_eq!(g.position().y, GRAVE_Y);
    }
}

#[test]
fn same_seed_same_layout() {
    assert_eq!(generate_graves(50, 1234), generate_graves(50, 1234));
}

#[test]
fn different_seeds_differ() {
    assert_ne!(generate_graves(50, 1), generate_graves(50, 2));
}

#[test]
fn graves_stay_clear_of_the_house() {
    // the walls span [-2, 2] on x and z; the ring starts at radius 3
    for g in generate_graves(200, 99) {
        assert!(g.x.abs() > 2.0 || g.z.abs() > 2.0);
    }
}

#[test]
fn zero_count_is_empty() {
    assert!(generate_graves(0, 5).is_empty());
}

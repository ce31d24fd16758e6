// Host-side tests for seed parsing and canvas sizing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod query {
    include!("../src/query.rs");
}
mod viewport {
    include!("../src/viewport.rs");
}

use query::parse_seed;
use viewport::backing_size;

#[test]
fn seed_is_read_from_search_string() {
    assert_eq!(parse_seed("?seed=7"), Some(7));
    assert_eq!(parse_seed("seed=123"), Some(123));
    assert_eq!(parse_seed("?debug&seed=99&x=1"), Some(99));
}

#[test]
fn missing_or_bad_seed_falls_back() {
    assert_eq!(parse_seed(""), None);
    assert_eq!(parse_seed("?"), None);
    assert_eq!(parse_seed("?seed="), None);
    assert_eq!(parse_seed("?seed=ghost"), None);
    assert_eq!(parse_seed("?seeds=4"), None);
    assert_eq!(parse_seed("?seed=-1"), None);
}

#[test]
fn first_valid_seed_wins() {
    assert_eq!(parse_seed("?seed=abc&seed=5"), Some(5));
    assert_eq!(parse_seed("?seed=1&seed=2"), Some(1));
}

#[test]
fn backing_size_scales_by_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 1.5), (1200, 900));
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
    assert_eq!(backing_size(100.0, 50.0, 2.0), (200, 100));
}

#[test]
fn backing_size_never_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(10.0, 10.0, 0.0), (10, 10));
}

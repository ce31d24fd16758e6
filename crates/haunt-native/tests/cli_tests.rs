// Host-side tests for command-line parsing.

#![allow(dead_code)]
mod cli {
    include!("../src/cli.rs");
}

use clap::Parser;
use cli::Cli;
use haunt_core::{LightRig, PanelParam, DEFAULT_GRAVE_SEED, GRAVE_COUNT};

#[test]
fn defaults_match_the_stock_scene() {
    let cli = Cli::try_parse_from(["haunt-native"]).expect("parse");
    let config = cli.scene_config();
    assert_eq!(config.grave_seed, DEFAULT_GRAVE_SEED);
    assert_eq!(config.grave_count, GRAVE_COUNT);
    assert_eq!(config.asset_root, ".");
    assert!(config.grass);
}

#[test]
fn flags_flow_into_scene_config() {
    let cli = Cli::try_parse_from([
        "haunt-native",
        "--assets",
        "/srv/static",
        "--seed",
        "7",
        "--graves",
        "12",
        "--no-grass",
    ])
    .expect("parse");
    let config = cli.scene_config();
    assert_eq!(config.grave_seed, 7);
    assert_eq!(config.grave_count, 12);
    assert_eq!(config.asset_root, "/srv/static");
    assert!(!config.grass);
    assert_eq!(
        config.asset_url("textures/door/color.jpg"),
        "/srv/static/textures/door/color.jpg"
    );
}

#[test]
fn rejects_non_numeric_seed() {
    assert!(Cli::try_parse_from(["haunt-native", "--seed", "boo"]).is_err());
}

#[test]
fn light_overrides_go_through_panel_rules() {
    let cli = Cli::try_parse_from([
        "haunt-native",
        "--light",
        "moon-x=-2",
        "--light",
        "ambient-intensity=3",
    ])
    .expect("parse");
    assert_eq!(
        cli.lights,
        vec![(PanelParam::MoonX, -2.0), (PanelParam::AmbientIntensity, 3.0)]
    );
    let mut rig = LightRig::default();
    cli.apply_lights(&mut rig);
    assert!((rig.moon.position.x + 2.0).abs() < 1e-4);
    // clamped to the slider range
    assert_eq!(rig.ambient.intensity, 1.0);
}

#[test]
fn rejects_unknown_light_parameter() {
    assert!(Cli::try_parse_from(["haunt-native", "--light", "fog=1"]).is_err());
    assert!(Cli::try_parse_from(["haunt-native", "--light", "moon-y"]).is_err());
}

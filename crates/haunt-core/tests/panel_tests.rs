// Host-side tests for the debug panel parameters.

use haunt_core::{LightRig, PanelParam, SceneError};

#[test]
fn intensities_clamp_to_unit_range() {
    let mut rig = LightRig::default();
    assert_eq!(PanelParam::AmbientIntensity.set(&mut rig, 3.0), 1.0);
    assert_eq!(rig.ambient.intensity, 1.0);
    assert_eq!(PanelParam::MoonIntensity.set(&mut rig, -0.5), 0.0);
    assert_eq!(rig.moon.intensity, 0.0);
}

#[test]
fn moon_position_clamps_to_five() {
    let mut rig = LightRig::default();
    assert_eq!(PanelParam::MoonX.set(&mut rig, 12.0), 5.0);
    assert_eq!(PanelParam::MoonY.set(&mut rig, -12.0), -5.0);
    let z = PanelParam::MoonZ.set(&mut rig, 1.25);
    assert!((z - 1.25).abs() < 1e-5);
    assert_eq!(rig.moon.position.x, 5.0);
    assert_eq!(rig.moon.position.y, -5.0);
}

#[test]
fn values_snap_to_step() {
    let mut rig = LightRig::default();
    let v = PanelParam::AmbientIntensity.set(&mut rig, 0.12345);
    assert!((v - 0.123).abs() < 1e-5, "{v}");
}

#[test]
fn nan_falls_back_to_minimum() {
    let mut rig = LightRig::default();
    assert_eq!(PanelParam::MoonX.set(&mut rig, f32::NAN), -5.0);
}

#[test]
fn nudge_moves_by_steps() {
    let mut rig = LightRig::default();
    let before = PanelParam::MoonIntensity.get(&rig);
    let after = PanelParam::MoonIntensity.nudge(&mut rig, 10.0);
    assert!((after - (before + 0.01)).abs() < 1e-5);
}

#[test]
fn defaults_sit_inside_panel_ranges() {
    let rig = LightRig::default();
    for p in PanelParam::ALL {
        let (min, max) = p.range();
        let v = p.get(&rig);
        assert!((min..=max).contains(&v), "{:?}={v}", p);
    }
}

#[test]
fn keys_round_trip_and_unknown_is_error() {
    for p in PanelParam::ALL {
        assert_eq!(PanelParam::from_key(p.key()).unwrap(), p);
    }
    assert!(matches!(
        PanelParam::from_key("fog-density"),
        Err(SceneError::UnknownParam(_))
    ));
}

#[test]
fn assignments_parse_key_and_value() {
    let (p, v) = PanelParam::parse_assignment("moon-x=-2.5").unwrap();
    assert_eq!(p, PanelParam::MoonX);
    assert_eq!(v, -2.5);
    let (p, v) = PanelParam::parse_assignment(" ambient-intensity = 0.3 ").unwrap();
    assert_eq!(p, PanelParam::AmbientIntensity);
    assert!((v - 0.3).abs() < 1e-6);

    assert!(matches!(
        PanelParam::parse_assignment("moon-x"),
        Err(SceneError::InvalidConfig(_))
    ));
    assert!(matches!(
        PanelParam::parse_assignment("moon-x=far"),
        Err(SceneError::InvalidConfig(_))
    ));
    assert!(matches!(
        PanelParam::parse_assignment("fog-density=1"),
        Err(SceneError::UnknownParam(_))
    ));
}

#[test]
fn next_cycles_through_all() {
    let mut p = PanelParam::AmbientIntensity;
    for _ in 0..PanelParam::ALL.len() {
        p = p.next();
    }
    assert_eq!(p, PanelParam::AmbientIntensity);
}

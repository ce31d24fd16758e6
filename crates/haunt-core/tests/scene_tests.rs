// Host-side tests for scene assembly and the texture readiness gate.

use glam::Vec3;
use haunt_core::{
    texture_manifest, AssetBundle, HauntedHouse, SceneConfig, SceneError, TextureSet,
    TextureSlot, GRAVE_COUNT,
};

fn build_default() -> HauntedHouse {
    HauntedHouse::build(SceneConfig::default()).expect("default config is valid")
}

#[test]
fn scene_has_expected_nodes() {
    let house = build_default();
    let scene = &house.scene;
    // walls + roof + door + 4 bushes + graves + floor
    assert_eq!(scene.nodes.len(), 3 + 4 + GRAVE_COUNT + 1);
    for name in ["walls", "roof", "door", "floor", "bush-3", "grave-49"] {
        assert!(scene.node(name).is_some(), "missing {name}");
    }
    // bushes and graves share geometry
    let bush_geos: Vec<usize> = scene
        .nodes
        .iter()
        .filter(|n| n.name.starts_with("bush"))
        .map(|n| n.geometry)
        .collect();
    assert!(bush_geos.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(scene.geometries.len(), 6);
}

#[test]
fn house_layout_matches_dimensions() {
    let house = build_default();
    let walls = house.scene.node("walls").unwrap();
    assert_eq!(walls.transform.translation, Vec3::new(0.0, 1.25, 0.0));
    let roof = house.scene.node("roof").unwrap();
    assert_eq!(roof.transform.translation, Vec3::new(0.0, 3.0, 0.0));
    let door = house.scene.node("door").unwrap();
    assert!((door.transform.translation.z - 2.01).abs() < 1e-6);

    // floor plane is laid flat, facing up
    let floor = house.scene.node("floor").unwrap();
    let up = floor.transform.matrix().transform_vector3(Vec3::Z);
    assert!((up - Vec3::Y).length() < 1e-5);
}

#[test]
fn graves_in_scene_match_generator() {
    let house = build_default();
    assert_eq!(house.graves.len(), GRAVE_COUNT);
    let first = house.scene.node("grave-0").unwrap();
    assert_eq!(first.transform.translation, house.graves[0].position());
}

#[test]
fn only_the_door_is_transparent_and_drawn_last() {
    let house = build_default();
    let scene = &house.scene;
    let order = scene.draw_order();
    assert_eq!(order.len(), scene.nodes.len());
    let last = &scene.nodes[*order.last().unwrap()];
    assert_eq!(last.name, "door");
    let door_mat = &scene.materials[last.material];
    assert!(door_mat.transparent);
    assert_eq!(door_mat.textures, Some(TextureSet::Door));
    assert!((door_mat.displacement_scale - 0.1).abs() < 1e-6);
    assert_eq!(
        scene.materials.iter().filter(|m| m.transparent).count(),
        1
    );
}

#[test]
fn ground_without_grass_is_flat_colored() {
    let house = HauntedHouse::build(SceneConfig {
        grass: false,
        ..SceneConfig::default()
    })
    .unwrap();
    let floor = house.scene.node("floor").unwrap();
    let mat = &house.scene.materials[floor.material];
    assert!(mat.textures.is_none());
    assert_eq!(house.config.texture_sets(), vec![TextureSet::Door, TextureSet::Bricks]);
}

#[test]
fn oversized_graveyard_is_rejected() {
    let err = HauntedHouse::build(SceneConfig {
        grave_count: 100_000,
        ..SceneConfig::default()
    })
    .err()
    .expect("should fail");
    assert!(matches!(err, SceneError::InvalidConfig(_)));
}

#[test]
fn controls_orbit_the_camera_target() {
    let house = build_default();
    assert_eq!(house.controls.target, house.camera.target);
}

#[test]
fn frame_moves_ghosts_only() {
    let mut house = build_default();
    let door_before = house.lights.door;
    let moon_before = house.lights.moon;
    house.frame(2.0);
    assert_eq!(house.lights.ghosts[0].position, haunt_core::ghost_a(2.0));
    assert_eq!(house.lights.door, door_before);
    assert_eq!(house.lights.moon, moon_before);
}

#[test]
fn fog_factor_ramps_between_near_and_far() {
    let fog = build_default().scene.fog;
    assert_eq!(fog.factor(0.5), 0.0);
    assert!((fog.factor(8.0) - 0.5).abs() < 1e-6);
    assert_eq!(fog.factor(30.0), 1.0);
    assert!(fog.factor(4.0) < fog.factor(5.0));
}

#[test]
fn manifest_lists_every_map() {
    let manifest = texture_manifest(&SceneConfig::default().texture_sets());
    assert_eq!(manifest.len(), 7 + 4 + 4);
    assert!(manifest
        .iter()
        .any(|r| r.path == "textures/door/ambientOcclusion.jpg"));
    assert!(manifest
        .iter()
        .all(|r| r.path == r.set.path(r.slot)));
}

#[test]
fn readiness_gate_reports_missing_paths() {
    let manifest = texture_manifest(&[TextureSet::Bricks]);
    let mut bundle = AssetBundle::new();
    match bundle.ensure_ready(&manifest) {
        Err(SceneError::MissingAssets(paths)) => {
            assert_eq!(paths.len(), 4);
            assert_eq!(paths[0], "textures/bricks/color.jpg");
            let message = SceneError::MissingAssets(paths.clone()).to_string();
            assert!(message.starts_with("4 texture assets missing"));
            for path in &paths {
                assert!(message.contains(path.as_str()), "{message}");
            }
        }
        other => panic!("unexpected {other:?}"),
    }

    for r in &manifest[..3] {
        bundle.insert(r.path.clone(), vec![1, 2, 3]);
    }
    match bundle.ensure_ready(&manifest) {
        Err(SceneError::MissingAsset(path)) => assert_eq!(path, "textures/bricks/roughness.jpg"),
        other => panic!("unexpected {other:?}"),
    }

    // empty payloads count as missing
    bundle.insert("textures/bricks/roughness.jpg", Vec::new());
    assert!(bundle.ensure_ready(&manifest).is_err());

    bundle.insert("textures/bricks/roughness.jpg", vec![9]);
    assert!(bundle.ensure_ready(&manifest).is_ok());
    assert_eq!(
        bundle.bytes_for(TextureSet::Bricks, TextureSlot::Roughness),
        Some(&[9u8][..])
    );
}

#[test]
fn asset_urls_join_cleanly() {
    let mut cfg = SceneConfig::default();
    assert_eq!(cfg.asset_url("textures/a.jpg"), "textures/a.jpg");
    cfg.asset_root = "/static/".into();
    assert_eq!(cfg.asset_url("textures/a.jpg"), "/static/textures/a.jpg");
}

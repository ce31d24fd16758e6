// Host-side tests for uniform packing (no GPU needed)

use glam::{Mat4, Vec3, Vec4};
use haunt_core::{HauntedHouse, SceneConfig, DOOR_DISPLACEMENT_SCALE, DOOR_LIGHT_DISTANCE};
use haunt_render::uniforms::{FrameUniforms, MaterialUniforms, NodeUniforms, POINT_LIGHTS};

fn house() -> HauntedHouse {
    HauntedHouse::build(SceneConfig::default()).expect("default config is valid")
}

#[test]
fn uniform_blocks_are_vec4_aligned() {
    assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
    assert_eq!(std::mem::size_of::<NodeUniforms>(), 128);
    assert_eq!(std::mem::size_of::<MaterialUniforms>(), 48);
    assert_eq!(POINT_LIGHTS, 4);
}

#[test]
fn frame_uniforms_pack_door_light_first() {
    let h = house();
    let u = FrameUniforms::from_house(&h);
    let door = h.lights.door;
    assert_eq!(u.point_pos[0], door.position.extend(DOOR_LIGHT_DISTANCE).to_array());
    for (i, ghost) in h.lights.ghosts.iter().enumerate() {
        assert_eq!(u.point_pos[i + 1][..3], ghost.position.to_array());
        assert_eq!(u.point_color[i + 1][3], 1.0);
    }
}

#[test]
fn frame_uniforms_follow_ghosts_and_panel() {
    let mut h = house();
    let before = FrameUniforms::from_house(&h);
    h.frame(2.5);
    h.lights.ambient.intensity = 0.0;
    let after = FrameUniforms::from_house(&h);
    assert_ne!(before.point_pos[1], after.point_pos[1]);
    assert_eq!(before.point_pos[0], after.point_pos[0]);
    assert_eq!(after.ambient[..3], [0.0, 0.0, 0.0]);
}

#[test]
fn frame_uniforms_carry_camera_and_fog() {
    let h = house();
    let u = FrameUniforms::from_house(&h);
    assert_eq!(u.camera_pos[..3], h.camera.eye.to_array());
    assert_eq!(u.fog_range[0], h.scene.fog.near);
    assert_eq!(u.fog_range[1], h.scene.fog.far);
    let view = Mat4::from_cols_array_2d(&u.view);
    // the orbit target sits straight ahead of the camera
    let target = view * h.camera.target.extend(1.0);
    assert!(target.x.abs() < 1e-4 && target.y.abs() < 1e-4);
    assert!(target.z < 0.0);
}

#[test]
fn floor_normal_matrix_points_up() {
    let h = house();
    let floor = h.scene.node("floor").expect("floor node");
    let u = NodeUniforms::from_transform(&floor.transform);
    let n = Mat4::from_cols_array_2d(&u.normal) * Vec4::new(0.0, 0.0, 1.0, 0.0);
    assert!((n.truncate().normalize() - Vec3::Y).length() < 1e-5);
}

#[test]
fn door_material_displaces_and_uses_normal_map() {
    let h = house();
    let door = h.scene.node("door").expect("door node");
    let desc = &h.scene.materials[door.material];
    let u = MaterialUniforms::from_desc(desc, true);
    assert_eq!(u.params[2], DOOR_DISPLACEMENT_SCALE);
    assert_eq!(u.flags[0], 1.0);
    assert_eq!(u.base_color, [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn grass_material_repeats_uvs() {
    let h = house();
    let floor = h.scene.node("floor").expect("floor node");
    let u = MaterialUniforms::from_desc(&h.scene.materials[floor.material], false);
    assert_eq!(u.params[3], haunt_core::GRASS_REPEAT);
    assert_eq!(u.flags[0], 0.0);
}

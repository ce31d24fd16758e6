//! Scene assembly: the house, its garden and the graveyard as plain data.
//!
//! [`HauntedHouse::build`] produces everything the renderer uploads once
//! (geometry, materials, node transforms) plus the mutable per-frame state
//! (lights, camera, orbit controls) that [`HauntedHouse::frame`] advances.

use crate::assets::TextureSet;
use crate::camera::{Camera, OrbitControls};
use crate::color::hex_linear;
use crate::constants::*;
use crate::error::SceneError;
use crate::geometry::{box_mesh, cone_mesh, plane_mesh, sphere_mesh, MeshData};
use crate::graves::{generate_graves, GravePlacement};
use crate::lights::LightRig;
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

/// Upper bound on graves so per-node uniforms stay within one buffer.
pub const MAX_GRAVES: usize = 512;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub grave_seed: u64,
    pub grave_count: usize,
    /// Prefix prepended to manifest paths when fetching textures.
    pub asset_root: String,
    /// Texture the ground with the grass set instead of a flat color.
    pub grass: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grave_seed: DEFAULT_GRAVE_SEED,
            grave_count: GRAVE_COUNT,
            asset_root: String::new(),
            grass: true,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.grave_count > MAX_GRAVES {
            return Err(SceneError::InvalidConfig(format!(
                "grave_count {} exceeds {}",
                self.grave_count, MAX_GRAVES
            )));
        }
        Ok(())
    }

    pub fn texture_sets(&self) -> Vec<TextureSet> {
        let mut sets = vec![TextureSet::Door, TextureSet::Bricks];
        if self.grass {
            sets.push(TextureSet::Grass);
        }
        sets
    }

    /// Join the asset root and a manifest path with exactly one separator.
    pub fn asset_url(&self, path: &str) -> String {
        if self.asset_root.is_empty() {
            return path.to_string();
        }
        format!("{}/{}", self.asset_root.trim_end_matches('/'), path)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Parameters of a standard (metal/rough) material.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDesc {
    pub name: &'static str,
    /// Linear-space base color, multiplied with the color map if any.
    pub color: Vec3,
    pub textures: Option<TextureSet>,
    pub transparent: bool,
    pub displacement_scale: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub uv_repeat: f32,
}

impl MaterialDesc {
    fn solid(name: &'static str, hex: u32) -> Self {
        Self {
            name,
            color: hex_linear(hex),
            textures: None,
            transparent: false,
            displacement_scale: 0.0,
            roughness: 1.0,
            metalness: 0.0,
            uv_repeat: 1.0,
        }
    }

    fn textured(name: &'static str, set: TextureSet) -> Self {
        Self {
            name,
            color: Vec3::ONE,
            textures: Some(set),
            ..Self::solid(name, 0xffffff)
        }
    }
}

#[derive(Clone, Debug)]
pub struct MeshNode {
    pub name: String,
    pub geometry: usize,
    pub material: usize,
    pub transform: Transform,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Fog {
    /// Fog blend factor at view depth `depth`: 0 clear, 1 fully fogged.
    /// Smoothstep between `near` and `far`, same as the scene shader.
    pub fn factor(&self, depth: f32) -> f32 {
        let t = ((depth - self.near) / (self.far - self.near)).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    }
}

/// Static part of the scene, uploaded once.
#[derive(Clone, Debug)]
pub struct Scene {
    pub geometries: Vec<MeshData>,
    pub materials: Vec<MaterialDesc>,
    pub nodes: Vec<MeshNode>,
    pub fog: Fog,
    pub background: Vec3,
}

impl Scene {
    /// Opaque nodes first, then transparent ones, so blending sees the walls.
    pub fn draw_order(&self) -> Vec<usize> {
        let (mut opaque, transparent): (Vec<usize>, Vec<usize>) = (0..self.nodes.len())
            .partition(|&i| !self.materials[self.nodes[i].material].transparent);
        opaque.extend(transparent);
        opaque
    }

    pub fn node(&self, name: &str) -> Option<&MeshNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

pub struct HauntedHouse {
    pub config: SceneConfig,
    pub scene: Scene,
    pub graves: Vec<GravePlacement>,
    pub lights: LightRig,
    pub camera: Camera,
    pub controls: OrbitControls,
}

impl HauntedHouse {
    pub fn build(config: SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let graves = generate_graves(config.grave_count, config.grave_seed);
        let scene = assemble(&config, &graves);
        log::info!(
            "[scene] nodes={} geometries={} materials={} graves={} seed={}",
            scene.nodes.len(),
            scene.geometries.len(),
            scene.materials.len(),
            graves.len(),
            config.grave_seed
        );
        let camera = Camera::default();
        let controls = OrbitControls::new(camera.target);
        Ok(Self {
            config,
            scene,
            graves,
            lights: LightRig::default(),
            camera,
            controls,
        })
    }

    /// Per-frame update at elapsed time `t` seconds.
    pub fn frame(&mut self, t: f64) {
        self.lights.update_ghosts(t);
        self.controls.update(&mut self.camera);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }
}

fn assemble(config: &SceneConfig, graves: &[GravePlacement]) -> Scene {
    let mut geometries = Vec::new();
    let mut materials = Vec::new();
    let mut nodes = Vec::new();
    let mut add_geometry = |mesh: MeshData| {
        geometries.push(mesh);
        geometries.len() - 1
    };
    let mut add_material = |m: MaterialDesc| {
        materials.push(m);
        materials.len() - 1
    };

    // walls
    let walls_geo = add_geometry(box_mesh(WALL_SIZE, WALL_HEIGHT, WALL_SIZE));
    let walls_mat = add_material(MaterialDesc::textured("walls", TextureSet::Bricks));
    nodes.push(MeshNode {
        name: "walls".into(),
        geometry: walls_geo,
        material: walls_mat,
        transform: Transform::at(Vec3::new(0.0, WALL_HEIGHT / 2.0, 0.0)),
    });

    // roof
    let roof_geo = add_geometry(cone_mesh(ROOF_RADIUS, ROOF_HEIGHT, 4));
    let roof_mat = add_material(MaterialDesc::solid("roof", ROOF_COLOR));
    nodes.push(MeshNode {
        name: "roof".into(),
        geometry: roof_geo,
        material: roof_mat,
        transform: Transform {
            translation: Vec3::new(0.0, WALL_HEIGHT + ROOF_HEIGHT / 2.0, 0.0),
            rotation: Quat::from_rotation_y(FRAC_PI_4),
            scale: Vec3::ONE,
        },
    });

    // door
    let door_geo = add_geometry(plane_mesh(DOOR_SIZE, DOOR_SIZE, DOOR_SEGMENTS, DOOR_SEGMENTS));
    let door_mat = add_material(MaterialDesc {
        transparent: true,
        displacement_scale: DOOR_DISPLACEMENT_SCALE,
        ..MaterialDesc::textured("door", TextureSet::Door)
    });
    nodes.push(MeshNode {
        name: "door".into(),
        geometry: door_geo,
        material: door_mat,
        transform: Transform::at(Vec3::new(0.0, 1.0, DOOR_Z)),
    });

    // bushes share one sphere and one material
    let bush_geo = add_geometry(sphere_mesh(1.0, BUSH_SEGMENTS, BUSH_SEGMENTS));
    let bush_mat = add_material(MaterialDesc::solid("bush", BUSH_COLOR));
    for (i, (scale, pos)) in BUSHES.iter().enumerate() {
        nodes.push(MeshNode {
            name: format!("bush-{i}"),
            geometry: bush_geo,
            material: bush_mat,
            transform: Transform {
                translation: Vec3::from(*pos),
                rotation: Quat::IDENTITY,
                scale: Vec3::splat(*scale),
            },
        });
    }

    // graves
    let grave_geo = add_geometry(box_mesh(GRAVE_SIZE[0], GRAVE_SIZE[1], GRAVE_SIZE[2]));
    let grave_mat = add_material(MaterialDesc::solid("grave", GRAVE_COLOR));
    for (i, g) in graves.iter().enumerate() {
        nodes.push(MeshNode {
            name: format!("grave-{i}"),
            geometry: grave_geo,
            material: grave_mat,
            transform: Transform {
                translation: g.position(),
                rotation: g.rotation(),
                scale: Vec3::ONE,
            },
        });
    }

    // floor
    let floor_geo = add_geometry(plane_mesh(FLOOR_SIZE, FLOOR_SIZE, 1, 1));
    let floor_mat = add_material(if config.grass {
        MaterialDesc {
            uv_repeat: GRASS_REPEAT,
            ..MaterialDesc::textured("floor", TextureSet::Grass)
        }
    } else {
        MaterialDesc::solid("floor", FLOOR_COLOR)
    });
    nodes.push(MeshNode {
        name: "floor".into(),
        geometry: floor_geo,
        material: floor_mat,
        transform: Transform {
            translation: Vec3::ZERO,
            rotation: Quat::from_rotation_x(-FRAC_PI_2),
            scale: Vec3::ONE,
        },
    });

    let fog_color = hex_linear(FOG_COLOR);
    Scene {
        geometries,
        materials,
        nodes,
        fog: Fog {
            color: fog_color,
            near: FOG_NEAR,
            far: FOG_FAR,
        },
        background: fog_color,
    }
}

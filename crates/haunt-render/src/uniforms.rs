//! CPU-side mirrors of the WGSL uniform blocks in `scene.wgsl`.
//!
//! Everything is packed as `vec4`/`mat4` so the Rust and WGSL layouts agree
//! without padding fields.

use bytemuck::{Pod, Zeroable};
use haunt_core::{HauntedHouse, MaterialDesc, Transform, GHOST_COUNT};

pub const POINT_LIGHTS: usize = GHOST_COUNT + 1;

/// Per-frame data shared by every draw (group 0).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub fog_color: [f32; 4],
    /// x = near, y = far
    pub fog_range: [f32; 4],
    /// rgb premultiplied by intensity
    pub ambient: [f32; 4],
    pub moon_dir: [f32; 4],
    pub moon_color: [f32; 4],
    /// xyz = position, w = cutoff distance
    pub point_pos: [[f32; 4]; POINT_LIGHTS],
    /// rgb premultiplied by intensity, w = decay exponent
    pub point_color: [[f32; 4]; POINT_LIGHTS],
}

impl FrameUniforms {
    pub fn from_house(house: &HauntedHouse) -> Self {
        let fog = house.scene.fog;
        let lights = &house.lights;
        let moon_dir = lights.moon.direction();
        let moon = lights.moon.color * lights.moon.intensity;
        let ambient = lights.ambient.color * lights.ambient.intensity;
        let points = lights.point_lights();
        Self {
            view_proj: house.camera.view_proj().to_cols_array_2d(),
            view: house.camera.view_matrix().to_cols_array_2d(),
            camera_pos: house.camera.eye.extend(1.0).to_array(),
            fog_color: fog.color.extend(1.0).to_array(),
            fog_range: [fog.near, fog.far, 0.0, 0.0],
            ambient: ambient.extend(0.0).to_array(),
            moon_dir: moon_dir.extend(0.0).to_array(),
            moon_color: moon.extend(0.0).to_array(),
            point_pos: points.map(|p| p.position.extend(p.distance).to_array()),
            point_color: points.map(|p| (p.color * p.intensity).extend(1.0).to_array()),
        }
    }
}

/// Per-node transform (group 1, dynamic offset).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct NodeUniforms {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
}

impl NodeUniforms {
    pub fn from_transform(transform: &Transform) -> Self {
        let model = transform.matrix();
        Self {
            model: model.to_cols_array_2d(),
            normal: model.inverse().transpose().to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct MaterialUniforms {
    /// rgb base color, a = opacity
    pub base_color: [f32; 4],
    /// roughness, metalness, displacement scale, uv repeat
    pub params: [f32; 4],
    /// x = normal map bound
    pub flags: [f32; 4],
}

impl MaterialUniforms {
    pub fn from_desc(desc: &MaterialDesc, normal_map: bool) -> Self {
        Self {
            base_color: desc.color.extend(1.0).to_array(),
            params: [
                desc.roughness,
                desc.metalness,
                desc.displacement_scale,
                desc.uv_repeat,
            ],
            flags: [if normal_map { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

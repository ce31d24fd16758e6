//! Indexed triangle meshes for the primitives the scene is built from.
//!
//! Layouts follow the usual scene-library conventions (counter-clockwise front
//! faces, planes facing +Z, cones and spheres around +Y). UVs use the GPU
//! convention of `v = 0` at the top edge of the image.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let i = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        });
        i
    }
}

/// Axis-aligned box centred on the origin, one quad per face.
pub fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) * 0.5;
    // (normal, u axis, v axis) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let center = n * n.abs().dot(half);
        let hu = u.abs().dot(half);
        let hv = v.abs().dot(half);
        let base = mesh.vertices.len() as u32;
        for (s, t) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            let p = center + u * (s * hu) + v * (t * hv);
            mesh.push(p, n, [(s + 1.0) * 0.5, (1.0 - t) * 0.5]);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 3, base, base + 3, base + 2]);
    }
    mesh
}

/// Subdivided rectangle in the XY plane facing +Z.
pub fn plane_mesh(width: f32, height: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let gx = width_segments.max(1);
    let gy = height_segments.max(1);
    let mut mesh = MeshData::default();
    for iy in 0..=gy {
        let fy = iy as f32 / gy as f32;
        let y = height * 0.5 - fy * height;
        for ix in 0..=gx {
            let fx = ix as f32 / gx as f32;
            let x = fx * width - width * 0.5;
            mesh.push(Vec3::new(x, y, 0.0), Vec3::Z, [fx, fy]);
        }
    }
    let row = gx + 1;
    for iy in 0..gy {
        for ix in 0..gx {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = ix + 1 + row * (iy + 1);
            let d = ix + 1 + row * iy;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// UV sphere around the origin.
pub fn sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    let mut grid = Vec::with_capacity(hs as usize + 1);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let mut row = Vec::with_capacity(ws as usize + 1);
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let p = Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            );
            let n = p.try_normalize().unwrap_or(Vec3::Y);
            row.push(mesh.push(p, n, [u, v]));
        }
        grid.push(row);
    }
    for iy in 0..hs as usize {
        for ix in 0..ws as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs as usize - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Cone around +Y, apex at `height / 2`, closed at the base.
///
/// With four radial segments this is the square pyramid used for the roof.
pub fn cone_mesh(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segs = radial_segments.max(3);
    let half = height * 0.5;
    let slope = radius / height;
    let mut mesh = MeshData::default();

    // torso: row 0 is the apex, row 1 the base ring
    let mut rows: [Vec<u32>; 2] = [Vec::new(), Vec::new()];
    for (y, row) in rows.iter_mut().enumerate() {
        let v = y as f32;
        let r = v * radius;
        for x in 0..=segs {
            let u = x as f32 / segs as f32;
            let theta = u * TAU;
            let (sin, cos) = theta.sin_cos();
            let p = Vec3::new(r * sin, half - v * height, r * cos);
            let n = Vec3::new(sin, slope, cos).normalize();
            row.push(mesh.push(p, n, [u, v]));
        }
    }
    for x in 0..segs as usize {
        let b = rows[1][x];
        let c = rows[1][x + 1];
        let d = rows[0][x + 1];
        mesh.indices.extend_from_slice(&[b, c, d]);
    }

    // base cap
    let center_start = mesh.vertices.len() as u32;
    for x in 1..=segs {
        let u = x as f32 / segs as f32;
        mesh.push(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y, [u, 0.5]);
    }
    let ring_start = mesh.vertices.len() as u32;
    for x in 0..=segs {
        let theta = x as f32 / segs as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.push(
            Vec3::new(radius * sin, -half, radius * cos),
            Vec3::NEG_Y,
            [cos * 0.5 + 0.5, sin * 0.5 + 0.5],
        );
    }
    for x in 0..segs {
        let c = center_start + x;
        let i = ring_start + x;
        mesh.indices.extend_from_slice(&[i + 1, i, c]);
    }
    mesh
}

//! Forward renderer for the haunted house scene.
//!
//! Owns the wgpu device and surface; uploads the static scene once from a
//! [`haunt_core::HauntedHouse`] and an [`haunt_core::AssetBundle`], then draws
//! it each frame with the current lights and camera.

pub mod error;
pub mod helpers;
pub mod material;
pub mod mesh;
pub mod renderer;
pub mod texture;
pub mod uniforms;

pub use error::RenderError;
pub use renderer::Renderer;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

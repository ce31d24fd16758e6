//! Material bind groups: one uniform block, seven maps and a sampler.
//!
//! Binding `1 + slot.index()` holds the map for each [`TextureSlot`]. Slots a
//! material has no map for are bound to a neutral 1x1 texture, so the shader
//! samples every slot unconditionally.

use crate::error::RenderError;
use crate::texture::{create_repeat_sampler, load_texture, neutral_texture, GpuTexture};
use crate::uniforms::MaterialUniforms;
use haunt_core::{AssetBundle, MaterialDesc, SceneError, TextureSet, TextureSlot};
use std::collections::HashMap;
use wgpu::util::DeviceExt;

const SAMPLER_BINDING: u32 = 1 + TextureSlot::ALL.len() as u32;

pub fn material_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let visibility = wgpu::ShaderStages::VERTEX_FRAGMENT;
    let mut entries = vec![wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }];
    for slot in TextureSlot::ALL {
        entries.push(wgpu::BindGroupLayoutEntry {
            binding: 1 + slot.index() as u32,
            visibility,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        });
    }
    entries.push(wgpu::BindGroupLayoutEntry {
        binding: SAMPLER_BINDING,
        visibility,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    });
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("material_bgl"),
        entries: &entries,
    })
}

/// Every decoded texture of the loaded sets plus the neutral fallbacks.
pub struct TextureLibrary {
    maps: HashMap<(TextureSet, TextureSlot), GpuTexture>,
    neutral: Vec<GpuTexture>,
    sampler: wgpu::Sampler,
}

impl TextureLibrary {
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        sets: &[TextureSet],
        assets: &AssetBundle,
    ) -> Result<Self, RenderError> {
        let mut maps = HashMap::new();
        for &set in sets {
            for &slot in set.slots() {
                let path = set.path(slot);
                let bytes = assets
                    .bytes_for(set, slot)
                    .ok_or_else(|| SceneError::MissingAsset(path.clone()))?;
                maps.insert((set, slot), load_texture(device, queue, &path, bytes, slot)?);
            }
        }
        let neutral = TextureSlot::ALL
            .iter()
            .map(|&slot| neutral_texture(device, queue, slot))
            .collect();
        log::info!("[texture] uploaded {} maps", maps.len());
        Ok(Self {
            maps,
            neutral,
            sampler: create_repeat_sampler(device),
        })
    }

    pub fn has(&self, set: Option<TextureSet>, slot: TextureSlot) -> bool {
        set.is_some_and(|s| self.maps.contains_key(&(s, slot)))
    }

    pub fn view(&self, set: Option<TextureSet>, slot: TextureSlot) -> &wgpu::TextureView {
        set.and_then(|s| self.maps.get(&(s, slot)))
            .map_or(&self.neutral[slot.index()].view, |t| &t.view)
    }
}

pub struct GpuMaterial {
    pub bind_group: wgpu::BindGroup,
    pub transparent: bool,
    _uniforms: wgpu::Buffer,
}

impl GpuMaterial {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        desc: &MaterialDesc,
        library: &TextureLibrary,
    ) -> Self {
        let normal_map = library.has(desc.textures, TextureSlot::Normal);
        let uniforms = MaterialUniforms::from_desc(desc, normal_map);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(desc.name),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let mut entries = vec![wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }];
        for slot in TextureSlot::ALL {
            entries.push(wgpu::BindGroupEntry {
                binding: 1 + slot.index() as u32,
                resource: wgpu::BindingResource::TextureView(library.view(desc.textures, slot)),
            });
        }
        entries.push(wgpu::BindGroupEntry {
            binding: SAMPLER_BINDING,
            resource: wgpu::BindingResource::Sampler(&library.sampler),
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(desc.name),
            layout,
            entries: &entries,
        });
        Self {
            bind_group,
            transparent: desc.transparent,
            _uniforms: buffer,
        }
    }
}

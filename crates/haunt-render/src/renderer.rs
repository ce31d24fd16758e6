use crate::error::RenderError;
use crate::helpers::{aligned_stride, create_depth_texture, make_scene_pipeline};
use crate::material::{material_bind_group_layout, GpuMaterial, TextureLibrary};
use crate::mesh::{vertex_layout, GpuMesh};
use crate::uniforms::{FrameUniforms, NodeUniforms};
use crate::SCENE_WGSL;
use haunt_core::{texture_manifest, AssetBundle, HauntedHouse};
use std::num::NonZeroU64;
use wgpu::util::DeviceExt;

struct Draw {
    node_offset: u32,
    mesh: usize,
    material: usize,
}

pub struct Renderer<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // sRGB view of the swapchain image; may differ from config.format on WebGPU
    view_format: wgpu::TextureFormat,
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,

    opaque_pipeline: wgpu::RenderPipeline,
    transparent_pipeline: wgpu::RenderPipeline,

    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    node_bind_group: wgpu::BindGroup,
    _node_buffer: wgpu::Buffer,

    meshes: Vec<GpuMesh>,
    materials: Vec<GpuMaterial>,
    _textures: TextureLibrary,
    draws: Vec<Draw>,
    clear_color: wgpu::Color,
}

impl<'w> Renderer<'w> {
    /// Acquire a device for `surface` and upload the static scene.
    ///
    /// Fails before touching the GPU if `assets` does not hold every texture
    /// the scene's configuration asks for.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'w>,
        width: u32,
        height: u32,
        house: &HauntedHouse,
        assets: &AssetBundle,
    ) -> Result<Self, RenderError> {
        let sets = house.config.texture_sets();
        assets.ensure_ready(&texture_manifest(&sets))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
        let info = adapter.get_info();
        log::info!("[gpu] adapter={} backend={:?}", info.name, info.backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("haunt_device"),
                    required_features: wgpu::Features::empty(),
                    // WebGL2 only guarantees the downlevel limits
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;
        let view_format = format.add_srgb_suffix();
        let alpha_mode = if caps.alpha_modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
            wgpu::CompositeAlphaMode::Opaque
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let (depth_texture, depth_view) = create_depth_texture(&device, config.width, config.height);

        // Group 0: per-frame camera, fog and lights
        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        // Group 1: node transforms, one aligned slot per node, static after upload
        let nodes = &house.scene.nodes;
        let node_size = std::mem::size_of::<NodeUniforms>() as u64;
        let stride = aligned_stride(
            node_size,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        ) as usize;
        let mut node_bytes = vec![0u8; stride * nodes.len().max(1)];
        for (i, node) in nodes.iter().enumerate() {
            let packed = NodeUniforms::from_transform(&node.transform);
            let start = i * stride;
            node_bytes[start..start + node_size as usize]
                .copy_from_slice(bytemuck::bytes_of(&packed));
        }
        let node_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("node_uniforms"),
            contents: &node_bytes,
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let node_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("node_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(node_size),
                },
                count: None,
            }],
        });
        let node_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("node_bg"),
            layout: &node_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &node_buffer,
                    offset: 0,
                    size: NonZeroU64::new(node_size),
                }),
            }],
        });

        // Group 2: materials
        let textures = TextureLibrary::load(&device, &queue, &sets, assets)?;
        let material_bgl = material_bind_group_layout(&device);
        let materials: Vec<GpuMaterial> = house
            .scene
            .materials
            .iter()
            .map(|m| GpuMaterial::new(&device, &material_bgl, m, &textures))
            .collect();
        let meshes: Vec<GpuMesh> = house
            .scene
            .geometries
            .iter()
            .enumerate()
            .map(|(i, g)| GpuMesh::upload(&device, &format!("mesh_{i}"), g))
            .collect();
        let draws: Vec<Draw> = house
            .scene
            .draw_order()
            .into_iter()
            .map(|i| Draw {
                node_offset: (i * stride) as u32,
                mesh: nodes[i].geometry,
                material: nodes[i].material,
            })
            .collect();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&frame_bgl, &node_bgl, &material_bgl],
            push_constant_ranges: &[],
        });
        let opaque_pipeline = make_scene_pipeline(
            &device,
            "opaque_pipeline",
            &layout,
            &shader,
            vertex_layout(),
            view_format,
            None,
            true,
        );
        let transparent_pipeline = make_scene_pipeline(
            &device,
            "transparent_pipeline",
            &layout,
            &shader,
            vertex_layout(),
            view_format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        let bg = house.scene.background;
        log::info!(
            "[gpu] ready format={:?} view={:?} {}x{} draws={}",
            format,
            view_format,
            config.width,
            config.height,
            draws.len()
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            depth_texture,
            depth_view,
            opaque_pipeline,
            transparent_pipeline,
            frame_buffer,
            frame_bind_group,
            node_bind_group,
            _node_buffer: node_buffer,
            meshes,
            materials,
            _textures: textures,
            draws,
            clear_color: wgpu::Color {
                r: bg.x as f64,
                g: bg.y as f64,
                b: bg.z as f64,
                a: 1.0,
            },
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture.destroy();
        let (depth_texture, depth_view) = create_depth_texture(&self.device, width, height);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;
    }

    /// Reconfigure after a lost or outdated surface. Returns false when the
    /// error cannot be recovered from.
    pub fn recover(&mut self, err: &wgpu::SurfaceError) -> bool {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                self.surface.configure(&self.device, &self.config);
                true
            }
            wgpu::SurfaceError::OutOfMemory => false,
            _ => true,
        }
    }

    pub fn render(&mut self, house: &HauntedHouse) -> Result<(), wgpu::SurfaceError> {
        let uniforms = FrameUniforms::from_house(house);
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.opaque_pipeline);
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            let mut blending = false;
            for draw in &self.draws {
                let material = &self.materials[draw.material];
                if material.transparent != blending {
                    blending = material.transparent;
                    rpass.set_pipeline(if blending {
                        &self.transparent_pipeline
                    } else {
                        &self.opaque_pipeline
                    });
                }
                let mesh = &self.meshes[draw.mesh];
                rpass.set_bind_group(1, &self.node_bind_group, &[draw.node_offset]);
                rpass.set_bind_group(2, &material.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

//! Image decoding and texture upload.

use crate::error::RenderError;
use crate::helpers::create_texture_2d;
use haunt_core::TextureSlot;
use image::imageops::{self, FilterType};
use image::RgbaImage;

pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

pub fn decode_rgba(path: &str, bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|source| RenderError::Decode {
            path: path.to_string(),
            source,
        })
}

/// Full mip chain down to 1x1, starting with `base`.
pub fn mip_chain(base: RgbaImage) -> Vec<RgbaImage> {
    let mut levels = vec![base];
    while let Some(last) = levels.last() {
        let (w, h) = last.dimensions();
        if w <= 1 && h <= 1 {
            break;
        }
        let next = imageops::resize(last, (w / 2).max(1), (h / 2).max(1), FilterType::Triangle);
        levels.push(next);
    }
    levels
}

pub fn texture_format(slot: TextureSlot) -> wgpu::TextureFormat {
    if slot.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

/// Texel a missing map samples as, chosen so it leaves the material unchanged.
pub fn neutral_texel(slot: TextureSlot) -> [u8; 4] {
    match slot {
        TextureSlot::Height => [0, 0, 0, 255],
        TextureSlot::Normal => [128, 128, 255, 255],
        _ => [255, 255, 255, 255],
    }
}

pub fn upload_levels(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    label: &str,
    levels: &[RgbaImage],
    format: wgpu::TextureFormat,
) -> GpuTexture {
    let (width, height) = levels.first().map_or((1, 1), |l| l.dimensions());
    let (texture, view) = create_texture_2d(
        device,
        label,
        width,
        height,
        levels.len().max(1) as u32,
        format,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    for (mip, level) in levels.iter().enumerate() {
        let (w, h) = level.dimensions();
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: mip as u32,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            level.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
        );
    }
    GpuTexture { texture, view }
}

pub fn load_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: &str,
    bytes: &[u8],
    slot: TextureSlot,
) -> Result<GpuTexture, RenderError> {
    let image = decode_rgba(path, bytes)?;
    log::debug!("[texture] {} {}x{}", path, image.width(), image.height());
    let levels = mip_chain(image);
    Ok(upload_levels(device, queue, path, &levels, texture_format(slot)))
}

pub fn neutral_texture(device: &wgpu::Device, queue: &wgpu::Queue, slot: TextureSlot) -> GpuTexture {
    let pixel = RgbaImage::from_pixel(1, 1, image::Rgba(neutral_texel(slot)));
    let label = format!("neutral_{}", slot.file_stem());
    upload_levels(device, queue, &label, &[pixel], texture_format(slot))
}

/// Trilinear sampler that tiles, so repeated ground textures wrap.
pub fn create_repeat_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("repeat_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

use glam::Vec3;

/// Split a `0xRRGGBB` literal into sRGB components in [0, 1].
#[inline]
pub fn hex_srgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Hex color converted to linear space, which is what the shaders light with.
#[inline]
pub fn hex_linear(hex: u32) -> Vec3 {
    let s = hex_srgb(hex);
    Vec3::new(srgb_to_linear(s.x), srgb_to_linear(s.y), srgb_to_linear(s.z))
}

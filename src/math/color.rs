/// Split a `0xRRGGBB` literal into normalized sRGB channels.
pub const fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// sRGB transfer function inverse, per channel.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Hex color straight to linear RGB, the space the shader lights in.
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    hex_to_rgb(hex).map(srgb_to_linear)
}

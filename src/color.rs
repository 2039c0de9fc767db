use palette::{Hsluv, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Fixed colours
// ---------------------------------------------------------------------------

/// Line colour of the daily series (`#E3242B`).
pub const LINE_RED: RGBColor = RGBColor(0xE3, 0x24, 0x2B);

/// The ten-colour categorical palette (`tab10`).
pub const TAB10: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// `n` colours cycling through [`TAB10`].
pub fn tab10(n: usize) -> Vec<RGBColor> {
    TAB10.iter().copied().cycle().take(n).collect()
}

// ---------------------------------------------------------------------------
// HUSL palette generator
// ---------------------------------------------------------------------------

/// Starting hue offset, as a fraction of the colour wheel.
const HUSL_HUE_OFFSET: f32 = 0.01;
const HUSL_SATURATION: f32 = 0.9;
const HUSL_LIGHTNESS: f32 = 0.65;

/// Generates `n` colours with evenly spaced hues at constant perceptual
/// lightness (HSLuv).
pub fn husl_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = ((i as f32 / n as f32 + HUSL_HUE_OFFSET) % 1.0) * 359.0;
            let husl: Hsluv = Hsluv::new(hue, HUSL_SATURATION * 99.0, HUSL_LIGHTNESS * 99.0);
            let rgb: Srgb = husl.into_color();
            to_rgb(rgb)
        })
        .collect()
}

fn to_rgb(rgb: Srgb) -> RGBColor {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
}

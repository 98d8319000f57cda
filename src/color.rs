// src/color.rs

//! Canvas colors and coverage blending.

use serde::{Deserialize, Serialize};

/// A color usable as canvas background or text foreground.
///
/// Deserializes from `"white"`, `"black"`, or `{"rgb": [r, g, b]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const fn to_rgb(self) -> [u8; 3] {
        match self {
            Color::White => [255, 255, 255],
            Color::Black => [0, 0, 0],
            Color::Rgb(r, g, b) => [r, g, b],
        }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.to_rgb())
    }
}

/// Blends `fg` over `dst` with the given coverage in `0.0..=1.0`.
///
/// Coverage outside that range is clamped; zero coverage leaves `dst` untouched.
pub fn blend(dst: [u8; 3], fg: [u8; 3], coverage: f32) -> [u8; 3] {
    let a = coverage.clamp(0.0, 1.0);
    if a <= 0.0 {
        return dst;
    }
    let mix = |d: u8, f: u8| -> u8 {
        let v = d as f32 + (f as f32 - d as f32) * a;
        v.round().clamp(0.0, 255.0) as u8
    };
    [mix(dst[0], fg[0]), mix(dst[1], fg[1]), mix(dst[2], fg[2])]
}

//! RGBA colors carried by draw commands.

use bytemuck::{Pod, Zeroable};

/// A straight-alpha RGBA color with `f32` channels in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from float channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit channels.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Returns the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Packs the color as `0xAABBGGRR`, the layout most immediate-mode
    /// renderers use for vertex colors.
    pub fn to_packed_abgr(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        (channel(self.a) << 24) | (channel(self.b) << 16) | (channel(self.g) << 8) | channel(self.r)
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_abgr() {
        assert_eq!(Color::WHITE.to_packed_abgr(), 0xFFFF_FFFF);
        assert_eq!(Color::from_rgba8(0x12, 0x34, 0x56, 0x78).to_packed_abgr(), 0x7856_3412);
        assert_eq!(Color::new(2.0, -1.0, 0.0, 1.0).to_packed_abgr(), 0xFF00_00FF);
    }

    #[test]
    fn lerp_clamps_t() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 3.0), Color::WHITE);
    }
}

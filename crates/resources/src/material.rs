//! Material definitions.

use glam::Vec4;

use crate::Color;

/// PBR material properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base color (albedo)
    pub base_color: Color,
    /// Metallic factor (0.0 = dielectric, 1.0 = metal)
    pub metallic: f32,
    /// Roughness factor (0.0 = smooth, 1.0 = rough)
    pub roughness: f32,
    /// Ambient occlusion factor
    pub ao: f32,
    /// Emissive color
    pub emissive: Vec4,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Color::WHITE,
            metallic: 0.0,
            roughness: 0.5,
            ao: 1.0,
            emissive: Vec4::ZERO,
        }
    }
}

impl Material {
    /// Replace the base color, leaving every other property alone.
    pub fn set_color(&mut self, color: Color) {
        self.base_color = color;
    }

    /// Current base color.
    pub fn color(&self) -> Color {
        self.base_color
    }
}

//! Linear RGBA colors.

use std::fmt;

use glam::Vec4;

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub Vec4);

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);

    /// Create an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a color with explicit alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(Vec4::new(r, g, b, a))
    }

    /// Red component
    pub fn r(&self) -> f32 {
        self.0.x
    }

    /// Green component
    pub fn g(&self) -> f32 {
        self.0.y
    }

    /// Blue component
    pub fn b(&self) -> f32 {
        self.0.z
    }

    /// Alpha component
    pub fn a(&self) -> f32 {
        self.0.w
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self(v)
    }
}

impl From<Color> for Vec4 {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGBA({:.3}, {:.3}, {:.3}, {:.3})",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Color::WHITE.a(), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::RED.to_string(), "RGBA(1.000, 0.000, 0.000, 1.000)");
        assert_eq!(
            Color::rgba(0.25, 0.5, 0.75, 0.0).to_string(),
            "RGBA(0.250, 0.500, 0.750, 0.000)"
        );
    }

    #[test]
    fn test_vec4_conversion() {
        let v: Vec4 = Color::BLUE.into();
        assert_eq!(v, Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(Color::from(v), Color::BLUE);
    }
}

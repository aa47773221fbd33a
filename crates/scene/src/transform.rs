//! Transform component for scene objects.
//!
//! [`Transform`] holds the position, rotation, and scale of a scene
//! object. Besides the builder setters it exposes the two in-place edits
//! behaviors use: multiplicative scaling and axis-angle rotation.
//!
//! # Example
//!
//! ```
//! use cubes_scene::Transform;
//! use glam::{Quat, Vec3};
//!
//! let mut t = Transform::new();
//! t.scale_by(2.0);
//! t.scale_by(3.0);
//! t.rotate_y(90.0);
//!
//! assert!(t.scale.abs_diff_eq(Vec3::splat(6.0), 1e-5));
//! assert!(t.rotation.abs_diff_eq(Quat::from_rotation_y(90f32.to_radians()), 1e-5));
//! ```

use glam::{Mat4, Quat, Vec3};

/// A transform representing position, rotation, and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Rotation as a quaternion
    pub rotation: Quat,
    /// Per-axis scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Multiply the current scale by `factor` on every axis.
    ///
    /// Repeated calls compound: scaling by 2 then 3 leaves a factor of 6.
    pub fn scale_by(&mut self, factor: f32) {
        self.scale *= factor;
    }

    /// Rotate by `degrees` around `axis`, expressed in local space.
    ///
    /// Rotations about the same axis accumulate additively.
    pub fn rotate_around(&mut self, axis: Vec3, degrees: f32) {
        let delta = Quat::from_axis_angle(axis.normalize(), degrees.to_radians());
        self.rotation = (self.rotation * delta).normalize();
    }

    /// Rotate by `degrees` around the vertical (+Y) axis.
    pub fn rotate_y(&mut self, degrees: f32) {
        self.rotate_around(Vec3::Y, degrees);
    }

    /// Get the local transformation matrix.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Get the right direction vector.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction vector.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

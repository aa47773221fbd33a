//! Composition root.
//!
//! Builds the demonstration scene, wraps its cube in the fixed decorator
//! chain, and applies the chain once.

use cubes_behavior::builder::{color_change, rotate, scale};
use cubes_behavior::{Cube, CubeBase};
use cubes_core::Result;
use cubes_resources::Color;
use cubes_scene::{Scene, SceneObject, Transform};
use glam::Vec3;
use tracing::{debug, info};

/// Parameters for the decorator chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositionConfig {
    /// Factor applied by the scale decorator
    pub scale_factor: f32,
    /// Degrees about the vertical axis applied by the rotate decorator
    pub rotation_degrees: f32,
    /// Color applied by the color change decorator
    pub color: Color,
}

impl Default for CompositionConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.5,
            rotation_degrees: 225.0,
            color: Color::RED,
        }
    }
}

/// Wrap `base` in Scale, then Rotate, then ColorChange.
pub fn compose(base: CubeBase, config: &CompositionConfig) -> Result<Box<dyn Cube>> {
    debug!(handle = %base.spatial_handle(), ?config, "Composing decorator chain");
    let cube: Box<dyn Cube> = Box::new(base);
    let cube = scale(cube, config.scale_factor)?;
    let cube = rotate(cube, config.rotation_degrees)?;
    Ok(color_change(cube, config.color))
}

/// Startup entry point.
///
/// Finds the scene's cube, composes the chain around it and applies the
/// chain exactly once. The chain is returned so the caller can keep it
/// alive; it is not applied again.
pub fn start(scene: &mut Scene, config: &CompositionConfig) -> Result<Box<dyn Cube>> {
    let base = CubeBase::find(scene)?;
    let cube = compose(base, config)?;
    cube.apply_behavior(scene)?;
    info!(handle = %cube.spatial_handle(), "Behavior applied");
    Ok(cube)
}

/// The host scene the binary runs against: one cube and an unrelated
/// empty object.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new();
    scene.spawn(SceneObject::empty("Pivot").with_transform(
        Transform::new().with_position(Vec3::new(0.0, 2.0, -5.0)),
    ));
    scene.spawn(SceneObject::cube("Cube"));
    scene
}

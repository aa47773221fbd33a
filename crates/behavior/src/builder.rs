//! Builder helpers for assembling decorator chains.
//!
//! Instead of nesting `Box::new(ScaleDecorator::new(...)?)` by hand,
//! chains can be written as
//!
//! ```
//! use cubes_behavior::builder::{color_change, rotate, scale};
//! use cubes_behavior::{Cube, CubeBase};
//! use cubes_resources::Color;
//! use cubes_scene::{Scene, SceneObject};
//!
//! # fn main() -> cubes_core::Result<()> {
//! let mut scene = Scene::new();
//! let id = scene.spawn(SceneObject::cube("Cube"));
//!
//! let cube = color_change(rotate(scale(Box::new(CubeBase::new(id)), 1.5)?, 225.0)?, Color::RED);
//! cube.apply_behavior(&mut scene)?;
//! assert_eq!(scene.journal().len(), 4);
//! # Ok(())
//! # }
//! ```

use cubes_core::Result;
use cubes_resources::Color;

use crate::{ColorChangeDecorator, Cube, RotateDecorator, ScaleDecorator};

/// Wraps `inner` in a [`ScaleDecorator`].
#[inline]
pub fn scale(inner: Box<dyn Cube>, factor: f32) -> Result<Box<dyn Cube>> {
    Ok(Box::new(ScaleDecorator::new(inner, factor)?))
}

/// Wraps `inner` in a [`RotateDecorator`].
#[inline]
pub fn rotate(inner: Box<dyn Cube>, degrees: f32) -> Result<Box<dyn Cube>> {
    Ok(Box::new(RotateDecorator::new(inner, degrees)?))
}

/// Wraps `inner` in a [`ColorChangeDecorator`].
#[inline]
pub fn color_change(inner: Box<dyn Cube>, color: Color) -> Box<dyn Cube> {
    Box::new(ColorChangeDecorator::new(inner, color))
}

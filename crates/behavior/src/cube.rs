//! Core capability trait.
//!
//! This module defines the [`Cube`] trait, the capability every cube-like
//! entity implements: run its behavior against the scene, and report
//! which scene object it acts on.

use cubes_core::Result;
use cubes_scene::{ObjectId, Scene};

/// A cube-like entity whose behavior can be applied to a scene.
pub trait Cube: Send + Sync {
    /// Run this entity's behavior.
    ///
    /// # Arguments
    ///
    /// * `scene` - The host scene that owns the spatial state and the log
    ///   sink. Behaviors edit the object behind [`Cube::spatial_handle`].
    ///
    /// # Errors
    ///
    /// Only on precondition violations: the handle is not part of `scene`,
    /// or the object lacks a component the behavior needs.
    fn apply_behavior(&self, scene: &mut Scene) -> Result<()>;

    /// Handle of the scene object this entity ultimately acts on.
    fn spatial_handle(&self) -> ObjectId;
}

/// Blanket implementation for boxed cubes.
///
/// This allows `Box<dyn Cube>` to be passed wherever a `Cube` is expected.
impl Cube for Box<dyn Cube> {
    #[inline]
    fn apply_behavior(&self, scene: &mut Scene) -> Result<()> {
        (**self).apply_behavior(scene)
    }

    #[inline]
    fn spatial_handle(&self) -> ObjectId {
        (**self).spatial_handle()
    }
}

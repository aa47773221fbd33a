//! The undecorated cube.

use cubes_core::{Error, Result};
use cubes_scene::{Archetype, ObjectId, Observation, Scene};

use crate::Cube;

/// The leaf entity every decorator chain ends in.
///
/// Its behavior only logs a marker; it never edits the object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeBase {
    handle: ObjectId,
}

impl CubeBase {
    /// Bind a base cube to an existing scene object.
    pub fn new(handle: ObjectId) -> Self {
        Self { handle }
    }

    /// Locate the first cube in the scene.
    pub fn find(scene: &Scene) -> Result<Self> {
        scene
            .find_first(Archetype::Cube)
            .map(Self::new)
            .ok_or_else(|| Error::ObjectNotFound("no cube in scene".to_string()))
    }
}

impl Cube for CubeBase {
    fn apply_behavior(&self, scene: &mut Scene) -> Result<()> {
        scene.log(Observation::BasicBehavior);
        Ok(())
    }

    fn spatial_handle(&self) -> ObjectId {
        self.handle
    }
}

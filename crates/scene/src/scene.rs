//! The host scene graph.
//!
//! A [`Scene`] owns every [`SceneObject`] and hands out [`ObjectId`]
//! handles. Behaviors never hold object state themselves; they keep a
//! handle and edit the object through the scene. The scene also acts as
//! the log sink: [`Scene::log`] records an [`Observation`] in an ordered
//! journal and emits it as a tracing event.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use cubes_core::{Error, Result};
use tracing::{debug, info};

use crate::{Archetype, MeshRenderer, Observation, SceneObject, Transform};

static NEXT_SCENE_ID: AtomicU32 = AtomicU32::new(0);

/// Opaque handle to an object in a [`Scene`].
///
/// Handles carry the id of the scene that issued them; any other scene
/// rejects them. Two handles refer to the same object iff they compare
/// equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    scene: u32,
    index: usize,
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@scene{}", self.index, self.scene)
    }
}

/// Objects plus the observation journal.
#[derive(Debug)]
pub struct Scene {
    id: u32,
    objects: Vec<SceneObject>,
    journal: Vec<Observation>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with a process-unique id.
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            objects: Vec::new(),
            journal: Vec::new(),
        }
    }

    fn handle(&self, index: usize) -> ObjectId {
        ObjectId {
            scene: self.id,
            index,
        }
    }

    /// Index of `id` in this scene, if this scene issued it.
    fn index_of(&self, id: ObjectId) -> Result<usize> {
        if id.scene == self.id && id.index < self.objects.len() {
            Ok(id.index)
        } else {
            Err(Error::UnknownObject(id.to_string()))
        }
    }

    /// Add an object and return its handle.
    pub fn spawn(&mut self, object: SceneObject) -> ObjectId {
        let id = self.handle(self.objects.len());
        debug!(id = %id, name = %object.name, archetype = ?object.archetype, "Spawned object");
        self.objects.push(object);
        id
    }

    /// Find the first spawned object of the given archetype.
    pub fn find_first(&self, archetype: Archetype) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|o| o.archetype == archetype)
            .map(|index| self.handle(index))
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn object(&self, id: ObjectId) -> Result<&SceneObject> {
        let index = self.index_of(id)?;
        Ok(&self.objects[index])
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject> {
        let index = self.index_of(id)?;
        Ok(&mut self.objects[index])
    }

    pub fn transform(&self, id: ObjectId) -> Result<&Transform> {
        Ok(&self.object(id)?.transform)
    }

    pub fn transform_mut(&mut self, id: ObjectId) -> Result<&mut Transform> {
        Ok(&mut self.object_mut(id)?.transform)
    }

    /// Mutable access to the object's renderer.
    ///
    /// Fails with [`Error::MissingComponent`] for objects that are not drawn.
    pub fn renderer_mut(&mut self, id: ObjectId) -> Result<&mut MeshRenderer> {
        let object = self.object_mut(id)?;
        match object.renderer.as_mut() {
            Some(renderer) => Ok(renderer),
            None => Err(Error::MissingComponent {
                object: object.name.clone(),
                component: "MeshRenderer",
            }),
        }
    }

    /// Record an observation and emit it to the tracing subscriber.
    pub fn log(&mut self, observation: Observation) {
        info!("{observation}");
        self.journal.push(observation);
    }

    /// Every observation logged so far, oldest first.
    pub fn journal(&self) -> &[Observation] {
        &self.journal
    }
}

//! Scene objects and their components.

use cubes_resources::{Color, Material};

use crate::Transform;

/// Type tag used for lookup-by-type in a [`Scene`](crate::Scene).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// A renderable cube
    Cube,
    /// A bare object with a transform only
    Empty,
}

/// The renderable surface of an object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshRenderer {
    pub material: Material,
}

/// An object living in a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    /// Display name, used in logs and errors
    pub name: String,
    /// Lookup key
    pub archetype: Archetype,
    /// Spatial state
    pub transform: Transform,
    /// Renderable surface, if the object is drawn
    pub renderer: Option<MeshRenderer>,
}

impl SceneObject {
    /// Create a cube at the origin with a default white material.
    pub fn cube(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            archetype: Archetype::Cube,
            transform: Transform::default(),
            renderer: Some(MeshRenderer::default()),
        }
    }

    /// Create an object with a transform and nothing else.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            archetype: Archetype::Empty,
            transform: Transform::default(),
            renderer: None,
        }
    }

    /// Replace the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Drop the renderer, leaving an invisible object.
    pub fn without_renderer(mut self) -> Self {
        self.renderer = None;
        self
    }

    /// Current material color, if the object is rendered.
    pub fn color(&self) -> Option<Color> {
        self.renderer.as_ref().map(|r| r.material.color())
    }
}

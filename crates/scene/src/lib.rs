//! Scene graph and components.
//!
//! This crate provides the host side of the workspace:
//! - Transforms (the spatial state of an object)
//! - Scene objects with optional renderers
//! - The scene itself, its handles, and its log sink

pub mod object;
pub mod observation;
pub mod scene;
pub mod transform;

pub use object::{Archetype, MeshRenderer, SceneObject};
pub use observation::Observation;
pub use scene::{ObjectId, Scene};
pub use transform::Transform;

//! Cube behaviors layered with stackable decorators.
//!
//! A [`CubeBase`] is bound to one object in a [`Scene`](cubes_scene::Scene)
//! and only logs a marker when applied. Decorators wrap it (or each
//! other) and add one effect each, after the wrapped chain has run.
//!
//! # Architecture
//!
//! - [`Cube`]: capability trait shared by the base and every decorator
//! - [`CubeBase`]: the leaf of every chain
//! - [`CubeDecorator`]: owns one inner cube and forwards to it
//! - Effects: [`ScaleDecorator`], [`RotateDecorator`], [`ColorChangeDecorator`]
//! - [`builder`]: shorthand constructors returning `Box<dyn Cube>`

pub mod base;
pub mod builder;
pub mod cube;
pub mod decorator;

pub use base::CubeBase;
pub use cube::Cube;
pub use decorator::{ColorChangeDecorator, CubeDecorator, RotateDecorator, ScaleDecorator};

//! Renderable surface resources.
//!
//! This crate provides the data a renderer reads from a surface:
//! - RGBA colors
//! - Material definitions

pub mod color;
pub mod material;

pub use color::Color;
pub use material::Material;

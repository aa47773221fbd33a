//! Core utilities for the cube decorator workspace.
//!
//! This crate provides foundational types used across the workspace:
//! - Error types and result aliases
//! - Logging initialization

mod error;
mod logging;

pub use error::{Error, Result};
pub use logging::{DEFAULT_FILTER, init_logging};

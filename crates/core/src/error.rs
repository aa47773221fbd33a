//! Error types shared by every crate in the workspace.

use thiserror::Error;

/// Main error type.
///
/// Every variant is a precondition violation: a scene that was built
/// wrong or a decorator given a parameter it cannot apply. None of them
/// are recoverable at runtime.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Lookup-by-type found nothing in the scene
    #[error("No object found: {0}")]
    ObjectNotFound(String),

    /// A handle that does not belong to the scene it was used with
    #[error("Unknown object: {0}")]
    UnknownObject(String),

    /// The object exists but lacks a component an effect needs
    #[error("Object '{object}' has no {component}")]
    MissingComponent {
        /// Name of the scene object.
        object: String,
        /// Name of the missing component.
        component: &'static str,
    },

    /// Decorator parameter out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using the workspace Error type.
pub type Result<T> = std::result::Result<T, Error>;

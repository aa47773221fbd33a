//! Entries written to the scene's log sink.

use std::fmt;

use cubes_resources::Color;

/// One observable step of a behavior.
#[derive(Clone, Debug, PartialEq)]
pub enum Observation {
    /// The undecorated cube ran
    BasicBehavior,
    /// Scale was multiplied by `factor`
    Scaled { factor: f32 },
    /// Rotated about the vertical axis
    Rotated { degrees: f32 },
    /// Material color replaced
    ColorChanged { color: Color },
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BasicBehavior => write!(f, "Basic Cube behavior."),
            Self::Scaled { factor } => write!(f, "Cube scaled by {factor}"),
            Self::Rotated { degrees } => write!(f, "Cube rotated by {degrees} degrees."),
            Self::ColorChanged { color } => write!(f, "Cube color changed to {color}"),
        }
    }
}

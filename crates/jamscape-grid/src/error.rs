//! Errors from grid construction and radio-map assembly.

use jamscape_core::ConfigError;
use std::error::Error;
use std::fmt;

/// Errors raised by the grid crate.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Grid parameters are invalid.
    Config(ConfigError),
    /// A flat sequence does not match the grid's cell count.
    ShapeMismatch {
        /// Cells in the grid.
        expected: usize,
        /// Values supplied.
        actual: usize,
    },
    /// The solver returned a different number of fields than emitters.
    EmitterCountMismatch {
        /// Emitters passed to the solver.
        expected: usize,
        /// Fields returned.
        actual: usize,
    },
    /// The external solver failed.
    Solver {
        /// Description from the solver.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "expected {expected} grid values, got {actual}")
            }
            Self::EmitterCountMismatch { expected, actual } => {
                write!(f, "expected {expected} emitter fields, got {actual}")
            }
            Self::Solver { reason } => write!(f, "solver failed: {reason}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for GridError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

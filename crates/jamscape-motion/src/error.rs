//! Errors from path generation, registry queries, and path alignment.

use jamscape_core::{ConfigError, EmitterId, ValidationError};
use std::error::Error;
use std::fmt;

/// Errors raised by [`MotionEngine`](crate::MotionEngine) and
/// [`generate_random_walk`](crate::generate_random_walk).
#[derive(Clone, Debug, PartialEq)]
pub enum MotionError {
    /// Walk parameters are malformed.
    Validation(ValidationError),
    /// Bounds or padding configuration is invalid.
    Config(ConfigError),
    /// No path is registered under this emitter id.
    UnknownEmitter {
        /// The id that was queried.
        id: EmitterId,
    },
    /// Strict alignment was requested over paths of unequal length.
    LengthMismatch {
        /// Every registered emitter with its path length, in registry order.
        lengths: Vec<(EmitterId, usize)>,
    },
    /// Alignment was requested with no registered paths.
    NoPaths,
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "validation: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::UnknownEmitter { id } => write!(f, "emitter '{id}' not found"),
            Self::LengthMismatch { lengths } => {
                write!(f, "path lengths are not equal:")?;
                for (id, len) in lengths {
                    write!(f, " {id}={len}")?;
                }
                Ok(())
            }
            Self::NoPaths => write!(f, "no emitter paths registered"),
        }
    }
}

impl Error for MotionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for MotionError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ConfigError> for MotionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

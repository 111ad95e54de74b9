//! Fragment loading failures.

use std::error::Error;
use std::fmt;

/// Why one geometry file could not become a [`MeshFragment`](crate::MeshFragment).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read.
    Io {
        /// Description of the I/O failure.
        reason: String,
    },
    /// The file was read but holds no usable geometry.
    InvalidGeometry {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { reason } => write!(f, "io: {reason}"),
            Self::InvalidGeometry { reason } => write!(f, "invalid geometry: {reason}"),
        }
    }
}

impl Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            reason: e.to_string(),
        }
    }
}

/// A non-fatal load failure: the fragment is excluded and the batch continues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadWarning {
    /// Source identifier of the skipped fragment.
    pub source: String,
    /// Why it was skipped.
    pub error: LoadError,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipped '{}': {}", self.source, self.error)
    }
}

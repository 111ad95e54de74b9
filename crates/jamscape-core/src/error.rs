//! Error types shared across Jamscape crates.
//!
//! Two families live here because every subsystem can raise them:
//! [`ValidationError`] for malformed numeric input and [`ConfigError`]
//! for structurally invalid configuration. Subsystem crates wrap these
//! in their own enums alongside their specific failures.

use crate::bounds::{Axis, AxisRange};
use std::error::Error;
use std::fmt;

/// Malformed numeric input to an operation.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// A path was requested with zero steps.
    ZeroSteps,
    /// The step size is zero or negative.
    NonPositiveStepSize {
        /// The rejected value.
        value: f64,
    },
    /// A numeric parameter is NaN or infinite.
    NonFinite {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The starting position lies outside a configured axis bound.
    StartOutOfBounds {
        /// The offending axis.
        axis: Axis,
        /// The start coordinate on that axis.
        value: f64,
        /// The configured range for that axis.
        range: AxisRange,
    },
    /// The farthest coordinate a walk could reach exceeds the numeric limit.
    ExcessiveReach {
        /// Largest start magnitude plus `step_size * (num_steps - 1)`.
        reach: f64,
        /// The accepted maximum.
        limit: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSteps => write!(f, "num_steps must be at least 1"),
            Self::NonPositiveStepSize { value } => {
                write!(f, "step_size must be positive, got {value}")
            }
            Self::NonFinite { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::StartOutOfBounds { axis, value, range } => write!(
                f,
                "start {axis}={value} lies outside bound [{}, {}]",
                range.min, range.max
            ),
            Self::ExcessiveReach { reach, limit } => {
                write!(f, "walk could reach {reach:e}, above the limit {limit:e}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Structurally invalid configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// An axis bound has `min > max`.
    InvertedBounds {
        /// The offending axis.
        axis: Axis,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// An axis bound contains NaN or an infinite endpoint.
    NonFiniteBounds {
        /// The offending axis.
        axis: Axis,
    },
    /// A grid extent or cell size is not finite and positive.
    InvalidGridDimension {
        /// The offending axis.
        axis: Axis,
        /// What went wrong.
        reason: String,
    },
    /// A grid extent is not an exact multiple of its cell size.
    NonDivisibleGrid {
        /// The offending axis.
        axis: Axis,
        /// Extent along that axis.
        size: f64,
        /// Cell size along that axis.
        cell_size: f64,
    },
    /// A padding mode name is not recognised.
    UnknownPaddingMode {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { axis, min, max } => {
                write!(f, "bound on {axis} is inverted: min {min} > max {max}")
            }
            Self::NonFiniteBounds { axis } => {
                write!(f, "bound on {axis} has a non-finite endpoint")
            }
            Self::InvalidGridDimension { axis, reason } => {
                write!(f, "invalid grid dimension on {axis}: {reason}")
            }
            Self::NonDivisibleGrid {
                axis,
                size,
                cell_size,
            } => write!(
                f,
                "grid size {size} on {axis} is not a multiple of cell size {cell_size}"
            ),
            Self::UnknownPaddingMode { name } => write!(
                f,
                "unknown padding mode '{name}' (expected error, none, pad_end or pad_start)"
            ),
        }
    }
}

impl Error for ConfigError {}

//! Per-axis optional ranges constraining emitter motion.
//!
//! [`Bounds`] holds one optional [`AxisRange`] per scene axis. An absent
//! slot leaves that axis unconstrained; a present slot is enforced on
//! every generated position.

use crate::error::ConfigError;
use crate::id::Position;
use std::fmt;

/// A scene axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// East-west axis (index 0).
    X,
    /// North-south axis (index 1).
    Y,
    /// Vertical axis (index 2).
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis within a [`Position`].
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Closed interval `[min, max]` on one axis.
///
/// Construction does not validate; [`Bounds::validate`] rejects inverted
/// or non-finite ranges before any position is clipped against them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    /// Lower endpoint (inclusive).
    pub min: f64,
    /// Upper endpoint (inclusive).
    pub max: f64,
}

impl AxisRange {
    /// Create a range from its endpoints.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clip `value` into the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    fn validate(&self, axis: Axis) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBounds { axis });
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Up to three independent, optionally-absent axis ranges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Range on the x axis, if constrained.
    pub x: Option<AxisRange>,
    /// Range on the y axis, if constrained.
    pub y: Option<AxisRange>,
    /// Range on the z axis, if constrained.
    pub z: Option<AxisRange>,
}

impl Bounds {
    /// Bounds with no constrained axis.
    pub const fn unbounded() -> Self {
        Self {
            x: None,
            y: None,
            z: None,
        }
    }

    /// Return a copy with `axis` constrained to `range`.
    pub fn with(mut self, axis: Axis, range: AxisRange) -> Self {
        *self.slot_mut(axis) = Some(range);
        self
    }

    /// The range on `axis`, if present.
    pub fn get(&self, axis: Axis) -> Option<AxisRange> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    fn slot_mut(&mut self, axis: Axis) -> &mut Option<AxisRange> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Iterate over the present `(axis, range)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, AxisRange)> + '_ {
        Axis::ALL
            .into_iter()
            .filter_map(|axis| self.get(axis).map(|r| (axis, r)))
    }

    /// Check every present range is finite and not inverted.
    ///
    /// # Errors
    ///
    /// Returns the first offending axis in x, y, z order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, range) in self.iter() {
            range.validate(axis)?;
        }
        Ok(())
    }

    /// Clip each constrained component of `position` in place.
    pub fn clip(&self, position: &mut Position) {
        for (axis, range) in self.iter() {
            let i = axis.index();
            position[i] = range.clamp(position[i]);
        }
    }

    /// Whether every constrained component of `position` is in range.
    pub fn contains(&self, position: &Position) -> bool {
        self.iter()
            .all(|(axis, range)| range.contains(position[axis.index()]))
    }
}

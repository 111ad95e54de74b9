//! The rectangular map area shared by emitter motion and field sampling.

use jamscape_core::{Axis, AxisRange, Bounds, ConfigError, Position};

use crate::grid::SamplingGridBuilder;

/// A horizontal map rectangle at one working height.
///
/// Jammers wander inside it and the radio map covers it, so both the motion
/// [`Bounds`] and the grid parameters derive from the same extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapExtent {
    /// East-west range.
    pub x: AxisRange,
    /// North-south range.
    pub y: AxisRange,
    /// Emitter and sampling height.
    pub height: f64,
}

impl MapExtent {
    /// Create an extent from its ranges and height.
    pub fn new(x: AxisRange, y: AxisRange, height: f64) -> Self {
        Self { x, y, height }
    }

    /// Check both ranges are finite and not inverted, and the height is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.height.is_finite() {
            return Err(ConfigError::NonFiniteBounds { axis: Axis::Z });
        }
        self.bounds().validate()
    }

    /// Motion bounds: the x and y ranges, with z pinned to the height.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: Some(self.x),
            y: Some(self.y),
            z: Some(AxisRange::new(self.height, self.height)),
        }
    }

    /// Midpoint of the rectangle at the working height.
    pub fn center(&self) -> Position {
        [self.x.midpoint(), self.y.midpoint(), self.height]
    }

    /// Width along x and y.
    pub fn size(&self) -> [f64; 2] {
        [self.x.span(), self.y.span()]
    }

    /// A grid builder covering the whole extent at the working height.
    pub fn grid(&self, cell_size: [f64; 2]) -> SamplingGridBuilder {
        SamplingGridBuilder::new(self.center(), self.size(), cell_size).height(self.height)
    }
}

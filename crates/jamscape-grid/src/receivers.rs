//! Named receivers placed on an inclusive square lattice.

use jamscape_core::{Axis, ConfigError, Position};

/// One receiver of a layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Receiver {
    /// Scene name, `rx_{ix}_{iy}`.
    pub name: String,
    /// Receiver position.
    pub position: Position,
}

/// Receivers on a lattice centered at the origin, in x-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiverLayout {
    receivers: Vec<Receiver>,
    per_axis: usize,
}

impl ReceiverLayout {
    /// Lattice from `-half` to `+half` inclusive on both axes, where
    /// `half = floor(extent / 2)`, stepping by `spacing`, at `height`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidGridDimension`] if `extent` or `spacing` is not
    /// finite and positive, or `height` is not finite.
    pub fn square(extent: f64, spacing: f64, height: f64) -> Result<Self, ConfigError> {
        for (name, v) in [("extent", extent), ("spacing", spacing)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::InvalidGridDimension {
                    axis: Axis::X,
                    reason: format!("{name} must be finite and positive, got {v}"),
                });
            }
        }
        if !height.is_finite() {
            return Err(ConfigError::InvalidGridDimension {
                axis: Axis::Z,
                reason: format!("height must be finite, got {height}"),
            });
        }

        let half = (extent / 2.0).floor();
        let per_axis = ((2.0 * half) / spacing + 1e-9).floor() as usize + 1;
        let coord = |i: usize| -half + spacing * i as f64;

        let mut receivers = Vec::with_capacity(per_axis * per_axis);
        for ix in 0..per_axis {
            for iy in 0..per_axis {
                receivers.push(Receiver {
                    name: format!("rx_{ix}_{iy}"),
                    position: [coord(ix), coord(iy), height],
                });
            }
        }
        Ok(Self {
            receivers,
            per_axis,
        })
    }

    /// All receivers, x-major.
    pub fn receivers(&self) -> &[Receiver] {
        &self.receivers
    }

    /// Receivers along each axis.
    pub fn per_axis(&self) -> usize {
        self.per_axis
    }

    /// Total receivers.
    pub fn len(&self) -> usize {
        self.receivers.len()
    }

    /// Always false; a layout has at least the origin receiver.
    pub fn is_empty(&self) -> bool {
        self.receivers.is_empty()
    }

    /// Receiver at lattice cell `(ix, iy)`.
    pub fn get(&self, ix: usize, iy: usize) -> Option<&Receiver> {
        if ix >= self.per_axis || iy >= self.per_axis {
            return None;
        }
        self.receivers.get(ix * self.per_axis + iy)
    }
}

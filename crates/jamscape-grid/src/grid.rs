//! Sampling grid construction and the x-major flattening convention.
//!
//! A grid with `nx` cells along x and `ny` along y stores flat data with
//! `ix` as the slow index: `index = ix * ny + iy`. Reshaping yields
//! `rows[ix][iy]`. Consumers must use the same order; a transposed reshape
//! raises no error and silently swaps axes.

use jamscape_core::{Axis, ConfigError, Position};

use crate::error::GridError;

/// Relative tolerance when checking that size is a multiple of cell size.
const DIVISIBILITY_TOLERANCE: f64 = 1e-9;

/// Largest cell count accepted along one axis.
pub const MAX_CELLS_PER_AXIS: usize = 1 << 20;

/// Largest total cell count (`nx * ny`) accepted for one grid.
pub const MAX_CELLS: usize = 1 << 28;

/// Builder for [`SamplingGrid`].
///
/// Required: center, size, cell size. The fixed height defaults to the
/// center's z coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingGridBuilder {
    center: Position,
    size: [f64; 2],
    cell_size: [f64; 2],
    height: Option<f64>,
}

impl SamplingGridBuilder {
    /// Start a grid of `size` (x, y extent) centered on `center` with cells
    /// of `cell_size`.
    pub fn new(center: Position, size: [f64; 2], cell_size: [f64; 2]) -> Self {
        Self {
            center,
            size,
            cell_size,
            height: None,
        }
    }

    /// Set the fixed z coordinate of every sample.
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Build the grid, validating all dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the center or height is not finite
    /// - a size or cell size is not finite and positive
    /// - a size is not an exact multiple of its cell size
    /// - an axis needs more than [`MAX_CELLS_PER_AXIS`] cells, or the grid
    ///   more than [`MAX_CELLS`]
    pub fn build(self) -> Result<SamplingGrid, ConfigError> {
        let height = self.height.unwrap_or(self.center[2]);
        for (axis, value) in [
            (Axis::X, self.center[0]),
            (Axis::Y, self.center[1]),
            (Axis::Z, height),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidGridDimension {
                    axis,
                    reason: format!("coordinate must be finite, got {value}"),
                });
            }
        }

        let nx = cell_count(Axis::X, self.size[0], self.cell_size[0])?;
        let ny = cell_count(Axis::Y, self.size[1], self.cell_size[1])?;
        if nx.checked_mul(ny).is_none_or(|total| total > MAX_CELLS) {
            return Err(ConfigError::InvalidGridDimension {
                axis: Axis::Y,
                reason: format!("{nx} x {ny} cells exceeds the limit of {MAX_CELLS}"),
            });
        }

        let xs = cell_centers(self.center[0], self.size[0], self.cell_size[0], nx);
        let ys = cell_centers(self.center[1], self.size[1], self.cell_size[1], ny);

        Ok(SamplingGrid {
            center: self.center,
            size: self.size,
            cell_size: self.cell_size,
            height,
            xs,
            ys,
        })
    }
}

fn cell_count(axis: Axis, size: f64, cell_size: f64) -> Result<usize, ConfigError> {
    for (name, v) in [("size", size), ("cell_size", cell_size)] {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidGridDimension {
                axis,
                reason: format!("{name} must be finite and positive, got {v}"),
            });
        }
    }
    let ratio = size / cell_size;
    let n = ratio.round();
    if n < 1.0 || (ratio - n).abs() > DIVISIBILITY_TOLERANCE * n.max(1.0) {
        return Err(ConfigError::NonDivisibleGrid {
            axis,
            size,
            cell_size,
        });
    }
    if n > MAX_CELLS_PER_AXIS as f64 {
        return Err(ConfigError::InvalidGridDimension {
            axis,
            reason: format!("{n} cells exceeds the per-axis limit of {MAX_CELLS_PER_AXIS}"),
        });
    }
    Ok(n as usize)
}

fn cell_centers(center: f64, size: f64, cell_size: f64, n: usize) -> Vec<f64> {
    let lo = center - size / 2.0;
    (0..n).map(|i| lo + cell_size * (i as f64 + 0.5)).collect()
}

/// Cell-center coordinates over a horizontal rectangle at a fixed height.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingGrid {
    center: Position,
    size: [f64; 2],
    cell_size: [f64; 2],
    height: f64,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SamplingGrid {
    /// Build a grid in one call; see [`SamplingGridBuilder::build`].
    pub fn build(
        center: Position,
        size: [f64; 2],
        cell_size: [f64; 2],
        fixed_height: f64,
    ) -> Result<Self, ConfigError> {
        SamplingGridBuilder::new(center, size, cell_size)
            .height(fixed_height)
            .build()
    }

    /// Grid center.
    pub fn center(&self) -> Position {
        self.center
    }

    /// Extent along x and y.
    pub fn size(&self) -> [f64; 2] {
        self.size
    }

    /// Cell size along x and y.
    pub fn cell_size(&self) -> [f64; 2] {
        self.cell_size
    }

    /// The fixed z coordinate.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Strictly increasing x coordinates of cell centers.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Strictly increasing y coordinates of cell centers.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// `(nx, ny)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.xs.len(), self.ys.len())
    }

    /// `nx * ny`.
    pub fn cell_count(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// Flat x-major index of cell `(ix, iy)`.
    pub fn flat_index(&self, ix: usize, iy: usize) -> Option<usize> {
        let (nx, ny) = self.shape();
        (ix < nx && iy < ny).then_some(ix * ny + iy)
    }

    /// Cell `(ix, iy)` of a flat x-major index.
    pub fn cell_of(&self, index: usize) -> Option<(usize, usize)> {
        let ny = self.ys.len();
        (index < self.cell_count()).then(|| (index / ny, index % ny))
    }

    /// Sample position of cell `(ix, iy)`.
    pub fn position(&self, ix: usize, iy: usize) -> Option<Position> {
        Some([*self.xs.get(ix)?, *self.ys.get(iy)?, self.height])
    }

    /// Every sample position in flat x-major order.
    pub fn points(&self) -> impl Iterator<Item = Position> + '_ {
        self.xs
            .iter()
            .flat_map(move |&x| self.ys.iter().map(move |&y| [x, y, self.height]))
    }

    /// Reshape a flat x-major sequence into `rows[ix][iy]`.
    ///
    /// # Errors
    ///
    /// [`GridError::ShapeMismatch`] unless `values.len() == cell_count()`.
    pub fn reshape<T: Clone>(&self, values: &[T]) -> Result<Vec<Vec<T>>, GridError> {
        if values.len() != self.cell_count() {
            return Err(GridError::ShapeMismatch {
                expected: self.cell_count(),
                actual: values.len(),
            });
        }
        let ny = self.ys.len();
        Ok(values.chunks(ny).map(|row| row.to_vec()).collect())
    }

    /// Flatten `rows[ix][iy]` into x-major order; the inverse of [`reshape`](Self::reshape).
    ///
    /// # Errors
    ///
    /// [`GridError::ShapeMismatch`] if the row count or any row length is wrong.
    pub fn flatten<T: Clone>(&self, rows: &[Vec<T>]) -> Result<Vec<T>, GridError> {
        let (nx, ny) = self.shape();
        if rows.len() != nx || rows.iter().any(|r| r.len() != ny) {
            return Err(GridError::ShapeMismatch {
                expected: self.cell_count(),
                actual: rows.iter().map(Vec::len).sum(),
            });
        }
        Ok(rows.concat())
    }
}

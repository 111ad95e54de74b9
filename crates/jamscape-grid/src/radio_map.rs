//! Per-emitter field values over a sampling grid.
//!
//! The propagation solver itself is external; it sees a [`SamplingGrid`]
//! and the current emitter positions and hands back one flat, x-major
//! field per emitter. [`RadioMap`] checks the shapes and reads the values
//! back through the grid's convention.

use indexmap::IndexMap;
use jamscape_core::{EmitterId, Position};
use std::error::Error;
use tracing::debug;

use crate::error::GridError;
use crate::grid::SamplingGrid;

/// Linear power floor added before converting to dB.
const POWER_FLOOR: f64 = 1e-12;

/// External propagation solver.
pub trait FieldSolver {
    /// Solver-specific failure.
    type Error: Error;

    /// Evaluate one field per emitter, in the order given, each holding
    /// `grid.cell_count()` linear power values in x-major order.
    fn solve(
        &mut self,
        grid: &SamplingGrid,
        emitters: &[(EmitterId, Position)],
    ) -> Result<Vec<Vec<f64>>, Self::Error>;
}

/// Solver output keyed by emitter.
#[derive(Clone, Debug, PartialEq)]
pub struct RadioMap {
    grid: SamplingGrid,
    fields: IndexMap<EmitterId, Vec<f64>>,
}

impl RadioMap {
    /// Run `solver` on `grid` for the given emitter positions.
    ///
    /// # Errors
    ///
    /// - [`GridError::Solver`] if the solver fails
    /// - [`GridError::EmitterCountMismatch`] or [`GridError::ShapeMismatch`]
    ///   if its output does not match the request
    pub fn compute<S: FieldSolver>(
        solver: &mut S,
        grid: &SamplingGrid,
        emitters: &IndexMap<EmitterId, Position>,
    ) -> Result<Self, GridError> {
        let request: Vec<(EmitterId, Position)> =
            emitters.iter().map(|(id, p)| (id.clone(), *p)).collect();
        let fields = solver
            .solve(grid, &request)
            .map_err(|e| GridError::Solver {
                reason: e.to_string(),
            })?;
        debug!(
            emitters = request.len(),
            cells = grid.cell_count(),
            "field solver returned"
        );
        Self::from_fields(grid.clone(), request.into_iter().map(|(id, _)| id), fields)
    }

    /// Assemble a map from already-computed fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the field count differs from the emitter count or
    /// any field does not hold `grid.cell_count()` values.
    pub fn from_fields(
        grid: SamplingGrid,
        emitters: impl IntoIterator<Item = EmitterId>,
        fields: Vec<Vec<f64>>,
    ) -> Result<Self, GridError> {
        let ids: Vec<EmitterId> = emitters.into_iter().collect();
        if ids.len() != fields.len() {
            return Err(GridError::EmitterCountMismatch {
                expected: ids.len(),
                actual: fields.len(),
            });
        }
        let cells = grid.cell_count();
        if let Some(bad) = fields.iter().find(|f| f.len() != cells) {
            return Err(GridError::ShapeMismatch {
                expected: cells,
                actual: bad.len(),
            });
        }
        Ok(Self {
            grid,
            fields: ids.into_iter().zip(fields).collect(),
        })
    }

    /// The grid the fields were evaluated on.
    pub fn grid(&self) -> &SamplingGrid {
        &self.grid
    }

    /// Emitters in request order.
    pub fn emitters(&self) -> impl Iterator<Item = &EmitterId> {
        self.fields.keys()
    }

    /// Flat x-major field of one emitter.
    pub fn field(&self, id: &str) -> Option<&[f64]> {
        self.fields.get(id).map(Vec::as_slice)
    }

    /// Value of one emitter's field at cell `(ix, iy)`.
    pub fn value_at(&self, id: &str, ix: usize, iy: usize) -> Option<f64> {
        let index = self.grid.flat_index(ix, iy)?;
        self.field(id).map(|f| f[index])
    }

    /// One emitter's field as `rows[ix][iy]`.
    pub fn reshape(&self, id: &str) -> Option<Vec<Vec<f64>>> {
        self.field(id).and_then(|f| self.grid.reshape(f).ok())
    }

    /// Statistics of one emitter's field in dB.
    pub fn summary(&self, id: &str) -> Option<FieldSummary> {
        self.field(id).and_then(FieldSummary::from_linear)
    }

    /// Per-cell sum over all emitters, x-major.
    pub fn combined(&self) -> Vec<f64> {
        let mut total = vec![0.0; self.grid.cell_count()];
        for field in self.fields.values() {
            for (t, v) in total.iter_mut().zip(field) {
                *t += v;
            }
        }
        total
    }
}

/// Convert linear power to dB with a floor that keeps zero finite.
pub fn to_db(linear: f64) -> f64 {
    10.0 * (linear + POWER_FLOOR).log10()
}

/// Max, min, mean, and population standard deviation of a field in dB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSummary {
    /// Strongest cell.
    pub max: f64,
    /// Weakest cell.
    pub min: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
}

impl FieldSummary {
    /// Summarize linear power values after converting them to dB.
    /// Returns `None` for an empty slice.
    pub fn from_linear(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let db: Vec<f64> = values.iter().map(|&v| to_db(v)).collect();
        let n = db.len() as f64;
        let max = db.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = db.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = db.iter().sum::<f64>() / n;
        let var = db.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        Some(Self {
            max,
            min,
            mean,
            std: var.sqrt(),
        })
    }
}

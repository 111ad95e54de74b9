//! Reusable on-disk and solver fixtures.
//!
//! - [`FixtureDir`]: a scratch directory of empty files, removed on drop.
//! - [`MockFieldSolver`]: deterministic falloff fields, optionally failing.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use jamscape_core::{distance, EmitterId, Position};
use jamscape_grid::{FieldSolver, SamplingGrid};
use tempfile::TempDir;

/// A scratch directory of empty files, deleted when dropped.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    /// Create a fresh directory holding an empty file per name.
    pub fn with_files(files: &[&str]) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("jamscape-fixture-").tempdir()?;
        for name in files {
            fs::write(dir.path().join(name), b"")?;
        }
        Ok(Self { dir })
    }

    /// Create a subdirectory, which scans must skip.
    pub fn add_dir(&self, name: &str) -> io::Result<()> {
        fs::create_dir_all(self.dir.path().join(name))
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Error returned by [`MockFieldSolver`] when told to fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSolverError(pub String);

impl fmt::Display for MockSolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MockSolverError {}

/// Writes `1 / (1 + d^2)` per cell, `d` the distance to the emitter.
///
/// Not a propagation model; it just gives each emitter a distinct,
/// position-dependent field so ordering bugs show up in assertions.
#[derive(Default)]
pub struct MockFieldSolver {
    pub calls: usize,
    pub fail_with: Option<String>,
    /// Drop the last value of every field, to exercise shape checks.
    pub truncate: bool,
}

impl MockFieldSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::default()
        }
    }
}

impl FieldSolver for MockFieldSolver {
    type Error = MockSolverError;

    fn solve(
        &mut self,
        grid: &SamplingGrid,
        emitters: &[(EmitterId, Position)],
    ) -> Result<Vec<Vec<f64>>, Self::Error> {
        self.calls += 1;
        if let Some(reason) = &self.fail_with {
            return Err(MockSolverError(reason.clone()));
        }
        Ok(emitters
            .iter()
            .map(|(_, tx)| {
                let mut field: Vec<f64> = grid
                    .points()
                    .map(|p| {
                        let d = distance(&p, tx);
                        1.0 / (1.0 + d * d)
                    })
                    .collect();
                if self.truncate {
                    field.pop();
                }
                field
            })
            .collect())
    }
}

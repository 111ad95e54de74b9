//! Test utilities and mock collaborators for Jamscape development.
//!
//! Provides mock implementations of the external collaborator traits
//! ([`SceneStore`], [`GeometryLoader`], [`FieldSolver`](jamscape_grid::FieldSolver))
//! and on-disk fixtures for directory scans.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;
use std::path::Path;

use jamscape_core::Position;
use jamscape_mesh::{GeometryLoader, LoadError};
use jamscape_motion::{SceneEntity, SceneStore};

pub mod fixtures;

pub use fixtures::{FixtureDir, MockFieldSolver, MockSolverError};

/// A scene transmitter that records how often it was moved.
#[derive(Clone, Debug, PartialEq)]
pub struct MockTransmitter {
    pub position: Position,
    pub updates: usize,
}

impl SceneEntity for MockTransmitter {
    fn set_position(&mut self, position: Position) {
        self.position = position;
        self.updates += 1;
    }
}

/// Mock implementation of [`SceneStore`].
///
/// Backed by a `HashMap<String, MockTransmitter>`. Register entities with
/// [`add`](MockScene::add) before synchronizing.
#[derive(Default)]
pub struct MockScene {
    transmitters: HashMap<String, MockTransmitter>,
}

impl MockScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transmitter at `position`.
    pub fn add(&mut self, name: impl Into<String>, position: Position) {
        self.transmitters.insert(
            name.into(),
            MockTransmitter {
                position,
                updates: 0,
            },
        );
    }

    /// Current position of `name`.
    pub fn position(&self, name: &str) -> Option<Position> {
        self.transmitters.get(name).map(|t| t.position)
    }

    /// Number of times `name` was moved.
    pub fn updates(&self, name: &str) -> usize {
        self.transmitters.get(name).map_or(0, |t| t.updates)
    }
}

impl SceneStore for MockScene {
    fn get(&mut self, name: &str) -> Option<&mut dyn SceneEntity> {
        self.transmitters
            .get_mut(name)
            .map(|t| t as &mut dyn SceneEntity)
    }
}

/// Mock implementation of [`GeometryLoader`].
///
/// Answers by file name: registered names return their bounds or failure,
/// unknown names fail with an I/O error.
#[derive(Default)]
pub struct FixtureLoader {
    entries: HashMap<String, Result<(Position, Position), LoadError>>,
}

impl FixtureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `file_name` load with the given corners.
    pub fn with_bounds(mut self, file_name: &str, min: Position, max: Position) -> Self {
        self.entries.insert(file_name.to_string(), Ok((min, max)));
        self
    }

    /// Make `file_name` fail as unreadable geometry.
    pub fn with_failure(mut self, file_name: &str, reason: &str) -> Self {
        self.entries.insert(
            file_name.to_string(),
            Err(LoadError::InvalidGeometry {
                reason: reason.to_string(),
            }),
        );
        self
    }

    /// Registered file names, sorted.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

impl GeometryLoader for FixtureLoader {
    fn load_bounds(&self, path: &Path) -> Result<(Position, Position), LoadError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.entries.get(&name).cloned().unwrap_or_else(|| {
            Err(LoadError::Io {
                reason: format!("{name}: not found"),
            })
        })
    }
}

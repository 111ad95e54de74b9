//! The external scene collaborator.
//!
//! The motion engine only ever writes positions into the scene; it never
//! reads scene geometry. Lookups return an explicit `Option` so a missing
//! entity is an ordinary outcome the caller reports, not an error to catch.

use jamscape_core::{EmitterId, Position};

/// A scene object with a settable position.
pub trait SceneEntity {
    /// Move the entity to `position`.
    fn set_position(&mut self, position: Position);
}

/// Name-keyed access to scene entities (transmitters, jammers).
pub trait SceneStore {
    /// The entity registered under `name`, if any.
    fn get(&mut self, name: &str) -> Option<&mut dyn SceneEntity>;
}

/// Outcome of one synchronization pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Emitters whose scene entity was moved.
    pub updated: Vec<EmitterId>,
    /// Emitters with a position at this step but no scene entity.
    pub missing: Vec<EmitterId>,
}

impl SyncReport {
    /// True if every emitter with a position found its entity.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

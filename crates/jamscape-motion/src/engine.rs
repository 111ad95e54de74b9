//! Session-scoped registry of emitter paths.
//!
//! One [`MotionEngine`] is constructed per simulation run and passed by
//! handle; nothing here is global. The registry keeps insertion order so
//! queries, synchronization, and alignment iterate emitters the same way
//! every run.

use indexmap::IndexMap;
use jamscape_core::{Bounds, EmitterId, Position};
use tracing::{info, warn};

use crate::error::MotionError;
use crate::padding::{align_paths, PaddingMode, PathMatrix};
use crate::scene::{SceneStore, SyncReport};
use crate::walk::{generate_random_walk, MotionPath, PathMetadata, RandomWalk, WalkSpec};

/// Owns every emitter path of one session.
#[derive(Clone, Debug, Default)]
pub struct MotionEngine {
    bounds: Option<Bounds>,
    walks: IndexMap<EmitterId, RandomWalk>,
}

impl MotionEngine {
    /// Create an empty engine. `bounds` applies to every new path unless
    /// the caller overrides it per path.
    pub fn new(bounds: Option<Bounds>) -> Self {
        Self {
            bounds,
            walks: IndexMap::new(),
        }
    }

    /// The session-wide bounds.
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Generate a walk under the session bounds and store it under `id`.
    ///
    /// A prior entry for `id` is replaced. On error the registry is untouched.
    pub fn add_random_walk(
        &mut self,
        id: impl Into<EmitterId>,
        spec: &WalkSpec,
    ) -> Result<&RandomWalk, MotionError> {
        let bounds = self.bounds;
        self.add_random_walk_with_bounds(id, spec, bounds)
    }

    /// Like [`add_random_walk`](Self::add_random_walk), with explicit bounds
    /// replacing the session bounds (`None` leaves the walk unbounded).
    pub fn add_random_walk_with_bounds(
        &mut self,
        id: impl Into<EmitterId>,
        spec: &WalkSpec,
        bounds: Option<Bounds>,
    ) -> Result<&RandomWalk, MotionError> {
        let id = id.into();
        let walk = generate_random_walk(spec, bounds.as_ref())?;
        Ok(self.insert(id, walk))
    }

    /// Generate several walks under the session bounds concurrently.
    ///
    /// Generation runs on scoped worker threads; results are inserted on the
    /// calling thread in request order, so a repeated id keeps its last
    /// request. Failed requests are returned and leave every other entry
    /// untouched.
    pub fn add_random_walks(
        &mut self,
        requests: Vec<(EmitterId, WalkSpec)>,
    ) -> Vec<(EmitterId, MotionError)> {
        let bounds = self.bounds;
        let workers = worker_count(requests.len());
        let (tx, rx) = crossbeam_channel::unbounded();

        std::thread::scope(|scope| {
            for w in 0..workers {
                let tx = tx.clone();
                let requests = &requests;
                scope.spawn(move || {
                    for (index, (_, spec)) in requests.iter().enumerate().skip(w).step_by(workers) {
                        let result = generate_random_walk(spec, bounds.as_ref());
                        // The receiver lives past the scope, so send cannot fail.
                        let _ = tx.send((index, result));
                    }
                });
            }
        });
        drop(tx);

        let mut results: Vec<(usize, Result<RandomWalk, MotionError>)> = rx.iter().collect();
        results.sort_by_key(|(index, _)| *index);

        let mut failures = Vec::new();
        for ((id, _), (_, result)) in requests.into_iter().zip(results) {
            match result {
                Ok(walk) => {
                    self.insert(id, walk);
                }
                Err(e) => {
                    warn!(emitter = %id, error = %e, "random walk rejected");
                    failures.push((id, e));
                }
            }
        }
        failures
    }

    fn insert(&mut self, id: EmitterId, walk: RandomWalk) -> &RandomWalk {
        info!(
            emitter = %id,
            total_distance = walk.metadata.total_distance,
            avg_velocity = walk.metadata.avg_velocity,
            "generated random walk"
        );
        let (index, _) = self.walks.insert_full(id, walk);
        &self.walks[index]
    }

    /// Number of registered emitters.
    pub fn len(&self) -> usize {
        self.walks.len()
    }

    /// True if no emitter is registered.
    pub fn is_empty(&self) -> bool {
        self.walks.is_empty()
    }

    /// Registered ids in insertion order.
    pub fn emitter_ids(&self) -> impl Iterator<Item = &EmitterId> {
        self.walks.keys()
    }

    /// Stored path for `id`.
    pub fn path(&self, id: &str) -> Result<&MotionPath, MotionError> {
        self.walk(id).map(|w| &w.path)
    }

    /// Stored metadata for `id`.
    pub fn metadata(&self, id: &str) -> Result<&PathMetadata, MotionError> {
        self.walk(id).map(|w| &w.metadata)
    }

    fn walk(&self, id: &str) -> Result<&RandomWalk, MotionError> {
        self.walks.get(id).ok_or_else(|| MotionError::UnknownEmitter {
            id: EmitterId::from(id),
        })
    }

    /// Position of `id` at `step`.
    ///
    /// `Ok(None)` means the path ends before `step`.
    ///
    /// # Errors
    ///
    /// [`MotionError::UnknownEmitter`] if `id` is not registered.
    pub fn position_at_step(&self, id: &str, step: usize) -> Result<Option<Position>, MotionError> {
        Ok(self.walk(id)?.path.get(step))
    }

    /// Positions of every emitter whose path reaches `step`, in registry order.
    pub fn positions_at_step(&self, step: usize) -> IndexMap<EmitterId, Position> {
        self.walks
            .iter()
            .filter_map(|(id, w)| w.path.get(step).map(|p| (id.clone(), p)))
            .collect()
    }

    /// Write each emitter's position at `step` into `scene`.
    ///
    /// Best-effort: an emitter without a scene entity is logged, recorded in
    /// the report, and skipped.
    pub fn update_scene_transmitters(&self, scene: &mut dyn SceneStore, step: usize) -> SyncReport {
        let mut report = SyncReport::default();
        for (id, position) in self.positions_at_step(step) {
            match scene.get(id.as_str()) {
                Some(entity) => {
                    entity.set_position(position);
                    report.updated.push(id);
                }
                None => {
                    warn!(emitter = %id, step, "transmitter not found in scene");
                    report.missing.push(id);
                }
            }
        }
        report
    }

    /// Length of the longest registered path, or 0 when empty.
    pub fn max_path_length(&self) -> usize {
        self.walks.values().map(|w| w.path.len()).max().unwrap_or(0)
    }

    /// Align every registered path to a common length.
    ///
    /// # Errors
    ///
    /// See [`align_paths`].
    pub fn create_path_matrix(&self, mode: PaddingMode) -> Result<PathMatrix, MotionError> {
        align_paths(self.walks.iter().map(|(id, w)| (id, &w.path)), mode)
    }
}

/// Workers for a batch of `jobs`: available parallelism clamped to `[1, 16]`
/// and never more than the job count.
fn worker_count(jobs: usize) -> usize {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    cpus.clamp(1, 16).min(jobs.max(1))
}

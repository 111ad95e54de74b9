//! Jamscape: mobile jammer scenarios for radio ray-tracing simulations.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Jamscape sub-crates. For most users, adding `jamscape` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use jamscape::prelude::*;
//!
//! // A 1 km square downtown map with transmitters 10 m above ground.
//! let extent = MapExtent::new(
//!     AxisRange::new(-500.0, 500.0),
//!     AxisRange::new(-500.0, 500.0),
//!     10.0,
//! );
//!
//! let mut engine = MotionEngine::new(Some(extent.bounds()));
//! engine
//!     .add_random_walk("Tx1", &WalkSpec::new([70.0, -10.0, 10.0], 5, 10.0).seed(42))
//!     .unwrap();
//! engine
//!     .add_random_walk("Tx2", &WalkSpec::new([-260.0, 100.0, 10.0], 3, 10.0).seed(7))
//!     .unwrap();
//!
//! let matrix = engine.create_path_matrix(PaddingMode::PadEnd).unwrap();
//! assert_eq!(matrix.max_steps(), 5);
//! assert_eq!(engine.positions_at_step(2).len(), 2);
//! assert_eq!(engine.positions_at_step(4).len(), 1);
//!
//! // The coverage grid shares the extent with the motion bounds.
//! let grid = extent.grid([10.0, 10.0]).build().unwrap();
//! assert_eq!(grid.shape(), (100, 100));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `jamscape-core` | Emitter IDs, positions, bounds, validation errors |
//! | [`motion`] | `jamscape-motion` | Random walks, session engine, padding, scene sync |
//! | [`mesh`] | `jamscape-mesh` | Mesh fragments and building bounding volumes |
//! | [`grid`] | `jamscape-grid` | Sampling grids, receiver layouts, radio maps |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and validation errors (`jamscape-core`).
///
/// Contains [`types::EmitterId`], [`types::Position`], the per-axis
/// [`types::Bounds`], and the shared [`types::ValidationError`] and
/// [`types::ConfigError`] enums.
pub use jamscape_core as types;

/// Motion paths for mobile emitters (`jamscape-motion`).
///
/// [`motion::generate_random_walk`] builds one seeded path;
/// [`motion::MotionEngine`] owns the paths of a session and drives an
/// external scene through [`motion::SceneStore`].
pub use jamscape_motion as motion;

/// Building bounding volumes (`jamscape-mesh`).
///
/// Merge per-material [`mesh::MeshFragment`]s with the
/// [`mesh::BoundingVolumeAggregator`], loading them through a
/// [`mesh::GeometryLoader`].
pub use jamscape_mesh as mesh;

/// Sampling grids and solver results (`jamscape-grid`).
///
/// [`grid::SamplingGrid`] fixes the x-major flattening every radio map
/// uses; [`grid::RadioMap`] wraps the output of an external
/// [`grid::FieldSolver`].
pub use jamscape_grid as grid;

/// Common imports for typical Jamscape usage.
///
/// ```rust
/// use jamscape::prelude::*;
/// ```
///
/// This imports the most frequently used types: identifiers and bounds,
/// walk specs and the motion engine, fragment aggregation, and grids.
pub mod prelude {
    // Core types
    pub use jamscape_core::{Axis, AxisRange, Bounds, EmitterId, Position};

    // Errors
    pub use jamscape_core::{ConfigError, ValidationError};
    pub use jamscape_grid::GridError;
    pub use jamscape_mesh::{LoadError, LoadWarning};
    pub use jamscape_motion::MotionError;

    // Motion
    pub use jamscape_motion::{
        generate_random_walk, MotionEngine, PaddingMode, PathMatrix, RandomWalk, SceneEntity,
        SceneStore, SyncReport, WalkSpec,
    };

    // Buildings
    pub use jamscape_mesh::{
        scan_fragments, BoundingVolumeAggregator, BuildingVolume, GeometryLoader, MeshFragment,
    };

    // Grids
    pub use jamscape_grid::{
        FieldSolver, MapExtent, RadioMap, ReceiverLayout, SamplingGrid, SamplingGridBuilder,
    };
}

//! Motion paths for mobile emitters.
//!
//! [`generate_random_walk`] produces one deterministic, bounded path from a
//! [`WalkSpec`]. [`MotionEngine`] owns the paths of one simulation session,
//! answers step-indexed position queries, pushes positions into an external
//! scene through the [`SceneStore`] trait, and aligns paths of differing
//! length into a [`PathMatrix`] under a [`PaddingMode`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod padding;
pub mod scene;
pub mod walk;

pub use engine::MotionEngine;
pub use error::MotionError;
pub use padding::{align_paths, PaddingMode, PathMatrix};
pub use scene::{SceneEntity, SceneStore, SyncReport};
pub use walk::{
    generate_random_walk, MotionPath, PathMetadata, RandomWalk, WalkSpec, MAX_REACH,
};

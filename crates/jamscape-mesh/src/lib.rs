//! Bounding volumes for scene buildings.
//!
//! Scene geometry arrives split into one mesh file per material, e.g.
//! `b1-itu_concrete.ply` and `b1-itu_metal.ply`. The
//! [`BoundingVolumeAggregator`] groups those [`MeshFragment`]s by their
//! canonical base name and merges each group into the tightest enclosing
//! [`BuildingVolume`]. Reading the files themselves is delegated to a
//! [`GeometryLoader`]; [`scan_fragments`] drives it over a directory and
//! reports unreadable files as non-fatal [`LoadWarning`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod error;
pub mod fragment;
pub mod loader;

pub use aggregate::{BoundingVolumeAggregator, SuffixSet};
pub use error::{LoadError, LoadWarning};
pub use fragment::{BuildingVolume, MeshFragment};
pub use loader::{load_fragments, scan_fragments, FragmentScan, GeometryLoader};

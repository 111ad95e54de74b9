//! Sampling grids for external field evaluation.
//!
//! [`SamplingGrid`] is the coordinate set a propagation solver evaluates
//! signal strength on: cell centers over a horizontal rectangle at one
//! fixed height. Results come back as flat sequences, and every flat
//! sequence in this crate uses the same **x-major** convention
//! (`index = ix * ny + iy`). [`RadioMap`] wraps solver output and reads
//! it back through that convention.
//!
//! # Components
//!
//! - [`SamplingGridBuilder`]: validated construction of a [`SamplingGrid`]
//! - [`MapExtent`]: map rectangle from which both motion bounds and grid
//!   parameters derive
//! - [`ReceiverLayout`]: named receivers on an inclusive square lattice
//! - [`FieldSolver`]: the external solver collaborator
//! - [`RadioMap`] and [`FieldSummary`]: per-emitter results and statistics

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod extent;
pub mod grid;
pub mod radio_map;
pub mod receivers;

pub use error::GridError;
pub use extent::MapExtent;
pub use grid::{SamplingGrid, SamplingGridBuilder, MAX_CELLS, MAX_CELLS_PER_AXIS};
pub use radio_map::{to_db, FieldSolver, FieldSummary, RadioMap};
pub use receivers::{Receiver, ReceiverLayout};

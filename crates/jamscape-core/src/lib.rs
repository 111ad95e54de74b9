//! Core types for the Jamscape emitter simulation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the motion, mesh, and grid crates: emitter
//! identifiers, 3-D positions, per-axis bounds, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod id;

pub use bounds::{Axis, AxisRange, Bounds};
pub use error::{ConfigError, ValidationError};
pub use id::{distance, EmitterId, Position};

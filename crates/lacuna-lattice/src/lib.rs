//! Periodic lattice topologies for Lacuna simulations.
//!
//! This crate builds the immutable spatial substrate the rest of the
//! pipeline runs on: a flat neighbour table under periodic boundaries,
//! real-space site coordinates, the periodic unit cell, and the seam
//! bookkeeping needed to classify boundary-crossing hops.
//!
//! # Backends
//!
//! - [`LatticeKind::Square`]: 4-connected square lattice on a torus
//! - [`LatticeKind::Honeycomb`]: 3-connected brick-wall honeycomb on a
//!   torus with a non-square unit cell
//!
//! Construction is deterministic: the same `(kind, grid_size)` pair always
//! produces the same tables.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod honeycomb;
pub mod lattice;
pub mod square;

pub use error::LatticeError;
pub use lacuna_core::{Crossing, LatticeKind};
pub use lattice::Lattice;

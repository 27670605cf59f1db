//! Core types for the Lacuna diffusion simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every pipeline stage — topology and pool selectors,
//! the periodic-crossing classification, real-space positions — and the
//! single reproducible random stream the simulation owns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod rng;
pub mod types;

pub use rng::{exponential, seed_rng, standard_normal, SimRng};
pub use types::{Crossing, LatticeKind, Position, WalkPool};

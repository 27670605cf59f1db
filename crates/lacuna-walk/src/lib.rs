//! Random walks confined to occupied percolation sites.
//!
//! A walk lives on the lattice-site graph restricted to occupied sites.
//! Each walk is generated in four phases:
//!
//! 1. **start selection** from an eligible pool ([`start_pool`]), with a
//!    bounded retry search for a start that can actually move;
//! 2. **hopping**: uniform choices among occupied neighbours, with every
//!    hop classified against the periodic seams;
//! 3. **subordination** to a continuous-time random walk clock
//!    (heavy-tailed Pareto waiting times) when `beta > 0`;
//! 4. **unwrapping** into continuous real-space coordinates, so periodic
//!    wraps never teleport the trajectory.
//!
//! Optional Gaussian coordinate noise is applied afterwards by
//! [`noise::add_noise`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod noise;
pub mod start;
pub mod walker;

pub use start::start_pool;
pub use walker::{Trajectory, WalkSampler};

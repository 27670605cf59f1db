//! Shared helpers for the Lacuna benchmarks.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use lacuna_core::{LatticeKind, WalkPool};
use lacuna_engine::SimConfig;

/// A deterministic near-threshold square-lattice configuration used by the
/// end-to-end benchmarks.
pub fn reference_config(grid_size: u32, n_walks: usize, n_steps: usize) -> SimConfig {
    SimConfig {
        grid_size,
        lattice: LatticeKind::Square,
        fill: 0.59,
        walk_pool: WalkPool::AllClusters,
        n_walks,
        n_steps,
        beta: 0.0,
        tau0: 1.0,
        noise: 0.0,
        seed: Some(1),
        jobs: Some(1),
    }
}

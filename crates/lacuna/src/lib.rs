//! Lacuna: anomalous diffusion on disordered lattices.
//!
//! Builds a periodic square or honeycomb lattice, runs Newman–Ziff site
//! percolation to grow clusters, simulates random walks confined to the
//! occupied sites — optionally subordinated to a heavy-tailed CTRW clock —
//! and reduces the ensemble to diffusion observables (MSD variants and the
//! ergodicity-breaking parameter).
//!
//! This is the top-level facade crate re-exporting the public API from the
//! Lacuna sub-crates; for most users a single `lacuna` dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lacuna::prelude::*;
//!
//! let config = SimConfig {
//!     grid_size: 16,
//!     lattice: LatticeKind::Square,
//!     fill: 0.6,
//!     walk_pool: WalkPool::AllClusters,
//!     n_walks: 3,
//!     n_steps: 50,
//!     beta: 0.0,
//!     tau0: 1.0,
//!     noise: 0.0,
//!     seed: Some(42),
//!     jobs: Some(1),
//! };
//!
//! let report = Simulation::new(config).unwrap().run();
//! assert_eq!(report.clusters.len(), 256);
//!
//! let analysis = report.analysis.unwrap();
//! assert_eq!(analysis.lag_count(), 49);
//! assert!(analysis.is_finite());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lacuna-core` | shared enums, positions, RNG helpers |
//! | [`lattice`] | `lacuna-lattice` | periodic topologies and seam bookkeeping |
//! | [`cluster`] | `lacuna-cluster` | occupation order, union-find forest, labels |
//! | [`walk`] | `lacuna-walk` | walk sampling, CTRW clock, noise |
//! | [`stats`] | `lacuna-stats` | MSD family and ergodicity breaking |
//! | [`engine`] | `lacuna-engine` | validated config and the pipeline driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shared enums, positions, and RNG helpers (`lacuna-core`).
pub use lacuna_core as types;

/// Periodic lattice topologies (`lacuna-lattice`).
pub use lacuna_lattice as lattice;

/// Percolation and cluster bookkeeping (`lacuna-cluster`).
pub use lacuna_cluster as cluster;

/// Walk generation and noise (`lacuna-walk`).
pub use lacuna_walk as walk;

/// Ensemble statistics (`lacuna-stats`).
pub use lacuna_stats as stats;

/// Configuration and the pipeline driver (`lacuna-engine`).
pub use lacuna_engine as engine;

/// Common imports for typical Lacuna usage.
///
/// ```rust
/// use lacuna::prelude::*;
/// ```
pub mod prelude {
    pub use lacuna_cluster::ClusterForest;
    pub use lacuna_core::{Crossing, LatticeKind, Position, WalkPool};
    pub use lacuna_engine::{ConfigError, SimConfig, SimReport, Simulation};
    pub use lacuna_lattice::{Lattice, LatticeError};
    pub use lacuna_stats::Analysis;
    pub use lacuna_walk::Trajectory;
}

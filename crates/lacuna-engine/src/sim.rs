//! The staged pipeline.

use crate::config::{ConfigError, SimConfig};
use lacuna_cluster::{cluster_labels, occupation_order, ClusterForest};
use lacuna_core::{seed_rng, Position, SimRng};
use lacuna_lattice::Lattice;
use lacuna_stats::{analyse, Analysis};
use lacuna_walk::{noise::add_noise, start_pool, Trajectory, WalkSampler};

/// Everything a completed run exposes.
#[derive(Clone, Debug)]
pub struct SimReport {
    /// Cluster-root label per site; never-occupied sites carry the
    /// sentinel `-(n_sites) - 1`.
    pub clusters: Vec<i64>,
    /// Real-space position per site.
    pub site_coords: Vec<Position>,
    /// Periodic tile dimensions used for unwrapping.
    pub unit_cell: Position,
    /// Size of the largest cluster (0 when nothing is occupied).
    pub largest_cluster_size: u64,
    /// Diffusion observables; present only when walks were requested.
    pub analysis: Option<Analysis>,
    /// Unwrapped trajectories; present only when walks were requested.
    pub trajectories: Option<Vec<Trajectory>>,
}

/// A configured simulation, ready to run.
///
/// Owns the lattice tables and the run's single RNG. The pipeline stages
/// borrow them in sequence; nothing escapes until [`run`](Self::run)
/// returns the report.
pub struct Simulation {
    config: SimConfig,
    lattice: Lattice,
    rng: SimRng,
}

impl Simulation {
    /// Validate the configuration and build the lattice tables.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lattice = Lattice::new(config.lattice, config.grid_size)?;
        let rng = seed_rng(config.seed);
        Ok(Self {
            config,
            lattice,
            rng,
        })
    }

    /// Topology the simulation will run on.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Execute every stage and return the report.
    pub fn run(mut self) -> SimReport {
        let n = self.lattice.n_sites();

        log::debug!("permuting occupation order over {n} sites");
        let order = occupation_order(n, &mut self.rng);

        log::debug!("percolating to fill fraction {}", self.config.fill);
        let forest = ClusterForest::percolate(&self.lattice, &order, self.config.fill);
        let clusters = cluster_labels(&forest);
        let largest_cluster_size = forest.largest_cluster_size();

        let (trajectories, analysis) = if self.config.include_walks() {
            let pool = start_pool(&forest, self.config.walk_pool);
            let sampler = WalkSampler::new(
                &self.lattice,
                &forest,
                pool,
                self.config.n_steps,
                self.config.beta,
                self.config.tau0,
            );
            log::debug!(
                "simulating {} walks of {} steps ({} hop events each)",
                self.config.n_walks,
                self.config.n_steps,
                sampler.sim_length(),
            );
            let mut walks: Vec<Trajectory> = (0..self.config.n_walks)
                .map(|_| sampler.sample(&mut self.rng))
                .collect();

            add_noise(&mut walks, self.config.noise, &mut self.rng);

            log::debug!("analysing {} walks", walks.len());
            let analysis = analyse(&walks, self.config.jobs);
            (Some(walks), Some(analysis))
        } else {
            (None, None)
        };

        SimReport {
            clusters,
            site_coords: self.lattice.coords().to_vec(),
            unit_cell: self.lattice.unit_cell(),
            largest_cluster_size,
            analysis,
            trajectories,
        }
    }
}

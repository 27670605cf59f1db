//! Walk generation: hop loop, subordination, and unwrapping.

use crate::clock;
use lacuna_cluster::ClusterForest;
use lacuna_core::{Crossing, Position, SimRng};
use lacuna_lattice::Lattice;
use rand::Rng;
use smallvec::SmallVec;

/// One unwrapped trajectory: a real-space position per uniform time step.
pub type Trajectory = Vec<Position>;

/// Generates cluster-confined walks, one at a time, from a shared start
/// pool.
///
/// The sampler borrows the lattice and forest read-only; the caller owns
/// the generator and passes it into [`sample`](Self::sample), keeping a
/// single random stream across the whole ensemble.
pub struct WalkSampler<'a> {
    lattice: &'a Lattice,
    forest: &'a ClusterForest,
    pool: Vec<usize>,
    n_steps: usize,
    sim_length: usize,
    beta: f64,
    tau0: f64,
}

impl<'a> WalkSampler<'a> {
    /// Maximum start-site attempts before a walk degrades to a pinned walk.
    const MAX_START_ATTEMPTS: usize = 1_000_000;

    /// Build a sampler over the given start pool.
    ///
    /// With `tau0 < 1` the hop budget oversamples to `n_steps / tau0`
    /// events so that the subordinated clock has enough events to cover
    /// the `[0, n_steps)` output window.
    pub fn new(
        lattice: &'a Lattice,
        forest: &'a ClusterForest,
        pool: Vec<usize>,
        n_steps: usize,
        beta: f64,
        tau0: f64,
    ) -> Self {
        let sim_length = if tau0 < 1.0 {
            (n_steps as f64 / tau0) as usize
        } else {
            n_steps
        };
        Self {
            lattice,
            forest,
            pool,
            n_steps,
            sim_length,
            beta,
            tau0,
        }
    }

    /// Number of hop events simulated per walk.
    pub fn sim_length(&self) -> usize {
        self.sim_length
    }

    /// Generate one walk and return its unwrapped trajectory of
    /// `n_steps` positions.
    pub fn sample(&self, rng: &mut SimRng) -> Trajectory {
        let (start, mobile) = self.select_start(rng);

        let mut sites = vec![start; self.sim_length];
        let mut crossings = vec![Crossing::None; self.sim_length];

        if mobile {
            let mut pos = start;
            let mut last = start;
            for j in 1..self.sim_length {
                let nbs = self.occupied_neighbours(pos);
                if nbs.is_empty() {
                    // Isolated mid-walk: freeze for this hop.
                    sites[j] = pos;
                    continue;
                }
                pos = nbs[rng.random_range(0..nbs.len())];
                sites[j] = pos;
                crossings[j] = self.lattice.classify_hop(last, pos);
                last = pos;
            }
        }

        let times = clock::event_times(self.sim_length, self.n_steps, self.beta, self.tau0, rng);
        self.resample_and_unwrap(&sites, &crossings, &times)
    }

    /// Draw start sites until one has at least one occupied neighbour, up
    /// to the retry budget; past the budget the walk is pinned where it is.
    fn select_start(&self, rng: &mut SimRng) -> (usize, bool) {
        let budget = self.lattice.n_sites().min(Self::MAX_START_ATTEMPTS);
        let mut attempts = 0;
        loop {
            let pos = self.pool[rng.random_range(0..self.pool.len())];
            if !self.occupied_neighbours(pos).is_empty() {
                return (pos, true);
            }
            attempts += 1;
            if attempts >= budget {
                log::info!(
                    "no mobile start site found after {budget} attempts; pinning walk at site {pos}"
                );
                return (pos, false);
            }
        }
    }

    fn occupied_neighbours(&self, site: usize) -> SmallVec<[usize; 4]> {
        self.lattice
            .neighbours(site)
            .iter()
            .copied()
            .filter(|&nb| self.forest.is_occupied(nb))
            .collect()
    }

    /// Resample the event-indexed walk onto uniform time steps and convert
    /// to continuous coordinates.
    ///
    /// The walk freezes at its current site between events; when an output
    /// step crosses the next event time, the event's crossing flag fires
    /// and its cell-offset increment applies from that step on.
    fn resample_and_unwrap(
        &self,
        sites: &[usize],
        crossings: &[Crossing],
        times: &[f64],
    ) -> Trajectory {
        let cell = self.lattice.unit_cell();
        let mut counter = 0usize;
        let mut nx: i64 = 0;
        let mut ny: i64 = 0;

        let mut out = Vec::with_capacity(self.n_steps);
        for j in 0..self.n_steps {
            if j as f64 > times[counter] && counter + 1 < times.len() {
                counter += 1;
                match crossings[counter] {
                    Crossing::Top => ny += 1,
                    Crossing::Bottom => ny -= 1,
                    Crossing::Right => nx += 1,
                    Crossing::Left => nx -= 1,
                    Crossing::None => {}
                }
            }
            let base = self.lattice.coord(sites[counter]);
            out.push([
                base[0] + nx as f64 * cell[0],
                base[1] + ny as f64 * cell[1],
            ]);
        }
        out
    }
}

//! The ensemble reduction.

use crate::msd::{squared_displacement, time_averaged_msd};
use lacuna_core::Position;
use rayon::prelude::*;

/// Diffusion observables for a walk ensemble, indexed by lag
/// (`lag = index + 1`, so every vector has `n_steps - 1` entries).
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// Ensemble-average MSD: mean squared displacement from each walk's
    /// own origin.
    pub ea_msd: Vec<f64>,
    /// Ensemble-time-average MSD: unit-lag TAMSD evaluated per absolute
    /// time, averaged over walks.
    pub eata_msd: Vec<f64>,
    /// Ergodicity-breaking parameter per lag, normalized by the lag.
    pub ergodicity: Vec<f64>,
    /// Per-walk TAMSD rows (one row per walk, one entry per lag).
    pub ta_msd: Vec<Vec<f64>>,
}

impl Analysis {
    /// Number of lags covered (`n_steps - 1`).
    pub fn lag_count(&self) -> usize {
        self.ea_msd.len()
    }

    /// Whether every statistic is finite.
    pub fn is_finite(&self) -> bool {
        self.ea_msd.iter().all(|v| v.is_finite())
            && self.eata_msd.iter().all(|v| v.is_finite())
            && self.ergodicity.iter().all(|v| v.is_finite())
            && self.ta_msd.iter().flatten().all(|v| v.is_finite())
    }
}

struct WalkRows {
    ea: Vec<f64>,
    ta: Vec<f64>,
    eata: Vec<f64>,
}

fn sanitize(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Per-walk statistics at every lag. Sanitized at the source so the
/// ensemble sums never see a non-finite term.
fn walk_rows(traj: &[Position]) -> WalkRows {
    let n_steps = traj.len();
    let lags = n_steps.saturating_sub(1);
    let mut ea = Vec::with_capacity(lags);
    let mut ta = Vec::with_capacity(lags);
    let mut eata = Vec::with_capacity(lags);

    if lags > 0 {
        let origin = traj[0];
        for j in 1..n_steps {
            ea.push(sanitize(squared_displacement(traj[j], origin)));
            ta.push(sanitize(time_averaged_msd(traj, n_steps, j)));
            eata.push(sanitize(time_averaged_msd(traj, j, 1)));
        }
    }

    WalkRows { ea, ta, eata }
}

/// Run the per-walk pass, honouring the job request.
///
/// `jobs == None` uses the default rayon pool (hardware concurrency);
/// an explicit worker count builds a dedicated pool. Ensembles of at most
/// one walk, explicit single-job requests, and pool-construction failures
/// all run serially — the result is identical either way, because each
/// walk's rows are computed independently.
fn compute_rows(walks: &[Vec<Position>], jobs: Option<usize>) -> Vec<WalkRows> {
    let serial = walks.len() <= 1 || matches!(jobs, Some(0) | Some(1));
    if serial {
        return walks.iter().map(|w| walk_rows(w)).collect();
    }
    match jobs {
        Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(|| walks.par_iter().map(|w| walk_rows(w)).collect()),
            Err(_) => walks.iter().map(|w| walk_rows(w)).collect(),
        },
        None => walks.par_iter().map(|w| walk_rows(w)).collect(),
    }
}

/// Compute the full [`Analysis`] for an ensemble of unwrapped
/// trajectories.
///
/// All trajectories must share one length; lags run `1..n_steps`. Every
/// non-finite intermediate or aggregate is replaced with zero before it
/// can propagate.
pub fn analyse(walks: &[Vec<Position>], jobs: Option<usize>) -> Analysis {
    let lags = walks.first().map_or(0, |w| w.len().saturating_sub(1));
    let rows = compute_rows(walks, jobs);
    let n_walks = rows.len();

    let mut ea_msd = vec![0.0; lags];
    let mut eata_msd = vec![0.0; lags];
    let mut ta_mean = vec![0.0; lags];
    let mut ta_sq_mean = vec![0.0; lags];

    for row in &rows {
        for j in 0..lags {
            ea_msd[j] += row.ea[j];
            eata_msd[j] += row.eata[j];
            ta_mean[j] += row.ta[j];
            ta_sq_mean[j] += row.ta[j] * row.ta[j];
        }
    }

    let inv = 1.0 / n_walks as f64;
    let mut ergodicity = vec![0.0; lags];
    for j in 0..lags {
        ea_msd[j] = sanitize(ea_msd[j] * inv);
        eata_msd[j] = sanitize(eata_msd[j] * inv);
        let m = ta_mean[j] * inv;
        let m2 = ta_sq_mean[j] * inv;
        let eb = sanitize((m2 - m * m) / (m * m));
        ergodicity[j] = sanitize(eb / (j + 1) as f64);
    }

    Analysis {
        ea_msd,
        eata_msd,
        ergodicity,
        ta_msd: rows.into_iter().map(|r| r.ta).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ballistic(n: usize, speed: f64) -> Vec<Position> {
        (0..n).map(|t| [speed * t as f64, 0.0]).collect()
    }

    fn pinned(n: usize) -> Vec<Position> {
        vec![[2.0, 3.0]; n]
    }

    // ── Shapes ─────────────────────────────────────────────────

    #[test]
    fn output_shapes_match_the_ensemble() {
        let walks = vec![ballistic(50, 1.0); 4];
        let a = analyse(&walks, Some(1));
        assert_eq!(a.lag_count(), 49);
        assert_eq!(a.eata_msd.len(), 49);
        assert_eq!(a.ergodicity.len(), 49);
        assert_eq!(a.ta_msd.len(), 4);
        assert!(a.ta_msd.iter().all(|row| row.len() == 49));
    }

    #[test]
    fn empty_ensemble_yields_empty_analysis() {
        let a = analyse(&[], None);
        assert_eq!(a.lag_count(), 0);
        assert!(a.ta_msd.is_empty());
    }

    // ── Known values ───────────────────────────────────────────

    #[test]
    fn ballistic_walks_have_quadratic_msd() {
        let walks = vec![ballistic(30, 1.0); 3];
        let a = analyse(&walks, Some(1));
        for j in 1..30 {
            assert!((a.ea_msd[j - 1] - (j * j) as f64).abs() < 1e-9);
            for row in &a.ta_msd {
                assert!((row[j - 1] - (j * j) as f64).abs() < 1e-9);
            }
        }
        // Unit-lag TAMSD of a unit-speed walk is 1 wherever defined; the
        // lag-1 window is empty and sanitizes to 0.
        assert_eq!(a.eata_msd[0], 0.0);
        for j in 2..30 {
            assert!((a.eata_msd[j - 1] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn identical_walks_do_not_break_ergodicity() {
        let walks = vec![ballistic(40, 2.0); 6];
        let a = analyse(&walks, Some(1));
        for &v in &a.ergodicity {
            assert!(v.abs() < 1e-9, "ergodicity {v} should vanish");
        }
    }

    // ── No-NaN guarantee ───────────────────────────────────────

    #[test]
    fn pinned_walks_produce_finite_zeros() {
        let walks = vec![pinned(25); 3];
        let a = analyse(&walks, Some(1));
        assert!(a.is_finite());
        assert!(a.ea_msd.iter().all(|&v| v == 0.0));
        assert!(a.ergodicity.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn mixed_ensembles_stay_finite() {
        let walks = vec![pinned(25), ballistic(25, 1.0), pinned(25)];
        let a = analyse(&walks, Some(1));
        assert!(a.is_finite());
    }

    // ── Parallel consistency ───────────────────────────────────

    #[test]
    fn serial_and_parallel_agree() {
        let walks: Vec<Vec<Position>> = (0..8)
            .map(|i| ballistic(60, 0.5 + i as f64 * 0.25))
            .collect();
        let serial = analyse(&walks, Some(1));
        let parallel = analyse(&walks, Some(4));
        let default_pool = analyse(&walks, None);
        assert_eq!(serial, parallel);
        assert_eq!(serial, default_pool);
    }
}

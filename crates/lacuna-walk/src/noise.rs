//! Gaussian coordinate noise.

use crate::walker::Trajectory;
use lacuna_core::{standard_normal, SimRng};

/// Perturb every coordinate of every trajectory with independent Gaussian
/// noise of standard deviation `sigma`. A non-positive `sigma` is a no-op.
///
/// Draws are consumed walk-major, step-major, x before y, so a fixed seed
/// perturbs a fixed ensemble reproducibly.
pub fn add_noise(walks: &mut [Trajectory], sigma: f64, rng: &mut SimRng) {
    if sigma <= 0.0 {
        return;
    }
    for walk in walks.iter_mut() {
        for p in walk.iter_mut() {
            p[0] += sigma * standard_normal(rng);
            p[1] += sigma * standard_normal(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacuna_core::seed_rng;

    #[test]
    fn zero_sigma_is_a_no_op() {
        let mut walks = vec![vec![[1.0, 2.0]; 10]];
        let before = walks.clone();
        add_noise(&mut walks, 0.0, &mut seed_rng(Some(1)));
        assert_eq!(walks, before);
    }

    #[test]
    fn noise_perturbs_every_point() {
        let mut walks = vec![vec![[0.0, 0.0]; 50]; 2];
        add_noise(&mut walks, 0.5, &mut seed_rng(Some(2)));
        for walk in &walks {
            for p in walk {
                assert!(p[0] != 0.0 || p[1] != 0.0);
            }
        }
    }

    #[test]
    fn noise_is_seed_deterministic() {
        let mut a = vec![vec![[0.0, 0.0]; 20]];
        let mut b = a.clone();
        add_noise(&mut a, 1.0, &mut seed_rng(Some(3)));
        add_noise(&mut b, 1.0, &mut seed_rng(Some(3)));
        assert_eq!(a, b);
    }
}

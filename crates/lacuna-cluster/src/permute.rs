//! Random occupation order.

use lacuna_core::SimRng;
use rand::RngCore;

/// Scale constant `1 / (2^32 - 1)` used by the historical Newman–Ziff
/// sampler. The swap index is `i + (n - i) * PERM_SCALE * u32` with the
/// product truncated toward zero; truncation (not rounding) is what keeps
/// the draw inside `[i, n)` and reproduces the reference behaviour.
const PERM_SCALE: f64 = 2.328_306_4e-10;

/// Draw a uniformly random permutation of `[0, n)` by Fisher–Yates.
///
/// The order defines which sites get occupied, and in what sequence, during
/// percolation. Deterministic given the generator state.
pub fn occupation_order(n: usize, rng: &mut SimRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    for i in 0..n {
        let j = i + ((n - i) as f64 * PERM_SCALE * f64::from(rng.next_u32())) as usize;
        order.swap(i, j);
    }
    order
}

//! The CTRW event clock.

use lacuna_core::{exponential, SimRng};

/// Draw the cumulative event times the walk is subordinated to.
///
/// With `beta > 0`, waiting times are `tau0 * exp(X)` with
/// `X ~ Exp(beta)` — Pareto-distributed with shape `beta` and scale
/// `tau0`, the heavy-tailed waiting times characteristic of a CTRW. With
/// `beta == 0` the clock is the plain unit-step clock `1, 2, ...`.
///
/// The returned times are non-decreasing, truncated at the first entry
/// reaching `n_steps`, and that final entry is clamped to exactly
/// `n_steps`. If the accumulated times never reach `n_steps` (possible
/// when `tau0 < 1` makes the event budget undershoot), the last entry
/// clamps instead.
pub fn event_times(
    sim_length: usize,
    n_steps: usize,
    beta: f64,
    tau0: f64,
    rng: &mut SimRng,
) -> Vec<f64> {
    let mut times: Vec<f64> = if beta > 0.0 {
        let mut acc = 0.0;
        (0..sim_length)
            .map(|_| {
                acc += tau0 * exponential(rng, beta).exp();
                acc
            })
            .collect()
    } else {
        (1..=sim_length).map(|t| t as f64).collect()
    };

    let limit = n_steps as f64;
    let cut = times
        .iter()
        .position(|&t| t >= limit)
        .unwrap_or(sim_length - 1);
    times.truncate(cut + 1);
    times[cut] = limit;
    times
}

//! Diffusion observables over a walk ensemble.
//!
//! Computes the mean-squared-displacement family — ensemble-average MSD,
//! per-walk time-averaged MSD, the ensemble-time-average MSD — and the
//! ergodicity-breaking parameter that separates Brownian from CTRW-like
//! transport.
//!
//! The per-walk pass is embarrassingly parallel and fans out over a rayon
//! pool sized by the caller; small ensembles and single-job requests run
//! serially. Non-finite intermediates are clamped to zero so one
//! ill-defined lag cannot contaminate the ensemble means.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod analyse;
pub mod msd;

pub use analyse::{analyse, Analysis};
pub use msd::{squared_displacement, time_averaged_msd};

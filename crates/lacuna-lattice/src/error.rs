//! Error types for lattice construction.

use std::error::Error;
use std::fmt;

/// Errors detected while building a [`Lattice`](crate::Lattice).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// `grid_size` was zero.
    EmptyLattice,
    /// `grid_size` exceeds the supported maximum.
    DimensionTooLarge {
        /// The requested linear dimension.
        grid_size: u32,
        /// The maximum supported linear dimension.
        max: u32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "grid_size must be at least 1"),
            Self::DimensionTooLarge { grid_size, max } => {
                write!(f, "grid_size {grid_size} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for LatticeError {}

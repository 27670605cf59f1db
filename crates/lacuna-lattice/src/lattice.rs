//! The [`Lattice`] type: neighbour table, coordinates, and seam bookkeeping.

use crate::error::LatticeError;
use crate::{honeycomb, square};
use lacuna_core::{Crossing, LatticeKind, Position};

/// Immutable tables produced by a topology builder.
pub(crate) struct LatticeTables {
    pub degree: usize,
    pub neighbours: Vec<usize>,
    pub coords: Vec<Position>,
    pub unit_cell: Position,
    pub top_seam: Vec<bool>,
    pub bottom_seam: Vec<bool>,
}

/// A finite 2D lattice with periodic boundaries.
///
/// Sites are indexed `0..n_sites` in column-major order: site
/// `s = column * grid_size + row`, where `row` counts within a column.
/// Each site has exactly [`degree`](Self::degree) neighbours in a fixed,
/// topology-defined order.
///
/// The seam masks record which sites abut the top/bottom periodic seam;
/// together with the first/last-column index thresholds they let
/// [`classify_hop`](Self::classify_hop) label each hop with the periodic
/// crossing it performs, which the walk stage later turns into integer
/// cell offsets for unwrapping.
///
/// Degenerate grids (`grid_size <= 2`) alias seam membership and neighbour
/// entries; construction succeeds but crossing classification is not
/// meaningful there.
#[derive(Clone, Debug)]
pub struct Lattice {
    kind: LatticeKind,
    grid_size: usize,
    n_sites: usize,
    degree: usize,
    neighbours: Vec<usize>,
    coords: Vec<Position>,
    unit_cell: Position,
    top_seam: Vec<bool>,
    bottom_seam: Vec<bool>,
}

impl Lattice {
    /// Maximum supported linear dimension.
    pub const MAX_GRID: u32 = 1 << 20;

    /// Build the lattice for the given topology and linear dimension.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` for `grid_size == 0` and
    /// `Err(LatticeError::DimensionTooLarge)` above [`MAX_GRID`](Self::MAX_GRID).
    ///
    /// # Examples
    ///
    /// ```
    /// use lacuna_lattice::{Lattice, LatticeKind};
    ///
    /// let lat = Lattice::new(LatticeKind::Square, 10).unwrap();
    /// assert_eq!(lat.n_sites(), 100);
    /// assert_eq!(lat.degree(), 4);
    ///
    /// let hex = Lattice::new(LatticeKind::Honeycomb, 10).unwrap();
    /// assert_eq!(hex.n_sites(), 400);
    /// assert_eq!(hex.degree(), 3);
    /// ```
    pub fn new(kind: LatticeKind, grid_size: u32) -> Result<Self, LatticeError> {
        if grid_size == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        if grid_size > Self::MAX_GRID {
            return Err(LatticeError::DimensionTooLarge {
                grid_size,
                max: Self::MAX_GRID,
            });
        }

        let g = grid_size as usize;
        let tables = match kind {
            LatticeKind::Square => square::build(g),
            LatticeKind::Honeycomb => honeycomb::build(g),
        };
        let n_sites = tables.coords.len();

        Ok(Self {
            kind,
            grid_size: g,
            n_sites,
            degree: tables.degree,
            neighbours: tables.neighbours,
            coords: tables.coords,
            unit_cell: tables.unit_cell,
            top_seam: tables.top_seam,
            bottom_seam: tables.bottom_seam,
        })
    }

    /// Topology of this lattice.
    pub fn kind(&self) -> LatticeKind {
        self.kind
    }

    /// Linear dimension the lattice was built with.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Total number of sites.
    pub fn n_sites(&self) -> usize {
        self.n_sites
    }

    /// Neighbours per site (4 for square, 3 for honeycomb).
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The neighbour indices of `site`, in fixed topology order.
    pub fn neighbours(&self, site: usize) -> &[usize] {
        let start = site * self.degree;
        &self.neighbours[start..start + self.degree]
    }

    /// Real-space position of `site` within the periodic tile.
    pub fn coord(&self, site: usize) -> Position {
        self.coords[site]
    }

    /// All site positions, indexed by site.
    pub fn coords(&self) -> &[Position] {
        &self.coords
    }

    /// The periodic tile dimensions used for unwrapping.
    pub fn unit_cell(&self) -> Position {
        self.unit_cell
    }

    /// Whether `site` abuts the top periodic seam.
    pub fn is_top_seam(&self, site: usize) -> bool {
        self.top_seam[site]
    }

    /// Whether `site` abuts the bottom periodic seam.
    pub fn is_bottom_seam(&self, site: usize) -> bool {
        self.bottom_seam[site]
    }

    /// Classify the periodic crossing performed by a hop from `prev` to
    /// `next`.
    ///
    /// Vertical seams are checked before horizontal ones; a hop between two
    /// adjacent interior sites classifies as [`Crossing::None`].
    pub fn classify_hop(&self, prev: usize, next: usize) -> Crossing {
        let first_col = self.grid_size;
        let last_col = self.n_sites - self.grid_size;

        if self.top_seam[prev] && self.bottom_seam[next] {
            Crossing::Top
        } else if self.bottom_seam[prev] && self.top_seam[next] {
            Crossing::Bottom
        } else if prev >= last_col && next < first_col {
            Crossing::Right
        } else if prev < first_col && next >= last_col {
            Crossing::Left
        } else {
            Crossing::None
        }
    }
}

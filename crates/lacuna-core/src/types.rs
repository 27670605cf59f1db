//! Vocabulary types shared across the simulation pipeline.

/// Lattice topology selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LatticeKind {
    /// 4-connected square lattice with periodic boundaries.
    Square,
    /// 3-connected honeycomb (brick-wall) lattice with periodic boundaries.
    Honeycomb,
}

/// Which occupied sites are eligible as walk starting points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalkPool {
    /// Any occupied site, regardless of the cluster it belongs to.
    AllClusters,
    /// Only sites belonging to the largest cluster.
    LargestCluster,
}

/// Periodic-boundary crossing classification for a single lattice hop.
///
/// A hop that leaves through one seam of the periodic tile re-enters
/// through the opposite seam; the unwrap stage turns each crossing into an
/// integer cell-offset increment so trajectories stay continuous.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Crossing {
    /// The hop stayed inside the tile.
    #[default]
    None,
    /// The hop left through the top seam (+y cell offset).
    Top,
    /// The hop left through the bottom seam (-y cell offset).
    Bottom,
    /// The hop left through the right seam (+x cell offset).
    Right,
    /// The hop left through the left seam (-x cell offset).
    Left,
}

/// A real-space position in the lattice plane.
pub type Position = [f64; 2];

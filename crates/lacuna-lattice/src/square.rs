//! 4-connected square lattice with periodic boundaries.
//!
//! Sites are column-major: `s = column * g + row`. The in-column axis is
//! the y direction (`row` is the y coordinate), columns are the x
//! direction. Neighbour order per site: down-column wrap (`+1`), up-column
//! wrap (`-1`), next column (`+g`), previous column (`-g`), all modular in
//! the site index with in-column fixups at the column ends.

use crate::lattice::LatticeTables;
use lacuna_core::Position;

pub(crate) fn build(g: usize) -> LatticeTables {
    let n = g * g;
    let mut neighbours = vec![0usize; 4 * n];

    for s in 0..n {
        let e = &mut neighbours[4 * s..4 * s + 4];
        e[0] = (s + 1) % n;
        e[1] = (s + n - 1) % n;
        e[2] = (s + g) % n;
        e[3] = (s + n - g) % n;
        if s % g == 0 {
            // Bottom of a column: "down" wraps within the column.
            e[1] = s + g - 1;
        }
        if (s + 1) % g == 0 {
            // Top of a column: "up" wraps within the column.
            e[0] = s + 1 - g;
        }
    }

    let mut coords: Vec<Position> = Vec::with_capacity(n);
    for col in 0..g {
        for row in 0..g {
            coords.push([col as f64, row as f64]);
        }
    }

    let top_seam: Vec<bool> = (0..n).map(|s| s % g == g - 1).collect();
    let bottom_seam: Vec<bool> = (0..n).map(|s| s % g == 0).collect();

    LatticeTables {
        degree: 4,
        neighbours,
        coords,
        unit_cell: [g as f64, g as f64],
        top_seam,
        bottom_seam,
    }
}

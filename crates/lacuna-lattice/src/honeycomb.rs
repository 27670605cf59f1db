//! 3-connected honeycomb (brick-wall) lattice with periodic boundaries.
//!
//! The honeycomb is laid out as `4 * g` columns of `g` sites each, with the
//! column phase (`column % 4`) selecting one of the four x/y offsets that
//! tile the hexagons. Periodic wrapping on the non-square unit cell needs a
//! case split: the first site, the two right-hand corner sites, the first
//! and last columns, and then per-phase rules with top/bottom-row
//! sub-cases.
//!
//! The top seam is row 0 of phase-0/3 columns, the bottom seam row `g - 1`
//! of phase-1/2 columns; those are exactly the sites whose wrap partners
//! sit across the vertical seam of the tile.

use crate::lattice::LatticeTables;
use lacuna_core::Position;

const SQRT3: f64 = 1.732_050_807_568_877_2;
const SQRT3_HALF: f64 = 0.866_025_403_784_438_6;

pub(crate) fn build(g: usize) -> LatticeTables {
    let n = 4 * g * g;

    let top_seam: Vec<bool> = (0..n)
        .map(|s| {
            let phase = (s / g) % 4;
            s % g == 0 && (phase == 0 || phase == 3)
        })
        .collect();
    let bottom_seam: Vec<bool> = (0..n)
        .map(|s| {
            let phase = (s / g) % 4;
            s % g == g - 1 && (phase == 1 || phase == 2)
        })
        .collect();

    let mut neighbours = vec![0usize; 3 * n];
    for s in 0..n {
        let nb: [usize; 3] = if s == 0 {
            // First site: wraps down-column, across the seam, and across
            // the horizontal boundary.
            [g, 2 * g - 1, n - g]
        } else if s == n - g {
            // Top right-hand corner.
            [s - 1, s - g, s + g - n]
        } else if s == n - g - 1 {
            // Bottom right-hand corner.
            [s - g, s + g, s + 1]
        } else if s < g {
            // First column.
            [s + g - 1, s + g, s + n - g]
        } else if s > n - g {
            // Last column.
            [s - g - 1, s - g, s + g - n]
        } else {
            match (s / g) % 4 {
                0 => {
                    if top_seam[s] {
                        [s - g, s + g, s + 2 * g - 1]
                    } else {
                        [s - g, s + g - 1, s + g]
                    }
                }
                1 => {
                    if bottom_seam[s] {
                        [s - g, s + g, s + 1 - 2 * g]
                    } else {
                        [s - g, s - g + 1, s + g]
                    }
                }
                2 => {
                    if bottom_seam[s] {
                        [s - g, s + g, s + 1]
                    } else {
                        [s - g, s + g, s + g + 1]
                    }
                }
                _ => {
                    if top_seam[s] {
                        [s - 1, s - g, s + g]
                    } else {
                        [s - g - 1, s - g, s + g]
                    }
                }
            }
        };
        neighbours[3 * s..3 * s + 3].copy_from_slice(&nb);
    }

    let mut coords: Vec<Position> = Vec::with_capacity(n);
    for col in 0..4 * g {
        for row in 0..g {
            let y_off = (g - row - 1) as f64; // count from top to bottom
            let x_off = (col / 4) as f64;
            let (x, y) = match col % 4 {
                0 => (x_off * 3.0, y_off * SQRT3 + SQRT3_HALF),
                1 => (x_off * 3.0 + 0.5, y_off * SQRT3),
                2 => (x_off * 3.0 + 1.5, y_off * SQRT3),
                _ => (x_off * 3.0 + 2.0, y_off * SQRT3 + SQRT3_HALF),
            };
            coords.push([x, y]);
        }
    }

    let max_x = coords.iter().map(|c| c[0]).fold(f64::MIN, f64::max);
    let max_y = coords.iter().map(|c| c[1]).fold(f64::MIN, f64::max);

    LatticeTables {
        degree: 3,
        neighbours,
        coords,
        // Bounding box plus the topology overshoot: half a horizontal unit
        // and half a vertical rise beyond the outermost sites.
        unit_cell: [max_x + 1.5, max_y + SQRT3_HALF],
        top_seam,
        bottom_seam,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_site_and_corners() {
        let g = 5;
        let n = 4 * g * g;
        let t = build(g);
        assert_eq!(&t.neighbours[0..3], &[g, 2 * g - 1, n - g]);
        assert_eq!(
            &t.neighbours[3 * (n - g)..3 * (n - g) + 3],
            &[n - g - 1, n - 2 * g, 0]
        );
        assert_eq!(
            &t.neighbours[3 * (n - g - 1)..3 * (n - g - 1) + 3],
            &[n - 2 * g - 1, n - 1, n - g]
        );
    }

    #[test]
    fn seam_masks_match_the_row_formulas() {
        // The closed-form masks must reproduce the alternating-parity row
        // index formulas for the seam sets.
        let g = 6i64;
        let t = build(g as usize);

        let mut top = vec![false; (4 * g * g) as usize];
        let mut bottom = vec![false; (4 * g * g) as usize];
        for k in 1..=2 * g {
            let first = if k % 2 == 1 { 2 * g * (k - 1) } else { 2 * k * g - g };
            let last = if k % 2 == 1 { 2 * g * k - 1 } else { g * (2 * k - 1) - 1 };
            top[first as usize] = true;
            bottom[last as usize] = true;
        }
        assert_eq!(t.top_seam, top);
        assert_eq!(t.bottom_seam, bottom);
    }

    #[test]
    fn vertical_period_is_exact_and_horizontal_overshoots() {
        let g = 4;
        let t = build(g);
        assert!((t.unit_cell[1] - g as f64 * SQRT3).abs() < 1e-12);
        assert!((t.unit_cell[0] - (3.0 * g as f64 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn phase_offsets_tile_the_plane() {
        let g = 3;
        let t = build(g);
        // Column phases 1 and 2 sit on the y = k*sqrt(3) rows, phases 0
        // and 3 half a rise above them.
        for (s, c) in t.coords.iter().enumerate() {
            let phase = (s / g) % 4;
            let rem = c[1] % SQRT3;
            if phase == 1 || phase == 2 {
                assert!(rem.abs() < 1e-9 || (rem - SQRT3).abs() < 1e-9);
            } else {
                assert!((rem - SQRT3_HALF).abs() < 1e-9);
            }
        }
    }
}

//! Flattening the forest into per-site cluster labels.

use crate::forest::ClusterForest;

/// Map every occupied site to its ultimate cluster-root index.
///
/// Works on a copy of the forest (the forest itself is left untouched):
/// a first pass path-compresses every occupied chain onto its root, a
/// second pass relabels the roots with their own index. Never-occupied
/// sites keep the sentinel.
pub fn cluster_labels(forest: &ClusterForest) -> Vec<i64> {
    let empty = forest.empty_sentinel();
    let mut labels = forest.cells().to_vec();
    let n = labels.len();

    for i in 0..n {
        if labels[i] != empty {
            compress(&mut labels, i);
        }
    }
    for (i, label) in labels.iter_mut().enumerate() {
        if *label != empty && *label < 0 {
            *label = i as i64;
        }
    }
    labels
}

/// Iterative path compression on the label copy. Roots (negative entries)
/// are left as-is until the relabelling pass.
fn compress(labels: &mut [i64], start: usize) -> usize {
    let mut root = start;
    while labels[root] >= 0 {
        root = labels[root] as usize;
    }
    let mut node = start;
    while labels[node] >= 0 {
        let parent = labels[node] as usize;
        labels[node] = root as i64;
        node = parent;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupation_order;
    use lacuna_core::{seed_rng, LatticeKind};
    use lacuna_lattice::Lattice;

    fn labelled(g: u32, fill: f64, seed: u64) -> (Lattice, ClusterForest, Vec<i64>) {
        let lat = Lattice::new(LatticeKind::Square, g).unwrap();
        let order = occupation_order(lat.n_sites(), &mut seed_rng(Some(seed)));
        let forest = ClusterForest::percolate(&lat, &order, fill);
        let labels = cluster_labels(&forest);
        (lat, forest, labels)
    }

    #[test]
    fn occupied_sites_are_labelled_with_their_root() {
        let (lat, forest, labels) = labelled(10, 0.6, 42);
        for s in 0..lat.n_sites() {
            match forest.root_of(s) {
                Some(root) => assert_eq!(labels[s], root as i64),
                None => assert_eq!(labels[s], forest.empty_sentinel()),
            }
        }
    }

    #[test]
    fn roots_label_themselves() {
        let (_, forest, labels) = labelled(8, 0.5, 1);
        for (s, &cell) in forest.cells().iter().enumerate() {
            if cell < 0 && cell != forest.empty_sentinel() {
                assert_eq!(labels[s], s as i64);
            }
        }
    }

    #[test]
    fn grouping_does_not_mutate_the_forest() {
        let (_, forest, _) = labelled(8, 0.5, 2);
        let before = forest.cells().to_vec();
        let _ = cluster_labels(&forest);
        assert_eq!(forest.cells(), &before[..]);
    }

    #[test]
    fn empty_forest_keeps_sentinels() {
        let (_, forest, labels) = labelled(6, 0.0, 3);
        assert!(labels.iter().all(|&l| l == forest.empty_sentinel()));
    }
}

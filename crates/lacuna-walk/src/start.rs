//! Eligible start-site pools.

use lacuna_cluster::ClusterForest;
use lacuna_core::WalkPool;

/// Collect the sites a walk may start from.
///
/// [`WalkPool::AllClusters`] admits every occupied site;
/// [`WalkPool::LargestCluster`] admits only sites whose root is the
/// largest cluster's root (the root itself included).
///
/// When nothing is occupied at all (a zero fill fraction), the pool falls
/// back to every site: the walk then pins at whichever site it draws,
/// since no neighbour is ever occupied.
pub fn start_pool(forest: &ClusterForest, pool: WalkPool) -> Vec<usize> {
    let n = forest.n_sites();
    let sites: Vec<usize> = match pool {
        WalkPool::AllClusters => (0..n).filter(|&s| forest.is_occupied(s)).collect(),
        WalkPool::LargestCluster => match forest.largest_root() {
            Some(root) => (0..n).filter(|&s| forest.root_of(s) == Some(root)).collect(),
            None => Vec::new(),
        },
    };
    if sites.is_empty() {
        (0..n).collect()
    } else {
        sites
    }
}

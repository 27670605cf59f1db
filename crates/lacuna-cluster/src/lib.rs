//! Site percolation for Lacuna simulations.
//!
//! Implements the Newman–Ziff incremental algorithm: sites are occupied in
//! a uniformly random order and clusters are grown with a union-find
//! forest, giving near-linear total cost in the number of occupied sites.
//!
//! The three stages mirror the pipeline: [`occupation_order`] draws the
//! random occupation permutation, [`ClusterForest::percolate`] grows the
//! forest up to the requested fill fraction, and [`cluster_labels`]
//! flattens the forest into a per-site root label for consumers that need
//! random access.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod forest;
pub mod group;
pub mod permute;

pub use forest::ClusterForest;
pub use group::cluster_labels;
pub use permute::occupation_order;

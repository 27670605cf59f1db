//! Criterion micro-benchmarks for the simulation stages.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lacuna_bench::reference_config;
use lacuna_cluster::{occupation_order, ClusterForest};
use lacuna_core::{seed_rng, LatticeKind};
use lacuna_engine::Simulation;
use lacuna_lattice::Lattice;

/// Benchmark: build the neighbour tables for a 100x100 square lattice.
fn bench_lattice_build_square_10k(c: &mut Criterion) {
    c.bench_function("lattice_build_square_10k", |b| {
        b.iter(|| {
            let lat = Lattice::new(LatticeKind::Square, 100).unwrap();
            black_box(&lat);
        });
    });
}

/// Benchmark: build the neighbour tables for a honeycomb of similar size.
fn bench_lattice_build_honeycomb_10k(c: &mut Criterion) {
    c.bench_function("lattice_build_honeycomb_10k", |b| {
        b.iter(|| {
            let lat = Lattice::new(LatticeKind::Honeycomb, 50).unwrap();
            black_box(&lat);
        });
    });
}

/// Benchmark: percolate a 100x100 square lattice at the critical fill.
fn bench_percolate_square_10k(c: &mut Criterion) {
    let lat = Lattice::new(LatticeKind::Square, 100).unwrap();
    let order = occupation_order(lat.n_sites(), &mut seed_rng(Some(1)));

    c.bench_function("percolate_square_10k", |b| {
        b.iter(|| {
            let forest = ClusterForest::percolate(&lat, &order, 0.5927);
            black_box(forest.largest_cluster_size());
        });
    });
}

/// Benchmark: a complete small run including walks and analysis.
fn bench_full_run_small(c: &mut Criterion) {
    c.bench_function("full_run_32x32_8x256", |b| {
        b.iter(|| {
            let report = Simulation::new(reference_config(32, 8, 256))
                .unwrap()
                .run();
            black_box(&report.analysis);
        });
    });
}

criterion_group!(
    benches,
    bench_lattice_build_square_10k,
    bench_lattice_build_honeycomb_10k,
    bench_percolate_square_10k,
    bench_full_run_small,
);
criterion_main!(benches);

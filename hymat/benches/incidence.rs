//! Incidence construction benchmarks over randomly generated hypergraphs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hymat::{binary_incidence, weighted_incidence};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `edge_count` random hyperedges over `node_count` nodes
fn random_hyperedges(node_count: usize, edge_count: usize, seed: u64) -> Vec<Vec<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..edge_count)
        .map(|_| {
            let size = rng.gen_range(2..=8);
            (0..size).map(|_| rng.gen_range(0..node_count)).collect()
        })
        .collect()
}

fn bench_incidence(c: &mut Criterion) {
    let hyperedges = random_hyperedges(10_000, 2_000, 42);
    let weights: Vec<f64> = {
        let mut rng = StdRng::seed_from_u64(7);
        (0..hyperedges.len()).map(|_| rng.gen_range(0.1..10.0)).collect()
    };

    c.bench_function("binary_incidence_2k_edges", |b| {
        b.iter(|| binary_incidence::<f64, _>(black_box(&hyperedges), None).unwrap())
    });

    c.bench_function("weighted_incidence_2k_edges", |b| {
        b.iter(|| {
            weighted_incidence::<f64, _>(black_box(&hyperedges), black_box(&weights), None)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_incidence);
criterion_main!(benches);

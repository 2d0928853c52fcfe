use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kruskal::graph::{build_mst, build_mst_batch, dense_prefix_graph, random_connected_graph};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal_random");
    let mut rng = ChaCha20Rng::seed_from_u64(0xC0FFEE);

    for &n in &[100, 1_000, 10_000, 100_000] {
        let edges = random_connected_graph(n, 4 * n, 1_000_000, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &edges, |b, edges| {
            b.iter(|| build_mst(black_box(n), black_box(edges)).unwrap())
        });
    }
    group.finish();
}

fn bench_dense_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal_dense_prefix");
    for &n in &[4, 5, 10, 25, 50, 100, 200] {
        let edges = dense_prefix_graph(n, 5, 3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &edges, |b, edges| {
            b.iter(|| build_mst(black_box(n), black_box(edges)).unwrap())
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(17);
    let graphs: Vec<_> = (0..64)
        .map(|_| (2_000, random_connected_graph(2_000, 8_000, 1_000, &mut rng).unwrap()))
        .collect();

    c.bench_function("kruskal_batch_64x2000", |b| {
        b.iter(|| build_mst_batch(black_box(&graphs)))
    });
}

criterion_group!(benches, bench_random_graphs, bench_dense_prefix, bench_batch);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use weighted_paths::graph::generators::{generate_grid, generate_layered, generate_random};

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    let mut rng = StdRng::seed_from_u64(1);

    for size in [100usize, 1_000, 4_000] {
        let graph = generate_random(&mut rng, size, size * 3, 10).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| graph.shortest_paths_from(black_box(0)).unwrap())
        });
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(60, 60, &HashSet::new()).unwrap();
    c.bench_function("grid_60x60", |b| {
        b.iter(|| graph.shortest_paths_from(black_box((0, 0))).unwrap())
    });
}

fn bench_path_enumeration(c: &mut Criterion) {
    let graph = generate_layered(8, 3).unwrap();
    let result = graph.shortest_paths_from((0, 0)).unwrap();
    c.bench_function("layered_paths_8x3", |b| {
        b.iter(|| result.paths_to(black_box(&(9, 0))).count())
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid, bench_path_enumeration);
criterion_main!(benches);

use algos_core::rng::RngHandle;
use algos_graph::{enumerate_cycles, gen_random_list, has_cycle, is_connected, RandomGraphConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn traversal_bench(c: &mut Criterion) {
    let config = RandomGraphConfig {
        vertices: 5_000,
        edges: 20_000,
        ..RandomGraphConfig::default()
    };
    let mut rng = RngHandle::from_seed(42);
    let graph = gen_random_list(&config, &mut rng).unwrap();

    c.bench_function("is_connected_5k", |b| {
        b.iter(|| black_box(is_connected(&graph)));
    });

    c.bench_function("has_cycle_5k", |b| {
        b.iter(|| black_box(has_cycle(&graph)));
    });

    c.bench_function("enumerate_cycles_5k", |b| {
        b.iter(|| black_box(enumerate_cycles(&graph).len()));
    });
}

criterion_group!(benches, traversal_bench);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_creator::{BorderSelectionType, CpuGridBuilderFactory, GridBuilderFactory};
use rand::prelude::*;

fn skewed_feature(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen_range(1e-9..1.0);
            (-u.ln() * 10.0) as f32
        })
        .collect()
}

fn bench_border_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_feature");
    group.sample_size(20);

    let factory = CpuGridBuilderFactory::new();
    let values = skewed_feature(10_000, 42);

    for kind in BorderSelectionType::ALL {
        group.bench_with_input(BenchmarkId::new(kind.name(), "n10000_k254"), &values, |b, values| {
            b.iter(|| {
                let mut builder = factory.create(kind).unwrap();
                builder.add_feature(black_box(values), 254).unwrap();
                builder.into_borders()
            })
        });
    }

    group.finish();
}

fn bench_border_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_border_count");

    let factory = CpuGridBuilderFactory::new();
    let values = skewed_feature(50_000, 7);

    for count in [16u32, 128, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut builder = factory.create(BorderSelectionType::GreedyLogSum).unwrap();
                builder.add_feature(black_box(&values), count).unwrap();
                builder.into_borders()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_border_selection, bench_border_count);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fedtrust::engine::median::lower_median;
use fedtrust::{compute_results, Dataset};

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    for &n_clients in &[10usize, 100, 1_000] {
        for &n_instances in &[10usize, 100] {
            let rows: Vec<Vec<f64>> = (0..n_clients)
                .map(|i| {
                    (0..n_instances)
                        .map(|j| 0.9 + 0.05 * (((i * n_instances + j) as f64).sin()))
                        .collect()
                })
                .collect();
            let dataset = Dataset::from_grid(rows);

            let id = format!("{}c_{}i", n_clients, n_instances);

            group.bench_with_input(
                BenchmarkId::new("compute_results", &id),
                &dataset,
                |b, ds| b.iter(|| compute_results(ds)),
            );
        }

        let weights: Vec<f64> = (0..n_clients).map(|i| (i as f64).cos()).collect();
        group.bench_with_input(
            BenchmarkId::new("lower_median", n_clients),
            &weights,
            |b, w| b.iter(|| lower_median(w)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);

//! Criterion benchmarks for the instrumented algorithms.
//!
//! Runs every algorithm headless through `NullSink`, so the numbers measure
//! the algorithm plus per-step snapshot cost, not pacing.
//!
//! Run with: cargo bench

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use instrumented_sorting::{Algorithm, NullSink};
use rand::Rng;

/// Generate random test data of given size
fn generate_random_data(size: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(0.0..(size * 2) as f64)).collect()
}

fn bench_algorithms(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("build tokio runtime");

    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("{} sort", algorithm));

        for size in [16usize, 50, 200] {
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
                b.iter_batched(
                    || generate_random_data(size),
                    |mut data| {
                        let stats = runtime
                            .block_on(algorithm.sort(black_box(&mut data), &mut NullSink));
                        (data, stats)
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);

//! Criterion comparison of the sequential and tiled parallel multipliers.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mtxmult::{Accumulation, Fill, Generator, multiply, multiply_parallel_with};

const CASES: [(usize, usize); 4] = [(64, 16), (128, 32), (128, 64), (256, 64)];

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for (n, s) in CASES {
        let mut generator = Generator::seeded(n as u64);
        let a = generator.generate(n, &Fill::Random { max: 10 }).unwrap();
        let b = generator.generate(n, &Fill::Random { max: 10 }).unwrap();
        let label = format!("n{}_s{}", n, s);

        group.bench_with_input(BenchmarkId::new("sequential", &label), &(), |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)).unwrap())
        });

        for (name, strategy) in [
            ("partial_sums", Accumulation::PartialSums),
            ("row_bands", Accumulation::RowBands),
        ] {
            group.bench_with_input(BenchmarkId::new(name, &label), &s, |bench, &s| {
                bench.iter(|| {
                    multiply_parallel_with(black_box(&a), black_box(&b), s, strategy).unwrap()
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);

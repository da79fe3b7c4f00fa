//! Benchmarks for the packing layout calculator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridpack_layout::{Arrangement, Dimensions, GapVector, PackingCalculator};

fn calculator_benchmark(c: &mut Criterion) {
    let calc = PackingCalculator::default();
    let item = Dimensions::new(95.0, 160.0, 55.0);
    let arrangement = Arrangement::new(10, 10, 10);
    let container_gaps = GapVector::uniform(5.0);
    let item_gaps = GapVector::uniform(1.0);

    c.bench_function("calculate_container_10x10x10", |b| {
        b.iter(|| {
            let result = calc.calculate_container(
                black_box(item),
                black_box(arrangement),
                black_box(container_gaps),
                black_box(item_gaps),
            );
            black_box(result)
        })
    });

    c.bench_function("calculate_item_positions_1000", |b| {
        b.iter(|| {
            let positions = calc.calculate_item_positions(black_box(item), black_box(arrangement));
            black_box(positions)
        })
    });
}

criterion_group!(benches, calculator_benchmark);
criterion_main!(benches);

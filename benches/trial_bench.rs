//! Trial kernel benchmarks: one permutation, one strategy verdict.
//!
//! Run with: `cargo bench --bench trial`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use prisoners::simulation::{
    efficient_strategy, naive_strategy, random_permutation, run_trial, Rng, SimulationConfig,
    Strategy, NUMBER_OF_BOXES_TO_CHECK, NUMBER_OF_PRISONERS,
};

fn bench_trials(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");
    group.sample_size(100);
    group.throughput(Throughput::Elements(1));

    group.bench_function("random_permutation_100", |b| {
        let mut rng = Rng::new(7);
        b.iter(|| black_box(random_permutation(NUMBER_OF_PRISONERS, &mut rng)));
    });

    // Fixed inputs isolate the evaluators from permutation cost.
    group.bench_function("efficient_strategy", |b| {
        let mut rng = Rng::new(7);
        b.iter_batched(
            || {
                (
                    random_permutation(NUMBER_OF_PRISONERS, &mut rng),
                    random_permutation(NUMBER_OF_PRISONERS, &mut rng),
                )
            },
            |(boxes, order)| black_box(efficient_strategy(&boxes, &order, NUMBER_OF_BOXES_TO_CHECK)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("naive_strategy", |b| {
        let mut setup_rng = Rng::new(7);
        let mut rng = Rng::new(8);
        b.iter_batched(
            || {
                (
                    random_permutation(NUMBER_OF_PRISONERS, &mut setup_rng),
                    random_permutation(NUMBER_OF_PRISONERS, &mut setup_rng),
                )
            },
            |(boxes, order)| {
                black_box(naive_strategy(&boxes, &order, NUMBER_OF_BOXES_TO_CHECK, &mut rng))
            },
            BatchSize::SmallInput,
        );
    });

    for strategy in [Strategy::Naive, Strategy::Efficient] {
        let config = SimulationConfig::default().with_strategy(strategy);
        let mut index = 0u64;
        group.bench_function(format!("full_trial_{strategy}"), |b| {
            b.iter(|| {
                index = index.wrapping_add(1);
                black_box(run_trial(&config, 7, index))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trials);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use lib::chess::Position;
use proptest::{prelude::*, strategy::ValueTree, test_runner::TestRunner};

fn bench(c: &mut Criterion) {
    let mut runner = TestRunner::deterministic();
    let positions: Vec<Position> = (0..64)
        .map(|_| any::<Position>().new_tree(&mut runner).map(|t| t.current()))
        .collect::<Result<_, _>>()
        .unwrap_or_default();

    let mut group = c.benchmark_group("moves");

    group.throughput(Throughput::Elements(1));
    group.bench_function("initial", |b| {
        let pos = Position::default();
        b.iter(|| pos.moves().count())
    });

    group.throughput(Throughput::Elements(positions.len() as u64));
    group.bench_function("arbitrary", |b| {
        b.iter_batched_ref(
            || positions.clone(),
            |ps| ps.iter().map(|p| p.moves().count()).sum::<usize>(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("outcome", |b| {
        b.iter(|| positions.iter().filter(|p| p.outcome().is_some()).count())
    });

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);

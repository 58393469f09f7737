use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nim_engine::core::{GameRng, PileSet};
use nim_engine::strategy::{MixedPolicy, MovePolicy, OptimalPolicy, RandomPolicy};

fn bench_policies(c: &mut Criterion) {
    let winning = PileSet::from_sizes(vec![3, 9, 14, 27, 5, 8, 11, 2]).unwrap();
    let losing = PileSet::from_sizes(vec![1, 2, 3, 4, 5, 6, 7, 0]).unwrap();
    let mut rng = GameRng::new(42);

    c.bench_function("optimal_winning", |b| {
        b.iter(|| OptimalPolicy.choose_move(black_box(&winning), &mut rng))
    });
    c.bench_function("optimal_losing", |b| {
        b.iter(|| OptimalPolicy.choose_move(black_box(&losing), &mut rng))
    });
    c.bench_function("random", |b| {
        b.iter(|| RandomPolicy.choose_move(black_box(&winning), &mut rng))
    });
    c.bench_function("mixed", |b| {
        b.iter(|| MixedPolicy::default().choose_move(black_box(&winning), &mut rng))
    });
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);

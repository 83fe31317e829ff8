//! Benchmarks for the team balancer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use team_balancer::balance::{BalanceConfig, ExecutionMode, TeamBalancer};
use team_balancer::combinatorics::Combinations;
use team_balancer::model::RosterGenerator;

fn combinations_benchmark(c: &mut Criterion) {
    c.bench_function("combinations_14_choose_7", |b| {
        b.iter(|| Combinations::new(black_box(14), black_box(7)).unwrap().count())
    });
}

fn balance_benchmark(c: &mut Criterion) {
    let roster = RosterGenerator::new().with_seed(42).generate();

    for mode in [
        ExecutionMode::Sequential,
        ExecutionMode::Pipelined,
        ExecutionMode::Parallel,
    ] {
        let balancer = TeamBalancer::new(BalanceConfig::default().with_mode(mode)).unwrap();
        c.bench_function(&format!("balance_default_roster_{:?}", mode), |b| {
            b.iter(|| balancer.balance(black_box(&roster)).unwrap().score)
        });
    }
}

criterion_group!(benches, combinations_benchmark, balance_benchmark);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use liars_dice::bot::binomial_tail;
use liars_dice::core::{Bid, GameRng};
use liars_dice::{BotPolicy, MatchBuilder};

fn bot_policy(c: &mut Criterion) {
    let policy = BotPolicy::default();
    let hand = [1, 3, 3, 5, 6];

    let mut group = c.benchmark_group("bot_policy");
    for total in [10usize, 30, 100] {
        let bid = Bid::new(total / 3, 3);

        group.bench_function(BenchmarkId::new("truth_probability", total), |b| {
            b.iter(|| black_box(policy.truth_probability(&hand, bid, total)))
        });

        group.bench_function(BenchmarkId::new("decide_next_call", total), |b| {
            let mut rng = GameRng::new(7);
            b.iter(|| black_box(policy.decide_next_call(&hand, bid, total, &mut rng)))
        });

        group.bench_function(BenchmarkId::new("binomial_tail", total), |b| {
            b.iter(|| black_box(binomial_tail(total, total / 4, 1.0 / 6.0)))
        });
    }
    group.finish();
}

fn bot_match(c: &mut Criterion) {
    c.bench_function("bots_play_full_match", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let (mut logic, mut state) = MatchBuilder::new()
                .bot("A", 5)
                .bot("B", 5)
                .bot("C", 5)
                .seed(seed)
                .build()
                .unwrap();
            while !logic.is_match_over() {
                black_box(logic.run_bot_turn(&mut state).unwrap());
            }
        })
    });
}

criterion_group!(benches, bot_policy, bot_match);
criterion_main!(benches);

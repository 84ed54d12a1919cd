use criterion::{black_box, criterion_group, criterion_main, Criterion};
use league_core::constants::{DRAW_PROB, HOME_ADVANTAGE};
use league_core::season::SeasonState;
use league_core::team::Team;
use league_core::win_prob::calculate_outcome_probs;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_20_team_league() -> SeasonState {
    let teams = (0..20)
        .map(|i| Team::new(format!("Team{}", i), 1400.0 + (i as f64) * 10.0))
        .collect();

    SeasonState::new(teams, HOME_ADVANTAGE, DRAW_PROB)
}

fn bench_outcome_probs(c: &mut Criterion) {
    c.bench_function("calculate_outcome_probs", |b| {
        b.iter(|| {
            calculate_outcome_probs(
                black_box(1600.0),
                black_box(1400.0),
                HOME_ADVANTAGE,
                DRAW_PROB,
            )
        })
    });
}

fn bench_single_trial(c: &mut Criterion) {
    let league = create_20_team_league();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("season_single_trial", |b| {
        b.iter(|| black_box(&league).simulate_trial(&mut rng))
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    let league = create_20_team_league();

    c.bench_function("season_1000_trials", |b| {
        b.iter(|| black_box(&league).run_trials(1000, Some(42)))
    });

    c.bench_function("season_1000_trials_parallel", |b| {
        b.iter(|| black_box(&league).run_trials_parallel(1000, Some(42)))
    });
}

criterion_group!(benches, bench_outcome_probs, bench_single_trial, bench_monte_carlo);
criterion_main!(benches);

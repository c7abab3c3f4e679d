//! Frame driver benchmarks.
//!
//! Tracks the per-tick cost of the simulation, the digest, and a full
//! recorded-bout replay.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ringout::game::input::{Buttons, PadRecording};
use ringout::game::state::MatchState;
use ringout::game::tick::{replay_bout, tick};

/// Pre-roll a deterministic stream of pad masks.
fn masks(len: usize, seed: u64) -> Vec<(Buttons, Buttons)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            (
                Buttons::from_bits(rng.gen::<u8>()),
                Buttons::from_bits(rng.gen::<u8>()),
            )
        })
        .collect()
}

fn bench_single_tick(c: &mut Criterion) {
    c.bench_function("tick_idle", |b| {
        b.iter_batched_ref(
            MatchState::new,
            |state| tick(state, Buttons::none(), Buttons::none()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_bout(c: &mut Criterion) {
    let script = masks(600, 7);
    c.bench_function("bout_600_ticks", |b| {
        b.iter(|| {
            let mut state = MatchState::new();
            for (p1, p2) in &script {
                tick(&mut state, *p1, *p2);
            }
            black_box(state.frame)
        })
    });
}

fn bench_digest(c: &mut Criterion) {
    let script = masks(600, 7);
    let mut state = MatchState::new();
    for (p1, p2) in &script {
        tick(&mut state, *p1, *p2);
    }
    c.bench_function("state_digest", |b| b.iter(|| black_box(state.digest())));
}

fn bench_replay(c: &mut Criterion) {
    let script = masks(600, 7);
    let mut live = MatchState::new();
    let mut rec1 = PadRecording::new(1);
    let mut rec2 = PadRecording::new(2);
    for (p1, p2) in &script {
        let next = live.frame + 1;
        rec1.record(next, *p1);
        rec2.record(next, *p2);
        tick(&mut live, *p1, *p2);
    }
    rec1.finalize(live.frame);
    rec2.finalize(live.frame);

    c.bench_function("replay_600_ticks", |b| {
        b.iter(|| black_box(replay_bout(&rec1, &rec2).frame))
    });
}

criterion_group!(
    benches,
    bench_single_tick,
    bench_bout,
    bench_digest,
    bench_replay
);
criterion_main!(benches);

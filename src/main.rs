//! Ringout Demo Driver
//!
//! Plays one scripted bout against an idle opponent, reports the round
//! result with a JSON dump of the final state, then proves determinism
//! by replaying the recorded pads and comparing state digests.

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ringout::game::input::{Buttons, PadRecording};
use ringout::game::state::MatchState;
use ringout::game::tick::{replay_bout, tick};
use ringout::render::{render, RecordingSink};
use ringout::{TICK_RATE, TRANSITION_TICKS, VERSION};

/// Hard cap on demo length.
const MAX_DEMO_TICKS: u32 = 2000;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Ringout Core v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);
    info!(
        "Round transition: {} ticks ({} seconds)",
        TRANSITION_TICKS,
        TRANSITION_TICKS / TICK_RATE
    );

    demo_bout();
}

/// Pad 1 choreography. Both of its fighters move in lockstep: lift
/// onto the lanes that clear the wall column, cross, drop back onto the
/// enemy rows, then chase with walk-and-swing cycles until both enemies
/// are shoved over the right edge.
fn pad1_script(frame: u32) -> Buttons {
    match frame {
        0..=24 => Buttons::none().with(Buttons::UP),
        25..=142 => Buttons::none().with(Buttons::RIGHT),
        143..=166 => Buttons::none().with(Buttons::DOWN),
        _ => match (frame - 167) % 12 {
            0..=7 => Buttons::none().with(Buttons::RIGHT),
            8 => Buttons::none().with(Buttons::ATTACK),
            _ => Buttons::none(),
        },
    }
}

/// Run the scripted bout to a round win, through the transition, and a
/// few frames into the next round.
fn demo_bout() {
    info!("=== Starting Demo Bout ===");

    let mut state = MatchState::new();
    let mut rec1 = PadRecording::new(1);
    let mut rec2 = PadRecording::new(2);
    let mut won_at: Option<u32> = None;

    for _ in 0..MAX_DEMO_TICKS {
        let next = state.frame + 1;
        let p1 = pad1_script(next);
        let p2 = Buttons::none();
        rec1.record(next, p1);
        rec2.record(next, p2);
        tick(&mut state, p1, p2);

        if state.frame % 60 == 0 {
            info!(
                "Frame {}: score {} - {}",
                state.frame, state.score[0], state.score[1]
            );
        }

        match won_at {
            None => {
                if let Some(team) = state.winner {
                    won_at = Some(state.frame);
                    info!(
                        "Player {} takes the round at frame {} (score {} - {})",
                        team + 1,
                        state.frame,
                        state.score[0],
                        state.score[1]
                    );
                }
            }
            // Play through the transition and a little of round two.
            Some(frame) if state.frame >= frame + TRANSITION_TICKS + 10 => break,
            Some(_) => {}
        }
    }
    rec1.finalize(state.frame);
    rec2.finalize(state.frame);

    info!("=== Bout Results ===");
    info!("Frames simulated: {}", state.frame);
    info!("Score: {} - {}", state.score[0], state.score[1]);
    info!("Final State Digest: {}", hex::encode(state.digest()));

    let mut sink = RecordingSink::new();
    render(&state, &mut sink);
    info!("Final frame renders as {} draw calls", sink.calls.len());

    let summary = serde_json::to_string(&state).expect("state serializes");
    info!("Final State JSON ({} bytes): {}", summary.len(), summary);

    info!("Pad 1 recording: {} change points", rec1.delta_count());
    info!("Pad 2 recording: {} change points", rec2.delta_count());

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let replayed = replay_bout(&rec1, &rec2);
    let live_digest = state.digest();
    let replay_digest = replayed.digest();
    info!("Replay State Digest: {}", hex::encode(replay_digest));

    if live_digest == replay_digest {
        info!("DETERMINISM VERIFIED: Digests match!");
    } else {
        info!("DETERMINISM FAILURE: Digests differ!");
    }
}

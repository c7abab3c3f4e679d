use ringout::game::arena::SPAWN_POINTS;
use ringout::render::{render, DrawCall, RecordingSink};
use ringout::{
    replay_bout, tick, Buttons, MatchState, PadRecording, ROSTER_SIZE, TRANSITION_TICKS,
};

/// Team-0 choreography that wins round one: lift both fighters into the
/// lanes clear of the wall columns, cross the arena, drop back onto the
/// defender rows, then repeat a walk-and-swing cycle until both
/// defenders are pushed over the right edge.
fn rush_script(frame: u32) -> Buttons {
    match frame {
        0..=24 => Buttons::none().with(Buttons::UP),
        25..=142 => Buttons::none().with(Buttons::RIGHT),
        143..=166 => Buttons::none().with(Buttons::DOWN),
        _ => {
            let phase = (frame - 167) % 12;
            if phase < 8 {
                Buttons::none().with(Buttons::RIGHT)
            } else if phase == 8 {
                Buttons::none().with(Buttons::ATTACK)
            } else {
                Buttons::none()
            }
        }
    }
}

#[test]
fn rush_script_wins_round_one_and_round_two_respawns() {
    let mut state = MatchState::new();
    let mut won_at = None;
    let mut reset_at = None;

    for _ in 0..400 {
        let transitioning = state.on_transition;
        let next = state.frame + 1;
        tick(&mut state, rush_script(next), Buttons::none());

        if won_at.is_none() && state.winner.is_some() {
            won_at = Some(state.frame);
            assert_eq!(state.winner, Some(0));
            assert_eq!(state.score, [1, 0]);
            assert!(state.on_transition);
        }
        if transitioning && !state.on_transition {
            reset_at = Some(state.frame);
            for (slot, fighter) in state.fighters.iter().enumerate() {
                assert_eq!(fighter.pos, SPAWN_POINTS[slot]);
            }
        }
    }

    // Golden milestone: six 12-tick swing cycles after the crossing.
    let won_at = won_at.expect("bout should produce a winner");
    assert_eq!(won_at, 235);

    let reset_at = reset_at.expect("transition should end inside the bout");
    assert_eq!(reset_at, won_at + TRANSITION_TICKS);

    assert_eq!(state.score, [1, 0]);
    assert!(!state.on_transition);
    assert_eq!(state.frame, 400);
}

#[test]
fn recorded_bout_replays_to_the_same_digest() {
    let mut live = MatchState::new();
    let mut rec1 = PadRecording::new(1);
    let mut rec2 = PadRecording::new(2);

    for _ in 0..500 {
        let next = live.frame + 1;
        let pad1 = Buttons::from_bits((next * 5 + 1) as u8);
        let pad2 = Buttons::from_bits((next * 3 + 2) as u8);
        rec1.record(next, pad1);
        rec2.record(next, pad2);
        tick(&mut live, pad1, pad2);
    }
    rec1.finalize(live.frame);
    rec2.finalize(live.frame);

    let replayed = replay_bout(&rec1, &rec2);
    assert_eq!(replayed.frame, live.frame);
    assert_eq!(replayed.digest(), live.digest());
    assert_eq!(replayed, live);
}

#[test]
fn match_state_survives_a_json_snapshot() {
    let mut state = MatchState::new();
    for _ in 0..180 {
        let next = state.frame + 1;
        tick(&mut state, rush_script(next), Buttons::none());
    }

    let snapshot = serde_json::to_string(&state).expect("state serializes");
    let restored: MatchState = serde_json::from_str(&snapshot).expect("snapshot parses");

    assert_eq!(restored, state);
    assert_eq!(restored.digest(), state.digest());
}

#[test]
fn final_state_json_names_the_outcome() {
    let mut state = MatchState::new();
    for _ in 0..240 {
        let next = state.frame + 1;
        tick(&mut state, rush_script(next), Buttons::none());
    }
    assert_eq!(state.winner, Some(0));

    // The summary the demo driver logs carries the match outcome, not
    // just geometry.
    let summary = serde_json::to_string(&state).expect("state serializes");
    assert!(summary.contains("\"frame\":240"));
    assert!(summary.contains("\"score\":[1,0]"));
    assert!(summary.contains("\"winner\":0"));
}

#[test]
fn render_pass_submits_every_fighter_and_captures_as_json() {
    let state = MatchState::new();
    let mut sink = RecordingSink::new();
    render(&state, &mut sink);

    assert!(matches!(sink.calls.first(), Some(DrawCall::Clear(_))));
    let sprites = sink
        .calls
        .iter()
        .filter(|call| matches!(call, DrawCall::Sprite(..)))
        .count();
    assert_eq!(sprites, ROSTER_SIZE);

    let encoded = serde_json::to_string(&sink.calls).expect("calls serialize");
    assert!(encoded.contains("\"Clear\""));
    assert!(encoded.contains("\"Sprite\""));
}

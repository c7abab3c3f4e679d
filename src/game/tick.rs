//! Deterministic Frame Driver
//!
//! One call to [`tick`] advances the whole match by exactly one frame.
//! The driver is 100% deterministic: fixed slot order, integer math
//! only, no clocks, no allocation. Feeding the same pad streams into a
//! fresh [`MatchState`] always reproduces the same digest stream, which
//! is what [`replay_bout`] exploits.

use crate::game::collision::resolve;
use crate::game::fighter::{FighterState, WALK_GATE_INFLATE};
use crate::game::input::{Buttons, PadRecording};
use crate::game::state::{team_of, MatchState, ROSTER_SIZE};
use crate::TRANSITION_TICKS;

/// Run one simulation frame.
///
/// `pad1` drives slots 0-1 and `pad2` drives slots 2-3; both slots of a
/// pair see the same mask. During a round transition the pads are
/// ignored and only the freeze timer runs.
pub fn tick(state: &mut MatchState, pad1: Buttons, pad2: Buttons) {
    // 0. Advance the frame counter. It runs through transitions too, so
    //    it stays a wall clock for the whole match.
    state.frame += 1;

    if state.on_transition {
        // 4. Between rounds, wait out the freeze and then respawn.
        if state.frame - state.transition_start >= TRANSITION_TICKS {
            state.reset_round();
        }
        return;
    }

    // 1. Update fighters in slot order. A slot whose ground contact has
    //    left the bounds is frozen, and the test is resampled per slot,
    //    so a knockback earlier in this same frame freezes its victim
    //    immediately.
    for slot in 0..ROSTER_SIZE {
        if state.is_out(slot) {
            continue;
        }
        let pad = if team_of(slot) == 0 { pad1 } else { pad2 };
        update_fighter(state, slot, pad);
    }

    // 2. Push fighters out of walls.
    resolve_wall_contacts(state);

    // 3. Round end: a team wins when both opposing slots are out. Team
    //    0's check runs first and the checks are independent, so a
    //    same-frame double out bumps both scores and the round goes to
    //    team 1.
    if state.is_out(2) && state.is_out(3) {
        state.award_win(0);
    }
    if state.is_out(0) && state.is_out(1) {
        state.award_win(1);
    }
}

/// Per-slot update: animation and attack completion first, then one
/// action chosen off the pad mask.
fn update_fighter(state: &mut MatchState, slot: usize, pad: Buttons) {
    let fighter = &mut state.fighters[slot];
    fighter.advance_animation();
    fighter.finish_attack();

    // A swing still in flight owns the rest of the frame. One that just
    // completed has already fallen back to Idle, so the pad is live
    // again on the very frame the swing ends.
    if fighter.state == FighterState::Attacking {
        return;
    }

    if pad.is_idle() {
        fighter.enter_idle();
    } else if pad.attack() {
        fighter.enter_attack();
        state.try_hit(slot);
    } else {
        let blocked = walk_blocked(state, slot);
        state.fighters[slot].walk(pad, blocked);
    }
}

/// Teammate walk gate. Only the even slot of a pair tests it: an
/// inflated copy of its own hurtbox against the odd slot's plain
/// hurtbox. The gate lifts once the teammate is out of the arena, and
/// the odd slot is never gated at all.
fn walk_blocked(state: &MatchState, slot: usize) -> bool {
    if slot % 2 != 0 {
        return false;
    }
    let buddy = slot + 1;
    if state.is_out(buddy) {
        return false;
    }
    let probe = state.fighters[slot].world_hurtbox().inflate(WALK_GATE_INFLATE);
    probe.intersects(&state.fighters[buddy].world_hurtbox())
}

/// One wall-major pass pushing every ground-contact box out of every
/// wall. Only the feet collide; a body sprite may overlap a wall it
/// stands behind. A shove can park a fighter inside a wall visited
/// earlier in the pass; that contact holds until the next frame, which
/// reads as a brief squeeze.
fn resolve_wall_contacts(state: &mut MatchState) {
    for wall in &state.walls {
        for fighter in &mut state.fighters {
            resolve(wall.hitbox, wall.pos, fighter.ground, &mut fighter.pos);
        }
    }
}

/// Rebuild a match from two pad recordings.
///
/// Ticks a fresh state until the later of the two end ticks and returns
/// it. Comparing its digest with the live match's digest at the same
/// frame detects any divergence in either recording or driver.
pub fn replay_bout(pad1: &PadRecording, pad2: &PadRecording) -> MatchState {
    let mut state = MatchState::new();
    let end = pad1.end_tick.max(pad2.end_tick);
    while state.frame < end {
        let next = state.frame + 1;
        tick(&mut state, pad1.buttons_at(next), pad2.buttons_at(next));
    }
    state
}

// =============================================================================
// TESTS
// =============================================================================

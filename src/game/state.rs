//! Match State
//!
//! The single owned container for one running match: four roster slots,
//! the wall set, team scores and the round-transition latch. The frame
//! driver in [`crate::game::tick`] mutates it in place; nothing here
//! allocates after construction.

use serde::{Deserialize, Serialize};

use crate::core::hash::{StateHash, StateHasher};
use crate::core::rect::Hitbox;
use crate::game::arena::{Wall, ARENA_BOUNDS, SPAWN_POINTS, WALL_COUNT, WALL_LAYOUT};
use crate::game::collision::find_hit_target;
use crate::game::fighter::Fighter;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Number of roster slots in a match. Slots 0-1 are driven by pad 1,
/// slots 2-3 by pad 2.
pub const ROSTER_SIZE: usize = 4;

/// Team owning a roster slot: 0 for slots 0-1, 1 for slots 2-3.
#[inline]
pub const fn team_of(slot: usize) -> u8 {
    (slot / 2) as u8
}

// =============================================================================
// MATCH STATE
// =============================================================================

/// Complete simulation state for one match.
///
/// Rounds are played until one team's pair both leave the arena; the
/// score and winner survive [`MatchState::reset_round`] so a match can
/// run any number of rounds through the same value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Tick counter. Monotonic for the life of the match; round resets
    /// never rewind it.
    pub frame: u32,
    /// Playable rectangle in world space.
    pub bounds: Hitbox,
    /// The four roster slots, fixed order: 0-1 on pad 1, 2-3 on pad 2.
    pub fighters: [Fighter; ROSTER_SIZE],
    /// Static solids, rebuilt from the layout each round.
    pub walls: [Wall; WALL_COUNT],
    /// Round wins per team.
    pub score: [u32; 2],
    /// Set while the between-rounds freeze is running.
    pub on_transition: bool,
    /// Frame at which the current transition began.
    pub transition_start: u32,
    /// Winning team of the most recent round, kept across the reset so
    /// the banner stays readable into the next round.
    pub winner: Option<u8>,
}

/// The roster in slot order, placed on the spawn grid.
fn spawn_roster() -> [Fighter; ROSTER_SIZE] {
    [
        Fighter::new(1, SPAWN_POINTS[0]),
        Fighter::new(1, SPAWN_POINTS[1]),
        Fighter::new(2, SPAWN_POINTS[2]),
        Fighter::new(2, SPAWN_POINTS[3]),
    ]
}

impl MatchState {
    /// Fresh match at frame zero with both scores blank.
    pub fn new() -> Self {
        Self {
            frame: 0,
            bounds: ARENA_BOUNDS,
            fighters: spawn_roster(),
            walls: WALL_LAYOUT,
            score: [0, 0],
            on_transition: false,
            transition_start: 0,
            winner: None,
        }
    }

    /// Start the next round: respawn all four fighters, restore the wall
    /// layout and drop the transition latch. Scores, the winner banner
    /// and the frame counter carry over.
    pub fn reset_round(&mut self) {
        self.fighters = spawn_roster();
        self.walls = WALL_LAYOUT;
        self.bounds = ARENA_BOUNDS;
        self.on_transition = false;
    }

    /// A slot is out once its ground box no longer overlaps the bounds.
    /// Standing on the boundary line still counts as in.
    #[inline]
    pub fn is_out(&self, slot: usize) -> bool {
        !self.bounds.intersects(&self.fighters[slot].world_ground())
    }

    /// Land `attacker`'s active attack on the first overlapped victim,
    /// if any. At most one fighter is knocked back per call.
    pub fn try_hit(&mut self, attacker: usize) {
        if let Some(victim) = find_hit_target(&self.fighters, attacker) {
            let center = self.fighters[attacker].hurtbox_center();
            self.fighters[victim].knock_back_from(center);
        }
    }

    /// Record a round win for `team` and open the transition window.
    pub fn award_win(&mut self, team: u8) {
        self.score[team as usize] += 1;
        self.on_transition = true;
        self.transition_start = self.frame;
        self.winner = Some(team);
    }

    /// Digest of every gameplay-relevant field, in fixed order. Two
    /// states that compare equal always hash equal, so divergent replays
    /// are caught by comparing digests alone.
    pub fn digest(&self) -> StateHash {
        let mut hasher = StateHasher::for_match_state();
        hasher.update_u32(self.frame);
        hasher.update_u32(self.score[0]);
        hasher.update_u32(self.score[1]);
        hasher.update_bool(self.on_transition);
        hasher.update_u32(self.transition_start);
        // None encodes as a sentinel outside the team id range.
        hasher.update_u8(self.winner.unwrap_or(u8::MAX));
        for fighter in &self.fighters {
            fighter.hash_into(&mut hasher);
        }
        hasher.finalize()
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Arena Layout
//!
//! Fixed compile-time geometry: the playable rectangle, the static wall
//! roster and the four spawn points. The simulation treats all of it as
//! immutable input data; `reset_round` rebuilds live state from these
//! tables and nothing ever writes them.
//!
//! Coordinates target a 240x136 playfield with a 16-unit border strip
//! reserved for the HUD.

use serde::{Deserialize, Serialize};

use crate::core::rect::Hitbox;
use crate::core::vec2::Vec2;

/// Upper bound on the wall roster. The layout below stays within it;
/// the table length is checked at compile time.
pub const MAX_WALLS: usize = 16;

/// Number of walls in the current layout.
pub const WALL_COUNT: usize = 4;

/// The playable rectangle. A fighter whose ground-contact box no longer
/// overlaps it is ringed out.
pub const ARENA_BOUNDS: Hitbox = Hitbox::new(16, 16, 208, 104);

/// One static solid. Fighters' ground-contact boxes are pushed out of
/// every wall each tick; body sprites may overlap a wall they stand
/// behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    /// World position of the wall's origin
    pub pos: Vec2,
    /// Solid region, local to `pos`
    pub hitbox: Hitbox,
}

impl Wall {
    /// Create a wall whose solid region starts at its origin.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            hitbox: Hitbox::new(0, 0, w, h),
        }
    }

    /// The wall's solid region in world space.
    #[inline]
    pub fn world_box(&self) -> Hitbox {
        self.hitbox.translate(self.pos)
    }
}

/// The static wall roster: two pillar pairs flanking the center lane.
pub const WALL_LAYOUT: [Wall; WALL_COUNT] = [
    Wall::new(76, 32, 8, 24),
    Wall::new(76, 80, 8, 24),
    Wall::new(156, 32, 8, 24),
    Wall::new(156, 80, 8, 24),
];

const _: () = assert!(WALL_COUNT <= MAX_WALLS);

/// Spawn points by roster slot: team 0 (pad 1) on the left, team 1
/// (pad 2) on the right, each pair stacked vertically.
pub const SPAWN_POINTS: [Vec2; 4] = [
    Vec2::new(48, 40),
    Vec2::new(48, 80),
    Vec2::new(176, 40),
    Vec2::new(176, 80),
];

/// Where the score line is drawn, below the arena.
pub const SCORE_TEXT_POS: Vec2 = Vec2::new(104, 126);

/// Full-width rect of the round-transition progress bar, above the
/// arena. The draw pass scales its width over the transition window.
pub const TRANSITION_BAR: Hitbox = Hitbox::new(70, 5, 100, 6);

/// Where the "player N wins" line is drawn during a transition.
pub const WIN_TEXT_POS: Vec2 = Vec2::new(92, 62);

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_lie_inside_the_arena() {
        for wall in &WALL_LAYOUT {
            let b = wall.world_box();
            assert!(b.x >= ARENA_BOUNDS.x, "wall {b} outside left edge");
            assert!(b.right() <= ARENA_BOUNDS.right(), "wall {b} outside right edge");
            assert!(b.y >= ARENA_BOUNDS.y, "wall {b} outside top edge");
            assert!(b.bottom() <= ARENA_BOUNDS.bottom(), "wall {b} outside bottom edge");
        }
    }

    #[test]
    fn test_spawns_lie_inside_the_arena() {
        for spawn in &SPAWN_POINTS {
            assert!(ARENA_BOUNDS.contains(*spawn), "spawn {spawn} out of bounds");
        }
    }

    #[test]
    fn test_spawns_clear_of_walls() {
        // A 16x16 sprite placed at any spawn must not start inside a wall
        let sprite = Hitbox::new(0, 0, 16, 16);
        for spawn in &SPAWN_POINTS {
            let body = sprite.translate(*spawn);
            for wall in &WALL_LAYOUT {
                assert!(
                    !body.intersects(&wall.world_box()),
                    "spawn {spawn} overlaps wall at {}",
                    wall.pos
                );
            }
        }
    }

    #[test]
    fn test_wall_world_box() {
        let wall = Wall::new(76, 32, 8, 24);
        assert_eq!(wall.world_box(), Hitbox::new(76, 32, 8, 24));
    }
}

//! Collision Resolution
//!
//! Deterministic push-out of a moving box from a solid one, plus the
//! roster scan that finds an attack's victim. Resolution picks the
//! axis of least penetration from the overlap rectangle; a square
//! overlap (exact diagonal) pushes on both axes. The moved box ends
//! flush with the solid, and flush edges do not count as overlap, so a
//! resolved pair is separated.

use crate::core::rect::Hitbox;
use crate::core::vec2::Vec2;
use crate::game::fighter::Fighter;

/// Push `moving` (at `*moving_pos`) out of `solid` (at `solid_pos`).
///
/// Returns whether the boxes overlapped at all; when they did,
/// `moving_pos` is rewritten so the relevant edges touch. The choice of
/// axis and direction:
///
/// - overlap wider than tall: resolve along Y, toward whichever side of
///   the solid's center the moving box's center sits on;
/// - taller than wide: resolve along X the same way;
/// - exactly square: both axes, each with its own center comparison.
pub fn resolve(solid: Hitbox, solid_pos: Vec2, moving: Hitbox, moving_pos: &mut Vec2) -> bool {
    let a = solid.translate(solid_pos);
    let b = moving.translate(*moving_pos);
    let Some(overlap) = a.intersection(&b) else {
        return false;
    };

    if overlap.w >= overlap.h {
        if a.center().y > b.center().y {
            // Solid below: moving bottom edge snaps to the solid top
            moving_pos.y = a.y - moving.h - moving.y;
        } else {
            moving_pos.y = a.bottom() - moving.y;
        }
    }
    if overlap.w <= overlap.h {
        if a.center().x > b.center().x {
            // Solid to the right: moving right edge snaps to its left
            moving_pos.x = a.x - moving.w - moving.x;
        } else {
            moving_pos.x = a.right() - moving.x;
        }
    }
    true
}

/// Find the fighter struck by `attacker`'s current attack region.
///
/// Scans the roster in slot order, skipping the attacker itself, and
/// returns the first slot whose hurtbox overlaps the region. At most
/// one victim per swing; the lowest slot wins ties. No team or
/// ring-out filter: anyone standing in the region is fair game.
pub fn find_hit_target(fighters: &[Fighter], attacker: usize) -> Option<usize> {
    let reach = fighters[attacker].world_attack();
    fighters
        .iter()
        .enumerate()
        .find(|(slot, f)| *slot != attacker && reach.intersects(&f.world_hurtbox()))
        .map(|(slot, _)| slot)
}

// =============================================================================
// TESTS
// =============================================================================

//! Integer Axis-Aligned Rectangle
//!
//! `Hitbox` is the single rectangle type used for hurtboxes, attack
//! regions, ground-contact boxes, walls and the arena itself. A box is
//! stored as a top-left corner plus non-negative extents; attached to an
//! entity the corner is a local offset, translated into world space by
//! the owner's position.
//!
//! Overlap tests are strict: two boxes that merely touch along an edge
//! or corner are separated. Every separation rule in the game (wall
//! push-out, hit detection, ring-out) flows through these tests, so the
//! convention must not drift.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Axis-aligned rectangle with integer corner and extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hitbox {
    /// Left edge (local offset or world coordinate)
    pub x: i32,
    /// Top edge (local offset or world coordinate)
    pub y: i32,
    /// Width, always non-negative
    pub w: i32,
    /// Height, always non-negative
    pub h: i32,
}

impl Hitbox {
    /// Empty box at the origin.
    pub const ZERO: Self = Self { x: 0, y: 0, w: 0, h: 0 };

    /// Create a new box.
    ///
    /// # Panics
    /// Panics if either extent is negative.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        assert!(w >= 0 && h >= 0, "hitbox extents must be non-negative");
        Self { x, y, w, h }
    }

    /// Right edge (x + w).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (y + h).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point. Extents are non-negative, so the halving floors
    /// toward the top-left corner.
    #[inline]
    pub const fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Copy of this box shifted by a translation, extents unchanged.
    /// Turns an entity-local box into a world-space one.
    #[inline]
    pub const fn translate(&self, v: Vec2) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
            w: self.w,
            h: self.h,
        }
    }

    /// Copy of this box grown by `n` units on every side.
    #[inline]
    pub const fn inflate(&self, n: i32) -> Self {
        Self {
            x: self.x - n,
            y: self.y - n,
            w: self.w + 2 * n,
            h: self.h + 2 * n,
        }
    }

    /// Whether a point lies inside the box, inclusive on all four edges.
    #[inline]
    pub const fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Whether two boxes overlap. Touching edges count as separated.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.right() > other.x
            && other.right() > self.x
            && self.bottom() > other.y
            && other.bottom() > self.y
    }

    /// Overlap region of two boxes, or `None` when separated.
    ///
    /// The region's corner is the component-wise max of the two
    /// top-lefts; its far corner is the min of the two bottom-rights.
    /// Extents are positive whenever this returns `Some`.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Self {
            x,
            y,
            w: right - x,
            h: bottom - y,
        })
    }

    /// Overlap of two entity-local boxes once each is placed at its
    /// owner's position.
    pub fn intersection_at(&self, pos: Vec2, other: &Self, other_pos: Vec2) -> Option<Self> {
        self.translate(pos).intersection(&other.translate(other_pos))
    }
}

impl fmt::Display for Hitbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {} {}x{}]", self.x, self.y, self.w, self.h)
    }
}

// =============================================================================
// TESTS
// =============================================================================

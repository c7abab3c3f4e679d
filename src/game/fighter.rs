//! Fighter State Machine
//!
//! Each roster slot is one fighter: a position, three local hitboxes
//! (hurtbox, directional attack region, ground-contact box), an
//! animation cursor into a 6-column sprite sheet and a three-state
//! machine (Idle / Walking / Attacking).
//!
//! The sheet packs facing into the row index: rows 0-5 alternate
//! idle/walk for side, down and up facings; rows 6-8 are the attack
//! swings. Row changes go through the two remap tables below so the
//! mapping stays data, not branches.

use serde::{Deserialize, Serialize};

use crate::core::hash::StateHasher;
use crate::core::rect::Hitbox;
use crate::core::vec2::Vec2;
use crate::game::input::Buttons;
use crate::TICK_RATE;

// =============================================================================
// TUNING CONSTANTS
// =============================================================================

/// Columns in every sprite-sheet row.
pub const SHEET_COLUMNS: u8 = 6;

/// Display time per animation column in milliseconds.
pub const COLUMN_HOLD_MS: u32 = 1000 / TICK_RATE;

/// Simulation ticks a column is held before advancing. Rounds up, so a
/// hold no longer than one tick advances the column every tick.
pub const COLUMN_HOLD_TICKS: u32 = (COLUMN_HOLD_MS * TICK_RATE + 999) / 1000;

/// Column at which a swing is over. An attack therefore plays exactly
/// three column advances before the fighter drops back to Idle.
pub const ATTACK_END_COLUMN: u8 = 3;

/// Units a struck fighter is displaced.
pub const KNOCKBACK_STEP: i32 = 8;

/// Hurtbox inflation used by the teammate walk gate.
pub const WALK_GATE_INFLATE: i32 = 4;

/// Starting health. Tracked and serialized; the current rules decide
/// rounds by ring-out and never spend it.
pub const START_HEALTH: i8 = 3;

// =============================================================================
// SPRITE SHEET GEOMETRY
// =============================================================================

/// Side-facing idle row.
pub const ROW_IDLE_SIDE: u8 = 0;
/// Side-facing walk row.
pub const ROW_WALK_SIDE: u8 = 1;
/// Down-facing idle row.
pub const ROW_IDLE_DOWN: u8 = 2;
/// Down-facing walk row.
pub const ROW_WALK_DOWN: u8 = 3;
/// Up-facing idle row.
pub const ROW_IDLE_UP: u8 = 4;
/// Up-facing walk row.
pub const ROW_WALK_UP: u8 = 5;
/// Side-facing attack row.
pub const ROW_ATTACK_SIDE: u8 = 6;
/// Down-facing attack row.
pub const ROW_ATTACK_DOWN: u8 = 7;
/// Up-facing attack row.
pub const ROW_ATTACK_UP: u8 = 8;

/// Idle row reached from each sheet row: down-facing rows keep a
/// down-facing idle, up-facing rows an up-facing one, everything else
/// returns to the side idle.
pub const IDLE_ROW_FOR: [u8; 9] = [0, 0, 2, 2, 4, 4, 0, 2, 4];

/// Attack row for the facing encoded by each sheet row.
pub const ATTACK_ROW_FOR: [u8; 9] = [6, 6, 7, 7, 8, 8, 6, 6, 6];

/// Look up the idle row for a sheet row. Rows outside the table fall
/// back to the side idle.
#[inline]
pub fn idle_row_for(row: u8) -> u8 {
    IDLE_ROW_FOR.get(row as usize).copied().unwrap_or(ROW_IDLE_SIDE)
}

/// Look up the attack row for a sheet row. Rows outside the table fall
/// back to the side swing.
#[inline]
pub fn attack_row_for(row: u8) -> u8 {
    ATTACK_ROW_FOR.get(row as usize).copied().unwrap_or(ROW_ATTACK_SIDE)
}

/// Body region that attacks and the teammate gate test against.
pub const HURTBOX: Hitbox = Hitbox::new(2, 2, 12, 12);

/// Foot-point region used for wall contact and ring-out. Deliberately
/// tiny: the sprite may hang over an edge while the feet stay in.
pub const GROUND_BOX: Hitbox = Hitbox::new(7, 12, 2, 2);

/// Attack region while facing right.
pub const ATTACK_RIGHT: Hitbox = Hitbox::new(14, 4, 10, 8);
/// Attack region while facing left.
pub const ATTACK_LEFT: Hitbox = Hitbox::new(-8, 4, 10, 8);
/// Attack region while facing up.
pub const ATTACK_UP: Hitbox = Hitbox::new(4, -8, 8, 10);
/// Attack region while facing down.
pub const ATTACK_DOWN: Hitbox = Hitbox::new(4, 14, 8, 10);

/// Sprite-sheet cell a fighter is currently showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteFrame {
    /// Column, cycling through [`SHEET_COLUMNS`]
    pub col: u8,
    /// Row, one of the `ROW_*` indices
    pub row: u8,
}

// =============================================================================
// FIGHTER
// =============================================================================

/// Activity state of one fighter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum FighterState {
    /// Standing, cycling the idle row
    #[default]
    Idle = 0,
    /// Moving one unit per held direction per tick
    Walking = 1,
    /// Mid-swing; ignores the pad until the swing completes
    Attacking = 2,
}

/// One roster slot's complete dynamic state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    /// World position of the sprite's top-left corner
    pub pos: Vec2,
    /// Body region, local to `pos`
    pub hurtbox: Hitbox,
    /// Current directional attack region, local to `pos`
    pub attack: Hitbox,
    /// Foot-point region, local to `pos`
    pub ground: Hitbox,
    /// Activity state
    pub state: FighterState,
    /// Sprite-sheet cell on display
    pub frame: SpriteFrame,
    /// Ticks the current column has been held
    pub anim_clock: u32,
    /// Mirror the sprite horizontally (true while facing left)
    pub flip: bool,
    /// Health points; carried but not consumed by the current rules
    pub health: i8,
    /// Controller id driving this fighter (1 or 2, never reassigned)
    pub pad: u8,
}

impl Fighter {
    /// Create a fighter at a spawn point.
    ///
    /// Pad 1 fighters face right, pad 2 fighters face left, and the
    /// attack region starts oriented to match.
    ///
    /// # Panics
    /// Panics unless `pad` is 1 or 2.
    pub fn new(pad: u8, spawn: Vec2) -> Self {
        assert!(pad == 1 || pad == 2, "pad id must be 1 or 2");
        let (attack, flip) = if pad == 1 {
            (ATTACK_RIGHT, false)
        } else {
            (ATTACK_LEFT, true)
        };
        Self {
            pos: spawn,
            hurtbox: HURTBOX,
            attack,
            ground: GROUND_BOX,
            state: FighterState::Idle,
            frame: SpriteFrame { col: 0, row: ROW_IDLE_SIDE },
            anim_clock: 0,
            flip,
            health: START_HEALTH,
            pad,
        }
    }

    /// Hurtbox in world space.
    #[inline]
    pub fn world_hurtbox(&self) -> Hitbox {
        self.hurtbox.translate(self.pos)
    }

    /// Attack region in world space.
    #[inline]
    pub fn world_attack(&self) -> Hitbox {
        self.attack.translate(self.pos)
    }

    /// Ground-contact box in world space.
    #[inline]
    pub fn world_ground(&self) -> Hitbox {
        self.ground.translate(self.pos)
    }

    /// Center of the hurtbox in world space.
    #[inline]
    pub fn hurtbox_center(&self) -> Vec2 {
        self.world_hurtbox().center()
    }

    /// Advance the animation clock one tick, stepping the column when
    /// its hold expires. Every row cycles all six columns.
    pub fn advance_animation(&mut self) {
        self.anim_clock += 1;
        if self.anim_clock >= COLUMN_HOLD_TICKS {
            self.anim_clock = 0;
            self.frame.col = (self.frame.col + 1) % SHEET_COLUMNS;
        }
    }

    /// Drop an attack back to Idle once its final column has played.
    /// The column resets and the row falls back to the matching idle.
    pub fn finish_attack(&mut self) {
        if self.state == FighterState::Attacking && self.frame.col == ATTACK_END_COLUMN {
            self.state = FighterState::Idle;
            self.frame.col = 0;
            self.frame.row = idle_row_for(self.frame.row);
        }
    }

    /// Settle into Idle, keeping the current facing's idle row.
    pub fn enter_idle(&mut self) {
        self.state = FighterState::Idle;
        self.frame.row = idle_row_for(self.frame.row);
    }

    /// Start a swing: animation restarts at column 0 on the attack row
    /// for the current facing. The attack region keeps the orientation
    /// set by the last walk tick; swinging never re-aims it.
    pub fn enter_attack(&mut self) {
        self.state = FighterState::Attacking;
        self.frame.col = 0;
        self.anim_clock = 0;
        self.frame.row = attack_row_for(self.frame.row);
    }

    /// Apply one tick of held directions. Every held branch re-aims the
    /// attack region and rewrites the walk row and flip; the one-unit
    /// step itself is skipped while `blocked`. Branch order is right,
    /// left, up, down, so a later held direction owns the row and flip.
    pub fn walk(&mut self, pad: Buttons, blocked: bool) {
        self.state = FighterState::Walking;
        if pad.right() {
            if !blocked {
                self.pos.x += 1;
            }
            self.attack = ATTACK_RIGHT;
            self.frame.row = ROW_WALK_SIDE;
            self.flip = false;
        }
        if pad.left() {
            if !blocked {
                self.pos.x -= 1;
            }
            self.attack = ATTACK_LEFT;
            self.frame.row = ROW_WALK_SIDE;
            self.flip = true;
        }
        if pad.up() {
            if !blocked {
                self.pos.y -= 1;
            }
            self.attack = ATTACK_UP;
            self.frame.row = ROW_WALK_UP;
            self.flip = false;
        }
        if pad.down() {
            if !blocked {
                self.pos.y += 1;
            }
            self.attack = ATTACK_DOWN;
            self.frame.row = ROW_WALK_DOWN;
            self.flip = false;
        }
    }

    /// Take a hit from an attacker standing at `attacker_center`
    /// (world space): shove [`KNOCKBACK_STEP`] units straight along the
    /// axis of larger center separation, away from the attacker. An
    /// exact tie goes to the vertical axis. Only the position moves;
    /// state, frame and flip are untouched.
    pub fn knock_back_from(&mut self, attacker_center: Vec2) {
        let delta = self.hurtbox_center() - attacker_center;
        if delta.x.abs() > delta.y.abs() {
            self.pos.x += KNOCKBACK_STEP * delta.x.signum();
        } else {
            self.pos.y += KNOCKBACK_STEP * delta.y.signum();
        }
    }

    /// Feed every dynamic field into a state digest. The hurtbox and
    /// ground box are fixed presets and carry no information; the attack
    /// region is included because walking re-aims it.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.update_vec2(self.pos);
        hasher.update_i32(self.attack.x);
        hasher.update_i32(self.attack.y);
        hasher.update_i32(self.attack.w);
        hasher.update_i32(self.attack.h);
        hasher.update_u8(self.state as u8);
        hasher.update_u8(self.frame.col);
        hasher.update_u8(self.frame.row);
        hasher.update_u32(self.anim_clock);
        hasher.update_bool(self.flip);
        hasher.update_i8(self.health);
        hasher.update_u8(self.pad);
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Draw Pass
//!
//! Presentation stays host-owned: the simulation emits draw calls
//! through the [`RenderSink`] trait and never touches a surface itself.
//! One [`render`] call describes a complete frame in a fixed order, so
//! any two sinks fed the same state paint the same picture.

use serde::{Deserialize, Serialize};

use crate::core::rect::Hitbox;
use crate::core::vec2::Vec2;
use crate::game::arena::{SCORE_TEXT_POS, TRANSITION_BAR, WIN_TEXT_POS};
use crate::game::fighter::SpriteFrame;
use crate::game::state::MatchState;
use crate::TRANSITION_TICKS;

// =============================================================================
// PALETTE
// =============================================================================

/// Backdrop behind the arena.
pub const COLOR_BG: u8 = 0;

/// Arena floor fill.
pub const COLOR_FLOOR: u8 = 1;

/// Borders, wall outlines and text.
pub const COLOR_LINE: u8 = 2;

/// Overlay slot. Part of the palette contract with hosts, but nothing
/// in the pass draws with it.
pub const COLOR_ALPHA: u8 = 3;

// =============================================================================
// SINK TRAIT
// =============================================================================

/// Host-side draw-call consumer.
///
/// Calls arrive in submission order and later calls paint over earlier
/// ones; implementations must not reorder them.
pub trait RenderSink {
    /// Fill the whole surface.
    fn clear(&mut self, color: u8);
    /// Fill a rectangle, world coordinates.
    fn fill_rect(&mut self, rect: Hitbox, color: u8);
    /// Outline a rectangle, world coordinates.
    fn stroke_rect(&mut self, rect: Hitbox, color: u8);
    /// Draw one sheet cell at a world position, mirrored when `flip`.
    fn sprite(&mut self, frame: SpriteFrame, pos: Vec2, flip: bool);
    /// Draw a text run at a world position.
    fn text(&mut self, s: &str, pos: Vec2, color: u8);
}

// =============================================================================
// FRAME PASS
// =============================================================================

/// Emit one frame of draw calls for `state`.
///
/// Fixed order: backdrop, floor, border, wall outlines, fighters in
/// slot order, score line, then the transition overlay while a round
/// freeze is running. Ringed-out fighters are still submitted at their
/// positions; clipping them is the host's concern.
pub fn render(state: &MatchState, sink: &mut impl RenderSink) {
    sink.clear(COLOR_BG);
    sink.fill_rect(state.bounds, COLOR_FLOOR);
    sink.stroke_rect(state.bounds, COLOR_LINE);

    for wall in &state.walls {
        sink.stroke_rect(wall.world_box(), COLOR_LINE);
    }

    for fighter in &state.fighters {
        sink.sprite(fighter.frame, fighter.pos, fighter.flip);
    }

    let score = format!("{} - {}", state.score[0], state.score[1]);
    sink.text(&score, SCORE_TEXT_POS, COLOR_LINE);

    if state.on_transition {
        draw_transition(state, sink);
    }
}

/// Progress bar and winner banner for the between-rounds freeze. The
/// bar fills linearly over the transition window and clamps at full
/// width if the state is rendered past it.
fn draw_transition(state: &MatchState, sink: &mut impl RenderSink) {
    let elapsed = state.frame.saturating_sub(state.transition_start);
    let width = (TRANSITION_BAR.w * elapsed as i32) / TRANSITION_TICKS as i32;
    let fill = Hitbox::new(
        TRANSITION_BAR.x,
        TRANSITION_BAR.y,
        width.min(TRANSITION_BAR.w),
        TRANSITION_BAR.h,
    );
    sink.stroke_rect(TRANSITION_BAR, COLOR_LINE);
    sink.fill_rect(fill, COLOR_LINE);

    if let Some(team) = state.winner {
        let banner = format!("player {} wins", team + 1);
        sink.text(&banner, WIN_TEXT_POS, COLOR_LINE);
    }
}

// =============================================================================
// RECORDING SINK
// =============================================================================

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCall {
    /// Surface clear.
    Clear(u8),
    /// Filled rectangle.
    Fill(Hitbox, u8),
    /// Outlined rectangle.
    Stroke(Hitbox, u8),
    /// Sheet cell at a position, with mirror flag.
    Sprite(SpriteFrame, Vec2, bool),
    /// Text run at a position.
    Text(String, Vec2, u8),
}

/// Sink that records every call in order, for tests and headless
/// hosts.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Calls in submission order.
    pub calls: Vec<DrawCall>,
}

impl RecordingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, color: u8) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Hitbox, color: u8) {
        self.calls.push(DrawCall::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Hitbox, color: u8) {
        self.calls.push(DrawCall::Stroke(rect, color));
    }

    fn sprite(&mut self, frame: SpriteFrame, pos: Vec2, flip: bool) {
        self.calls.push(DrawCall::Sprite(frame, pos, flip));
    }

    fn text(&mut self, s: &str, pos: Vec2, color: u8) {
        self.calls.push(DrawCall::Text(s.to_owned(), pos, color));
    }
}

// =============================================================================
// TESTS
// =============================================================================

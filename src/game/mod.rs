//! Game Logic Module
//!
//! All match simulation code. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `input`: Pad button masks, recording, replay
//! - `arena`: Bounds, wall layout, spawn grid
//! - `fighter`: Per-slot state machine and animation
//! - `state`: The owned match state container
//! - `collision`: Overlap resolution and hit scanning
//! - `tick`: Authoritative frame driver

pub mod arena;
pub mod collision;
pub mod fighter;
pub mod input;
pub mod state;
pub mod tick;

// Re-export key types
pub use fighter::{Fighter, FighterState, SpriteFrame};
pub use input::{ButtonDelta, Buttons, PadRecording};
pub use state::{MatchState, ROSTER_SIZE};
pub use tick::{replay_bout, tick};

//! # Ringout Simulation Core
//!
//! Deterministic 2v2 arena-fighter simulation: two pads drive four
//! fighters who shove each other off a walled platform, first team to
//! ring out both opponents takes the round.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      RINGOUT CORE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── vec2.rs     - Integer 2D vector, y-down                 │
//! │  ├── rect.rs     - Axis-aligned hitboxes and overlap         │
//! │  └── hash.rs     - State digests for replay verification     │
//! │                                                              │
//! │  game/           - Match simulation (deterministic)          │
//! │  ├── input.rs    - Pad masks, recording, replay              │
//! │  ├── arena.rs    - Bounds, walls, spawn grid                 │
//! │  ├── fighter.rs  - Slot state machine and animation          │
//! │  ├── state.rs    - Owned match state                         │
//! │  ├── collision.rs- Overlap resolution, hit scan              │
//! │  └── tick.rs     - Authoritative frame driver                │
//! │                                                              │
//! │  render.rs       - Draw-call pass over a host sink           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are **100% deterministic**:
//! - Integer arithmetic only, no floating point
//! - Fixed iteration orders (arrays, never hashed containers)
//! - No system time dependencies, no randomness
//!
//! Given identical pad streams, the simulation produces **identical
//! digests** on any platform. [`game::tick::replay_bout`] rebuilds a
//! whole match from two recordings to prove it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod render;

// Re-export commonly used types
pub use crate::core::hash::{StateHash, StateHasher};
pub use crate::core::rect::Hitbox;
pub use crate::core::vec2::Vec2;
pub use crate::game::input::{Buttons, PadRecording};
pub use crate::game::state::{MatchState, ROSTER_SIZE};
pub use crate::game::tick::{replay_bout, tick};
pub use crate::render::{render, RenderSink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;

/// Length of the between-rounds freeze in ticks (2 seconds * 60 Hz)
pub const TRANSITION_TICKS: u32 = 120;

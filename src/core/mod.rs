//! Core deterministic primitives.
//!
//! All types in this module are designed for perfect cross-platform
//! determinism. They carry no game rules; the rules live in `game`.

pub mod hash;
pub mod rect;
pub mod vec2;

// Re-export core types
pub use hash::{StateHash, StateHasher};
pub use rect::Hitbox;
pub use vec2::Vec2;

//! Controller Input
//!
//! A pad reports five digital buttons per tick, packed into one byte.
//! The mask is the only input the simulation ever sees; how the host
//! samples its devices is not this crate's concern.
//!
//! `PadRecording` keeps a delta-compressed log of one pad's masks so a
//! bout can be replayed and verified tick for tick.

use serde::{Deserialize, Serialize};

// =============================================================================
// BUTTON MASK
// =============================================================================

/// Held-button snapshot for one pad on one tick.
///
/// Unknown bits are masked off at construction; an all-zero mask is an
/// idle pad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Buttons {
    bits: u8,
}

impl Buttons {
    /// Right direction bit
    pub const RIGHT: u8 = 0x01;

    /// Left direction bit
    pub const LEFT: u8 = 0x02;

    /// Up direction bit
    pub const UP: u8 = 0x04;

    /// Down direction bit
    pub const DOWN: u8 = 0x08;

    /// Attack button bit
    pub const ATTACK: u8 = 0x10;

    /// All bits the simulation understands.
    pub const MASK: u8 = 0x1F;

    /// No buttons held.
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// Build from a raw byte; bits outside [`Self::MASK`] are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            bits: bits & Self::MASK,
        }
    }

    /// The raw mask byte.
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Copy with an additional button held.
    pub const fn with(self, button: u8) -> Self {
        Self {
            bits: (self.bits | button) & Self::MASK,
        }
    }

    /// Right held.
    #[inline]
    pub const fn right(&self) -> bool {
        self.bits & Self::RIGHT != 0
    }

    /// Left held.
    #[inline]
    pub const fn left(&self) -> bool {
        self.bits & Self::LEFT != 0
    }

    /// Up held.
    #[inline]
    pub const fn up(&self) -> bool {
        self.bits & Self::UP != 0
    }

    /// Down held.
    #[inline]
    pub const fn down(&self) -> bool {
        self.bits & Self::DOWN != 0
    }

    /// Attack held.
    #[inline]
    pub const fn attack(&self) -> bool {
        self.bits & Self::ATTACK != 0
    }

    /// Nothing held at all.
    #[inline]
    pub const fn is_idle(&self) -> bool {
        self.bits == 0
    }

    /// Any of the four direction bits held.
    #[inline]
    pub const fn has_direction(&self) -> bool {
        self.bits & (Self::RIGHT | Self::LEFT | Self::UP | Self::DOWN) != 0
    }
}

// =============================================================================
// PAD RECORDING
// =============================================================================

/// One change point in a pad recording.
///
/// Only stored when the mask CHANGES, not every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDelta {
    /// Tick when this mask began
    pub tick: u32,
    /// The new mask
    pub buttons: Buttons,
}

impl ButtonDelta {
    /// Create new delta entry.
    pub fn new(tick: u32, buttons: Buttons) -> Self {
        Self { tick, buttons }
    }
}

/// Complete input recording for one pad in one bout.
///
/// Used for replay playback and determinism verification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PadRecording {
    /// Controller id this recording belongs to (1 or 2)
    pub pad: u8,

    /// Starting tick (usually 0)
    pub start_tick: u32,

    /// Last recorded tick
    pub end_tick: u32,

    /// Delta-compressed masks; only ticks where the mask changed.
    deltas: Vec<ButtonDelta>,

    /// Last recorded mask (for delta comparison)
    #[serde(skip)]
    last: Buttons,
}

impl PadRecording {
    /// Create a new recording for a pad.
    ///
    /// # Panics
    /// Panics unless `pad` is 1 or 2.
    pub fn new(pad: u8) -> Self {
        assert!(pad == 1 || pad == 2, "pad id must be 1 or 2");
        Self {
            pad,
            start_tick: 0,
            end_tick: 0,
            deltas: Vec::with_capacity(128),
            last: Buttons::none(),
        }
    }

    /// Record the mask for a tick.
    ///
    /// Only stores a delta if the mask changed from the previous call.
    pub fn record(&mut self, tick: u32, buttons: Buttons) {
        self.end_tick = tick;

        if buttons != self.last {
            self.deltas.push(ButtonDelta::new(tick, buttons));
            self.last = buttons;
        }
    }

    /// Mask in effect at a specific tick.
    ///
    /// Binary-searches the change list; before the first change point
    /// the pad is idle.
    pub fn buttons_at(&self, tick: u32) -> Buttons {
        let idx = self.deltas.partition_point(|d| d.tick <= tick);
        if idx == 0 {
            Buttons::none()
        } else {
            self.deltas[idx - 1].buttons
        }
    }

    /// All change points.
    pub fn deltas(&self) -> &[ButtonDelta] {
        &self.deltas
    }

    /// Number of change points.
    pub fn delta_count(&self) -> usize {
        self.deltas.len()
    }

    /// Mark the end of the recording.
    pub fn finalize(&mut self, end_tick: u32) {
        self.end_tick = end_tick;
    }

    /// Iterator over every tick's mask, for replay.
    pub fn replay_iter(&self) -> ReplayIter<'_> {
        ReplayIter {
            recording: self,
            current_tick: self.start_tick,
            delta_idx: 0,
            current: Buttons::none(),
        }
    }
}

/// Iterator replaying a recording tick-by-tick.
pub struct ReplayIter<'a> {
    recording: &'a PadRecording,
    current_tick: u32,
    delta_idx: usize,
    current: Buttons,
}

impl Iterator for ReplayIter<'_> {
    type Item = (u32, Buttons);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_tick > self.recording.end_tick {
            return None;
        }

        while self.delta_idx < self.recording.deltas.len() {
            let delta = &self.recording.deltas[self.delta_idx];
            if delta.tick <= self.current_tick {
                self.current = delta.buttons;
                self.delta_idx += 1;
            } else {
                break;
            }
        }

        let result = (self.current_tick, self.current);
        self.current_tick += 1;
        Some(result)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_queries() {
        let b = Buttons::none().with(Buttons::LEFT).with(Buttons::ATTACK);
        assert!(b.left());
        assert!(b.attack());
        assert!(!b.right());
        assert!(!b.up());
        assert!(!b.down());
        assert!(!b.is_idle());
        assert!(b.has_direction());
    }

    #[test]
    fn test_unknown_bits_are_dropped() {
        let b = Buttons::from_bits(0xFF);
        assert_eq!(b.bits(), Buttons::MASK);
        let attack_only = Buttons::from_bits(0xE0 | Buttons::ATTACK);
        assert_eq!(attack_only, Buttons::none().with(Buttons::ATTACK));
    }

    #[test]
    fn test_idle_mask() {
        let b = Buttons::none();
        assert!(b.is_idle());
        assert!(!b.has_direction());
        assert!(!b.attack());
        assert_eq!(b, Buttons::default());
    }

    #[test]
    fn test_attack_without_direction() {
        let b = Buttons::none().with(Buttons::ATTACK);
        assert!(b.attack());
        assert!(!b.has_direction());
        assert!(!b.is_idle());
    }

    #[test]
    fn test_recording_delta_compression() {
        let mut rec = PadRecording::new(1);

        let held = Buttons::none().with(Buttons::RIGHT);
        rec.record(0, held);
        rec.record(1, held);
        rec.record(2, held);
        rec.record(3, held);

        // Mask never changed, one delta
        assert_eq!(rec.delta_count(), 1);

        rec.record(4, Buttons::none());
        assert_eq!(rec.delta_count(), 2);
    }

    #[test]
    fn test_recording_buttons_at() {
        let mut rec = PadRecording::new(2);

        let right = Buttons::none().with(Buttons::RIGHT);
        let left = Buttons::none().with(Buttons::LEFT);
        let punch = Buttons::none().with(Buttons::ATTACK);

        rec.record(10, right);
        rec.record(20, left);
        rec.record(30, punch);

        assert!(rec.buttons_at(5).is_idle());
        assert_eq!(rec.buttons_at(10), right);
        assert_eq!(rec.buttons_at(15), right);
        assert_eq!(rec.buttons_at(25), left);
        assert_eq!(rec.buttons_at(30), punch);
        assert_eq!(rec.buttons_at(1000), punch);
    }

    #[test]
    fn test_replay_iter_covers_every_tick() {
        let mut rec = PadRecording::new(1);
        rec.record(0, Buttons::none().with(Buttons::UP));
        rec.record(3, Buttons::none().with(Buttons::DOWN));
        rec.finalize(5);

        let frames: Vec<_> = rec.replay_iter().collect();

        assert_eq!(frames.len(), 6); // Ticks 0-5
        assert!(frames[0].1.up());
        assert!(frames[2].1.up());
        assert!(frames[3].1.down());
        assert!(frames[5].1.down());
    }

    #[test]
    #[should_panic(expected = "pad id must be 1 or 2")]
    fn test_recording_rejects_bad_pad() {
        let _ = PadRecording::new(3);
    }
}

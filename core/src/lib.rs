#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use deck::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use generator::*;
pub use slot::*;
pub use snapshot::*;
pub use types::*;

mod deck;
mod engine;
mod error;
mod events;
mod generator;
mod slot;
mod snapshot;
mod types;

/// Largest number of pairs a board can hold, every slot must stay addressable by a [`SlotIndex`].
pub const MAX_PAIRS: SlotCount = 127;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct faces, each dealt twice.
    pub pairs: SlotCount,
    /// How long a mismatched pair stays face up before it is turned back.
    pub mismatch_delay_ms: u32,
    /// Period of the round timer.
    pub tick_interval_ms: u32,
}

impl GameConfig {
    pub const DEFAULT_PAIRS: SlotCount = 10;
    pub const DEFAULT_MISMATCH_DELAY_MS: u32 = 1000;
    pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;

    pub const fn new_unchecked(pairs: SlotCount, mismatch_delay_ms: u32, tick_interval_ms: u32) -> Self {
        Self {
            pairs,
            mismatch_delay_ms,
            tick_interval_ms,
        }
    }

    pub fn new(pairs: SlotCount, mismatch_delay_ms: u32, tick_interval_ms: u32) -> Self {
        let pairs = pairs.clamp(1, MAX_PAIRS);
        let tick_interval_ms = tick_interval_ms.max(1);
        Self::new_unchecked(pairs, mismatch_delay_ms, tick_interval_ms)
    }

    pub fn with_pairs(pairs: SlotCount) -> Self {
        Self::new(
            pairs,
            Self::DEFAULT_MISMATCH_DELAY_MS,
            Self::DEFAULT_TICK_INTERVAL_MS,
        )
    }

    pub const fn total_slots(&self) -> SlotCount {
        self.pairs.saturating_mul(2)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_PAIRS,
            Self::DEFAULT_MISMATCH_DELAY_MS,
            Self::DEFAULT_TICK_INTERVAL_MS,
        )
    }
}

/// Outcome of selecting a slot
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Selection was dropped: out of range, not hidden, input locked or round already clear.
    Ignored,
    /// First card of a pair turned face up.
    Revealed,
    /// Second card completed a pair.
    Matched,
    /// Second card did not match, the pair is turned back once `delay_ms` has passed for `round`.
    Mismatched { round: RoundId, delay_ms: u32 },
    /// Last pair was found.
    Cleared,
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the round
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            Ignored => false,
            Revealed => true,
            Matched => true,
            Mismatched { .. } => true,
            Cleared => true,
        }
    }
}

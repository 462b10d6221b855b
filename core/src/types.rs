use core::fmt;
use serde::{Deserialize, Serialize};

/// Position of a card in the deck, stable for the lifetime of a round.
pub type SlotIndex = u8;

/// Value printed on the face of a card.
pub type Face = u8;

/// Count type used for pair counts and deck lengths.
pub type SlotCount = u8;

/// Whole seconds counted by the round timer.
pub type Seconds = u32;

/// Token identifying one round. Deferred work is tagged with the round that scheduled it so that it can be discarded
/// once the round is gone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundId(u32);

impl RoundId {
    pub const fn first() -> Self {
        Self(0)
    }

    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

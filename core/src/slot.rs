use serde::{Deserialize, Serialize};

/// Player-visible state of a single card slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotState {
    /// Face down.
    Hidden,
    /// Turned face up, waiting for a second pick or for a mismatch to be cleared.
    Revealed,
    /// Permanently face up.
    Matched,
}

impl SlotState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed | Self::Matched)
    }
}

impl Default for SlotState {
    fn default() -> Self {
        Self::Hidden
    }
}

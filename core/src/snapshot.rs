use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub face: Face,
    pub state: SlotState,
}

/// Read-only copy of a round, everything a renderer needs to draw the board and HUD.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: RoundId,
    pub phase: EnginePhase,
    pub slots: Vec<SlotView>,
    pub elapsed_secs: Seconds,
    pub mistakes: u32,
    pub is_clear: bool,
    pub timer_running: bool,
    pub locked: bool,
}

impl RoundSnapshot {
    pub fn count_in(&self, state: SlotState) -> usize {
        self.slots.iter().filter(|slot| slot.state == state).count()
    }

    pub fn revealed_indices(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.indices_in(SlotState::Revealed)
    }

    pub fn matched_indices(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.indices_in(SlotState::Matched)
    }

    fn indices_in(&self, state: SlotState) -> impl Iterator<Item = SlotIndex> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, slot)| slot.state == state)
            .map(|(index, _)| index as SlotIndex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn snapshot_serializes_slot_states_by_name() {
        let deck = Deck::from_faces(vec![1, 2, 1, 2]).unwrap();
        let mut engine = PairEngine::with_deck(GameConfig::default(), deck, 1);
        engine.select(0);
        engine.select(2);
        engine.select(1);

        let value = serde_json::to_value(engine.snapshot()).unwrap();

        assert_eq!(value["round"], 0);
        assert_eq!(value["phase"], "Active");
        assert_eq!(value["slots"][0]["face"], 1);
        assert_eq!(value["slots"][0]["state"], "Matched");
        assert_eq!(value["slots"][1]["state"], "Revealed");
        assert_eq!(value["slots"][3]["state"], "Hidden");
        assert_eq!(value["is_clear"], false);
        assert_eq!(value["timer_running"], true);
    }

    #[test]
    fn index_helpers_follow_slot_states() {
        let deck = Deck::from_faces(vec![3, 1, 3, 1]).unwrap();
        let mut engine = PairEngine::with_deck(GameConfig::default(), deck, 1);
        engine.select(1);
        engine.select(3);
        engine.select(2);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.matched_indices().collect::<Vec<_>>(), [1, 3]);
        assert_eq!(snapshot.revealed_indices().collect::<Vec<_>>(), [2]);
        assert_eq!(snapshot.count_in(SlotState::Hidden), 1);
    }
}

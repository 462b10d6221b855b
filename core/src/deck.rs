use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered card faces of one round, every face appears on exactly two slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    faces: Vec<Face>,
}

impl Deck {
    /// Unshuffled deck `1, 1, 2, 2, …, pairs, pairs`.
    pub fn sorted(pairs: SlotCount) -> Self {
        let pairs = pairs.clamp(1, MAX_PAIRS);
        let faces = (1..=pairs).flat_map(|face| [face, face]).collect();
        Self { faces }
    }

    pub fn from_faces(faces: Vec<Face>) -> Result<Self> {
        if faces.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        if faces.len() % 2 != 0 {
            return Err(GameError::OddDeckLength);
        }
        if faces.len() > usize::from(MAX_PAIRS) * 2 {
            return Err(GameError::DeckTooLarge);
        }

        let mut sorted = faces.clone();
        sorted.sort_unstable();
        let mut prev = None;
        for pair in sorted.chunks_exact(2) {
            let (a, b) = (pair[0], pair[1]);
            if a != b || prev == Some(a) {
                return Err(GameError::UnpairedFace(a));
            }
            prev = Some(a);
        }

        Ok(Self { faces })
    }

    pub(crate) fn from_faces_unchecked(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    pub(crate) fn into_faces(self) -> Vec<Face> {
        self.faces
    }

    pub fn len(&self) -> SlotCount {
        // bounded by MAX_PAIRS on every constructor
        self.faces.len() as SlotCount
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn pairs(&self) -> SlotCount {
        self.len() / 2
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face_at(&self, index: SlotIndex) -> Option<Face> {
        self.faces.get(usize::from(index)).copied()
    }

    pub fn validate_index(&self, index: SlotIndex) -> Result<SlotIndex> {
        if usize::from(index) < self.faces.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn is_pair(&self, a: SlotIndex, b: SlotIndex) -> bool {
        a != b && self[a] == self[b]
    }
}

impl Index<SlotIndex> for Deck {
    type Output = Face;

    fn index(&self, index: SlotIndex) -> &Self::Output {
        &self.faces[usize::from(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn sorted_deck_holds_every_face_twice() {
        let deck = Deck::sorted(3);
        assert_eq!(deck.faces(), &[1, 1, 2, 2, 3, 3]);
        assert_eq!(deck.pairs(), 3);
        assert_eq!(deck.len(), 6);
    }

    #[test]
    fn from_faces_rejects_broken_multisets() {
        assert_eq!(Deck::from_faces(vec![]), Err(GameError::EmptyDeck));
        assert_eq!(Deck::from_faces(vec![1, 1, 2]), Err(GameError::OddDeckLength));
        assert_eq!(
            Deck::from_faces(vec![1, 2, 2, 3]),
            Err(GameError::UnpairedFace(1))
        );
        assert_eq!(
            Deck::from_faces(vec![4, 4, 4, 4]),
            Err(GameError::UnpairedFace(4))
        );
        assert_eq!(
            Deck::from_faces(vec![0; 256]),
            Err(GameError::DeckTooLarge)
        );
    }

    #[test]
    fn from_faces_keeps_order() {
        let deck = Deck::from_faces(vec![1, 2, 1, 2]).unwrap();
        assert_eq!(deck[1], 2);
        assert_eq!(deck.face_at(2), Some(1));
        assert_eq!(deck.face_at(4), None);
        assert!(deck.is_pair(0, 2));
        assert!(!deck.is_pair(0, 1));
        assert!(!deck.is_pair(0, 0));
    }

    #[test]
    fn validate_index_checks_bounds() {
        let deck = Deck::sorted(2);
        assert_eq!(deck.validate_index(3), Ok(3));
        assert_eq!(deck.validate_index(4), Err(GameError::InvalidIndex));
    }
}

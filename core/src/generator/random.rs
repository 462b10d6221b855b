use rand::prelude::*;

use super::*;

/// Uniform shuffle of the paired deck using Fisher–Yates. Consecutive calls draw from the same stream, so every
/// round gets an independent permutation.
#[derive(Clone, Debug)]
pub struct RandomDeckGenerator {
    rng: SmallRng,
}

impl RandomDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(&mut self, config: &GameConfig) -> Deck {
        let mut faces = Deck::sorted(config.pairs).into_faces();

        for i in (1..faces.len()).rev() {
            let j = self.rng.random_range(0..=i);
            faces.swap(i, j);
        }

        log::trace!("dealt {} slots: {:?}", faces.len(), faces);
        Deck::from_faces_unchecked(faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn is_paired_permutation(deck: &Deck, pairs: SlotCount) -> bool {
        let mut faces: Vec<Face> = deck.faces().to_vec();
        faces.sort_unstable();
        faces == Deck::sorted(pairs).into_faces()
    }

    #[test]
    fn generated_deck_is_a_permutation_of_the_pairs() {
        let config = GameConfig::default();
        let mut generator = RandomDeckGenerator::new(42);

        for _ in 0..50 {
            let deck = generator.generate(&config);
            assert_eq!(deck.len(), 20);
            assert!(is_paired_permutation(&deck, 10));
            assert!(Deck::from_faces(deck.faces().to_vec()).is_ok());
        }
    }

    #[test]
    fn same_seed_deals_same_sequence() {
        let config = GameConfig::default();
        let mut a = RandomDeckGenerator::new(7);
        let mut b = RandomDeckGenerator::new(7);

        for _ in 0..5 {
            assert_eq!(a.generate(&config), b.generate(&config));
        }
    }

    #[test]
    fn consecutive_deals_differ() {
        let config = GameConfig::default();
        let mut generator = RandomDeckGenerator::new(3);
        let first = generator.generate(&config);
        let second = generator.generate(&config);

        assert_ne!(first, second);
    }

    #[test]
    fn every_position_sees_every_face() {
        let config = GameConfig::with_pairs(2);
        let mut generator = RandomDeckGenerator::new(11);
        let mut seen = [[false; 3]; 4];

        for _ in 0..200 {
            let deck = generator.generate(&config);
            for (slot, &face) in deck.faces().iter().enumerate() {
                seen[slot][usize::from(face)] = true;
            }
        }

        for slot in seen {
            assert!(slot[1] && slot[2]);
        }
    }
}

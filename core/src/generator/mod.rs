use crate::*;
pub use random::*;

mod random;

pub trait DeckGenerator {
    fn generate(&mut self, config: &GameConfig) -> Deck;
}

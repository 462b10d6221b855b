use thiserror::Error;

use crate::Face;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid slot index")]
    InvalidIndex,
    #[error("Deck has no cards")]
    EmptyDeck,
    #[error("Deck length must be even")]
    OddDeckLength,
    #[error("Deck has more slots than can be addressed")]
    DeckTooLarge,
    #[error("Face {0} does not appear exactly twice")]
    UnpairedFace(Face),
}

pub type Result<T> = core::result::Result<T, GameError>;

use thiserror::Error;

use crate::state::Street;

/// Raised when a hand cannot be ranked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("need at least 5 cards to rank a hand, got {0}")]
    TooFewCards(usize),
}

/// Raised when a game-state snapshot is rejected before any simulation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("big blind must be positive")]
    ZeroBigBlind,
    #[error("board has {got} cards but street {street:?} expects {expected}")]
    BoardStreetMismatch {
        street: Street,
        got: usize,
        expected: usize,
    },
    #[error("duplicate card in snapshot: {0}")]
    DuplicateCard(String),
    #[error("hero seat {seat} out of range for {seats} seats")]
    HeroSeatOutOfRange { seat: usize, seats: usize },
    #[error("hero has already folded")]
    HeroFolded,
    #[error("min raise {min_raise} exceeds max raise {max_raise}")]
    RaiseBoundsInverted { min_raise: u32, max_raise: u32 },
    #[error("explicit to_call {given} disagrees with computed {computed}")]
    ToCallMismatch { given: u32, computed: u32 },
}

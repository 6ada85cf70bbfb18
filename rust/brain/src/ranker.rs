//! The hand-ranking seam.
//!
//! The decision core never ranks hands itself; it compares [`HandStrength`]
//! values produced by whatever oracle sits behind [`HandRanker`]. The
//! in-tree default ranks the best five of the given cards.

use stackfish_engine::cards::Card;
use stackfish_engine::errors::RankError;
use stackfish_engine::hand::{evaluate, HandStrength};

/// Oracle that totally orders card sets of 5 to 7 cards.
///
/// Greater is stronger; equal values split the pot. Implementations must be
/// pure: the same cards always rank the same.
pub trait HandRanker: Send + Sync {
    fn rank(&self, cards: &[Card]) -> Result<HandStrength, RankError>;
}

/// Default ranker backed by the engine's best-five evaluator.
#[derive(Debug, Clone, Default)]
pub struct BestFiveRanker;

impl HandRanker for BestFiveRanker {
    fn rank(&self, cards: &[Card]) -> Result<HandStrength, RankError> {
        evaluate(cards)
    }
}

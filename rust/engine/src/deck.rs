use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};

/// The live portion of a 52-card deck: everything except the dead cards that
/// are already visible (hero's hole cards and the board).
///
/// The deck does not own a random source; each draw takes the caller's `Rng`
/// so that seeded runs reproduce exactly.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::without(&[])
    }

    /// Build a deck of the 52 cards minus `dead`.
    pub fn without(dead: &[Card]) -> Self {
        let cards = full_deck()
            .into_iter()
            .filter(|c| !dead.contains(c))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw `n` uniformly random cards without replacement.
    ///
    /// Returns the drawn cards in random order; the deck itself is not
    /// consumed, so the next call starts from the full live set again.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> &[Card] {
        let n = n.min(self.cards.len());
        let (drawn, _) = self.cards.partial_shuffle(rng, n);
        drawn
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn without_excludes_dead_cards() {
        let dead = [Card::parse("Ah").unwrap(), Card::parse("Kd").unwrap()];
        let deck = Deck::without(&dead);
        assert_eq!(deck.len(), 50);
    }

    #[test]
    fn draw_returns_distinct_live_cards() {
        let dead = [Card::parse("Ah").unwrap(), Card::parse("Kd").unwrap()];
        let mut deck = Deck::without(&dead);
        let mut rng = ChaCha20Rng::seed_from_u64(7);

        let drawn: Vec<Card> = deck.draw(&mut rng, 9).to_vec();
        assert_eq!(drawn.len(), 9);
        for c in &drawn {
            assert!(!dead.contains(c));
        }
        let mut unique = drawn.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn draw_is_deterministic_for_a_fixed_seed() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        let mut rng_a = ChaCha20Rng::seed_from_u64(42);
        let mut rng_b = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(a.draw(&mut rng_a, 5), b.draw(&mut rng_b, 5));
    }

    #[test]
    fn draw_caps_at_deck_size() {
        let mut deck = Deck::new();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(deck.draw(&mut rng, 60).len(), 52);
    }
}

//! Best-five-card hand evaluation over 5 to 7 known cards.
//!
//! The evaluator consumes hero or villain hole cards together with the full
//! board and yields a [`HandStrength`] with a total order: a greater value is
//! a stronger hand, equal values split the pot.

use crate::cards::{Card, Rank, Suit};
use crate::errors::RankError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Strength of the best five-card hand found in the input.
///
/// The derived ordering compares category first and then the kicker array
/// (ordered high to low), which is exactly the showdown order.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

/// Evaluate the best five-card hand from `cards` (5 to 7 of them).
pub fn evaluate(cards: &[Card]) -> Result<HandStrength, RankError> {
    if cards.len() < 5 {
        return Err(RankError::TooFewCards(cards.len()));
    }

    // Count ranks, count suits, and build per-suit rank masks
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    let mut by_suit_mask = [0u16; 4];
    let mut rank_mask: u16 = 0;
    for &c in cards {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        rank_mask |= 1 << r;
        let s = suit_index(c.suit);
        suit_counts[s] += 1;
        by_suit_mask[s] |= 1 << r;
    }

    let flush_suit = (0..4).find(|&s| suit_counts[s] >= 5);

    // Straight flush
    if let Some(s) = flush_suit {
        if let Some(high) = straight_high(by_suit_mask[s]) {
            return Ok(HandStrength {
                category: Category::StraightFlush,
                kickers: [high, 0, 0, 0, 0],
            });
        }
    }

    // Four of a kind
    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return Ok(HandStrength {
            category: Category::FourOfAKind,
            kickers: [quad, kicker, 0, 0, 0],
        });
    }

    // Full house
    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return Ok(HandStrength {
            category: Category::FullHouse,
            kickers: [trip, pair, 0, 0, 0],
        });
    }

    // Flush: five highest cards of the suit
    if let Some(s) = flush_suit {
        let mut k = [0u8; 5];
        let mut i = 0;
        for r in (2..=14u8).rev() {
            if by_suit_mask[s] & (1 << r) != 0 {
                k[i] = r;
                i += 1;
                if i == 5 {
                    break;
                }
            }
        }
        return Ok(HandStrength {
            category: Category::Flush,
            kickers: k,
        });
    }

    // Straight
    if let Some(high) = straight_high(rank_mask) {
        return Ok(HandStrength {
            category: Category::Straight,
            kickers: [high, 0, 0, 0, 0],
        });
    }

    // Three / Two pair / One pair / High card
    let (trips, pairs, singles) = classify_multiples(&rank_counts);
    if let Some(&t) = trips.first() {
        let mut k = [t, 0, 0, 0, 0];
        let mut remain: Vec<u8> = pairs.iter().chain(singles.iter()).copied().collect();
        remain.sort_unstable_by(|a, b| b.cmp(a));
        k[1] = remain.first().copied().unwrap_or(0);
        k[2] = remain.get(1).copied().unwrap_or(0);
        return Ok(HandStrength {
            category: Category::ThreeOfAKind,
            kickers: k,
        });
    }
    if pairs.len() >= 2 {
        // pairs are collected high -> low already
        let mut k = [pairs[0], pairs[1], 0, 0, 0];
        let mut rest: Vec<u8> = pairs[2..].iter().chain(singles.iter()).copied().collect();
        rest.sort_unstable_by(|a, b| b.cmp(a));
        k[2] = rest.first().copied().unwrap_or(0);
        return Ok(HandStrength {
            category: Category::TwoPair,
            kickers: k,
        });
    }
    if let Some(&p) = pairs.first() {
        let mut k = [p, 0, 0, 0, 0];
        for (i, &r) in singles.iter().take(3).enumerate() {
            k[i + 1] = r;
        }
        return Ok(HandStrength {
            category: Category::OnePair,
            kickers: k,
        });
    }

    let mut k = [0u8; 5];
    for (i, &r) in singles.iter().take(5).enumerate() {
        k[i] = r;
    }
    Ok(HandStrength {
        category: Category::HighCard,
        kickers: k,
    })
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Highest straight top card in a rank bitmask, if any; Ace plays low too.
fn straight_high(mask: u16) -> Option<u8> {
    let mut m = mask;
    if m & (1 << Rank::Ace.value()) != 0 {
        m |= 1 << 1;
    }
    for high in (5..=14u8).rev() {
        let window = 0b11111u16 << (high - 4);
        if m & window == window {
            return Some(high);
        }
    }
    None
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 4)?;
    let kicker = (2..=14u8)
        .rev()
        .find(|&r| r != quad && rank_counts[r as usize] > 0)
        .unwrap_or(0);
    Some((quad, kicker))
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let mut trips: Vec<u8> = vec![];
    let mut pairs: Vec<u8> = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            _ => {}
        }
    }
    match (trips.as_slice(), pairs.as_slice()) {
        ([t, u, ..], _) => Some((*t, *u)),
        ([t], [p, ..]) => Some((*t, *p)),
        _ => None,
    }
}

/// Ranks appearing three times, twice, and once; each list high -> low.
fn classify_multiples(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (trips, pairs, singles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn strength(codes: &str) -> HandStrength {
        evaluate(&parse_cards(codes).unwrap()).unwrap()
    }

    #[test]
    fn rejects_fewer_than_five_cards() {
        let cards = parse_cards("AhKh2c3d").unwrap();
        assert_eq!(evaluate(&cards), Err(RankError::TooFewCards(4)));
    }

    #[test]
    fn wheel_straight_uses_ace_low() {
        let hs = strength("Ah2c3d4s5h");
        assert_eq!(hs.category, Category::Straight);
        assert_eq!(hs.kickers[0], 5);
    }

    #[test]
    fn six_card_input_picks_the_best_five() {
        // Six cards holding both a pair and a flush
        let hs = strength("Ah Kh Qh 7h 2h 2c");
        assert_eq!(hs.category, Category::Flush);
        assert_eq!(hs.kickers, [14, 13, 12, 7, 2]);
    }

    #[test]
    fn two_pair_keeps_best_kicker() {
        let hs = strength("Ah Ad Kh Kd Qc 2s 2d");
        // Aces and kings with a queen kicker beat using the third pair
        assert_eq!(hs.category, Category::TwoPair);
        assert_eq!(hs.kickers, [14, 13, 12, 0, 0]);
    }
}

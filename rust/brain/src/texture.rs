//! Board texture classification.
//!
//! Wetness scores how well the community cards coordinate toward flushes and
//! straights; it drives bluff selection (semi-bluffs want wet boards, pure
//! bluffs want dry ones).

use serde::{Deserialize, Serialize};
use stackfish_engine::cards::Card;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureLabel {
    Preflop,
    Dry,
    Medium,
    Wet,
    VeryWet,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardTexture {
    pub label: TextureLabel,
    pub wetness: f64,
    pub connectivity: f64,
}

/// Score the board: flush draws, runs of consecutive ranks, and one-card
/// gaps each add wetness.
pub fn analyze(board: &[Card]) -> BoardTexture {
    if board.is_empty() {
        return BoardTexture {
            label: TextureLabel::Preflop,
            wetness: 0.0,
            connectivity: 0.0,
        };
    }

    let mut wetness = 0.0;

    // Suit coordination: two of a suit is a backdoor draw, three is a live one
    let mut suit_counts = [0u8; 4];
    for c in board {
        suit_counts[c.suit as usize] += 1;
    }
    let max_suited = suit_counts.iter().copied().max().unwrap_or(0);
    if max_suited >= 3 {
        wetness += 0.6;
    } else if max_suited == 2 {
        wetness += 0.3;
    }

    let mut ranks: Vec<u8> = board.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable();
    ranks.dedup();

    // Longest run of consecutive distinct ranks
    let mut longest_run = 1;
    let mut run = 1;
    for w in ranks.windows(2) {
        if w[1] == w[0] + 1 {
            run += 1;
            longest_run = longest_run.max(run);
        } else {
            run = 1;
        }
    }
    if longest_run >= 3 {
        wetness += 0.4;
    } else if longest_run == 2 {
        wetness += 0.2;
    }

    // One-card gaps between neighbours add straight-draw texture
    let gaps = ranks.windows(2).filter(|w| w[1] == w[0] + 2).count();
    wetness += 0.1 * gaps as f64;

    let label = if wetness > 0.7 {
        TextureLabel::VeryWet
    } else if wetness > 0.4 {
        TextureLabel::Wet
    } else if wetness > 0.2 {
        TextureLabel::Medium
    } else {
        TextureLabel::Dry
    };

    BoardTexture {
        label,
        wetness,
        connectivity: wetness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackfish_engine::cards::parse_cards;

    fn texture(codes: &str) -> BoardTexture {
        analyze(&parse_cards(codes).unwrap())
    }

    #[test]
    fn empty_board_is_preflop() {
        let t = analyze(&[]);
        assert_eq!(t.label, TextureLabel::Preflop);
        assert_eq!(t.wetness, 0.0);
    }

    #[test]
    fn three_suited_board_is_wet() {
        let t = texture("2h 7h 9h");
        assert!(t.wetness >= 0.6);
        assert!(matches!(t.label, TextureLabel::Wet | TextureLabel::VeryWet));
    }

    #[test]
    fn two_suited_adds_less_than_three_suited() {
        let two = texture("2h 7h 9c");
        let three = texture("2h 7h 9h");
        assert!(two.wetness < three.wetness);
    }

    #[test]
    fn connected_board_scores_the_run() {
        // 7-8-9 rainbow: a three-card run and no flush draw
        let t = texture("7c 8d 9s");
        assert!((t.wetness - 0.4).abs() < 1e-9);
        assert_eq!(t.label, TextureLabel::Medium);
    }

    #[test]
    fn one_card_gaps_add_straight_draw_texture() {
        // 5-7-9 rainbow: two single gaps, no run
        let t = texture("5c 7d 9s");
        assert!((t.wetness - 0.2).abs() < 1e-9);
    }

    #[test]
    fn rainbow_disconnected_board_is_dry() {
        let t = texture("2c 7d Ks");
        assert_eq!(t.label, TextureLabel::Dry);
        assert_eq!(t.wetness, 0.0);
    }

    #[test]
    fn monotone_connected_board_is_very_wet() {
        let t = texture("7h 8h 9h");
        assert!(t.wetness > 0.7);
        assert_eq!(t.label, TextureLabel::VeryWet);
        assert_eq!(t.connectivity, t.wetness);
    }
}

//! Bet sizing: a category and the pot geometry become a legal chip amount.

use crate::personality::Profile;

/// Why the bet is being made; decides the pot fraction used.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BetCategory {
    Value,
    Bluff,
    Protection,
    SemiBluff,
}

impl BetCategory {
    /// Pot fraction for this category under the given profile.
    pub fn pot_fraction(self, profile: &Profile) -> f64 {
        match self {
            BetCategory::Value => profile.value_bet_pct,
            BetCategory::Bluff => profile.bluff_bet_pct,
            BetCategory::Protection => 0.5,
            BetCategory::SemiBluff => 0.45,
        }
    }
}

/// Turn a pot fraction into a legal raise-to amount.
///
/// The floor is the larger of the minimum raise and one big blind; the cap is
/// the smaller of the maximum raise and the hero's total commitment ceiling
/// (`chips + current_bet`). When the cap sits below the floor no legal raise
/// exists and `None` comes back.
pub fn bet_size(
    pot: u32,
    fraction: f64,
    min_raise: u32,
    max_raise: u32,
    ceiling: u32,
    big_blind: u32,
) -> Option<u32> {
    let floor = min_raise.max(big_blind);
    let cap = max_raise.min(ceiling);
    if cap < floor {
        return None;
    }
    let base = (pot as f64 * fraction).round() as u32;
    Some(base.max(floor).min(cap))
}

//! Personality and difficulty tables.
//!
//! Pure configuration: a fixed profile per persona, looked up by key with a
//! balanced fallback. Behavior differences between personas flow entirely
//! through these numbers, never through persona-specific branching elsewhere.

use serde::Serialize;
use stackfish_engine::state::{Difficulty, Persona};

/// Tunable parameters for one play style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    /// Added to every equity threshold; negative plays looser
    pub equity_threshold: f64,
    /// Probability a bluff is considered when one is available
    pub bluff_frequency: f64,
    /// Pot fraction for value bets
    pub value_bet_pct: f64,
    /// Pot fraction for bluffs
    pub bluff_bet_pct: f64,
    /// Added to fold-equity estimates before EV gating
    pub fold_equity_bias: f64,
}

static NIT: Profile = Profile {
    name: "Nit",
    equity_threshold: 0.08,
    bluff_frequency: 0.05,
    value_bet_pct: 0.75,
    bluff_bet_pct: 0.30,
    fold_equity_bias: -0.10,
};

static PASSIVE: Profile = Profile {
    name: "Passive",
    equity_threshold: 0.04,
    bluff_frequency: 0.08,
    value_bet_pct: 0.60,
    bluff_bet_pct: 0.30,
    fold_equity_bias: -0.05,
};

static BALANCED: Profile = Profile {
    name: "Balanced",
    equity_threshold: 0.0,
    bluff_frequency: 0.15,
    value_bet_pct: 0.66,
    bluff_bet_pct: 0.40,
    fold_equity_bias: 0.0,
};

static AGGRESSIVE: Profile = Profile {
    name: "Aggressive",
    equity_threshold: -0.04,
    bluff_frequency: 0.30,
    value_bet_pct: 0.70,
    bluff_bet_pct: 0.45,
    fold_equity_bias: 0.08,
};

static MANIAC: Profile = Profile {
    name: "Maniac",
    equity_threshold: -0.08,
    bluff_frequency: 0.45,
    value_bet_pct: 0.80,
    bluff_bet_pct: 0.50,
    fold_equity_bias: 0.15,
};

/// Profile for a persona; total over the enum, so there is no failure case.
pub fn profile(persona: Persona) -> &'static Profile {
    match persona {
        Persona::Nit => &NIT,
        Persona::Passive => &PASSIVE,
        Persona::Balanced => &BALANCED,
        Persona::Aggressive => &AGGRESSIVE,
        Persona::Maniac => &MANIAC,
    }
}

/// Profile by free-form name; unknown names get the balanced profile.
pub fn profile_by_name(name: &str) -> &'static Profile {
    profile(Persona::from_name(name))
}

/// All profiles, for listings.
pub fn profiles() -> [&'static Profile; 5] {
    [&NIT, &PASSIVE, &BALANCED, &AGGRESSIVE, &MANIAC]
}

/// Personas that open light and fight for pots without a made hand.
pub fn is_loose_aggressive(persona: Persona) -> bool {
    matches!(persona, Persona::Aggressive | Persona::Maniac)
}

/// Extra equity edge demanded before committing chips; harder play shaves
/// the margin.
pub fn difficulty_margin(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 0.09,
        Difficulty::Medium => 0.06,
        Difficulty::Hard => 0.03,
    }
}

//! Opponent range estimation.
//!
//! Produces the average fraction of hands the live opponents are playing,
//! from positional priors, observed VPIP where tracked, and the action
//! pattern of the current street. Also surfaces the raw action counts and
//! the observed fold rate, which the bluff gates and the fold-equity model
//! consume directly.

use stackfish_engine::state::{ActionKind, GameState, Position, Street};

/// Fold rate assumed before any actions have been observed.
pub const BASELINE_FOLD_RATE: f64 = 0.3;

const RANGE_FLOOR: f64 = 0.05;
const RANGE_CEIL: f64 = 0.8;

/// Aggregate view of the live opposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeProfile {
    /// Mean playing range across live opponents, in [0.05, 0.8]
    pub avg_range: f64,
    /// Raise/all-in actions by opponents on the current street
    pub aggressive_actions: u32,
    /// Calls by opponents on the current street
    pub passive_actions: u32,
    /// Folds over all recorded opponent actions, defaulting to the baseline
    pub fold_rate: f64,
}

/// Fraction of starting hands an untracked opponent plays from each seat.
/// Post-flop priors are tighter: whoever is still in has connected somehow.
fn position_prior(position: Option<Position>, street: Street) -> f64 {
    if street == Street::Preflop {
        match position {
            Some(Position::UnderTheGun) => 0.12,
            Some(Position::Middle) => 0.16,
            Some(Position::Cutoff) => 0.22,
            Some(Position::Button) => 0.30,
            Some(Position::SmallBlind) => 0.35,
            Some(Position::BigBlind) => 0.40,
            None => 0.25,
        }
    } else {
        match position {
            Some(Position::UnderTheGun) => 0.10,
            Some(Position::Middle) => 0.13,
            Some(Position::Cutoff) => 0.17,
            Some(Position::Button) => 0.22,
            Some(Position::SmallBlind) => 0.25,
            Some(Position::BigBlind) => 0.28,
            None => 0.20,
        }
    }
}

/// Estimate how wide the live opponents are playing right now.
pub fn analyze(state: &GameState) -> RangeProfile {
    let mut aggressive_actions = 0u32;
    let mut passive_actions = 0u32;
    let mut folds = 0u32;
    let mut recorded = 0u32;

    for rec in &state.history {
        if rec.seat == state.hero.seat {
            continue;
        }
        recorded += 1;
        if rec.action == ActionKind::Fold {
            folds += 1;
        }
        if rec.street == state.street {
            match rec.action {
                ActionKind::Raise | ActionKind::AllIn => aggressive_actions += 1,
                ActionKind::Call => passive_actions += 1,
                _ => {}
            }
        }
    }

    // Repeated raises tighten everyone's assumed range; a chain of flat
    // calls loosens it.
    let tightness = if aggressive_actions > 1 {
        0.7
    } else if passive_actions > 2 {
        1.3
    } else {
        1.0
    };

    let mut total = 0.0;
    let mut live = 0usize;
    for (_, seat) in state.live_opponent_seats() {
        let base = match seat.stats {
            Some(stats) if stats.hands_seen > 0 => stats.vpip,
            _ => position_prior(seat.position, state.street),
        };
        total += (base * tightness).clamp(RANGE_FLOOR, RANGE_CEIL);
        live += 1;
    }
    let avg_range = if live == 0 { 0.25 } else { total / live as f64 };

    let fold_rate = if recorded == 0 {
        BASELINE_FOLD_RATE
    } else {
        folds as f64 / recorded as f64
    };

    RangeProfile {
        avg_range,
        aggressive_actions,
        passive_actions,
        fold_rate,
    }
}

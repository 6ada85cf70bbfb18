use crate::errors::StateError;
use crate::state::GameState;

/// Reject a malformed snapshot before any simulation runs.
///
/// A decision must never be computed from an inconsistent state; the caller
/// degrades a rejection to a safe fold at its own boundary.
pub fn validate(state: &GameState) -> Result<(), StateError> {
    if state.big_blind == 0 {
        return Err(StateError::ZeroBigBlind);
    }

    let expected = state.street.board_len();
    if state.board.len() != expected {
        return Err(StateError::BoardStreetMismatch {
            street: state.street,
            got: state.board.len(),
            expected,
        });
    }

    if state.hero.seat >= state.seats.len() {
        return Err(StateError::HeroSeatOutOfRange {
            seat: state.hero.seat,
            seats: state.seats.len(),
        });
    }
    if state.seats[state.hero.seat].folded {
        return Err(StateError::HeroFolded);
    }

    let ctx = &state.context;
    if ctx.can_raise && ctx.min_raise > ctx.max_raise {
        return Err(StateError::RaiseBoundsInverted {
            min_raise: ctx.min_raise,
            max_raise: ctx.max_raise,
        });
    }

    let mut seen = Vec::with_capacity(2 + state.board.len());
    for card in state.hero.hole.iter().chain(state.board.iter()) {
        if seen.contains(card) {
            return Err(StateError::DuplicateCard(card.to_string()));
        }
        seen.push(*card);
    }

    if let Some(given) = state.to_call {
        let hero_bet = state.seats[state.hero.seat].current_bet;
        let computed = state.highest_bet.saturating_sub(hero_bet);
        if given != computed {
            return Err(StateError::ToCallMismatch { given, computed });
        }
    }

    Ok(())
}

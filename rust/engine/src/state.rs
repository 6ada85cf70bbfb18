//! The immutable game-state snapshot consumed by one decision call, and the
//! decision that comes back.
//!
//! One aggregate [`GameState`] arrives per decision (as JSON at the outer
//! boundary); nothing here persists across calls. Field names follow the
//! upstream table service's request model.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Represents a betting street in Texas Hold'em poker.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    /// Number of community cards revealed on this street.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

/// Kind of action a player can take, without sizing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

/// Records a single player action during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat index of the acting player
    pub seat: usize,
    /// The action taken
    pub action: ActionKind,
    /// Chip amount for bet-like actions
    #[serde(default)]
    pub amount: Option<u32>,
    /// The betting street when this action occurred
    pub street: Street,
}

/// Observed frequencies for one opponent, when tracking is available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatStats {
    /// Voluntarily-put-money-in-pot frequency, in [0,1]
    pub vpip: f64,
    /// Pre-flop raise frequency, in [0,1]
    pub pfr: f64,
    /// Aggression factor (raises+bets over calls)
    pub aggression: f64,
    /// Number of hands behind the estimates
    pub hands_seen: u32,
}

/// Table position, earliest to act first.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Position {
    UnderTheGun,
    Middle,
    Cutoff,
    Button,
    SmallBlind,
    BigBlind,
}

/// One seat at the table as of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatState {
    /// Chips behind (not yet in the pot)
    pub chips: u32,
    /// Chips committed on the current street
    pub current_bet: u32,
    #[serde(default)]
    pub folded: bool,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub stats: Option<SeatStats>,
}

/// Named play style selecting a personality profile.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Persona {
    Aggressive,
    Passive,
    Balanced,
    Maniac,
    Nit,
}

impl Persona {
    /// Case-insensitive lookup by name; unknown names fall back to Balanced.
    pub fn from_name(name: &str) -> Persona {
        match name.to_ascii_lowercase().as_str() {
            "aggressive" => Persona::Aggressive,
            "passive" => Persona::Passive,
            "maniac" => Persona::Maniac,
            "nit" => Persona::Nit,
            _ => Persona::Balanced,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Persona::Aggressive => "Aggressive",
            Persona::Passive => "Passive",
            Persona::Balanced => "Balanced",
            Persona::Maniac => "Maniac",
            Persona::Nit => "Nit",
        }
    }
}

/// Requested play strength.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// The deciding player's block of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Index into [`GameState::seats`]
    pub seat: usize,
    /// Exactly two hole cards
    pub hole: [Card; 2],
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub persona: Option<Persona>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// Betting-context fields populated by the table service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableContext {
    /// Dealer seat index
    pub dealer: usize,
    /// Players still contesting the pot, hero included
    pub active_players: u32,
    /// Smallest remaining stack among contestants
    pub effective_stack: u32,
    /// Lowest legal raise-to amount
    pub min_raise: u32,
    /// Highest legal raise-to amount
    pub max_raise: u32,
    pub can_check: bool,
    pub can_raise: bool,
}

/// Complete input snapshot for one decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub hand_id: Option<String>,
    pub street: Street,
    pub big_blind: u32,
    pub small_blind: u32,
    pub pot: u32,
    pub highest_bet: u32,
    /// Explicit amount to call; derived from bets when absent
    #[serde(default)]
    pub to_call: Option<u32>,
    pub hero: Hero,
    pub seats: Vec<SeatState>,
    #[serde(default)]
    pub board: Vec<Card>,
    pub context: TableContext,
    #[serde(default)]
    pub history: Vec<ActionRecord>,
}

impl GameState {
    pub fn hero_seat(&self) -> Option<&SeatState> {
        self.seats.get(self.hero.seat)
    }

    /// Chips hero must add to continue: the explicit value when supplied,
    /// otherwise `max(0, highest_bet - hero bet)`.
    pub fn amount_to_call(&self) -> u32 {
        match self.to_call {
            Some(v) => v,
            None => {
                let hero_bet = self.hero_seat().map(|s| s.current_bet).unwrap_or(0);
                self.highest_bet.saturating_sub(hero_bet)
            }
        }
    }

    /// Break-even equity for a call: `to_call / (pot + to_call)`.
    pub fn pot_odds(&self) -> f64 {
        let to_call = self.amount_to_call();
        if to_call == 0 {
            return 0.0;
        }
        to_call as f64 / (self.pot + to_call) as f64
    }

    /// Stack-to-pot ratio; infinite when the pot is empty.
    pub fn spr(&self) -> f64 {
        if self.pot == 0 {
            return f64::INFINITY;
        }
        self.context.effective_stack as f64 / self.pot as f64
    }

    /// Effective stack expressed in big blinds.
    pub fn effective_bb(&self) -> f64 {
        self.context.effective_stack as f64 / self.big_blind.max(1) as f64
    }

    /// Opponents still contesting the pot (unfolded, not the hero).
    pub fn live_opponents(&self) -> usize {
        self.seats
            .iter()
            .enumerate()
            .filter(|(i, s)| *i != self.hero.seat && !s.folded)
            .count()
    }

    /// Seats of live opponents, for range modelling.
    pub fn live_opponent_seats(&self) -> impl Iterator<Item = (usize, &SeatState)> {
        let hero = self.hero.seat;
        self.seats
            .iter()
            .enumerate()
            .filter(move |(i, s)| *i != hero && !s.folded)
    }

    pub fn persona(&self) -> Persona {
        self.hero.persona.unwrap_or(Persona::Balanced)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.hero.difficulty.unwrap_or(Difficulty::Medium)
    }
}

/// The action kinds a decision can produce (checks surface as `Call` with
/// nothing owed).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Call,
    Raise,
    AllIn,
}

/// Output of one decision call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    /// Total amount raised to, for `Raise` only
    #[serde(default)]
    pub raise_to: Option<u32>,
    /// Human-readable trace of the numbers that drove the branch taken
    pub rationale: String,
}

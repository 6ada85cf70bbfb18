//! # stackfish-brain: the decision core
//!
//! Turns one immutable game-state snapshot into a concrete poker action:
//! Monte Carlo equity against the live field, pot geometry, board texture,
//! opponent modelling and a personality profile feed an ordered rule table
//! per street and stack depth.
//!
//! ## Core Modules
//!
//! - [`decision`] - The decision engine and its policy rule tables
//! - [`equity`] - Monte Carlo field-equity estimation
//! - [`texture`] - Board wetness/connectivity classification
//! - [`ranges`] - Opponent range and tendency modelling
//! - [`ev`] - Fold-equity and expected-value arithmetic
//! - [`sizing`] - Bet categories and legal chip amounts
//! - [`personality`] - Persona and difficulty configuration tables
//! - [`ranker`] - The hand-ranking oracle seam and its default
//! - [`log`] - Best-effort append-only decision telemetry
//!
//! ## Quick Start
//!
//! ```rust
//! use stackfish_brain::DecisionEngine;
//! use stackfish_engine::cards::parse_cards;
//! use stackfish_engine::state::{
//!     GameState, Hero, Position, SeatState, Street, TableContext,
//! };
//!
//! let hole = parse_cards("AhAs").unwrap();
//! let state = GameState {
//!     hand_id: None,
//!     street: Street::Preflop,
//!     big_blind: 100,
//!     small_blind: 50,
//!     pot: 150,
//!     highest_bet: 100,
//!     to_call: None,
//!     hero: Hero {
//!         seat: 0,
//!         hole: [hole[0], hole[1]],
//!         position: Some(Position::Button),
//!         persona: None,
//!         difficulty: None,
//!     },
//!     seats: vec![
//!         SeatState { chips: 10_000, current_bet: 100, folded: false, position: None, stats: None },
//!         SeatState { chips: 10_000, current_bet: 100, folded: false, position: None, stats: None },
//!     ],
//!     board: vec![],
//!     context: TableContext {
//!         dealer: 0,
//!         active_players: 2,
//!         effective_stack: 10_000,
//!         min_raise: 200,
//!         max_raise: 10_000,
//!         can_check: true,
//!         can_raise: true,
//!     },
//!     history: vec![],
//! };
//!
//! // Same seed, same snapshot: same decision.
//! let mut engine = DecisionEngine::seeded(42).with_iterations(500);
//! let decision = engine.decide(&state);
//! println!("{:?}: {}", decision.action, decision.rationale);
//! ```

pub mod decision;
pub mod equity;
pub mod ev;
pub mod log;
pub mod personality;
pub mod ranges;
pub mod ranker;
pub mod sizing;
pub mod texture;

pub use decision::{DecisionEngine, DecisionError};
pub use equity::EquitySim;
pub use log::{DecisionSink, JsonlSink, NullSink};
pub use ranker::{BestFiveRanker, HandRanker};

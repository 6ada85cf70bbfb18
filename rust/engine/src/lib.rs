//! # stackfish-engine: card types and table-state core
//!
//! Value types and pure evaluation shared by the decision brain: cards and
//! deck handling, best-five hand evaluation, the immutable game-state
//! snapshot consumed per decision, and snapshot validation.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), compact text codes,
//!   full-deck construction
//! - [`deck`] - Dead-card-aware deck with caller-supplied RNG draws
//! - [`hand`] - Best-five hand evaluation over 5 to 7 cards
//! - [`state`] - GameState snapshot, seats, action history, Decision output
//! - [`validate`] - Snapshot rejection before simulation
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use stackfish_engine::cards::parse_cards;
//! use stackfish_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate(&cards).unwrap();
//! assert_eq!(strength.category, Category::StraightFlush);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod state;
pub mod validate;

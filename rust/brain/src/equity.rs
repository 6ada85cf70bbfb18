//! Monte Carlo equity estimation against unknown opponent holdings.
//!
//! Each trial deals random hole cards to every live opponent, completes the
//! board to five cards, and compares best hands. Hero earns the full pot
//! share for an outright best hand and an even split when tied, so the
//! estimate converges on the fractional pot share ("field equity") rather
//! than a pairwise win rate; the two disagree in multiway pots.

use std::time::Instant;

use rand::Rng;
use stackfish_engine::cards::Card;
use stackfish_engine::deck::Deck;
use stackfish_engine::errors::RankError;

use crate::ranker::HandRanker;

/// How often the trial loop looks at the deadline clock.
const DEADLINE_BATCH: u32 = 256;

/// Tunable simulation parameters.
///
/// `iterations` trades accuracy for time; the standard error shrinks as
/// `1/sqrt(iterations)`. When a `deadline` is set the loop stops at the next
/// batch boundary past it and reports the estimate over the trials that
/// actually completed.
#[derive(Debug, Clone, Copy)]
pub struct EquitySim {
    pub iterations: u32,
    pub deadline: Option<Instant>,
}

impl Default for EquitySim {
    fn default() -> Self {
        Self {
            iterations: 3_000,
            deadline: None,
        }
    }
}

impl EquitySim {
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Estimate hero's pot share in [0,1] against `opponents` random hands.
    ///
    /// With no opponents the pot is already hero's and the result is exactly
    /// 1.0. The caller supplies the random source; a seeded generator makes
    /// the estimate reproducible.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        ranker: &dyn HandRanker,
        hole: [Card; 2],
        board: &[Card],
        opponents: usize,
        rng: &mut R,
    ) -> Result<f64, RankError> {
        if opponents == 0 {
            return Ok(1.0);
        }

        let mut dead: Vec<Card> = Vec::with_capacity(2 + board.len());
        dead.extend_from_slice(&hole);
        dead.extend_from_slice(board);
        let mut deck = Deck::without(&dead);

        let board_needed = 5 - board.len().min(5);
        let per_trial = 2 * opponents + board_needed;

        // Reused per-trial scratch buffers
        let mut full_board: Vec<Card> = Vec::with_capacity(5);
        let mut seven: Vec<Card> = Vec::with_capacity(7);

        let mut credit = 0.0f64;
        let mut completed: u32 = 0;
        for _ in 0..self.iterations {
            if let Some(deadline) = self.deadline {
                if completed > 0 && completed % DEADLINE_BATCH == 0 && Instant::now() >= deadline {
                    break;
                }
            }

            let drawn = deck.draw(rng, per_trial);

            full_board.clear();
            full_board.extend_from_slice(board);
            full_board.extend_from_slice(&drawn[2 * opponents..]);

            seven.clear();
            seven.extend_from_slice(&hole);
            seven.extend_from_slice(&full_board);
            let hero_rank = ranker.rank(&seven)?;

            let mut best = true;
            let mut ties = 0usize;
            for opp in 0..opponents {
                seven.clear();
                seven.extend_from_slice(&drawn[2 * opp..2 * opp + 2]);
                seven.extend_from_slice(&full_board);
                let opp_rank = ranker.rank(&seven)?;
                if opp_rank > hero_rank {
                    best = false;
                    break;
                }
                if opp_rank == hero_rank {
                    ties += 1;
                }
            }
            if best {
                credit += 1.0 / (ties as f64 + 1.0);
            }
            completed += 1;
        }

        Ok(credit / completed.max(1) as f64)
    }
}

//! Equity command handler: standalone Monte Carlo runs from card codes.

use std::io::Write;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use stackfish_brain::equity::EquitySim;
use stackfish_brain::ranker::BestFiveRanker;
use stackfish_engine::cards::parse_cards;

use crate::error::CliError;

pub fn handle_equity_command(
    hole: &str,
    board: &str,
    opponents: usize,
    iterations: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole_cards = parse_cards(hole).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let [first, second] = hole_cards.as_slice() else {
        return Err(CliError::InvalidInput(format!(
            "expected exactly 2 hole cards, got {}",
            hole_cards.len()
        )));
    };
    let board_cards = parse_cards(board).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if board_cards.len() > 5 {
        return Err(CliError::InvalidInput(format!(
            "board can have at most 5 cards, got {}",
            board_cards.len()
        )));
    }
    for card in &board_cards {
        if card == first || card == second {
            return Err(CliError::InvalidInput(format!("duplicate card: {card}")));
        }
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let sim = EquitySim::with_iterations(iterations);
    let equity = sim
        .estimate(&BestFiveRanker, [*first, *second], &board_cards, opponents, &mut rng)
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let board_text = if board_cards.is_empty() {
        "-".to_string()
    } else {
        board_cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    writeln!(out, "hole: {first} {second}")?;
    writeln!(out, "board: {board_text}")?;
    writeln!(
        out,
        "equity: {equity:.4} ({iterations} trials vs {opponents} opponents, seed {seed})"
    )?;
    Ok(())
}

//! Decide command handler: one game-state snapshot in, one decision out.
//!
//! Reads a JSON snapshot from a file (or stdin), runs the decision engine
//! and prints the decision as JSON. Seeded runs reproduce exactly.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use stackfish_brain::log::JsonlSink;
use stackfish_brain::DecisionEngine;
use stackfish_engine::state::GameState;
use tracing::info;

use crate::config;
use crate::error::CliError;

pub struct DecideArgs<'a> {
    /// Snapshot file; stdin when absent
    pub input: Option<&'a Path>,
    pub seed: Option<u64>,
    pub iterations: Option<u32>,
    /// Decision-log JSONL path; overrides the configured one
    pub log: Option<&'a Path>,
    pub pretty: bool,
}

pub fn handle_decide_command(args: DecideArgs<'_>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    let json = match args.input {
        Some(path) => fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    let state: GameState = serde_json::from_str(&json)?;

    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let iterations = args.iterations.unwrap_or(cfg.iterations);

    let mut engine = DecisionEngine::seeded(seed).with_iterations(iterations);
    let log_path = args
        .log
        .map(|p| p.to_path_buf())
        .or_else(|| cfg.log.as_ref().map(Into::into));
    if let Some(path) = log_path {
        engine = engine.with_sink(Arc::new(JsonlSink::create(path)?));
    }

    info!(seed, iterations, street = ?state.street, "deciding");
    let decision = engine.decide(&state);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&decision)?
    } else {
        serde_json::to_string(&decision)?
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackfish_engine::state::Decision;

    const SNAPSHOT: &str = r#"{
        "street": "Preflop",
        "big_blind": 100,
        "small_blind": 50,
        "pot": 150,
        "highest_bet": 100,
        "hero": {
            "seat": 0,
            "hole": [
                {"suit": "Hearts", "rank": "Ace"},
                {"suit": "Spades", "rank": "Ace"}
            ],
            "position": "Button"
        },
        "seats": [
            {"chips": 10000, "current_bet": 100},
            {"chips": 10000, "current_bet": 100}
        ],
        "context": {
            "dealer": 0,
            "active_players": 2,
            "effective_stack": 10000,
            "min_raise": 200,
            "max_raise": 10000,
            "can_check": true,
            "can_raise": true
        }
    }"#;

    fn decide_from_file(seed: u64) -> Decision {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, SNAPSHOT).unwrap();

        let mut out = Vec::new();
        handle_decide_command(
            DecideArgs {
                input: Some(&path),
                seed: Some(seed),
                iterations: Some(500),
                log: None,
                pretty: false,
            },
            &mut out,
        )
        .unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn decide_prints_a_valid_decision() {
        let decision = decide_from_file(42);
        assert!(decision.rationale.contains("equity="));
    }

    #[test]
    fn decide_is_deterministic_under_a_seed() {
        assert_eq!(decide_from_file(7), decide_from_file(7));
    }

    #[test]
    fn garbage_input_is_a_clean_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, "not json").unwrap();

        let mut out = Vec::new();
        let result = handle_decide_command(
            DecideArgs {
                input: Some(&path),
                seed: Some(1),
                iterations: Some(100),
                log: None,
                pretty: false,
            },
            &mut out,
        );
        assert!(matches!(result, Err(CliError::Json(_))));
    }

    #[test]
    fn decisions_can_be_logged_while_deciding() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("snapshot.json");
        let log = dir.path().join("log/decisions.jsonl");
        fs::write(&input, SNAPSHOT).unwrap();

        let mut out = Vec::new();
        handle_decide_command(
            DecideArgs {
                input: Some(&input),
                seed: Some(42),
                iterations: Some(300),
                log: Some(&log),
                pretty: false,
            },
            &mut out,
        )
        .unwrap();

        let text = fs::read_to_string(&log).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}

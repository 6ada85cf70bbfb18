use std::fs;
use std::sync::Arc;

use stackfish_brain::log::JsonlSink;
use stackfish_brain::DecisionEngine;
use stackfish_engine::cards::{parse_cards, Card};
use stackfish_engine::state::{
    Action, GameState, Hero, Persona, Position, SeatState, Street, TableContext,
};

fn hole(codes: &str) -> [Card; 2] {
    let v = parse_cards(codes).unwrap();
    [v[0], v[1]]
}

fn seat(chips: u32, current_bet: u32) -> SeatState {
    SeatState {
        chips,
        current_bet,
        folded: false,
        position: None,
        stats: None,
    }
}

/// Two-handed baseline snapshot; tests mutate what they care about.
fn snapshot(hole_codes: &str, street: Street, board_codes: &str) -> GameState {
    GameState {
        hand_id: Some("t-0001".into()),
        street,
        big_blind: 100,
        small_blind: 50,
        pot: 150,
        highest_bet: 100,
        to_call: None,
        hero: Hero {
            seat: 0,
            hole: hole(hole_codes),
            position: Some(Position::Button),
            persona: None,
            difficulty: None,
        },
        seats: vec![seat(10_000, 100), seat(10_000, 100)],
        board: parse_cards(board_codes).unwrap(),
        context: TableContext {
            dealer: 0,
            active_players: 2,
            effective_stack: 10_000,
            min_raise: 200,
            max_raise: 10_000,
            can_check: true,
            can_raise: true,
        },
        history: vec![],
    }
}

fn assert_raise_bounds(state: &GameState, raise_to: u32) {
    let hero = &state.seats[state.hero.seat];
    let ceiling = state.context.max_raise.min(hero.chips + hero.current_bet);
    assert!(
        state.context.min_raise <= raise_to && raise_to <= ceiling,
        "raise_to {raise_to} outside [{}, {ceiling}]",
        state.context.min_raise
    );
}

#[test]
fn button_opens_aces_for_value() {
    // Nothing to call: hero's bet already matches the highest bet
    let state = snapshot("AhAs", Street::Preflop, "");
    let mut engine = DecisionEngine::seeded(42).with_iterations(2_000);
    let decision = engine.decide(&state);

    assert_eq!(decision.action, Action::Raise);
    let raise_to = decision.raise_to.expect("raise carries a target");
    assert_raise_bounds(&state, raise_to);
    assert!(decision.rationale.contains("rule=open_value"));
    assert!(decision.rationale.contains("equity="));
}

#[test]
fn trash_folds_at_low_spr_without_a_bluff() {
    let mut state = snapshot("2c7d", Street::Flop, "KsQh4d");
    state.pot = 1_000;
    state.highest_bet = 500;
    state.seats[0].current_bet = 0;
    state.seats[1].current_bet = 500;
    state.context.effective_stack = 2_000; // SPR 2
    state.context.can_check = false;

    // Dry unpaired board, no passive action history: neither bluff gate can
    // open, so every persona folds here.
    for persona in [
        Persona::Nit,
        Persona::Passive,
        Persona::Balanced,
        Persona::Aggressive,
        Persona::Maniac,
    ] {
        state.hero.persona = Some(persona);
        let mut engine = DecisionEngine::seeded(7).with_iterations(1_500);
        let decision = engine.decide(&state);
        assert_eq!(decision.action, Action::Fold, "{persona:?} should fold");
        assert!(decision.rationale.contains("rule=fold"));
    }
}

#[test]
fn deep_stacks_raise_the_nuts_on_the_river() {
    let mut state = snapshot("AhJh", Street::River, "KhQh7h2s3d");
    state.pot = 400;
    state.highest_bet = 0;
    state.seats[0].current_bet = 0;
    state.seats[1].current_bet = 0;
    state.context.effective_stack = 8_000; // SPR 20

    let mut engine = DecisionEngine::seeded(11).with_iterations(800);
    let decision = engine.decide(&state);

    assert_eq!(decision.action, Action::Raise);
    assert_raise_bounds(&state, decision.raise_to.unwrap());
    assert!(decision.rationale.contains("rule=value_raise"));
}

#[test]
fn medium_hands_check_behind_deep_when_unthreatened() {
    let mut state = snapshot("4c4d", Street::Flop, "Kh9s2d");
    state.pot = 300;
    state.highest_bet = 0;
    state.seats[0].current_bet = 0;
    state.seats[1].current_bet = 0;
    state.context.effective_stack = 9_000; // SPR 30

    let mut engine = DecisionEngine::seeded(3).with_iterations(2_000);
    let decision = engine.decide(&state);

    assert_eq!(decision.action, Action::Call);
    assert!(decision.rationale.contains("rule=check_behind"));
}

#[test]
fn aces_three_bet_a_preflop_raise() {
    let mut state = snapshot("AhAs", Street::Preflop, "");
    state.pot = 600;
    state.highest_bet = 400;
    state.seats[0].current_bet = 0;
    state.seats[1].current_bet = 400;
    state.context.min_raise = 800;
    state.context.can_check = false;

    let mut engine = DecisionEngine::seeded(21).with_iterations(2_000);
    let decision = engine.decide(&state);

    assert_eq!(decision.action, Action::Raise);
    // max(pot + highest, 3 * highest) = max(1000, 1200)
    assert_eq!(decision.raise_to, Some(1_200));
    assert!(decision.rationale.contains("rule=three_bet"));
}

#[test]
fn short_stacks_jam_with_an_edge() {
    let mut state = snapshot("AhKh", Street::Preflop, "");
    state.pot = 600;
    state.highest_bet = 400;
    state.seats[0].current_bet = 0;
    state.seats[1].current_bet = 400;
    state.seats[0].chips = 1_100;
    state.context.effective_stack = 1_100; // 11 big blinds
    state.context.can_check = false;

    let mut engine = DecisionEngine::seeded(5).with_iterations(2_000);
    let decision = engine.decide(&state);

    assert_eq!(decision.action, Action::AllIn);
    assert_eq!(decision.raise_to, None);
    assert!(decision.rationale.contains("rule=short_stack_jam"));
}

#[test]
fn identical_seed_and_snapshot_reproduce_the_decision() {
    let mut state = snapshot("KdQd", Street::Turn, "Jh8c2s7d");
    state.pot = 900;
    state.highest_bet = 300;
    state.seats[0].current_bet = 0;
    state.seats[1].current_bet = 300;
    state.context.effective_stack = 4_000;
    state.context.can_check = false;

    for seed in [1u64, 2, 3, 99] {
        let a = DecisionEngine::seeded(seed).with_iterations(1_000).decide(&state);
        let b = DecisionEngine::seeded(seed).with_iterations(1_000).decide(&state);
        assert_eq!(a, b, "seed {seed} did not reproduce");
    }
}

#[test]
fn explicit_to_call_is_used_verbatim() {
    let mut implicit = snapshot("AhAs", Street::Preflop, "");
    implicit.pot = 600;
    implicit.highest_bet = 400;
    implicit.seats[0].current_bet = 0;
    implicit.seats[1].current_bet = 400;
    implicit.context.can_check = false;

    let mut explicit = implicit.clone();
    explicit.to_call = Some(400);

    let a = DecisionEngine::seeded(8).with_iterations(1_000).decide(&implicit);
    let b = DecisionEngine::seeded(8).with_iterations(1_000).decide(&explicit);
    assert_eq!(a, b);
}

#[test]
fn malformed_snapshots_degrade_to_fold() {
    // Board reuses a hole card
    let mut state = snapshot("AhAs", Street::Flop, "Ah7d9s");
    state.pot = 500;

    let mut engine = DecisionEngine::seeded(1).with_iterations(500);
    let decision = engine.decide(&state);

    assert_eq!(decision.action, Action::Fold);
    assert_eq!(decision.raise_to, None);
    assert!(decision.rationale.starts_with("error:"), "{}", decision.rationale);
}

#[test]
fn raises_stay_legal_across_personas_and_stack_depths() {
    let personas = [
        Persona::Nit,
        Persona::Passive,
        Persona::Balanced,
        Persona::Aggressive,
        Persona::Maniac,
    ];
    for persona in personas {
        for (effective, min_raise, max_raise) in
            [(10_000u32, 200u32, 10_000u32), (900, 300, 900), (5_000, 250, 2_500)]
        {
            let mut state = snapshot("KhKd", Street::Preflop, "");
            state.hero.persona = Some(persona);
            state.context.effective_stack = effective;
            state.context.min_raise = min_raise;
            state.context.max_raise = max_raise;
            state.seats[0].chips = effective;

            let mut engine = DecisionEngine::seeded(13).with_iterations(800);
            let decision = engine.decide(&state);
            if decision.action == Action::Raise {
                assert_raise_bounds(&state, decision.raise_to.unwrap());
            } else {
                assert_eq!(decision.raise_to, None);
            }
        }
    }
}

#[test]
fn decisions_are_appended_to_the_jsonl_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decisions.jsonl");
    let sink = Arc::new(JsonlSink::create(&path).unwrap());

    let state = snapshot("AhAs", Street::Preflop, "");
    let mut engine = DecisionEngine::seeded(42)
        .with_iterations(500)
        .with_sink(sink);
    let decision = engine.decide(&state);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["hand_id"], "t-0001");
    assert_eq!(record["rationale"], decision.rationale.as_str());
    assert!(record["equity"].as_f64().unwrap() > 0.5);
}

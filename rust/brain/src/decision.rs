//! The decision policy.
//!
//! One call turns an immutable [`GameState`] into a [`Decision`]. The policy
//! is a set of ordered rule tables (one for each pre-flop situation and one
//! per stack-to-pot bucket post-flop), evaluated top to bottom until a guard
//! matches. Every number a guard looks at (equity, pot odds, SPR, ranges,
//! texture, bluff eligibility) is computed once up front, so individual rules
//! stay single-line predicates and can be reasoned about in isolation.
//!
//! The engine never fails: a snapshot that cannot be decided degrades to a
//! fold whose rationale names the problem.

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, warn};

use stackfish_engine::errors::{RankError, StateError};
use stackfish_engine::state::{Action, Decision, GameState, Persona, Position, Street};
use stackfish_engine::validate::validate;

use crate::equity::EquitySim;
use crate::ev::{expected_value, fold_equity};
use crate::log::{DecisionRecord, DecisionSink, NullSink};
use crate::personality::{difficulty_margin, is_loose_aggressive, profile, Profile};
use crate::ranges::{self, RangeProfile};
use crate::ranker::{BestFiveRanker, HandRanker};
use crate::sizing::{bet_size, BetCategory};
use crate::texture::{analyze as analyze_texture, BoardTexture, TextureLabel};

/// Internal failure while deciding; callers only ever see the fold it
/// degrades to.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Rank(#[from] RankError),
}

/// Everything the rule guards read, computed once per decision.
struct DecisionContext<'a> {
    state: &'a GameState,
    profile: &'static Profile,
    /// Difficulty edge margin on pot-odds comparisons
    margin: f64,
    equity: f64,
    pot_odds: f64,
    spr: f64,
    to_call: u32,
    range: RangeProfile,
    texture: BoardTexture,
    /// Pre-flop required opening equity, position- and stack-adjusted
    required: f64,
    /// Post-flop continuing threshold for the current field size
    threshold: f64,
    /// Bluff plan for this decision, if the one draw came up live
    bluff: Option<BetCategory>,
    /// Pre-flop re-raise plan, when facing a bet and raising is legal
    three_bet: Option<ThreeBetPlan>,
}

struct ThreeBetPlan {
    target: u32,
    ev: f64,
}

impl DecisionContext<'_> {
    fn can_raise(&self) -> bool {
        self.state.context.can_raise
    }

    fn persona(&self) -> Persona {
        self.state.persona()
    }
}

/// What a matched rule wants to do; sizing is resolved afterwards.
enum Move {
    Fold,
    Call,
    AllIn,
    Raise(BetCategory),
    RaiseTo(u32),
}

/// One guarded policy rule. Tables end with an unconditional rule, so
/// evaluation always lands somewhere.
struct Rule {
    label: &'static str,
    applies: fn(&DecisionContext) -> bool,
    act: fn(&DecisionContext) -> Move,
}

/// Unopened pot pre-flop: open for value, open light with a fighting
/// persona, otherwise take the free look.
const PREFLOP_OPEN: &[Rule] = &[
    Rule {
        label: "open_value",
        applies: |c| c.can_raise() && c.equity > c.required + 0.1,
        act: |_| Move::Raise(BetCategory::Value),
    },
    Rule {
        label: "open_light",
        applies: |c| {
            c.can_raise() && is_loose_aggressive(c.persona()) && c.equity > c.required - 0.05
        },
        act: |_| Move::Raise(BetCategory::Bluff),
    },
    Rule {
        label: "check",
        applies: |_| true,
        act: |_| Move::Call,
    },
];

/// Facing a bet pre-flop: jam short stacks, re-raise when the EV model
/// likes it, continue only with a real edge over the price.
const PREFLOP_FACING: &[Rule] = &[
    Rule {
        label: "short_stack_jam",
        applies: |c| {
            c.state.effective_bb() <= 12.0 && c.equity > (c.pot_odds + c.margin - 0.02).max(0.0)
        },
        act: |_| Move::AllIn,
    },
    Rule {
        label: "three_bet",
        applies: |c| match &c.three_bet {
            Some(plan) => {
                plan.ev > 0.0 && c.equity > c.pot_odds + c.profile.equity_threshold + c.margin
            }
            None => false,
        },
        act: |c| Move::RaiseTo(c.three_bet.as_ref().map(|p| p.target).unwrap_or(0)),
    },
    Rule {
        label: "call_strong",
        applies: |c| c.equity > c.pot_odds + c.required + 0.15,
        act: |_| Move::Call,
    },
    Rule {
        label: "call_cheap",
        applies: |c| {
            c.equity > c.pot_odds + c.required && (c.to_call as f64) < c.state.pot as f64 * 0.1
        },
        act: |_| Move::Call,
    },
    Rule {
        label: "fold",
        applies: |_| true,
        act: |_| Move::Fold,
    },
];

/// SPR below 3: the stack is committed or it is not.
const LOW_SPR: &[Rule] = &[
    Rule {
        label: "commit",
        applies: |c| c.equity > 0.4,
        act: |_| Move::AllIn,
    },
    Rule {
        label: "semi_bluff_jam",
        applies: |c| c.bluff == Some(BetCategory::SemiBluff),
        act: |_| Move::AllIn,
    },
    Rule {
        label: "fold",
        applies: |_| true,
        act: |_| Move::Fold,
    },
];

/// SPR 3 to 10: raise for value or as the planned bluff, otherwise pay only
/// a fair price.
const MID_SPR: &[Rule] = &[
    Rule {
        label: "value_raise",
        applies: |c| c.can_raise() && c.equity > c.threshold + 0.1,
        act: |_| Move::Raise(BetCategory::Value),
    },
    Rule {
        label: "bluff_raise",
        applies: |c| c.can_raise() && c.bluff.is_some(),
        act: |c| Move::Raise(c.bluff.unwrap_or(BetCategory::Bluff)),
    },
    Rule {
        label: "call_odds",
        applies: |c| c.equity > c.pot_odds + c.profile.equity_threshold,
        act: |_| Move::Call,
    },
    Rule {
        label: "fold",
        applies: |_| true,
        act: |_| Move::Fold,
    },
];

/// Deep stacks: strong value only, pot control with made hands, dry-board
/// bluffs, overlay calls.
const HIGH_SPR: &[Rule] = &[
    Rule {
        label: "value_raise",
        applies: |c| c.can_raise() && c.equity > 0.7,
        act: |_| Move::Raise(BetCategory::Value),
    },
    Rule {
        label: "check_behind",
        applies: |c| {
            c.equity > c.threshold && c.range.aggressive_actions == 0 && c.state.context.can_check
        },
        act: |_| Move::Call,
    },
    Rule {
        label: "call_made",
        applies: |c| c.equity > c.threshold && c.equity > c.pot_odds,
        act: |_| Move::Call,
    },
    Rule {
        label: "fold_made",
        applies: |c| c.equity > c.threshold,
        act: |_| Move::Fold,
    },
    Rule {
        label: "dry_bluff",
        applies: |c| c.can_raise() && c.bluff.is_some() && c.texture.label == TextureLabel::Dry,
        act: |c| Move::Raise(c.bluff.unwrap_or(BetCategory::Bluff)),
    },
    Rule {
        label: "call_overlay",
        applies: |c| c.equity > c.pot_odds + 0.1,
        act: |_| Move::Call,
    },
    Rule {
        label: "fold",
        applies: |_| true,
        act: |_| Move::Fold,
    },
];

/// Pre-flop equity a hand must beat to open from each seat; later seats and
/// the blinds open wider.
fn opening_threshold(position: Option<Position>) -> f64 {
    match position {
        Some(Position::UnderTheGun) => 0.58,
        Some(Position::Middle) => 0.55,
        Some(Position::Cutoff) => 0.52,
        Some(Position::Button) => 0.48,
        Some(Position::SmallBlind) => 0.46,
        Some(Position::BigBlind) => 0.44,
        None => 0.52,
    }
}

fn required_equity(state: &GameState, profile: &Profile, opponents: usize) -> f64 {
    let mut required = opening_threshold(state.hero.position) + profile.equity_threshold;
    let eff_bb = state.effective_bb();
    if eff_bb < 50.0 {
        // short stacks push thinner edges
        required *= 0.8;
    } else if eff_bb > 150.0 {
        // deep stacks punish marginal opens harder
        required *= 1.2;
    }
    required + 0.05 * opponents.saturating_sub(1) as f64
}

/// Continuing threshold and bluff-frequency multiplier by field size.
fn multiway_thresholds(opponents: usize) -> (f64, f64) {
    if opponents > 2 {
        (0.6, 0.3)
    } else if opponents == 2 {
        (0.5, 0.6)
    } else {
        (0.4, 1.0)
    }
}

fn plan_three_bet(
    state: &GameState,
    profile: &Profile,
    equity: f64,
    opponents: usize,
    range: &RangeProfile,
) -> Option<ThreeBetPlan> {
    let hero = state.hero_seat()?;
    let ceiling = hero.chips.saturating_add(hero.current_bet);
    let target = (state.pot.saturating_add(state.highest_bet))
        .max(state.highest_bet.saturating_mul(3))
        .min(state.context.max_raise)
        .min(ceiling);
    if target < state.context.min_raise || target <= state.highest_bet {
        return None;
    }
    let extra = target.saturating_sub(hero.current_bet);
    let fe = (fold_equity(extra, state.pot, opponents, range.fold_rate)
        + profile.fold_equity_bias)
        .clamp(0.05, 0.95);
    let ev = expected_value(equity, state.pot, extra, fe);
    Some(ThreeBetPlan { target, ev })
}

/// Decides actions from game-state snapshots.
///
/// Holds the random source driving both the equity sampling and the bluff
/// draw, so a seeded engine replays identically: the same snapshot and the
/// same seed always produce the same decision.
pub struct DecisionEngine<R: Rng = ChaCha20Rng> {
    rng: R,
    ranker: Box<dyn HandRanker>,
    sim: EquitySim,
    sink: Arc<dyn DecisionSink>,
}

impl DecisionEngine<ChaCha20Rng> {
    /// Engine with a deterministic ChaCha20 source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DecisionEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            ranker: Box::new(BestFiveRanker),
            sim: EquitySim::default(),
            sink: Arc::new(NullSink),
        }
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.sim.iterations = iterations;
        self
    }

    pub fn with_ranker(mut self, ranker: Box<dyn HandRanker>) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DecisionSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Decide an action. Never fails and never panics on bad input: a
    /// snapshot that cannot be decided folds with the failure in the
    /// rationale.
    pub fn decide(&mut self, state: &GameState) -> Decision {
        self.decide_inner(state, None)
    }

    /// [`decide`](Self::decide) under a deadline: the Monte Carlo iteration
    /// count is the only thing cut short.
    pub fn decide_by(&mut self, state: &GameState, deadline: Instant) -> Decision {
        self.decide_inner(state, Some(deadline))
    }

    fn decide_inner(&mut self, state: &GameState, deadline: Option<Instant>) -> Decision {
        match self.try_decide(state, deadline) {
            Ok(resolved) => {
                debug!(
                    equity = resolved.equity,
                    rule = resolved.rule,
                    action = ?resolved.decision.action,
                    raise_to = resolved.decision.raise_to,
                    "decision"
                );
                self.sink.append(&DecisionRecord {
                    hand_id: state.hand_id.clone(),
                    seat: state.hero.seat,
                    street: state.street,
                    action: resolved.decision.action,
                    raise_to: resolved.decision.raise_to,
                    equity: resolved.equity,
                    pot_odds: resolved.pot_odds,
                    spr: resolved.spr,
                    persona: state.persona().name().to_string(),
                    rule: resolved.rule.to_string(),
                    rationale: resolved.decision.rationale.clone(),
                    ts: None,
                });
                resolved.decision
            }
            Err(e) => {
                warn!(error = %e, "decision degraded to fold");
                Decision {
                    action: Action::Fold,
                    raise_to: None,
                    rationale: format!("error: {e}"),
                }
            }
        }
    }

    fn try_decide(
        &mut self,
        state: &GameState,
        deadline: Option<Instant>,
    ) -> Result<ResolvedDecision, DecisionError> {
        validate(state)?;

        let profile = profile(state.persona());
        let margin = difficulty_margin(state.difficulty());
        let opponents = state.live_opponents();
        let to_call = state.amount_to_call();
        let pot_odds = state.pot_odds();
        let spr = state.spr();
        let range = ranges::analyze(state);
        let texture = analyze_texture(&state.board);

        let mut sim = self.sim;
        sim.deadline = deadline;
        let equity = sim.estimate(
            self.ranker.as_ref(),
            state.hero.hole,
            &state.board,
            opponents,
            &mut self.rng,
        )?;

        let required = required_equity(state, profile, opponents);
        let (base_threshold, bluff_mult) = multiway_thresholds(opponents);
        let threshold = base_threshold + profile.equity_threshold;

        // One draw decides bluff eligibility for the whole call
        let bluff = if state.street != Street::Preflop && equity < 0.4 {
            let draw: f64 = self.rng.random();
            if draw < profile.bluff_frequency * bluff_mult {
                if range.passive_actions >= 3 && range.fold_rate > 0.3 && spr > 3.0 {
                    Some(BetCategory::Bluff)
                } else if texture.wetness > 0.5 && equity > 0.2 {
                    Some(BetCategory::SemiBluff)
                } else {
                    None
                }
            } else {
                None
            }
        } else {
            None
        };

        let three_bet = if state.street == Street::Preflop && to_call > 0 && state.context.can_raise
        {
            plan_three_bet(state, profile, equity, opponents, &range)
        } else {
            None
        };

        let ctx = DecisionContext {
            state,
            profile,
            margin,
            equity,
            pot_odds,
            spr,
            to_call,
            range,
            texture,
            required,
            threshold,
            bluff,
            three_bet,
        };

        let table: &[Rule] = match state.street {
            Street::Preflop => {
                if to_call == 0 {
                    PREFLOP_OPEN
                } else {
                    PREFLOP_FACING
                }
            }
            _ => {
                if spr < 3.0 {
                    LOW_SPR
                } else if spr < 10.0 {
                    MID_SPR
                } else {
                    HIGH_SPR
                }
            }
        };

        Ok(run_table(&ctx, table))
    }
}

struct ResolvedDecision {
    decision: Decision,
    rule: &'static str,
    equity: f64,
    pot_odds: f64,
    spr: f64,
}

fn run_table(ctx: &DecisionContext, table: &[Rule]) -> ResolvedDecision {
    for rule in table {
        if !(rule.applies)(ctx) {
            continue;
        }
        let (action, raise_to) = apply_move(ctx, (rule.act)(ctx));
        let mut rationale = format!(
            "equity={:.3}; pot_odds={:.3}; spr={:.2}; persona={}; rule={}",
            ctx.equity,
            ctx.pot_odds,
            ctx.spr,
            ctx.profile.name,
            rule.label
        );
        if let Some(amount) = raise_to {
            rationale.push_str(&format!("; raise_to={amount}"));
        }
        return ResolvedDecision {
            decision: Decision {
                action,
                raise_to,
                rationale,
            },
            rule: rule.label,
            equity: ctx.equity,
            pot_odds: ctx.pot_odds,
            spr: ctx.spr,
        };
    }
    // Tables end with an unconditional rule, so this only runs on an empty table
    ResolvedDecision {
        decision: Decision {
            action: Action::Fold,
            raise_to: None,
            rationale: format!(
                "equity={:.3}; pot_odds={:.3}; spr={:.2}; persona={}; rule=fold",
                ctx.equity, ctx.pot_odds, ctx.spr, ctx.profile.name
            ),
        },
        rule: "fold",
        equity: ctx.equity,
        pot_odds: ctx.pot_odds,
        spr: ctx.spr,
    }
}

/// Resolve a move into a legal action; a raise that cannot be sized legally
/// flattens to a call.
fn apply_move(ctx: &DecisionContext, mv: Move) -> (Action, Option<u32>) {
    match mv {
        Move::Fold => (Action::Fold, None),
        Move::Call => (Action::Call, None),
        Move::AllIn => (Action::AllIn, None),
        Move::Raise(category) => {
            let hero = match ctx.state.hero_seat() {
                Some(seat) => seat,
                None => return (Action::Call, None),
            };
            let ceiling = hero.chips.saturating_add(hero.current_bet);
            match bet_size(
                ctx.state.pot,
                category.pot_fraction(ctx.profile),
                ctx.state.context.min_raise,
                ctx.state.context.max_raise,
                ceiling,
                ctx.state.big_blind,
            ) {
                Some(amount) => (Action::Raise, Some(amount)),
                None => (Action::Call, None),
            }
        }
        Move::RaiseTo(target) => {
            if target == 0 {
                return (Action::Call, None);
            }
            (Action::Raise, Some(target))
        }
    }
}

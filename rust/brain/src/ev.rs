//! Fold-equity and expected-value arithmetic for aggressive lines.

/// Probability that a bet of `bet` into `pot` folds out all `opponents`.
///
/// Bigger bets relative to the pot buy more folds (capped), every extra live
/// opponent discounts the bluff, and opponents who fold more often than the
/// baseline raise the estimate. Output is clamped to [0.05, 0.95]; with no
/// opponents left to fold the pot is already won and the result is 1.0.
pub fn fold_equity(bet: u32, pot: u32, opponents: usize, fold_rate: f64) -> f64 {
    if opponents == 0 {
        return 1.0;
    }
    let ratio = if pot == 0 {
        f64::INFINITY
    } else {
        bet as f64 / pot as f64
    };
    let base = (ratio * 0.5).min(0.8);
    let count_penalty = 0.9f64.powi(opponents as i32 - 1);
    let tendency = 1.0 + (fold_rate - crate::ranges::BASELINE_FOLD_RATE);
    (base * count_penalty * tendency).clamp(0.05, 0.95)
}

/// Chip EV of an aggressive action that risks `to_call` more chips.
///
/// `fold_equity` of the time the pot is taken down uncontested; otherwise
/// the showdown value is `equity`-weighted over the called pot.
pub fn expected_value(equity: f64, pot: u32, to_call: u32, fold_equity: f64) -> f64 {
    let pot = pot as f64;
    let call = to_call as f64;
    let when_called = equity * (pot + call) - (1.0 - equity) * call;
    fold_equity * pot + (1.0 - fold_equity) * when_called
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_equity_stays_in_band() {
        for &(bet, pot, opps, rate) in &[
            (0u32, 100u32, 1usize, 0.0f64),
            (50, 100, 1, 0.3),
            (1_000, 100, 1, 0.9),
            (1_000, 100, 6, 0.9),
            (10, 0, 2, 0.5),
        ] {
            let fe = fold_equity(bet, pot, opps, rate);
            assert!((0.05..=0.95).contains(&fe), "fe={fe} out of band");
        }
    }

    #[test]
    fn zero_opponents_means_the_pot_is_won() {
        assert_eq!(fold_equity(100, 100, 0, 0.3), 1.0);
    }

    #[test]
    fn bigger_bets_buy_more_folds_up_to_the_cap() {
        let small = fold_equity(25, 100, 1, 0.3);
        let big = fold_equity(100, 100, 1, 0.3);
        let huge = fold_equity(400, 100, 1, 0.3);
        assert!(small < big);
        // past the cap the size stops mattering
        assert_eq!(big.max(huge), huge);
        assert!((huge - 0.8).abs() < 1e-9);
    }

    #[test]
    fn extra_opponents_discount_the_bluff() {
        let heads_up = fold_equity(75, 100, 1, 0.3);
        let multiway = fold_equity(75, 100, 4, 0.3);
        assert!(multiway < heads_up);
    }

    #[test]
    fn sticky_opponents_lower_fold_equity() {
        let sticky = fold_equity(75, 100, 1, 0.1);
        let baseline = fold_equity(75, 100, 1, 0.3);
        let folders = fold_equity(75, 100, 1, 0.6);
        assert!(sticky < baseline && baseline < folders);
    }

    #[test]
    fn ev_matches_the_weighted_formula() {
        // 40% equity, pot 100, 50 to call, no fold equity:
        // 0.4*150 - 0.6*50 = 30
        let ev = expected_value(0.4, 100, 50, 0.0);
        assert!((ev - 30.0).abs() < 1e-9);

        // pure steal: all fold equity takes the pot
        let ev = expected_value(0.0, 100, 50, 1.0);
        assert!((ev - 100.0).abs() < 1e-9);

        // blend
        let ev = expected_value(0.4, 100, 50, 0.5);
        assert!((ev - (0.5 * 100.0 + 0.5 * 30.0)).abs() < 1e-9);
    }

    #[test]
    fn hopeless_bluffs_price_out_negative() {
        // no equity, no fold equity: lighting the call on fire
        let ev = expected_value(0.0, 100, 50, 0.05);
        assert!(ev < 0.0);
    }
}

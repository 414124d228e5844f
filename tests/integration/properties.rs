//! Invariants checked over generated nines: `k` played holes drawn from
//! win/loss/tie, followed by unplayed holes to the end of the nine.

use proptest::prelude::*;

use nassau::scoring::nine::{AUTO_PRESS_INDEX, LAST_TRIGGER_INDEX};
use nassau::scoring::{score_nine, score_overall};
use nassau::types::{BetLabel, BetOutcome, HoleOutcome, Nine, HOLES_PER_NINE};

fn played_outcome() -> impl Strategy<Value = HoleOutcome> {
    prop_oneof![
        Just(HoleOutcome::Win),
        Just(HoleOutcome::Loss),
        Just(HoleOutcome::Tie),
    ]
}

/// A valid nine: `k in 0..=9` played holes, the rest unplayed.
fn nine_holes() -> impl Strategy<Value = [HoleOutcome; HOLES_PER_NINE]> {
    (
        0..=HOLES_PER_NINE,
        prop::collection::vec(played_outcome(), HOLES_PER_NINE),
    )
        .prop_map(|(played, outcomes)| {
            let mut holes = [HoleOutcome::Unplayed; HOLES_PER_NINE];
            holes[..played].copy_from_slice(&outcomes[..played]);
            holes
        })
}

fn which_nine() -> impl Strategy<Value = Nine> {
    prop_oneof![Just(Nine::Front), Just(Nine::Back)]
}

proptest! {
    #[test]
    fn points_are_holes_plus_bets(holes in nine_holes(), nine in which_nine()) {
        let result = score_nine(&holes, nine).unwrap();
        let bet_sum: i32 = result.bets.iter().map(|b| b.points).sum();
        let net: i32 = holes.iter().map(|h| h.value()).sum();
        prop_assert_eq!(result.bet_points, bet_sum);
        prop_assert_eq!(result.holes_won, net);
        prop_assert_eq!(result.points, result.holes_won + result.bet_points);
    }

    #[test]
    fn press_starts_bounded_and_strictly_increasing(holes in nine_holes(), nine in which_nine()) {
        let result = score_nine(&holes, nine).unwrap();
        let starts: Vec<usize> = result.presses.iter().map(|p| p.start).collect();
        prop_assert!(starts.iter().all(|s| *s >= 1 && *s <= LAST_TRIGGER_INDEX + 1));
        prop_assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bet_order_and_press_numbering(holes in nine_holes(), nine in which_nine()) {
        let result = score_nine(&holes, nine).unwrap();
        if holes.iter().all(|h| !h.is_played()) {
            prop_assert!(result.is_empty());
            prop_assert_eq!(result.points, 0);
            return Ok(());
        }
        prop_assert_eq!(result.bets[0].label, BetLabel::Original);

        let presses: Vec<BetLabel> = result
            .bets
            .iter()
            .map(|b| b.label)
            .filter(|l| l.is_press())
            .collect();
        let expected: Vec<BetLabel> = (1..=presses.len() as u32).map(BetLabel::Press).collect();
        prop_assert_eq!(presses, expected);

        let autos = result
            .bets
            .iter()
            .filter(|b| b.label == BetLabel::AutoPress)
            .count();
        prop_assert!(autos <= 1);
        if autos == 1 {
            prop_assert!(holes[AUTO_PRESS_INDEX].is_played());
            prop_assert_eq!(result.bets.last().map(|b| b.label), Some(BetLabel::AutoPress));
        }
    }

    #[test]
    fn press_without_played_holes_is_tied(holes in nine_holes(), nine in which_nine()) {
        let result = score_nine(&holes, nine).unwrap();
        for bet in result.bets.iter().filter(|b| b.results.is_empty()) {
            prop_assert!(bet.label.is_press());
            prop_assert_eq!(bet.score, 0);
            prop_assert_eq!(bet.outcome, BetOutcome::Tied);
            prop_assert_eq!(bet.points, 0);
        }
    }

    #[test]
    fn overall_independent_of_nine_scoring(front in nine_holes(), back in nine_holes()) {
        let count = |o: HoleOutcome| {
            front.iter().chain(&back).filter(|h| **h == o).count() as i32
        };
        let expected = (count(HoleOutcome::Win) - count(HoleOutcome::Loss)).signum();
        prop_assert_eq!(score_overall(&front, &back), expected);
    }

    #[test]
    fn scoring_is_idempotent(holes in nine_holes(), nine in which_nine()) {
        let a = score_nine(&holes, nine).unwrap();
        let b = score_nine(&holes, nine).unwrap();
        prop_assert_eq!(a, b);
    }
}

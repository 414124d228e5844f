//! A full round recorded hole by hole.

use rust_decimal_macros::dec;

use nassau::report::render;
use nassau::scorecard::Scorecard;
use nassau::settlement::settle;
use nassau::types::HoleOutcome::{Loss as L, Tie as T, Win as W};
use nassau::types::{BetLabel, BetOutcome, HoleOutcome, NassauError};

const FRONT: [HoleOutcome; 9] = [W, W, L, T, T, T, T, T, T];
const BACK: [HoleOutcome; 9] = [L, L, W, L, T, W, T, T, W];

fn play(card: &mut Scorecard, holes: &[HoleOutcome]) {
    for outcome in holes {
        card.record_current(*outcome).unwrap();
    }
}

#[test]
fn test_totals_appear_only_after_eighteen() {
    let mut card = Scorecard::new();
    play(&mut card, &FRONT);
    assert_eq!(card.current_hole(), 10);

    let after_front = settle(&card, dec!(5)).unwrap();
    assert_eq!(after_front.front.points, 1);
    assert!(after_front.back.is_empty());
    assert!(!after_front.is_final());

    play(&mut card, &BACK[..8]);
    assert!(!settle(&card, dec!(5)).unwrap().is_final());

    card.record_current(BACK[8]).unwrap();
    assert!(card.is_complete());
    let report = settle(&card, dec!(5)).unwrap();
    assert!(report.is_final());

    // Back: Original 2 down at 11 (press from 12) and level at the end.
    // Press #1 is 1 up thru 17, so 18 is an auto-press (won).
    let back = &report.back;
    let labels: Vec<BetLabel> = back.bets.iter().map(|b| b.label).collect();
    assert_eq!(
        labels,
        vec![BetLabel::Original, BetLabel::Press(1), BetLabel::AutoPress]
    );
    assert_eq!(back.bets[0].holes, "10-18");
    assert_eq!(back.bets[0].outcome, BetOutcome::Tied);
    assert_eq!(back.bets[1].holes, "12-18");
    assert_eq!(back.bets[1].score, 2);
    assert_eq!(back.bets[1].outcome, BetOutcome::Won);
    assert_eq!(back.bets[2].holes, "18");
    assert_eq!(back.bets[2].outcome, BetOutcome::Won);
    assert_eq!(back.holes_won, 0);
    assert_eq!(back.bet_points, 2);
    assert_eq!(back.points, 2);

    // 5 wins v 4 losses over the round.
    assert_eq!(report.overall, Some(1));
    assert_eq!(report.total_points, Some(1 + 2 + 1));
    assert_eq!(report.total_money, Some(dec!(20)));

    let text = render(&report, "$");
    assert!(text.contains("TOTAL: +4 points = +$20.00"));
}

#[test]
fn test_out_of_order_entry_is_rejected() {
    let mut card = Scorecard::new();
    play(&mut card, &FRONT[..3]);
    assert_eq!(
        card.record(6, W),
        Err(NassauError::OutOfOrder { hole: 6, missing: 4 })
    );
    // Card unchanged by the failed call.
    assert_eq!(card.holes_played(), 3);
}

#[test]
fn test_correction_rescored_from_scratch() {
    let mut card = Scorecard::new();
    play(&mut card, &FRONT);
    assert_eq!(settle(&card, dec!(1)).unwrap().front.press_count(), 1);

    // Halve hole 2 instead: the Original never gets 2 up.
    card.record(2, T).unwrap();
    let report = settle(&card, dec!(1)).unwrap();
    assert_eq!(report.front.press_count(), 0);
    assert_eq!(report.front.holes_won, 0);
}

#[test]
fn test_reset_clears_round() {
    let mut card = Scorecard::new();
    play(&mut card, &FRONT);
    card.reset();
    let report = settle(&card, dec!(5)).unwrap();
    assert!(report.front.is_empty());
    assert_eq!(card.current_hole(), 1);
}

//! Nine-hole scorer.
//!
//! Discovers the presses for one nine with a forward work-list scan,
//! settles every bet, applies the end-of-nine auto-press, and totals
//! net holes plus bet points.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{BetLabel, BetOutcome, HoleOutcome, NassauError, Nine, HOLES_PER_NINE};

// ---------------------------------------------------------------------------
// Press rules
// ---------------------------------------------------------------------------

/// Running margin (either direction) that spawns a press.
pub const PRESS_TRIGGER_MARGIN: i32 = 2;

/// Last 0-based hole index on which a press may trigger (hole 7 of 9).
pub const LAST_TRIGGER_INDEX: usize = 6;

/// Index of the final hole of a nine, played as the auto-press.
pub const AUTO_PRESS_INDEX: usize = HOLES_PER_NINE - 1;

// ---------------------------------------------------------------------------
// Bets
// ---------------------------------------------------------------------------

/// A bet found during press discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    /// 0-based index of the first hole this bet covers.
    pub start: usize,
    pub label: BetLabel,
    /// Whether this bet has already spawned its press.
    pub triggered: bool,
}

impl Bet {
    pub fn original() -> Self {
        Self {
            start: 0,
            label: BetLabel::Original,
            triggered: false,
        }
    }

    pub fn press(start: usize, number: u32) -> Self {
        Self {
            start,
            label: BetLabel::Press(number),
            triggered: false,
        }
    }
}

/// Settled result of one bet, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetResult {
    pub label: BetLabel,
    pub start: usize,
    /// Hole range in round numbering, e.g. "3-9", "12-18" or "18".
    pub holes: String,
    /// One glyph per played hole in range.
    pub results: String,
    pub score: i32,
    pub outcome: BetOutcome,
    pub points: i32,
}

// ---------------------------------------------------------------------------
// Nine result
// ---------------------------------------------------------------------------

/// Everything scored for one nine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NineResult {
    pub nine: Nine,
    /// Net holes won minus lost.
    pub holes_won: i32,
    /// Original first, then presses in trigger order, then the auto-press.
    pub bets: Vec<BetResult>,
    /// Discovered presses (every bet after the Original).
    pub presses: Vec<Bet>,
    pub bet_points: i32,
    /// `holes_won + bet_points`.
    pub points: i32,
}

impl NineResult {
    /// Result for a nine with no holes played.
    pub fn empty(nine: Nine) -> Self {
        Self {
            nine,
            holes_won: 0,
            bets: Vec::new(),
            presses: Vec::new(),
            bet_points: 0,
            points: 0,
        }
    }

    /// True when no hole of the nine has been played. Callers skip
    /// displaying such a nine.
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    pub fn auto_press(&self) -> Option<&BetResult> {
        self.bets.iter().find(|b| b.label == BetLabel::AutoPress)
    }

    pub fn press_count(&self) -> usize {
        self.presses.len()
    }
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Score one nine.
///
/// `holes` must hold exactly nine outcomes with any unplayed holes at
/// the end. The result is recomputed from scratch on every call.
pub fn score_nine(holes: &[HoleOutcome], nine: Nine) -> Result<NineResult, NassauError> {
    validate_nine(holes)?;

    if !holes.iter().any(|h| h.is_played()) {
        return Ok(NineResult::empty(nine));
    }

    let discovered = discover_bets(holes, vec![Bet::original()]);
    let holes_won: i32 = holes.iter().map(|h| h.value()).sum();

    let mut bets: Vec<BetResult> = discovered
        .iter()
        .map(|bet| settle_bet(holes, bet, nine))
        .collect();

    if let Some(auto) = discovered.last().and_then(|last| auto_press(holes, last, nine)) {
        bets.push(auto);
    }

    let bet_points: i32 = bets.iter().map(|b| b.points).sum();
    let points = holes_won + bet_points;

    debug!(
        nine = %nine,
        holes_won,
        bets = bets.len(),
        bet_points,
        points,
        "Nine scored"
    );

    Ok(NineResult {
        nine,
        holes_won,
        bets,
        presses: discovered.into_iter().skip(1).collect(),
        bet_points,
        points,
    })
}

/// Check length and the trailing-unplayed invariant.
pub fn validate_nine(holes: &[HoleOutcome]) -> Result<(), NassauError> {
    if holes.len() != HOLES_PER_NINE {
        return Err(NassauError::WrongLength(holes.len()));
    }
    if let Some(unplayed) = holes.iter().position(|h| !h.is_played()) {
        if let Some(offset) = holes[unplayed..].iter().position(|h| h.is_played()) {
            return Err(NassauError::GapInNine {
                unplayed,
                played: unplayed + offset,
            });
        }
    }
    Ok(())
}

/// Played holes from `start` onward with their indexes, stopping at the
/// first unplayed hole.
fn played_from(
    holes: &[HoleOutcome],
    start: usize,
) -> impl Iterator<Item = (usize, HoleOutcome)> + '_ {
    holes
        .iter()
        .copied()
        .enumerate()
        .skip(start)
        .take_while(|(_, h)| h.is_played())
}

/// Index at which a bet starting at `start` first reaches the press margin,
/// if that happens early enough in the nine.
fn trigger_index(holes: &[HoleOutcome], start: usize) -> Option<usize> {
    let mut running = 0;
    for (idx, outcome) in played_from(holes, start) {
        running += outcome.value();
        if running.abs() >= PRESS_TRIGGER_MARGIN && idx <= LAST_TRIGGER_INDEX {
            return Some(idx);
        }
    }
    None
}

/// Work-list press discovery.
///
/// Bets are scanned in creation order; a new press is appended to the
/// tail and scanned in turn. Each bet spawns at most one press, and no
/// two bets share a start index.
fn discover_bets(holes: &[HoleOutcome], mut bets: Vec<Bet>) -> Vec<Bet> {
    let mut next = 0;
    while next < bets.len() {
        if !bets[next].triggered {
            if let Some(idx) = trigger_index(holes, bets[next].start) {
                bets[next].triggered = true;
                let press_start = idx + 1;

                if bets.iter().all(|b| b.start != press_start) {
                    let number = bets.iter().filter(|b| b.label.is_press()).count() as u32 + 1;
                    debug!(
                        parent = %bets[next].label,
                        trigger_index = idx,
                        press_start,
                        number,
                        "Press triggered"
                    );
                    bets.push(Bet::press(press_start, number));
                }
            }
        }
        next += 1;
    }
    bets
}

fn settle_bet(holes: &[HoleOutcome], bet: &Bet, nine: Nine) -> BetResult {
    let mut score = 0;
    let mut results = String::new();
    for (_, outcome) in played_from(holes, bet.start) {
        score += outcome.value();
        results.push(outcome.glyph());
    }
    let outcome = BetOutcome::from_score(score);

    BetResult {
        label: bet.label,
        start: bet.start,
        holes: format!("{}-{}", nine.hole_number(bet.start), nine.last_hole()),
        results,
        score,
        outcome,
        points: outcome.points(),
    }
}

/// The end-of-nine auto-press: played on the final hole when the last
/// discovered bet stands exactly one up or down through eight.
fn auto_press(holes: &[HoleOutcome], last: &Bet, nine: Nine) -> Option<BetResult> {
    let final_hole = holes[AUTO_PRESS_INDEX];
    if !final_hole.is_played() || last.start == AUTO_PRESS_INDEX {
        return None;
    }

    let thru_eight: i32 = played_from(holes, last.start)
        .take_while(|(idx, _)| *idx < AUTO_PRESS_INDEX)
        .map(|(_, h)| h.value())
        .sum();
    if thru_eight.abs() != 1 {
        return None;
    }

    let score = final_hole.value();
    let outcome = BetOutcome::from_score(score);
    debug!(
        nine = %nine,
        last_bet = %last.label,
        thru_eight,
        outcome = %outcome,
        "Auto-press on final hole"
    );

    Some(BetResult {
        label: BetLabel::AutoPress,
        start: AUTO_PRESS_INDEX,
        holes: nine.last_hole().to_string(),
        results: final_hole.glyph().to_string(),
        score,
        outcome,
        points: outcome.points(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Settlement — turns a scorecard into points and money.
//!
//! Scores both nines, adds the overall bet once the round is complete,
//! and multiplies every point total by the bet unit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::scorecard::Scorecard;
use crate::scoring::{overall_if_complete, score_nine, NineResult};
use crate::types::{NassauError, Nine};

// ---------------------------------------------------------------------------
// Match report
// ---------------------------------------------------------------------------

/// Points and money for the whole match as it currently stands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub bet_unit: Decimal,
    pub front: NineResult,
    pub back: NineResult,
    pub front_money: Decimal,
    pub back_money: Decimal,
    /// Overall eighteen point; `None` until all 18 holes are recorded.
    pub overall: Option<i32>,
    pub overall_money: Option<Decimal>,
    /// Sum of the three bets; `None` until all 18 holes are recorded.
    pub total_points: Option<i32>,
    pub total_money: Option<Decimal>,
    pub holes_played: usize,
    pub settled_at: DateTime<Utc>,
}

impl MatchReport {
    pub fn nine(&self, nine: Nine) -> &NineResult {
        match nine {
            Nine::Front => &self.front,
            Nine::Back => &self.back,
        }
    }

    pub fn nine_money(&self, nine: Nine) -> Decimal {
        match nine {
            Nine::Front => self.front_money,
            Nine::Back => self.back_money,
        }
    }

    pub fn is_final(&self) -> bool {
        self.total_points.is_some()
    }
}

/// Money owed for a point total at the given bet unit.
pub fn money(points: i32, bet_unit: Decimal) -> Decimal {
    Decimal::from(points) * bet_unit
}

// ---------------------------------------------------------------------------
// Settlement
// ---------------------------------------------------------------------------

/// Settle the card at `bet_unit` per point.
pub fn settle(card: &Scorecard, bet_unit: Decimal) -> Result<MatchReport, NassauError> {
    if bet_unit <= Decimal::ZERO {
        return Err(NassauError::InvalidBetUnit(bet_unit));
    }

    let front_holes = card.nine(Nine::Front);
    let back_holes = card.nine(Nine::Back);

    let front = score_nine(front_holes, Nine::Front)?;
    let back = score_nine(back_holes, Nine::Back)?;
    let overall = overall_if_complete(front_holes, back_holes);
    let total_points = overall.map(|o| front.points + back.points + o);

    let report = MatchReport {
        bet_unit,
        front_money: money(front.points, bet_unit),
        back_money: money(back.points, bet_unit),
        overall,
        overall_money: overall.map(|o| money(o, bet_unit)),
        total_points,
        total_money: total_points.map(|t| money(t, bet_unit)),
        holes_played: card.holes_played(),
        settled_at: Utc::now(),
        front,
        back,
    };

    info!(
        holes_played = report.holes_played,
        front = report.front.points,
        back = report.back.points,
        overall = ?report.overall,
        total = ?report.total_points,
        money = ?report.total_money,
        "Match settled"
    );

    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

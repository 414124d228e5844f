//! Plain-text rendering of a settled match.

use rust_decimal::Decimal;
use std::fmt::Write;

use crate::settlement::MatchReport;
use crate::types::Nine;

/// Format money with an explicit sign, e.g. `+$15.00` / `-$2.50`.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let sign = if amount < Decimal::ZERO { "-" } else { "+" };
    format!("{sign}{currency}{:.2}", amount.abs())
}

/// Render the full report. Nines with no holes played are skipped.
pub fn render(report: &MatchReport, currency: &str) -> String {
    let mut out = String::new();

    for nine in Nine::ALL {
        let result = report.nine(*nine);
        if result.is_empty() {
            continue;
        }

        let _ = writeln!(out, "{nine}:");
        let _ = writeln!(out, "  Net holes won/lost: {:+} points", result.holes_won);
        let _ = writeln!(
            out,
            "  {:<11} {:<6} {:<10} {:>5}  {:<7} {:>6}",
            "Bet", "Holes", "Results", "Score", "Outcome", "Points"
        );
        for bet in &result.bets {
            let _ = writeln!(
                out,
                "  {:<11} {:<6} {:<10} {:>5}  {:<7} {:>6}",
                bet.label.to_string(),
                bet.holes,
                bet.results,
                bet.score,
                bet.outcome.to_string(),
                format!("{:+}", bet.points),
            );
        }
        let _ = writeln!(out, "  Bet points: {:+} points", result.bet_points);
        let _ = writeln!(
            out,
            "  {nine} Total: {} points = {}",
            result.points,
            format_money(report.nine_money(*nine), currency)
        );
        out.push('\n');
    }

    if let (Some(overall), Some(money)) = (report.overall, report.overall_money) {
        let _ = writeln!(
            out,
            "Overall 18: {overall} point = {}",
            format_money(money, currency)
        );
    }

    if let (Some(points), Some(money)) = (report.total_points, report.total_money) {
        let _ = writeln!(
            out,
            "TOTAL: {points:+} points = {}",
            format_money(money, currency)
        );
    }

    out
}

//! Scoring engine — per-nine press scoring and the overall bet.

pub mod nine;
pub mod overall;

pub use nine::{score_nine, validate_nine, Bet, BetResult, NineResult};
pub use overall::{overall_if_complete, score_overall, HoleTally};

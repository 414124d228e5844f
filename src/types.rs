//! Shared types for the Nassau scorer.
//!
//! These types form the data model used across all modules: hole
//! outcomes, bet labels and outcomes, and the domain error enum. They
//! carry no scoring logic beyond their own signed values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of holes in one nine.
pub const HOLES_PER_NINE: usize = 9;

/// Number of holes in a full round.
pub const HOLES_PER_ROUND: usize = 18;

// ---------------------------------------------------------------------------
// Hole outcome
// ---------------------------------------------------------------------------

/// Result of a single hole from our side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HoleOutcome {
    Win,
    Loss,
    Tie,
    #[default]
    Unplayed,
}

impl HoleOutcome {
    /// Signed contribution to a running score.
    pub fn value(self) -> i32 {
        match self {
            HoleOutcome::Win => 1,
            HoleOutcome::Loss => -1,
            HoleOutcome::Tie | HoleOutcome::Unplayed => 0,
        }
    }

    pub fn is_played(self) -> bool {
        self != HoleOutcome::Unplayed
    }

    /// Single-character glyph used in result strings.
    pub fn glyph(self) -> char {
        match self {
            HoleOutcome::Win => '+',
            HoleOutcome::Loss => '-',
            HoleOutcome::Tie => '0',
            HoleOutcome::Unplayed => '_',
        }
    }

    /// Parse a scorecard character (case-insensitive for letters).
    pub fn from_char(c: char) -> Result<Self, NassauError> {
        match c.to_ascii_uppercase() {
            'W' | '+' => Ok(HoleOutcome::Win),
            'L' | '-' => Ok(HoleOutcome::Loss),
            'T' | '0' => Ok(HoleOutcome::Tie),
            '_' | '.' => Ok(HoleOutcome::Unplayed),
            _ => Err(NassauError::InvalidOutcome(c)),
        }
    }
}

impl fmt::Display for HoleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

// ---------------------------------------------------------------------------
// Nine
// ---------------------------------------------------------------------------

/// Which half of the round a set of holes belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nine {
    Front,
    Back,
}

impl Nine {
    pub const ALL: &'static [Nine] = &[Nine::Front, Nine::Back];

    /// Number of holes played before this nine starts.
    pub fn hole_offset(self) -> usize {
        match self {
            Nine::Front => 0,
            Nine::Back => HOLES_PER_NINE,
        }
    }

    /// 1-based hole number for an index within this nine.
    pub fn hole_number(self, index: usize) -> usize {
        index + 1 + self.hole_offset()
    }

    /// Last hole number of this nine (9 or 18).
    pub fn last_hole(self) -> usize {
        self.hole_number(HOLES_PER_NINE - 1)
    }

    /// The nine a 1-based hole number falls in.
    pub fn of_hole(hole: usize) -> Result<Self, NassauError> {
        match hole {
            1..=9 => Ok(Nine::Front),
            10..=18 => Ok(Nine::Back),
            _ => Err(NassauError::HoleOutOfRange(hole)),
        }
    }
}

impl fmt::Display for Nine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nine::Front => write!(f, "Front 9"),
            Nine::Back => write!(f, "Back 9"),
        }
    }
}

// ---------------------------------------------------------------------------
// Bets
// ---------------------------------------------------------------------------

/// Name of a bet within a nine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetLabel {
    Original,
    /// Press number, counted from 1 in creation order.
    Press(u32),
    AutoPress,
}

impl BetLabel {
    pub fn is_press(self) -> bool {
        matches!(self, BetLabel::Press(_))
    }
}

impl fmt::Display for BetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetLabel::Original => write!(f, "Original"),
            BetLabel::Press(n) => write!(f, "Press #{n}"),
            BetLabel::AutoPress => write!(f, "Auto-press"),
        }
    }
}

/// Settled result of a single bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetOutcome {
    Won,
    Lost,
    Tied,
}

impl BetOutcome {
    /// Classify a signed score.
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => BetOutcome::Won,
            -1 => BetOutcome::Lost,
            _ => BetOutcome::Tied,
        }
    }

    pub fn points(self) -> i32 {
        match self {
            BetOutcome::Won => 1,
            BetOutcome::Lost => -1,
            BetOutcome::Tied => 0,
        }
    }
}

impl fmt::Display for BetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetOutcome::Won => write!(f, "Won"),
            BetOutcome::Lost => write!(f, "Lost"),
            BetOutcome::Tied => write!(f, "Tied"),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for the scorer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NassauError {
    #[error("Invalid nine: expected 9 holes, got {0}")]
    WrongLength(usize),

    #[error("Invalid nine: hole index {played} is played after unplayed hole index {unplayed}")]
    GapInNine { unplayed: usize, played: usize },

    #[error("Invalid hole outcome: {0:?}")]
    InvalidOutcome(char),

    #[error("Too many holes for one nine: {0}")]
    TooManyHoles(usize),

    #[error("Hole out of range: {0} (expected 1-18)")]
    HoleOutOfRange(usize),

    #[error("Hole {hole} recorded before hole {missing}")]
    OutOfOrder { hole: usize, missing: usize },

    #[error("Bet unit must be positive, got {0}")]
    InvalidBetUnit(rust_decimal::Decimal),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Scorecard — the caller-owned hole buffer.
//!
//! Holds the two nines and a current-hole cursor. Holes are recorded one
//! at a time and must be entered in order within each nine, so the
//! buffer always satisfies the scorer's trailing-unplayed invariant.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::types::{HoleOutcome, NassauError, Nine, HOLES_PER_NINE, HOLES_PER_ROUND};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    front: [HoleOutcome; HOLES_PER_NINE],
    back: [HoleOutcome; HOLES_PER_NINE],
    /// 1-based hole the next `record_current` writes to.
    current_hole: usize,
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorecard {
    pub fn new() -> Self {
        Self {
            front: [HoleOutcome::Unplayed; HOLES_PER_NINE],
            back: [HoleOutcome::Unplayed; HOLES_PER_NINE],
            current_hole: 1,
        }
    }

    /// Build a card from two outcome strings, one character per hole.
    ///
    /// Each string may be shorter than nine; missing holes are unplayed.
    pub fn from_strs(front: &str, back: &str) -> Result<Self, NassauError> {
        let mut card = Self::new();
        for (nine, text) in [(Nine::Front, front), (Nine::Back, back)] {
            let count = text.chars().count();
            if count > HOLES_PER_NINE {
                return Err(NassauError::TooManyHoles(count));
            }
            for (idx, c) in text.chars().enumerate() {
                let outcome = HoleOutcome::from_char(c)?;
                if outcome.is_played() {
                    card.record(nine.hole_number(idx), outcome)?;
                }
            }
        }
        Ok(card)
    }

    pub fn current_hole(&self) -> usize {
        self.current_hole
    }

    pub fn nine(&self, nine: Nine) -> &[HoleOutcome; HOLES_PER_NINE] {
        match nine {
            Nine::Front => &self.front,
            Nine::Back => &self.back,
        }
    }

    fn nine_mut(&mut self, nine: Nine) -> &mut [HoleOutcome; HOLES_PER_NINE] {
        match nine {
            Nine::Front => &mut self.front,
            Nine::Back => &mut self.back,
        }
    }

    /// Outcome of a 1-based hole.
    pub fn outcome(&self, hole: usize) -> Result<HoleOutcome, NassauError> {
        let nine = Nine::of_hole(hole)?;
        Ok(self.nine(nine)[hole - 1 - nine.hole_offset()])
    }

    /// Record the outcome of a 1-based hole and move the cursor past it.
    ///
    /// Re-recording an already played hole is allowed. Recording a hole
    /// while an earlier hole of the same nine is still unplayed is not.
    pub fn record(&mut self, hole: usize, outcome: HoleOutcome) -> Result<(), NassauError> {
        let nine = Nine::of_hole(hole)?;
        let idx = hole - 1 - nine.hole_offset();
        let holes = self.nine_mut(nine);

        if outcome.is_played() {
            if let Some(missing) = holes[..idx].iter().position(|h| !h.is_played()) {
                return Err(NassauError::OutOfOrder {
                    hole,
                    missing: nine.hole_number(missing),
                });
            }
        } else if holes[idx + 1..].iter().any(|h| h.is_played()) {
            // Clearing a hole in the middle of a nine would leave a gap.
            return Err(NassauError::OutOfOrder {
                hole: nine.hole_number(idx + 1),
                missing: hole,
            });
        }

        holes[idx] = outcome;
        self.current_hole = (hole + 1).min(HOLES_PER_ROUND);
        debug!(hole, outcome = %outcome, current_hole = self.current_hole, "Hole recorded");
        Ok(())
    }

    /// Record at the cursor.
    pub fn record_current(&mut self, outcome: HoleOutcome) -> Result<(), NassauError> {
        self.record(self.current_hole, outcome)
    }

    pub fn next_hole(&mut self) {
        if self.current_hole < HOLES_PER_ROUND {
            self.current_hole += 1;
        }
    }

    pub fn previous_hole(&mut self) {
        if self.current_hole > 1 {
            self.current_hole -= 1;
        }
    }

    pub fn holes_played(&self) -> usize {
        self.front
            .iter()
            .chain(&self.back)
            .filter(|h| h.is_played())
            .count()
    }

    /// All eighteen holes recorded.
    pub fn is_complete(&self) -> bool {
        self.holes_played() == HOLES_PER_ROUND
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl fmt::Display for Scorecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for nine in Nine::ALL {
            write!(f, "{:<8}", nine.to_string())?;
            for (idx, hole) in self.nine(*nine).iter().enumerate() {
                write!(f, " {:>2}:{}", nine.hole_number(idx), hole)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

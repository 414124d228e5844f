//! Overall eighteen-hole bet.
//!
//! A straight count of holes won against holes lost across the round.
//! Presses play no part here.

use serde::{Deserialize, Serialize};

use crate::types::HoleOutcome;

/// Win/loss/tie counts over a run of holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoleTally {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl HoleTally {
    pub fn from_holes<'a>(holes: impl IntoIterator<Item = &'a HoleOutcome>) -> Self {
        let mut tally = Self::default();
        for hole in holes {
            match hole {
                HoleOutcome::Win => tally.wins += 1,
                HoleOutcome::Loss => tally.losses += 1,
                HoleOutcome::Tie => tally.ties += 1,
                HoleOutcome::Unplayed => {}
            }
        }
        tally
    }

    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// +1, -1 or 0 depending on who won more holes.
    pub fn point(&self) -> i32 {
        match self.wins.cmp(&self.losses) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
        }
    }
}

/// Overall point for the round: front nine followed by back nine.
pub fn score_overall(front: &[HoleOutcome], back: &[HoleOutcome]) -> i32 {
    HoleTally::from_holes(front.iter().chain(back)).point()
}

/// Overall point, but only once every hole of both nines is played.
pub fn overall_if_complete(front: &[HoleOutcome], back: &[HoleOutcome]) -> Option<i32> {
    let complete = front.iter().chain(back).all(|h| h.is_played());
    complete.then(|| score_overall(front, back))
}

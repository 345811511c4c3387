use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::errors::ScoreboardError;

/// Step sizes a score action can apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ScoreIncrement {
    #[default]
    One,
    Two,
    Five,
    Ten,
}

impl ScoreIncrement {
    pub fn value(self) -> u32 {
        match self {
            ScoreIncrement::One => 1,
            ScoreIncrement::Two => 2,
            ScoreIncrement::Five => 5,
            ScoreIncrement::Ten => 10,
        }
    }

    /// Every allowed step, smallest first
    pub fn allowed() -> Vec<u32> {
        Self::iter().map(Self::value).collect()
    }
}

impl TryFrom<u32> for ScoreIncrement {
    type Error = ScoreboardError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|step| step.value() == value)
            .ok_or(ScoreboardError::InvalidIncrement(value))
    }
}

impl From<ScoreIncrement> for u32 {
    fn from(step: ScoreIncrement) -> Self {
        step.value()
    }
}

/// Match-wide counters that outlive individual score changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub round: u32,
    pub score_increment: ScoreIncrement,
    /// Highest score any player has reached this match, even if it has since dropped
    pub peak_score: i64,
    /// Sum of every delta applied this match
    pub total_points: i64,
    /// Number of score actions applied this match
    pub total_changes: u64,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            round: 1,
            score_increment: ScoreIncrement::default(),
            peak_score: 0,
            total_points: 0,
            total_changes: 0,
        }
    }
}

impl MatchState {
    /// Signed delta for one score action at the current step
    pub fn delta(&self, is_positive: bool) -> i64 {
        let magnitude = i64::from(self.score_increment.value());
        if is_positive {
            magnitude
        } else {
            -magnitude
        }
    }

    pub(crate) fn record(&mut self, delta: i64, resulting_score: i64) {
        self.total_points += delta;
        self.total_changes += 1;
        self.peak_score = self.peak_score.max(resulting_score);
    }

    pub(crate) fn next_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    /// Back to round 1 with cleared counters; the chosen step is kept
    pub(crate) fn reset(&mut self) {
        *self = Self {
            score_increment: self.score_increment,
            ..Self::default()
        };
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable player identifier, assigned in creation order and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PlayerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A player on the scoreboard together with their running counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
    pub color: String,
    /// Positive deltas in a row since the last negative one
    pub consecutive_positive: u32,
    pub total_positive_actions: u32,
    pub total_actions: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: String, color: &str) -> Self {
        Self {
            id,
            name,
            score: 0,
            color: color.to_string(),
            consecutive_positive: 0,
            total_positive_actions: 0,
            total_actions: 0,
        }
    }

    /// Applies a signed delta and updates the streak and win-rate counters
    pub(crate) fn record_delta(&mut self, delta: i64) {
        self.score += delta;
        self.total_actions += 1;

        if delta > 0 {
            self.consecutive_positive += 1;
            self.total_positive_actions += 1;
        } else {
            self.consecutive_positive = 0;
        }
    }

    /// Zeroes score and counters, keeping identity and color
    pub(crate) fn reset_progress(&mut self) {
        self.score = 0;
        self.consecutive_positive = 0;
        self.total_positive_actions = 0;
        self.total_actions = 0;
    }

    /// Percentage of actions that were positive, rounded to the nearest integer
    pub fn win_rate(&self) -> u32 {
        if self.total_actions == 0 {
            return 0;
        }
        let positive = u64::from(self.total_positive_actions);
        let total = u64::from(self.total_actions);
        ((200 * positive + total) / (2 * total)) as u32
    }
}

/// A player's position in the score-ordered listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub rank: usize,
    /// Set only when rank 1 is strictly ahead of rank 2
    pub leader: bool,
    #[serde(flatten)]
    pub player: Player,
}

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// One row of the score distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    pub player_id: PlayerId,
    pub name: String,
    pub color: String,
    pub score: i64,
    /// Bar length relative to the largest absolute score, floored at 5%
    pub bar_percent: f64,
}

/// Per-player view behind the analytics panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAnalytics {
    pub player_id: PlayerId,
    pub name: String,
    pub color: String,
    pub rank: usize,
    pub score: i64,
    /// Highest score in the player's recorded history
    pub personal_peak: i64,
    pub win_rate: u32,
    /// Resulting scores from the player's history, oldest first
    pub timeline: Vec<i64>,
}

/// Headline numbers for the stats strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total: i64,
    pub peak: i64,
    pub average: i64,
    pub streak_count: usize,
    pub player_count: usize,
}

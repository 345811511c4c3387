use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::player::{Player, PlayerId};

/// A single score change, with the player's name and color captured at the
/// time it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub player_id: PlayerId,
    pub player_name: String,
    pub color: String,
    pub delta: i64,
    pub resulting_score: i64,
    pub round: u32,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEvent {
    /// Zero-delta event marking where a player's score series starts
    pub fn origin(player: &Player, round: u32) -> Self {
        Self::snapshot(player, 0, round)
    }

    /// Event for a delta that has already been applied to `player`
    pub fn scored(player: &Player, delta: i64, round: u32) -> Self {
        Self::snapshot(player, delta, round)
    }

    pub fn is_origin(&self) -> bool {
        self.delta == 0
    }

    fn snapshot(player: &Player, delta: i64, round: u32) -> Self {
        Self {
            player_id: player.id,
            player_name: player.name.clone(),
            color: player.color.clone(),
            delta,
            resulting_score: player.score,
            round,
            timestamp: Utc::now(),
        }
    }
}

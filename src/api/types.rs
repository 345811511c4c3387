use serde::{Deserialize, Serialize};

use crate::clock::MatchClock;
use crate::scoring::{MatchState, ScoreIncrement};
use crate::stats::StatsSummary;

/// Request payload for adding a player
#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
}

/// Request payload for a plus or minus score action
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub positive: bool,
}

/// Request payload for changing the step size
#[derive(Debug, Deserialize)]
pub struct IncrementRequest {
    pub value: u32,
}

/// Match state plus the steps the UI may offer
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub state: MatchState,
    pub allowed_increments: Vec<u32>,
}

impl From<&MatchState> for MatchResponse {
    fn from(state: &MatchState) -> Self {
        Self {
            state: state.clone(),
            allowed_increments: ScoreIncrement::allowed(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClockResponse {
    pub elapsed_seconds: u64,
    pub display: String,
}

impl From<&MatchClock> for ClockResponse {
    fn from(clock: &MatchClock) -> Self {
        let elapsed_seconds = clock.elapsed_seconds();
        Self {
            elapsed_seconds,
            display: crate::clock::format_elapsed(elapsed_seconds),
        }
    }
}

/// Everything the stats strip shows in one payload
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub stats: StatsSummary,
    pub round: u32,
    pub score_increment: u32,
    pub total_points: i64,
    pub total_changes: u64,
    pub clock: ClockResponse,
}

use super::models::{DistributionRow, PlayerAnalytics, StatsSummary};
use super::{MIN_BAR_PERCENT, STREAK_THRESHOLD};
use crate::history::HistoryLedger;
use crate::player::{PlayerId, PlayerRegistry};
use crate::scoring::{MatchState, ScoreboardError};

/// Read-only statistics over the current scoreboard state.
///
/// Nothing is cached: every figure is derived from the registry, match state
/// and ledger at the moment it is asked for.
pub struct Statistics<'a> {
    players: &'a PlayerRegistry,
    match_state: &'a MatchState,
    ledger: &'a HistoryLedger,
}

impl<'a> Statistics<'a> {
    pub fn new(
        players: &'a PlayerRegistry,
        match_state: &'a MatchState,
        ledger: &'a HistoryLedger,
    ) -> Self {
        Self {
            players,
            match_state,
            ledger,
        }
    }

    /// Sum of current scores
    pub fn total(&self) -> i64 {
        self.players.iter().map(|p| p.score).sum()
    }

    /// The match high-water mark, or the best current score if that is higher
    pub fn peak(&self) -> i64 {
        let top = self.players.iter().map(|p| p.score).max().unwrap_or(0);
        self.match_state.peak_score.max(top)
    }

    /// Mean score rounded to the nearest integer, halves away from zero
    pub fn average(&self) -> i64 {
        if self.players.is_empty() {
            return 0;
        }
        round_div(self.total(), self.players.len() as i64)
    }

    pub fn streak_count(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.consecutive_positive >= STREAK_THRESHOLD)
            .count()
    }

    /// `None` if the player is not registered
    pub fn win_rate(&self, id: PlayerId) -> Option<u32> {
        self.players.get(id).map(|p| p.win_rate())
    }

    /// Players by score, highest first, each with a normalized bar length
    pub fn distribution(&self) -> Vec<DistributionRow> {
        let max_abs = self
            .players
            .iter()
            .map(|p| p.score.unsigned_abs())
            .max()
            .unwrap_or(0)
            .max(1);

        self.players
            .sorted_by_score()
            .into_iter()
            .map(|p| {
                let percent = p.score.unsigned_abs() as f64 / max_abs as f64 * 100.0;
                DistributionRow {
                    player_id: p.id,
                    name: p.name.clone(),
                    color: p.color.clone(),
                    score: p.score,
                    bar_percent: percent.max(MIN_BAR_PERCENT),
                }
            })
            .collect()
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            total: self.total(),
            peak: self.peak(),
            average: self.average(),
            streak_count: self.streak_count(),
            player_count: self.players.len(),
        }
    }

    pub fn player_analytics(&self, id: PlayerId) -> Result<PlayerAnalytics, ScoreboardError> {
        let player = self
            .players
            .get(id)
            .ok_or(ScoreboardError::PlayerNotFound(id))?;

        let rank = self
            .players
            .sorted_by_score()
            .iter()
            .position(|p| p.id == id)
            .map(|index| index + 1)
            .ok_or(ScoreboardError::PlayerNotFound(id))?;

        let timeline: Vec<i64> = self
            .ledger
            .for_player(id)
            .iter()
            .map(|event| event.resulting_score)
            .collect();
        let personal_peak = timeline.iter().copied().max().unwrap_or(0);

        Ok(PlayerAnalytics {
            player_id: player.id,
            name: player.name.clone(),
            color: player.color.clone(),
            rank,
            score: player.score,
            personal_peak,
            win_rate: player.win_rate(),
            timeline,
        })
    }
}

/// Integer division rounding to nearest, halves away from zero.
/// `denominator` must be positive.
fn round_div(numerator: i64, denominator: i64) -> i64 {
    let numerator = i128::from(numerator);
    let denominator = i128::from(denominator);
    let magnitude = (2 * numerator.abs() + denominator) / (2 * denominator);
    let rounded = if numerator < 0 { -magnitude } else { magnitude };
    rounded as i64
}

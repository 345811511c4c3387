use tracing::{debug, info};

use super::errors::ScoreboardError;
use super::match_state::{MatchState, ScoreIncrement};
use crate::history::{HistoryEvent, HistoryLedger};
use crate::player::{Player, PlayerId, PlayerRegistry, RankedPlayer};
use crate::stats::{PlayerAnalytics, Statistics};

/// The scoring model for one match.
///
/// Commands mutate and return what changed so the caller can decide what to
/// animate; queries never mutate. The model never calls back into any view.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    players: PlayerRegistry,
    match_state: MatchState,
    ledger: HistoryLedger,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a player and records their zero-score origin event
    pub fn add_player(&mut self, name: &str) -> Result<Player, ScoreboardError> {
        let player = self.players.add(name)?.clone();
        self.ledger
            .record(HistoryEvent::origin(&player, self.match_state.round));

        info!(
            player_id = %player.id,
            name = %player.name,
            player_count = self.players.len(),
            "Player added"
        );
        Ok(player)
    }

    /// Removes a player if present. Their history events are kept.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let removed = self.players.remove(id);
        match &removed {
            Some(player) => info!(player_id = %id, name = %player.name, "Player removed"),
            None => debug!(player_id = %id, "Remove requested for unknown player"),
        }
        removed
    }

    /// Applies one score action of the current step size
    pub fn apply_delta(
        &mut self,
        id: PlayerId,
        is_positive: bool,
    ) -> Result<HistoryEvent, ScoreboardError> {
        let delta = self.match_state.delta(is_positive);
        let round = self.match_state.round;

        let player = self
            .players
            .get_mut(id)
            .ok_or(ScoreboardError::PlayerNotFound(id))?;
        player.record_delta(delta);
        let event = HistoryEvent::scored(player, delta, round);

        self.match_state.record(delta, event.resulting_score);
        self.ledger.record(event.clone());

        debug!(
            player_id = %id,
            delta,
            score = event.resulting_score,
            round,
            "Score applied"
        );
        Ok(event)
    }

    pub fn advance_round(&mut self) -> u32 {
        let round = self.match_state.next_round();
        info!(round, "Round advanced");
        round
    }

    /// Changes the step size. Values outside the allowed set leave it unchanged.
    pub fn set_increment(&mut self, value: u32) -> Result<ScoreIncrement, ScoreboardError> {
        let step = ScoreIncrement::try_from(value)?;
        self.match_state.score_increment = step;
        debug!(increment = value, "Score increment changed");
        Ok(step)
    }

    /// Zeroes every player, clears history and restarts at round 1.
    /// Players stay registered.
    pub fn reset_match(&mut self) {
        self.players.reset_all();
        self.match_state.reset();
        self.ledger.clear();
        info!(player_count = self.players.len(), "Match reset");
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn list_players(&self) -> Vec<RankedPlayer> {
        self.players.ranked()
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// The whole ledger, newest first
    pub fn history(&self) -> &HistoryLedger {
        &self.ledger
    }

    /// One player's score series, oldest first
    pub fn history_for(&self, id: PlayerId) -> Vec<HistoryEvent> {
        self.ledger.for_player(id)
    }

    pub fn statistics(&self) -> Statistics<'_> {
        Statistics::new(&self.players, &self.match_state, &self.ledger)
    }

    pub fn player_analytics(&self, id: PlayerId) -> Result<PlayerAnalytics, ScoreboardError> {
        self.statistics().player_analytics(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::LEDGER_CAPACITY;

    fn scoreboard_with(names: &[&str]) -> (Scoreboard, Vec<PlayerId>) {
        let mut scoreboard = Scoreboard::new();
        let ids = names
            .iter()
            .map(|name| scoreboard.add_player(name).unwrap().id)
            .collect();
        (scoreboard, ids)
    }

    #[test]
    fn add_player_records_origin_event() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.advance_round();

        let player = scoreboard.add_player("Alice").unwrap();

        let history = scoreboard.history_for(player.id);
        assert_eq!(history.len(), 1);
        assert!(history[0].is_origin());
        assert_eq!(history[0].resulting_score, 0);
        assert_eq!(history[0].round, 2);
    }

    #[test]
    fn add_blank_player_leaves_everything_unchanged() {
        let (mut scoreboard, _) = scoreboard_with(&["Alice"]);

        assert_eq!(scoreboard.add_player("   "), Err(ScoreboardError::EmptyName));
        assert_eq!(scoreboard.players().len(), 1);
        assert_eq!(scoreboard.history().len(), 1);
    }

    #[test]
    fn apply_delta_updates_player_match_and_ledger() {
        let (mut scoreboard, ids) = scoreboard_with(&["Alice"]);
        scoreboard.set_increment(5).unwrap();

        let event = scoreboard.apply_delta(ids[0], true).unwrap();
        assert_eq!(event.delta, 5);
        assert_eq!(event.resulting_score, 5);
        assert_eq!(event.player_name, "Alice");

        let event = scoreboard.apply_delta(ids[0], false).unwrap();
        assert_eq!(event.delta, -5);
        assert_eq!(event.resulting_score, 0);

        let player = scoreboard.player(ids[0]).unwrap();
        assert_eq!(player.score, 0);
        assert_eq!(player.total_actions, 2);
        assert_eq!(player.total_positive_actions, 1);
        assert_eq!(player.consecutive_positive, 0);

        let state = scoreboard.match_state();
        assert_eq!(state.peak_score, 5);
        assert_eq!(state.total_points, 0);
        assert_eq!(state.total_changes, 2);

        // origin + two deltas, newest first
        let deltas: Vec<i64> = scoreboard.history().iter().map(|e| e.delta).collect();
        assert_eq!(deltas, vec![-5, 5, 0]);
    }

    #[test]
    fn apply_delta_to_unknown_player_fails() {
        let (mut scoreboard, _) = scoreboard_with(&["Alice"]);

        let result = scoreboard.apply_delta(PlayerId(99), true);

        assert_eq!(result, Err(ScoreboardError::PlayerNotFound(PlayerId(99))));
        assert_eq!(scoreboard.match_state().total_changes, 0);
        assert_eq!(scoreboard.history().len(), 1);
    }

    #[test]
    fn events_are_tagged_with_current_round() {
        let (mut scoreboard, ids) = scoreboard_with(&["Alice"]);
        scoreboard.apply_delta(ids[0], true).unwrap();
        scoreboard.advance_round();
        scoreboard.advance_round();
        let event = scoreboard.apply_delta(ids[0], true).unwrap();

        assert_eq!(event.round, 3);
    }

    #[test]
    fn streak_counts_consecutive_positive_deltas() {
        let (mut scoreboard, ids) = scoreboard_with(&["Alice"]);
        for _ in 0..4 {
            scoreboard.apply_delta(ids[0], true).unwrap();
        }
        assert_eq!(scoreboard.player(ids[0]).unwrap().consecutive_positive, 4);
        assert_eq!(scoreboard.statistics().streak_count(), 1);

        scoreboard.apply_delta(ids[0], false).unwrap();
        assert_eq!(scoreboard.player(ids[0]).unwrap().consecutive_positive, 0);
        assert_eq!(scoreboard.statistics().streak_count(), 0);
    }

    #[test]
    fn invalid_increment_is_ignored() {
        let mut scoreboard = Scoreboard::new();
        scoreboard.set_increment(10).unwrap();

        assert_eq!(
            scoreboard.set_increment(3),
            Err(ScoreboardError::InvalidIncrement(3))
        );
        assert_eq!(
            scoreboard.match_state().score_increment,
            ScoreIncrement::Ten
        );
    }

    #[test]
    fn remove_keeps_history_and_ignores_unknown_ids() {
        let (mut scoreboard, ids) = scoreboard_with(&["Alice", "Bob"]);
        scoreboard.apply_delta(ids[0], true).unwrap();

        assert!(scoreboard.remove_player(PlayerId(404)).is_none());
        assert_eq!(scoreboard.players().len(), 2);

        let removed = scoreboard.remove_player(ids[0]).unwrap();
        assert_eq!(removed.name, "Alice");
        assert_eq!(scoreboard.players().len(), 1);
        assert_eq!(scoreboard.history_for(ids[0]).len(), 2);
    }

    #[test]
    fn peak_survives_score_drop_until_reset() {
        let (mut scoreboard, ids) = scoreboard_with(&["Alice"]);
        scoreboard.set_increment(10).unwrap();
        scoreboard.apply_delta(ids[0], true).unwrap();
        scoreboard.apply_delta(ids[0], false).unwrap();
        scoreboard.apply_delta(ids[0], false).unwrap();

        assert_eq!(scoreboard.statistics().peak(), 10);

        scoreboard.reset_match();
        assert_eq!(scoreboard.statistics().peak(), 0);
    }

    #[test]
    fn reset_match_keeps_players() {
        let (mut scoreboard, ids) = scoreboard_with(&["Alice", "Bob"]);
        scoreboard.set_increment(2).unwrap();
        scoreboard.apply_delta(ids[0], true).unwrap();
        scoreboard.apply_delta(ids[1], false).unwrap();
        scoreboard.advance_round();

        scoreboard.reset_match();

        let listed: Vec<PlayerId> = scoreboard.list_players().iter().map(|r| r.player.id).collect();
        assert_eq!(listed, ids);
        assert!(scoreboard.players().iter().all(|p| p.score == 0
            && p.consecutive_positive == 0
            && p.total_actions == 0
            && p.total_positive_actions == 0));
        assert!(scoreboard.history().is_empty());

        let state = scoreboard.match_state();
        assert_eq!(state.round, 1);
        assert_eq!(state.peak_score, 0);
        assert_eq!(state.total_points, 0);
        assert_eq!(state.total_changes, 0);
        assert_eq!(state.score_increment, ScoreIncrement::Two);
    }

    #[test]
    fn ledger_stays_bounded_under_many_actions() {
        let (mut scoreboard, ids) = scoreboard_with(&["Alice"]);
        for _ in 0..(LEDGER_CAPACITY + 10) {
            scoreboard.apply_delta(ids[0], true).unwrap();
        }

        assert_eq!(scoreboard.history().len(), LEDGER_CAPACITY);
        // The origin event has been evicted
        assert!(scoreboard.history().iter().all(|e| !e.is_origin()));
        assert_eq!(
            scoreboard.history().iter().next().unwrap().resulting_score,
            (LEDGER_CAPACITY + 10) as i64
        );
    }
}

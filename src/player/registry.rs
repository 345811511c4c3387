use tracing::debug;

use super::models::{Player, PlayerId, RankedPlayer};
use super::palette::Palette;
use crate::scoring::ScoreboardError;

/// Ordered collection of players, kept in insertion order
#[derive(Debug, Clone)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    next_id: u64,
    palette: Palette,
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            next_id: 1,
            palette: Palette::new(),
        }
    }

    /// Creates a player from a display name.
    ///
    /// The name is trimmed; a name that is empty after trimming is rejected
    /// and the registry is left untouched.
    pub fn add(&mut self, name: &str) -> Result<&Player, ScoreboardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoreboardError::EmptyName);
        }

        let id = PlayerId(self.next_id);
        self.next_id += 1;
        let color = self.palette.next_color();

        debug!(player_id = %id, name = %name, color = %color, "Registering player");

        self.players.push(Player::new(id, name.to_string(), color));
        Ok(&self.players[self.players.len() - 1])
    }

    /// Removes a player, returning it if it was registered
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(index))
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Players in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players sorted by score, highest first.
    ///
    /// The sort is stable, so equal scores keep insertion order.
    pub fn sorted_by_score(&self) -> Vec<&Player> {
        let mut sorted: Vec<&Player> = self.players.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
    }

    /// Score-ordered listing with ranks 1..N and the leader flag
    pub fn ranked(&self) -> Vec<RankedPlayer> {
        let sorted = self.sorted_by_score();

        let has_leader = match sorted.as_slice() {
            [first, second, ..] => first.score > second.score,
            _ => false,
        };

        sorted
            .into_iter()
            .enumerate()
            .map(|(index, player)| RankedPlayer {
                rank: index + 1,
                leader: index == 0 && has_leader,
                player: player.clone(),
            })
            .collect()
    }

    /// Zeroes every player's score and counters without removing anyone
    pub(crate) fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset_progress();
        }
    }
}

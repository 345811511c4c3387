//! Test assertion helpers - fluent API for verifying player state
#![allow(dead_code)] // Test utilities may not all be used in every test

use arenascore::{Player, PlayerId, Scoreboard};

pub struct PlayerAssertion<'a> {
    player: &'a Player,
}

impl<'a> PlayerAssertion<'a> {
    pub fn for_player(scoreboard: &'a Scoreboard, id: PlayerId) -> Self {
        let player = scoreboard
            .player(id)
            .unwrap_or_else(|| panic!("player {} should be registered", id));
        Self { player }
    }

    pub fn has_score(self, expected: i64) -> Self {
        assert_eq!(
            self.player.score, expected,
            "{} has the wrong score",
            self.player.name
        );
        self
    }

    pub fn has_streak(self, expected: u32) -> Self {
        assert_eq!(
            self.player.consecutive_positive, expected,
            "{} has the wrong streak",
            self.player.name
        );
        self
    }

    pub fn has_actions(self, positive: u32, total: u32) -> Self {
        assert_eq!(
            (self.player.total_positive_actions, self.player.total_actions),
            (positive, total),
            "{} has the wrong action counters",
            self.player.name
        );
        self
    }

    pub fn is_cleared(self) -> Self {
        self.has_score(0).has_streak(0).has_actions(0, 0)
    }
}

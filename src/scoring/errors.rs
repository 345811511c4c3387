use thiserror::Error;

use crate::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    #[error("Player name cannot be empty")]
    EmptyName,

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Invalid score increment: {0}")]
    InvalidIncrement(u32),
}

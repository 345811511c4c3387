// Library crate for the Arena Score scoreboard
// This file exposes the public API for the server binary and integration tests

pub mod api;
pub mod clock;
pub mod config;
pub mod history;
pub mod player;
pub mod scoring;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use clock::MatchClock;
pub use config::ServerConfig;
pub use history::{HistoryEvent, HistoryLedger};
pub use player::{Player, PlayerId, RankedPlayer};
pub use scoring::{MatchState, ScoreIncrement, Scoreboard, ScoreboardError};
pub use shared::{AppError, AppState};
pub use stats::Statistics;

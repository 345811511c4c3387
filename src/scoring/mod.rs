// Scoring engine
//
// `Scoreboard` is the owned context object holding the player registry, the
// match state and the history ledger. Every command and query the
// presentation layer needs goes through it.

pub use errors::ScoreboardError;
pub use match_state::{MatchState, ScoreIncrement};
pub use scoreboard::Scoreboard;

mod errors;
mod match_state;
mod scoreboard;

// Match clock
//
// Elapsed-seconds counter ticked by a background task. It is shared by
// handle and never touches the scoreboard, so ticking cannot hold up a
// score action.

pub use match_clock::{format_elapsed, MatchClock};
pub use ticker::{start_clock_task, ClockConfig};

mod match_clock;
mod ticker;

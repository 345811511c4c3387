// Scoring history
//
// Bounded, newest-first log of score changes used for the timeline and the
// per-player score series.

pub use ledger::{HistoryLedger, LEDGER_CAPACITY};
pub use models::HistoryEvent;

mod ledger;
mod models;

pub mod aggregator;
pub mod models;

pub use aggregator::Statistics;
pub use models::*;

/// Positive deltas in a row needed for a player to count as on a streak
pub const STREAK_THRESHOLD: u32 = 3;

/// Smallest bar length, in percent, shown in the score distribution
pub const MIN_BAR_PERCENT: f64 = 5.0;

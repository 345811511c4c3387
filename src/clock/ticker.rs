use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument};

use super::match_clock::MatchClock;

/// Configuration for the clock task
#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// Wall time between ticks; each tick adds one second to the match clock
    pub tick_interval: Duration,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// Runs forever, advancing the match clock once per tick
#[instrument(skip(clock))]
pub async fn start_clock_task(clock: MatchClock, config: ClockConfig) {
    info!(
        tick_interval_ms = config.tick_interval.as_millis() as u64,
        "Starting match clock"
    );

    // First tick one full interval from now, not immediately
    let mut ticker = interval_at(Instant::now() + config.tick_interval, config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);

    loop {
        ticker.tick().await;
        let elapsed = clock.tick();
        if elapsed % 60 == 0 {
            debug!(elapsed = %clock.display(), "Match clock");
        }
    }
}

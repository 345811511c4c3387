use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Cloneable handle to a shared elapsed-seconds counter
#[derive(Debug, Clone, Default)]
pub struct MatchClock {
    seconds: Arc<AtomicU64>,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&self) -> u64 {
        self.seconds.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn reset(&self) {
        self.seconds.store(0, Ordering::Relaxed);
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.seconds.load(Ordering::Relaxed)
    }

    /// Elapsed time as `HH:MM:SS`
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_seconds())
    }
}

/// Formats seconds as `HH:MM:SS`; hours grow past two digits if needed
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

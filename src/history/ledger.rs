use std::collections::VecDeque;

use super::models::HistoryEvent;
use crate::player::PlayerId;

/// Maximum number of events the ledger keeps
pub const LEDGER_CAPACITY: usize = 100;

/// Newest-first event log that evicts its oldest entry once full
#[derive(Debug, Clone)]
pub struct HistoryLedger {
    events: VecDeque<HistoryEvent>,
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(LEDGER_CAPACITY + 1),
        }
    }

    /// Prepends an event; order comes from insertion, not from timestamps
    pub fn record(&mut self, event: HistoryEvent) {
        self.events.push_front(event);
        if self.events.len() > LEDGER_CAPACITY {
            self.events.pop_back();
        }
    }

    /// A player's events from oldest to newest
    pub fn for_player(&self, id: PlayerId) -> Vec<HistoryEvent> {
        self.events
            .iter()
            .rev()
            .filter(|event| event.player_id == id)
            .cloned()
            .collect()
    }

    /// All events, newest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

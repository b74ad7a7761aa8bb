//! Append-only simulation history

use serde::{Deserialize, Serialize};

use crate::core::types::Tick;
use crate::simulation::HormoneState;

/// One recorded tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub tick: Tick,
    pub state: HormoneState,
}

/// Ordered `(tick, state)` pairs, always starting at tick 0 with the initial state.
///
/// Ticks are assigned on push and are contiguous from 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry {
                tick: 0,
                state: HormoneState::INITIAL,
            }],
        }
    }

    /// Record the state for the next tick
    pub fn push(&mut self, state: HormoneState) -> &HistoryEntry {
        let tick = self.entries.len() as Tick;
        self.entries.push(HistoryEntry { tick, state });
        &self.entries[self.entries.len() - 1]
    }

    pub fn latest(&self) -> &HistoryEntry {
        // Never empty: constructed with tick 0 and only ever appended to.
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a history with no tick-0 entry, which `new` never builds
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything after tick 0
    pub fn reset(&mut self) {
        self.entries.truncate(1);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

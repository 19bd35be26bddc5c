use std::collections::VecDeque;

use crate::card::Card;
use crate::score::{Guess, GuessOutcome};

/// A judged card kept for review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub card: Card,
    pub guess: Guess,
    pub outcome: GuessOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Stable key, unique within one history.
    pub id: u64,
    pub record: GuessRecord,
    /// Trimmed and fading out; removed by [`History::finish_retired`].
    pub retiring: bool,
}

/// Past guesses, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    next_id: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record as the most recent entry and returns its id.
    pub fn push(&mut self, record: GuessRecord) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(HistoryEntry {
            id,
            record,
            retiring: false,
        });
        id
    }

    /// Marks every live entry past the `max_entries` most recent as retiring
    /// and returns their ids, most recent first.
    ///
    /// `max_entries` below one is treated as one. Entries already retiring do
    /// not count toward the window.
    pub fn trim(&mut self, max_entries: usize) -> Vec<u64> {
        let max_entries = max_entries.max(1);

        self.entries
            .iter_mut()
            .filter(|entry| !entry.retiring)
            .skip(max_entries)
            .map(|entry| {
                entry.retiring = true;
                entry.id
            })
            .collect()
    }

    /// Drops the given retiring entries once their fade-out is done.
    /// Returns how many were removed.
    pub fn finish_retired(&mut self, ids: &[u64]) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !(entry.retiring && ids.contains(&entry.id)));
        before - self.entries.len()
    }

    /// All entries, including retiring ones, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

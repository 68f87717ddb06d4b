//! Linear undo/redo log of visited states.
//!
//! The log is an ordered sequence of visit entries plus an integer cursor.
//! New states are always appended at the true tail, never at the cursor, so
//! entries are never removed or overwritten: after an undo, recording a new
//! state leaves the old "future" entries in place — they simply become
//! unreachable because the cursor is re-pinned to the tail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single visit in the history log.
///
/// The timestamp is metadata for diagnostics; cursor movement and
/// deduplication compare only the `state` field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Name of the visited state.
    pub state: String,
    /// When the machine entered this state.
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            entered_at: Utc::now(),
        }
    }
}

/// Ordered visit log with an undo/redo cursor.
///
/// # Example
///
/// ```rust
/// use stateline::core::HistoryLog;
///
/// let mut log = HistoryLog::starting_at("draft");
/// log.record("review");
/// log.record("published");
///
/// assert_eq!(log.path(), vec!["draft", "review", "published"]);
/// assert_eq!(log.undo(), Some("review"));
/// assert_eq!(log.redo(), Some("published"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryLog {
    /// Create a log seeded with a single visit to `state`, cursor on it.
    pub fn starting_at(state: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::now(state)],
            cursor: 0,
        }
    }

    /// Record a visit to `state`.
    ///
    /// Appends a new entry only when `state` differs from the last entry;
    /// re-asserting the tail state is a no-op apart from the cursor refresh.
    /// In both cases the cursor ends on the last entry, so any redo frontier
    /// reachable before this call becomes unreachable afterwards.
    pub fn record(&mut self, state: &str) {
        let at_tail = self
            .entries
            .last()
            .is_some_and(|entry| entry.state == state);
        if !at_tail {
            self.entries.push(HistoryEntry::now(state));
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back one visit.
    ///
    /// Succeeds only when there is more than one entry and the cursor is not
    /// already at the front; returns the state at the new cursor position,
    /// or `None` without moving anything.
    pub fn undo(&mut self) -> Option<&str> {
        if self.entries.len() > 1 && self.cursor > 0 {
            self.cursor -= 1;
            Some(self.entries[self.cursor].state.as_str())
        } else {
            None
        }
    }

    /// Step the cursor forward one visit.
    ///
    /// Succeeds only when there is more than one entry and the cursor is not
    /// already at the tail; returns the state at the new cursor position,
    /// or `None` without moving anything.
    pub fn redo(&mut self) -> Option<&str> {
        if self.entries.len() > 1 && self.cursor < self.entries.len() - 1 {
            self.cursor += 1;
            Some(self.entries[self.cursor].state.as_str())
        } else {
            None
        }
    }

    /// Discard all entries.
    ///
    /// The cursor is deliberately left where it was, pointing past the end
    /// of the now-empty log. This is safe — `undo` and `redo` both require
    /// more than one entry before indexing, so they return `None` — but it
    /// means the cursor/entry pairing cannot be relied on until the next
    /// [`record`](HistoryLog::record) call re-pins the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All recorded visits in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Current cursor position. Only meaningful while the log is non-empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded visits.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no visits (only true right after a clear).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The sequence of visited state names, in visit order.
    pub fn path(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.state.as_str()).collect()
    }

    /// Elapsed time between the first and last recorded visit.
    ///
    /// `None` when the log is empty; zero when it holds a single visit.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.entered_at
            .signed_duration_since(first.entered_at)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_entry_under_the_cursor() {
        let log = HistoryLog::starting_at("idle");

        assert_eq!(log.len(), 1);
        assert_eq!(log.cursor(), 0);
        assert_eq!(log.path(), vec!["idle"]);
    }

    #[test]
    fn record_appends_and_pins_cursor_to_tail() {
        let mut log = HistoryLog::starting_at("a");
        log.record("b");
        log.record("c");

        assert_eq!(log.path(), vec!["a", "b", "c"]);
        assert_eq!(log.cursor(), 2);
    }

    #[test]
    fn recording_the_tail_state_does_not_grow_the_log() {
        let mut log = HistoryLog::starting_at("a");
        log.record("b");
        log.record("b");
        log.record("b");

        assert_eq!(log.len(), 2);
        assert_eq!(log.cursor(), 1);
    }

    #[test]
    fn record_after_undo_appends_at_the_true_tail() {
        let mut log = HistoryLog::starting_at("a");
        log.record("b");
        log.record("c");

        assert_eq!(log.undo(), Some("b"));
        log.record("d");

        // The old "c" entry is kept but no longer reachable via redo.
        assert_eq!(log.path(), vec!["a", "b", "c", "d"]);
        assert_eq!(log.cursor(), 3);
        assert_eq!(log.redo(), None);
    }

    #[test]
    fn undo_stops_at_the_front() {
        let mut log = HistoryLog::starting_at("a");
        log.record("b");

        assert_eq!(log.undo(), Some("a"));
        assert_eq!(log.undo(), None);
        assert_eq!(log.cursor(), 0);
    }

    #[test]
    fn redo_stops_at_the_tail() {
        let mut log = HistoryLog::starting_at("a");
        log.record("b");

        assert_eq!(log.redo(), None);
        log.undo();
        assert_eq!(log.redo(), Some("b"));
        assert_eq!(log.redo(), None);
    }

    #[test]
    fn single_entry_log_cannot_move() {
        let mut log = HistoryLog::starting_at("only");

        assert_eq!(log.undo(), None);
        assert_eq!(log.redo(), None);
    }

    #[test]
    fn clear_empties_entries_but_not_the_cursor() {
        let mut log = HistoryLog::starting_at("a");
        log.record("b");
        log.record("c");
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.cursor(), 2);
        assert_eq!(log.undo(), None);
        assert_eq!(log.redo(), None);
    }

    #[test]
    fn record_after_clear_restarts_the_log() {
        let mut log = HistoryLog::starting_at("a");
        log.record("b");
        log.clear();
        log.record("fresh");

        assert_eq!(log.path(), vec!["fresh"]);
        assert_eq!(log.cursor(), 0);
    }

    #[test]
    fn duration_spans_first_to_last_visit() {
        let log = HistoryLog::starting_at("a");
        assert_eq!(log.duration(), Some(Duration::from_secs(0)));

        let mut log = log;
        log.clear();
        assert!(log.duration().is_none());
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = HistoryLog::starting_at("a");
        log.record("b");

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: HistoryLog = serde_json::from_str(&json).unwrap();

        assert_eq!(log.path(), deserialized.path());
        assert_eq!(log.cursor(), deserialized.cursor());
    }
}

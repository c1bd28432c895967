//! Bounded log of applied actions for the recent-actions panel.

use std::collections::VecDeque;

use super::action::{Action, ActionKind};

/// An applied action as shown in the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedAction {
    /// Sequence number of the action within the session.
    pub step: u64,
    /// Human-readable description of the action.
    pub description: String,
    /// Group hint for coloring.
    pub kind: ActionKind,
    /// Output right after the action was applied.
    pub output: f64,
}

/// Action log that keeps the most recent entries, newest first.
#[derive(Debug, Clone)]
pub struct ActionLog {
    entries: VecDeque<LoggedAction>,
    max_entries: usize,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl ActionLog {
    /// Creates an empty log holding at most `max_entries` items.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Records `action`, evicting the oldest entries beyond capacity.
    pub fn record(&mut self, step: u64, action: &Action, output: f64) {
        self.entries.push_front(LoggedAction {
            step,
            description: action.describe(),
            kind: action.kind(),
            output,
        });

        while self.entries.len() > self.max_entries {
            self.entries.pop_back();
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &VecDeque<LoggedAction> {
        &self.entries
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no action has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

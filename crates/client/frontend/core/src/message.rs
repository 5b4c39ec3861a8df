//! Result history primitives for CLI and future UIs.
use std::collections::VecDeque;

use slot_core::SpinOutcome;

/// Severity level for UI messages produced from runtime events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    /// A jackpot, natural or forced.
    Win,
}

impl MessageLevel {
    pub const fn for_outcome(outcome: SpinOutcome) -> Self {
        if outcome.is_win() {
            MessageLevel::Win
        } else {
            MessageLevel::Info
        }
    }
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    /// Spin number the entry belongs to, if any.
    pub spin: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, spin: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            spin,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");

        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.recent(1).next().map(|e| e.text.as_str()), Some("three"));
    }

    #[test]
    fn zero_capacity_still_holds_one_entry() {
        let mut log = MessageLog::new(0);
        log.push_text("only");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn wins_get_their_own_level() {
        assert_eq!(MessageLevel::for_outcome(SpinOutcome::Jackpot), MessageLevel::Win);
        assert_eq!(
            MessageLevel::for_outcome(SpinOutcome::ForcedJackpot),
            MessageLevel::Win
        );
        assert_eq!(MessageLevel::for_outcome(SpinOutcome::TryAgain), MessageLevel::Info);
    }
}

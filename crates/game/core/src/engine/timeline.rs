//! Ordered set of pending one-shot tasks.
//!
//! Recurring behavior (randomization ticks) is expressed as a task that
//! reschedules itself when it fires. Cancelling a handle removes the task, so a
//! cancelled task can never fire.
use std::collections::BTreeMap;

use crate::state::Millis;

/// Identifies one scheduled task.
///
/// Handles order by deadline first and scheduling order second, which is the
/// order [`Timeline::pop_due`] fires them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle {
    deadline: Millis,
    seq: u64,
}

impl TimerHandle {
    pub const fn deadline(&self) -> Millis {
        self.deadline
    }
}

/// Work a task performs when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerKind {
    /// Redraw every slot of a spinning reel, then reschedule.
    Randomize { reel: usize },
    /// Clear a reel's randomizing flag as part of the staggered stop.
    HaltReel { reel: usize },
    /// End the win highlight.
    RevertHighlight,
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    pending: BTreeMap<TimerHandle, TimerKind>,
    next_seq: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline: Millis, kind: TimerKind) -> TimerHandle {
        let handle = TimerHandle {
            deadline,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.insert(handle, kind);
        handle
    }

    /// Removes a task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Earliest deadline among pending tasks.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.keys().next().map(TimerHandle::deadline)
    }

    /// Removes and returns the earliest task if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerHandle, TimerKind)> {
        let (handle, _) = self.pending.first_key_value()?;
        if handle.deadline > now {
            return None;
        }
        self.pending.pop_first()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

//! Timer queue: tasks become due after their delay elapses.

use std::time::Duration;

use super::clock::Clock;
use super::{ScheduledTask, Scheduler};

#[derive(Clone, Debug)]
struct Entry {
    due: Duration,
    seq: u64,
    task: ScheduledTask,
}

/// Delay-honouring scheduler driven by a [`Clock`].
///
/// The queue holds at most a couple of entries at a time, so a linear scan
/// for the earliest entry is all it needs.
#[derive(Clone, Debug)]
pub struct TimerQueue<C: Clock> {
    clock: C,
    entries: Vec<Entry>,
    next_seq: u64,
}

impl<C: Clock> TimerQueue<C> {
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// When the earliest queued task becomes due, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    fn earliest(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) {
        let due = self.clock.now() + delay;
        self.entries.push(Entry {
            due,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    fn pop_due(&mut self) -> Option<ScheduledTask> {
        let now = self.clock.now();
        let i = self.earliest()?;
        if self.entries[i].due > now {
            return None;
        }
        Some(self.entries.swap_remove(i).task)
    }

    fn pop_next(&mut self) -> Option<ScheduledTask> {
        let i = self.earliest()?;
        Some(self.entries.swap_remove(i).task)
    }

    fn pending_count(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

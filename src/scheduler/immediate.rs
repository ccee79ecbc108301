//! Immediate scheduler.
//!
//! Delays are ignored: a queued task is due as soon as it is polled.
//! Tests use this to resolve pairs synchronously.

use std::collections::VecDeque;
use std::time::Duration;

use super::{ScheduledTask, Scheduler};

/// Scheduler where every task is due immediately, in FIFO order.
#[derive(Clone, Debug, Default)]
pub struct ImmediateScheduler {
    pending: VecDeque<ScheduledTask>,
}

impl ImmediateScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ImmediateScheduler {
    fn schedule(&mut self, _delay: Duration, task: ScheduledTask) {
        self.pending.push_back(task);
    }

    fn pop_due(&mut self) -> Option<ScheduledTask> {
        self.pending.pop_front()
    }

    fn pop_next(&mut self) -> Option<ScheduledTask> {
        self.pending.pop_front()
    }

    fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn clear(&mut self) {
        self.pending.clear();
    }
}

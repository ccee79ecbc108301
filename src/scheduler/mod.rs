//! Delayed task scheduling.
//!
//! Pair resolution happens after a short display delay. The engine is
//! single-threaded and cooperative: it queues a task with a delay and the
//! caller polls for due tasks. The resolving lock in `GameState` keeps a
//! second pair from being selected while a task is outstanding.
//!
//! Two implementations:
//!
//! - [`ImmediateScheduler`]: Every queued task is due at once (tests, headless play)
//! - [`TimerQueue`]: Tasks become due after their delay, as measured by a [`Clock`]
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use rust_pairs::scheduler::{ManualClock, Scheduler, ScheduledTask, TaskKind, TimerQueue};
//!
//! let clock = ManualClock::new();
//! let mut queue = TimerQueue::new(clock.clone());
//!
//! queue.schedule(Duration::from_millis(600), ScheduledTask::new(1, TaskKind::ResolvePair));
//! assert!(queue.pop_due().is_none());
//!
//! clock.advance(Duration::from_millis(600));
//! assert_eq!(queue.pop_due().map(|t| t.kind), Some(TaskKind::ResolvePair));
//! ```

mod clock;
mod immediate;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use immediate::ImmediateScheduler;
pub use timer::TimerQueue;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Work the lifecycle defers until after a display delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// Compare the two selected cards.
    ResolvePair,
    /// Turn a mismatched pair back face-down and pass the turn.
    ConcealPair,
}

/// A queued task tagged with the game generation that queued it.
///
/// Starting a new game bumps the generation, so tasks left over from an
/// earlier game can be recognised and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub generation: u64,
    pub kind: TaskKind,
}

impl ScheduledTask {
    #[must_use]
    pub const fn new(generation: u64, kind: TaskKind) -> Self {
        Self { generation, kind }
    }
}

/// Trait for task schedulers.
///
/// Tasks queued with equal due times come out in the order they were queued.
pub trait Scheduler {
    /// Queue a task to become due after `delay`.
    fn schedule(&mut self, delay: Duration, task: ScheduledTask);

    /// Remove and return the earliest task whose delay has elapsed.
    fn pop_due(&mut self) -> Option<ScheduledTask>;

    /// Remove and return the earliest task regardless of its delay.
    fn pop_next(&mut self) -> Option<ScheduledTask>;

    /// Number of queued tasks.
    fn pending_count(&self) -> usize;

    /// Drop every queued task.
    fn clear(&mut self);
}

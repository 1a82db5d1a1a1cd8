// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use core::time::Duration;
use std::collections::BTreeMap;
use std::sync::Arc;

use pacer_runtime::{Clock, Scheduler, Task};
use parking_lot::Mutex;

use crate::virtual_instant::VirtualInstant;

/// Handle returned by [`ManualRuntime::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualToken {
    due: VirtualInstant,
    id: u64,
}

impl ManualToken {
    /// The instant at which the task becomes due.
    pub fn due(&self) -> VirtualInstant {
        self.due
    }
}

#[derive(Default)]
struct Inner {
    now: VirtualInstant,
    next_id: u64,
    // Keyed by (deadline, scheduling order) so ties fire first-in first-out.
    queue: BTreeMap<(VirtualInstant, u64), Task>,
    scheduled: usize,
    cancelled: usize,
    fired: usize,
}

/// A clock and a scheduler sharing one virtual timeline.
///
/// Time only moves when the test calls [`advance`](Self::advance) or
/// [`advance_to`](Self::advance_to). Due tasks run on the caller's thread, in
/// deadline order, with the clock set to each task's deadline while it runs.
/// No lock is held while a task runs, so tasks may schedule or cancel further
/// work.
///
/// Clones share the same timeline.
///
/// ```
/// use pacer_runtime::Scheduler;
/// use pacer_test_utils::{ManualRuntime, VirtualInstant};
/// use std::time::Duration;
///
/// let runtime = ManualRuntime::new();
/// runtime.schedule(Duration::from_millis(300), Box::new(|| {}));
///
/// runtime.advance(Duration::from_millis(299));
/// assert_eq!(runtime.fired_count(), 0);
///
/// runtime.advance(Duration::from_millis(1));
/// assert_eq!(runtime.fired_count(), 1);
/// assert_eq!(runtime.now(), VirtualInstant::from_millis(300));
/// ```
#[derive(Clone, Default)]
pub struct ManualRuntime {
    inner: Arc<Mutex<Inner>>,
}

impl ManualRuntime {
    /// Creates a timeline positioned at [`VirtualInstant::ZERO`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> VirtualInstant {
        self.inner.lock().now
    }

    /// Moves time forward by `by`, running every task that falls due.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    /// Moves time forward to `target`, running every task that falls due.
    ///
    /// A target in the past only runs tasks already due at the current instant.
    pub fn advance_to(&self, target: VirtualInstant) {
        while let Some(task) = self.pop_due(target) {
            task();
        }

        let mut inner = self.inner.lock();
        if target > inner.now {
            inner.now = target;
        }
    }

    /// Runs tasks due at the current instant, such as zero-delay callbacks.
    pub fn run_until_idle(&self) {
        let now = self.now();
        self.advance_to(now);
    }

    fn pop_due(&self, target: VirtualInstant) -> Option<Task> {
        let mut inner = self.inner.lock();
        let (&(due, _), _) = inner.queue.first_key_value()?;
        if due > target {
            return None;
        }

        let (_, task) = inner.queue.pop_first()?;
        if due > inner.now {
            inner.now = due;
        }
        inner.fired += 1;
        Some(task)
    }

    /// Number of `schedule` calls so far.
    pub fn scheduled_count(&self) -> usize {
        self.inner.lock().scheduled
    }

    /// Number of `cancel` calls so far, including ones on stale tokens.
    pub fn cancelled_count(&self) -> usize {
        self.inner.lock().cancelled
    }

    /// Number of tasks that have run.
    pub fn fired_count(&self) -> usize {
        self.inner.lock().fired
    }

    /// Number of tasks armed and not yet run or cancelled.
    pub fn pending_count(&self) -> usize {
        self.inner.lock().queue.len()
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<VirtualInstant> {
        self.inner
            .lock()
            .queue
            .first_key_value()
            .map(|(&(due, _), _)| due)
    }
}

impl fmt::Debug for ManualRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ManualRuntime")
            .field("now", &inner.now)
            .field("pending", &inner.queue.len())
            .field("scheduled", &inner.scheduled)
            .field("cancelled", &inner.cancelled)
            .field("fired", &inner.fired)
            .finish()
    }
}

impl Clock for ManualRuntime {
    type Instant = VirtualInstant;

    fn now(&self) -> VirtualInstant {
        ManualRuntime::now(self)
    }
}

impl Scheduler for ManualRuntime {
    type Token = ManualToken;

    fn schedule(&self, delay: Duration, task: Task) -> ManualToken {
        let mut inner = self.inner.lock();
        let token = ManualToken {
            due: inner.now + delay,
            id: inner.next_id,
        };
        inner.next_id += 1;
        inner.scheduled += 1;
        inner.queue.insert((token.due, token.id), task);
        token
    }

    fn cancel(&self, token: ManualToken) {
        let mut inner = self.inner.lock();
        inner.cancelled += 1;
        inner.queue.remove(&(token.due, token.id));
    }
}

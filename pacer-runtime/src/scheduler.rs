// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::time::Duration;

/// A deferred callback handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Facility that runs a closure once, after a delay, unless cancelled first.
///
/// Implementations must honour the following contract:
/// - a task never runs earlier than `delay` after `schedule` returned, and may
///   run later under load
/// - a zero delay defers the task to the next idle turn; `schedule` never
///   runs the task on the caller's stack
/// - `cancel` on a token whose task has already run, or was already
///   cancelled, is a no-op
pub trait Scheduler: Clone + Send + Sync + Debug + 'static {
    /// Handle identifying one scheduled task.
    type Token: Send + 'static;

    /// Arms `task` to run after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Token;

    /// Prevents the task behind `token` from running, if it has not run yet.
    fn cancel(&self, token: Self::Token);
}

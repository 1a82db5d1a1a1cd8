// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce for callbacks.
//!
//! Every call cancels the pending deferred callback, if any, and arms a new
//! one `delay` later carrying this call's invocation. The action therefore
//! runs once per burst, `delay` after the last call of the burst, with that
//! call's arguments. Under a steady stream of calls closer together than
//! `delay`, the action never runs.

use core::fmt;
use core::time::Duration;
use std::sync::Arc;

use pacer_runtime::Scheduler;
use parking_lot::Mutex;

use crate::dispatch::Dispatch;
use crate::invocation::{Action, Invocation};

/// A debounced callback.
///
/// Clones share the same pending callback: a call through any clone
/// supersedes a callback armed through another. Dropping the wrapper does not
/// cancel a callback that is already armed.
pub struct Debounced<C, A, S: Scheduler> {
    action: Action<C, A>,
    delay: Duration,
    scheduler: S,
    pending: Arc<Mutex<Option<S::Token>>>,
}

impl<C, A, S> Debounced<C, A, S>
where
    C: Send + 'static,
    A: Send + 'static,
    S: Scheduler,
{
    /// Wraps `action` so that it only runs once calls pause for `delay`.
    ///
    /// A zero `delay` still defers the action to the scheduler's next idle turn.
    ///
    /// # Example
    ///
    /// ```
    /// use pacer::{Debounced, Dispatch, Invocation};
    /// use pacer_test_utils::{CallRecorder, ManualRuntime};
    /// use std::time::Duration;
    ///
    /// let runtime = ManualRuntime::new();
    /// let recorder = CallRecorder::new(&runtime);
    /// let log = recorder.clone();
    /// let resized = Debounced::new(
    ///     move |invocation: Invocation<(), u32>| log.record(invocation.args().to_vec()),
    ///     Duration::from_millis(300),
    ///     runtime.clone(),
    /// );
    ///
    /// assert_eq!(resized.call_args([640]), Dispatch::Scheduled);
    /// runtime.advance(Duration::from_millis(50));
    /// resized.call_args([800]);
    /// runtime.advance(Duration::from_secs(1));
    ///
    /// assert_eq!(recorder.values(), vec![vec![800]]);
    /// assert_eq!(recorder.times_ms(), vec![350]);
    /// ```
    pub fn new<F>(action: F, delay: Duration, scheduler: S) -> Self
    where
        F: Fn(Invocation<C, A>) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            delay,
            scheduler,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Supersedes any pending callback and arms a new one for `invocation`.
    ///
    /// Always returns [`Dispatch::Scheduled`].
    pub fn call(&self, invocation: Invocation<C, A>) -> Dispatch {
        let action = Arc::clone(&self.action);
        let mut pending = self.pending.lock();

        if let Some(token) = pending.take() {
            trace!("debounce: superseding pending callback");
            self.scheduler.cancel(token);
        }

        *pending = Some(
            self.scheduler
                .schedule(self.delay, Box::new(move || action(invocation))),
        );
        trace!("debounce: callback armed for {:?}", self.delay);

        Dispatch::Scheduled
    }

    /// Shorthand for [`call`](Self::call) without a receiver.
    pub fn call_args(&self, args: impl IntoIterator<Item = A>) -> Dispatch {
        self.call(Invocation::new(args))
    }

    /// Quiet period a burst must end with before the action runs.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<C, A, S: Scheduler> Clone for Debounced<C, A, S> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
            delay: self.delay,
            scheduler: self.scheduler.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<C, A, S: Scheduler> fmt::Debug for Debounced<C, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Convenience factory with the default runtime
// =============================================================================

/// Debounces `action` on the Tokio runtime the caller is running on.
///
/// # Errors
/// Returns [`PacerError::RuntimeUnavailable`](pacer_error::PacerError::RuntimeUnavailable)
/// when called outside of a Tokio runtime.
///
/// # Example
///
/// ```rust,no_run
/// use pacer::{debounce, Invocation};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> pacer_error::Result<()> {
/// let on_resize = debounce(
///     |invocation: Invocation<(), (u32, u32)>| println!("resize to {:?}", invocation.args()),
///     Duration::from_millis(300),
/// )?;
///
/// on_resize.call_args([(800, 600)]);
/// on_resize.call_args([(1024, 768)]);
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "runtime-tokio")]
pub fn debounce<C, A, F>(
    action: F,
    delay: Duration,
) -> pacer_error::Result<Debounced<C, A, pacer_runtime::impls::tokio::TokioScheduler>>
where
    C: Send + 'static,
    A: Send + 'static,
    F: Fn(Invocation<C, A>) + Send + Sync + 'static,
{
    let scheduler = pacer_runtime::impls::tokio::TokioScheduler::try_current()?;
    Ok(Debounced::new(action, delay, scheduler))
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle with a guaranteed execution bound.
//!
//! Behaves like a debounce until calls have kept coming for `must_run_delay`,
//! measured from the start of the current window. The call that reaches that
//! bound runs the action immediately and opens a new window.
//!
//! On each call at time `t`:
//! 1. cancel the pending deferred callback, if any
//! 2. the first call ever opens the window: `window_start = t`
//! 3. if `t - window_start >= must_run_delay`, run the action now and set
//!    `window_start = t`
//! 4. otherwise arm a deferred callback `delay` later carrying this call
//!
//! Only the immediate path moves the window. A deferred callback firing
//! leaves `window_start` alone, so a sparse sequence of calls will eventually
//! take the immediate path once enough time has passed since the window opened.
//! The first call never runs the action immediately unless `must_run_delay`
//! is zero.

use core::fmt;
use core::time::Duration;
use std::sync::Arc;

use pacer_runtime::{Clock, Scheduler};
use parking_lot::Mutex;

use crate::dispatch::Dispatch;
use crate::invocation::{Action, Invocation};

struct WindowState<I, T> {
    pending: Option<T>,
    window_start: Option<I>,
}

/// A throttled callback that runs at least once per `must_run_delay` under
/// continuous calls.
///
/// `must_run_delay >= delay` is expected but not checked; other combinations
/// simply follow from the rules above. Clones share the same window and
/// pending callback.
pub struct GuaranteedThrottle<C, A, K: Clock, S: Scheduler> {
    action: Action<C, A>,
    delay: Duration,
    must_run_delay: Duration,
    clock: K,
    scheduler: S,
    state: Arc<Mutex<WindowState<K::Instant, S::Token>>>,
}

impl<C, A, K, S> GuaranteedThrottle<C, A, K, S>
where
    C: Send + 'static,
    A: Send + 'static,
    K: Clock,
    S: Scheduler,
{
    /// Wraps `action` with a trailing `delay` and a `must_run_delay` bound.
    ///
    /// # Example
    ///
    /// ```
    /// use pacer::{Dispatch, GuaranteedThrottle, Invocation};
    /// use pacer_test_utils::{CallRecorder, ManualRuntime};
    /// use std::time::Duration;
    ///
    /// let runtime = ManualRuntime::new();
    /// let recorder = CallRecorder::new(&runtime);
    /// let log = recorder.clone();
    /// let scrolled = GuaranteedThrottle::new(
    ///     move |invocation: Invocation<(), u32>| log.record(invocation.args().to_vec()),
    ///     Duration::from_millis(300),
    ///     Duration::from_millis(1000),
    ///     runtime.clone(),
    ///     runtime.clone(),
    /// );
    ///
    /// assert_eq!(scrolled.call_args([1]), Dispatch::Scheduled);
    /// runtime.advance(Duration::from_millis(1000));
    /// assert_eq!(recorder.times_ms(), vec![300]);
    ///
    /// // A full second after the window opened: runs immediately.
    /// assert_eq!(scrolled.call_args([2]), Dispatch::Invoked);
    /// assert_eq!(recorder.values(), vec![vec![1], vec![2]]);
    /// ```
    pub fn new<F>(
        action: F,
        delay: Duration,
        must_run_delay: Duration,
        clock: K,
        scheduler: S,
    ) -> Self
    where
        F: Fn(Invocation<C, A>) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            delay,
            must_run_delay,
            clock,
            scheduler,
            state: Arc::new(Mutex::new(WindowState {
                pending: None,
                window_start: None,
            })),
        }
    }

    /// Runs the action now if the window has reached `must_run_delay`,
    /// otherwise arms a deferred callback for `invocation`.
    ///
    /// Returns [`Dispatch::Invoked`] or [`Dispatch::Scheduled`] accordingly.
    pub fn call(&self, invocation: Invocation<C, A>) -> Dispatch {
        let now = self.clock.now();

        let run_now = {
            let mut state = self.state.lock();

            if let Some(token) = state.pending.take() {
                trace!("throttle: superseding pending callback");
                self.scheduler.cancel(token);
            }

            let window_start = *state.window_start.get_or_insert(now);

            if now - window_start >= self.must_run_delay {
                state.window_start = Some(now);
                Some(invocation)
            } else {
                let action = Arc::clone(&self.action);
                state.pending = Some(
                    self.scheduler
                        .schedule(self.delay, Box::new(move || action(invocation))),
                );
                None
            }
        };

        // The lock is released so the action may call back into this wrapper.
        match run_now {
            Some(invocation) => {
                debug!(
                    "throttle: guaranteed run after {:?} of continuous calls",
                    self.must_run_delay
                );
                (self.action)(invocation);
                Dispatch::Invoked
            }
            None => {
                trace!("throttle: callback armed for {:?}", self.delay);
                Dispatch::Scheduled
            }
        }
    }

    /// Shorthand for [`call`](Self::call) without a receiver.
    pub fn call_args(&self, args: impl IntoIterator<Item = A>) -> Dispatch {
        self.call(Invocation::new(args))
    }

    /// Trailing delay of the deferred callback.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Longest a window stays open under continuous calls before a forced run.
    pub fn must_run_delay(&self) -> Duration {
        self.must_run_delay
    }
}

impl<C, A, K: Clock, S: Scheduler> Clone for GuaranteedThrottle<C, A, K, S> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
            delay: self.delay,
            must_run_delay: self.must_run_delay,
            clock: self.clock.clone(),
            scheduler: self.scheduler.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C, A, K: Clock, S: Scheduler> fmt::Debug for GuaranteedThrottle<C, A, K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let window_start = self.state.lock().window_start;
        f.debug_struct("GuaranteedThrottle")
            .field("delay", &self.delay)
            .field("must_run_delay", &self.must_run_delay)
            .field("window_start", &window_start)
            .finish_non_exhaustive()
    }
}

/// Throttles `action` with a guarantee on the Tokio runtime the caller is
/// running on.
///
/// # Errors
/// Returns [`PacerError::RuntimeUnavailable`](pacer_error::PacerError::RuntimeUnavailable)
/// when called outside of a Tokio runtime.
#[cfg(feature = "runtime-tokio")]
pub fn throttle_with_guarantee<C, A, F>(
    action: F,
    delay: Duration,
    must_run_delay: Duration,
) -> pacer_error::Result<
    GuaranteedThrottle<
        C,
        A,
        pacer_runtime::impls::tokio::TokioClock,
        pacer_runtime::impls::tokio::TokioScheduler,
    >,
>
where
    C: Send + 'static,
    A: Send + 'static,
    F: Fn(Invocation<C, A>) + Send + Sync + 'static,
{
    let scheduler = pacer_runtime::impls::tokio::TokioScheduler::try_current()?;
    Ok(GuaranteedThrottle::new(
        action,
        delay,
        must_run_delay,
        pacer_runtime::impls::tokio::TokioClock,
        scheduler,
    ))
}

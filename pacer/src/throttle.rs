// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading-edge throttle without a trailing call.
//!
//! A call runs the action immediately when strictly more than `delay` has
//! passed since the action last ran, and is dropped otherwise. The very first
//! call always runs. Dropped calls are gone for good: nothing is deferred, so
//! this wrapper needs a clock but no scheduler.

use core::fmt;
use core::time::Duration;
use std::sync::Arc;

use pacer_runtime::Clock;
use parking_lot::Mutex;

use crate::dispatch::Dispatch;
use crate::invocation::{Action, Invocation};

/// A callback limited to at most one run per `delay` window.
///
/// Clones share the same `last_run` timestamp.
pub struct Throttled<C, A, K: Clock> {
    action: Action<C, A>,
    delay: Duration,
    clock: K,
    last_run: Arc<Mutex<Option<K::Instant>>>,
}

impl<C, A, K: Clock> Throttled<C, A, K> {
    /// Wraps `action` so that it runs at most once per `delay`.
    ///
    /// # Example
    ///
    /// ```
    /// use pacer::{Dispatch, Invocation, Throttled};
    /// use pacer_test_utils::ManualRuntime;
    /// use std::time::Duration;
    ///
    /// let runtime = ManualRuntime::new();
    /// let moved = Throttled::new(
    ///     |_: Invocation<(), i32>| {},
    ///     Duration::from_millis(300),
    ///     runtime.clone(),
    /// );
    ///
    /// assert_eq!(moved.call_args([0]), Dispatch::Invoked);
    /// runtime.advance(Duration::from_millis(300));
    /// assert_eq!(moved.call_args([300]), Dispatch::Dropped);
    /// runtime.advance(Duration::from_millis(1));
    /// assert_eq!(moved.call_args([301]), Dispatch::Invoked);
    /// ```
    pub fn new<F>(action: F, delay: Duration, clock: K) -> Self
    where
        F: Fn(Invocation<C, A>) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            delay,
            clock,
            last_run: Arc::new(Mutex::new(None)),
        }
    }

    /// Runs the action with `invocation` unless it already ran within `delay`.
    ///
    /// Returns [`Dispatch::Invoked`] or [`Dispatch::Dropped`].
    pub fn call(&self, invocation: Invocation<C, A>) -> Dispatch {
        let now = self.clock.now();

        {
            let mut last_run = self.last_run.lock();
            if let Some(previous) = *last_run {
                if now - previous <= self.delay {
                    trace!("throttle: dropping call inside {:?} window", self.delay);
                    return Dispatch::Dropped;
                }
            }
            *last_run = Some(now);
        }

        (self.action)(invocation);
        Dispatch::Invoked
    }

    /// Shorthand for [`call`](Self::call) without a receiver.
    pub fn call_args(&self, args: impl IntoIterator<Item = A>) -> Dispatch {
        self.call(Invocation::new(args))
    }

    /// Minimum gap between two runs of the action.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<C, A, K: Clock> Clone for Throttled<C, A, K> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
            delay: self.delay,
            clock: self.clock.clone(),
            last_run: Arc::clone(&self.last_run),
        }
    }
}

impl<C, A, K: Clock> fmt::Debug for Throttled<C, A, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_run = *self.last_run.lock();
        f.debug_struct("Throttled")
            .field("delay", &self.delay)
            .field("last_run", &last_run)
            .finish_non_exhaustive()
    }
}

/// Throttles `action` against the Tokio clock.
///
/// Needs no running runtime, since nothing is ever deferred.
#[cfg(feature = "runtime-tokio")]
pub fn throttle<C, A, F>(
    action: F,
    delay: Duration,
) -> Throttled<C, A, pacer_runtime::impls::tokio::TokioClock>
where
    F: Fn(Invocation<C, A>) + Send + Sync + 'static,
{
    Throttled::new(action, delay, pacer_runtime::impls::tokio::TokioClock)
}

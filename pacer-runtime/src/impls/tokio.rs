// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;

use ::tokio::runtime::Handle;
use ::tokio::task::JoinHandle;
use pacer_error::{PacerError, Result};

use crate::{clock::Clock, scheduler::Scheduler, scheduler::Task};

/// Clock backed by `tokio::time::Instant`.
///
/// Follows Tokio's paused clock, so `tokio::time::pause` and `advance` drive it
/// in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    type Instant = ::tokio::time::Instant;

    fn now(&self) -> Self::Instant {
        ::tokio::time::Instant::now()
    }
}

/// Scheduler that spawns one Tokio task per deferred callback.
///
/// The task sleeps for the requested delay and then runs the callback on the
/// runtime. Cancelling aborts the task; a callback that panics takes only its
/// own task down and surfaces as that task's `JoinError`.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Binds to the runtime the caller is currently running on.
    ///
    /// # Errors
    /// Returns [`PacerError::RuntimeUnavailable`] when called outside of a Tokio runtime.
    pub fn try_current() -> Result<Self> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|err| PacerError::runtime_unavailable(err.to_string()))
    }

    /// Binds to an explicit runtime handle.
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    type Token = JoinHandle<()>;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Token {
        // Deadline is fixed now, on the bound runtime's clock, not when the
        // spawned task is first polled.
        let deadline = {
            let _context = self.handle.enter();
            ::tokio::time::Instant::now() + delay
        };
        trace!("spawning deferred task due in {:?}", delay);
        self.handle.spawn(async move {
            ::tokio::time::sleep_until(deadline).await;
            task();
        })
    }

    fn cancel(&self, token: Self::Token) {
        if !token.is_finished() {
            trace!("aborting deferred task");
            token.abort();
        }
    }
}

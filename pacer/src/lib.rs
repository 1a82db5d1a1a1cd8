// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Call-rate limiting wrappers for callbacks.
//!
//! Each wrapper owns a callable and decides, call by call, whether to run it
//! now, run it later, or not at all. The decision depends only on timing, so
//! wrappers take their clock and scheduler as parameters.
//!
//! # Overview
//!
//! - **[`Debounced`]** - runs the action once calls pause for `delay`, with the
//!   last call's arguments; never runs under continuous calls
//! - **[`GuaranteedThrottle`]** - debounces, but forces a run once calls have
//!   kept coming for `must_run_delay`
//! - **[`Throttled`]** - runs the action at most once per `delay`, dropping the
//!   calls in between; no trailing run
//!
//! Every call returns a [`Dispatch`] telling whether the action was invoked,
//! scheduled or the call was dropped. Receivers and arguments travel to the
//! action as an [`Invocation`].
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - [`debounce()`], [`throttle_with_guarantee()`] and
//!   [`throttle()`] bind to Tokio's clock and to the current Tokio runtime
//! - any other runtime - implement [`Clock`] and [`Scheduler`] and use the
//!   wrappers' `new` constructors
//! - `tracing` - emit trace/debug events for superseded, scheduled, forced and
//!   dropped calls
//!
//! # Concurrency
//!
//! Wrappers are `Send + Sync` and clones share state, but no ordering between
//! concurrent callers is promised: on a multi-threaded runtime a deferred
//! callback may run while another thread takes the immediate path. Wrapper
//! locks are never held while the action runs.
//!
//! # Example
//!
//! ```rust
//! use pacer::prelude::*;
//! use pacer_test_utils::{CallRecorder, ManualRuntime};
//! use std::time::Duration;
//!
//! let runtime = ManualRuntime::new();
//! let recorder = CallRecorder::new(&runtime);
//! let log = recorder.clone();
//!
//! let search = Debounced::new(
//!     move |invocation: Invocation<(), &'static str>| log.record(invocation.args()[0]),
//!     Duration::from_millis(300),
//!     runtime.clone(),
//! );
//!
//! for query in ["r", "ru", "rus", "rust"] {
//!     search.call_args([query]);
//!     runtime.advance(Duration::from_millis(50));
//! }
//! runtime.advance(Duration::from_secs(1));
//!
//! assert_eq!(recorder.values(), vec!["rust"]);
//! ```

#[macro_use]
mod logging;

mod debounce;
mod dispatch;
mod guaranteed_throttle;
mod invocation;
mod throttle;

pub mod prelude;

pub use debounce::Debounced;
pub use dispatch::Dispatch;
pub use guaranteed_throttle::GuaranteedThrottle;
pub use invocation::Invocation;
pub use throttle::Throttled;

pub use pacer_error::{PacerError, Result};
pub use pacer_runtime::{Clock, Scheduler, Task};

#[cfg(feature = "runtime-tokio")]
pub use debounce::debounce;
#[cfg(feature = "runtime-tokio")]
pub use guaranteed_throttle::throttle_with_guarantee;
#[cfg(feature = "runtime-tokio")]
pub use throttle::throttle;

#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::impls::tokio::{TokioClock, TokioScheduler};

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the pacer wrappers.
//!
//! Wrappers take their clock and scheduler as parameters, so tests can swap
//! real time for a virtual timeline and drive it step by step without
//! sleeping.
//!
//! # Key Types
//!
//! - [`ManualRuntime`] - a `Clock` and a `Scheduler` over one virtual
//!   timeline, advanced explicitly by the test, with counters for scheduled,
//!   cancelled and fired tasks
//! - [`VirtualInstant`] - an instant on that timeline
//! - [`CallRecorder`] - a shared log of `(instant, value)` pairs for actions
//!
//! # Example
//!
//! ```rust
//! use pacer_runtime::Scheduler;
//! use pacer_test_utils::{CallRecorder, ManualRuntime};
//! use std::time::Duration;
//!
//! let runtime = ManualRuntime::new();
//! let recorder = CallRecorder::new(&runtime);
//!
//! let log = recorder.clone();
//! runtime.schedule(Duration::from_millis(300), Box::new(move || log.record("fired")));
//! runtime.advance(Duration::from_millis(500));
//!
//! assert_eq!(recorder.times_ms(), vec![300]);
//! assert_eq!(recorder.values(), vec!["fired"]);
//! ```

pub mod call_recorder;
pub mod manual_runtime;
pub mod virtual_instant;

pub use call_recorder::CallRecorder;
pub use manual_runtime::{ManualRuntime, ManualToken};
pub use virtual_instant::VirtualInstant;

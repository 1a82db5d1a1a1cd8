// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime capabilities consumed by the pacer wrappers.
//!
//! - [`Clock`](clock::Clock) answers "what time is it"
//! - [`Scheduler`](scheduler::Scheduler) runs a closure after a delay and can
//!   cancel it before it fires
//!
//! Enable `runtime-tokio` (default) for [`TokioClock`](impls::tokio::TokioClock)
//! and [`TokioScheduler`](impls::tokio::TokioScheduler).

#[macro_use]
mod logging;

pub mod clock;
pub mod impls;
pub mod scheduler;

pub use clock::Clock;
pub use scheduler::{Scheduler, Task};

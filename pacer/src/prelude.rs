// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenience re-exports.
//!
//! ```rust
//! use pacer::prelude::*;
//! ```

pub use crate::{Clock, Debounced, Dispatch, GuaranteedThrottle, Invocation, Scheduler, Throttled};

#[cfg(feature = "runtime-tokio")]
pub use crate::debounce::debounce;
#[cfg(feature = "runtime-tokio")]
pub use crate::guaranteed_throttle::throttle_with_guarantee;
#[cfg(feature = "runtime-tokio")]
pub use crate::throttle::throttle;
#[cfg(feature = "runtime-tokio")]
pub use crate::{TokioClock, TokioScheduler};

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::ops::Sub;
use core::time::Duration;

/// Source of the current time for wrappers that compare call timestamps.
///
/// `Instant - Instant` must yield the elapsed [`Duration`] between two readings.
/// Readings are expected to be monotonic; a clock that steps backwards makes
/// the throttles see very large or saturated gaps.
pub trait Clock: Clone + Send + Sync + Debug + 'static {
    type Instant: Copy + Debug + Ord + Send + Sync + Sub<Self::Instant, Output = Duration>;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}

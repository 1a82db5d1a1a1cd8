// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

use parking_lot::Mutex;

use crate::manual_runtime::ManualRuntime;
use crate::virtual_instant::VirtualInstant;

/// Records what a wrapped action was invoked with, and when.
///
/// Clones share the same log, so a clone can be moved into the action while
/// the test keeps the original for assertions.
#[derive(Debug)]
pub struct CallRecorder<T> {
    runtime: ManualRuntime,
    calls: Arc<Mutex<Vec<(VirtualInstant, T)>>>,
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            runtime: self.runtime.clone(),
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<T> CallRecorder<T> {
    /// Creates a recorder stamping calls with `runtime`'s virtual clock.
    pub fn new(runtime: &ManualRuntime) -> Self {
        Self {
            runtime: runtime.clone(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, value: T) {
        let at = self.runtime.now();
        self.calls.lock().push((at, value));
    }

    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Invocation times in milliseconds since the origin.
    pub fn times_ms(&self) -> Vec<u64> {
        self.calls
            .lock()
            .iter()
            .map(|(at, _)| at.as_millis())
            .collect()
    }
}

impl<T: Clone> CallRecorder<T> {
    pub fn calls(&self) -> Vec<(VirtualInstant, T)> {
        self.calls.lock().clone()
    }

    pub fn values(&self) -> Vec<T> {
        self.calls
            .lock()
            .iter()
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn last(&self) -> Option<(VirtualInstant, T)> {
        self.calls.lock().last().cloned()
    }
}

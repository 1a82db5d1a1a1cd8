// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the pacer call-rate limiting wrappers
//!
//! The wrappers themselves never fail: a call is invoked, scheduled or dropped.
//! Errors only arise while binding a wrapper to its runtime, e.g. asking for the
//! ambient Tokio runtime from a thread that is not running one.
//!
//! # Examples
//!
//! ```
//! use pacer_error::{PacerError, Result};
//!
//! fn bind() -> Result<()> {
//!     Err(PacerError::runtime_unavailable("no reactor running"))
//! }
//!
//! assert!(bind().is_err());
//! ```

/// Root error type for all pacer operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PacerError {
    /// No runtime is available to host deferred callbacks
    ///
    /// Returned by the default-runtime factories when they are called outside
    /// of a running async runtime.
    #[error("Runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// Why the runtime could not be acquired
        context: String,
    },
}

impl PacerError {
    /// Create a runtime-unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }
}

/// Specialized Result type for pacer operations
pub type Result<T> = std::result::Result<T, PacerError>;

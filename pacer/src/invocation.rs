// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::Arc;

/// The receiver and arguments of one call to a wrapper.
///
/// Captured when the wrapper is called and handed unchanged to the wrapped
/// action, either immediately or when a deferred callback fires.
///
/// ```
/// use pacer::Invocation;
///
/// let invocation = Invocation::with_receiver("window", vec![800, 600]);
/// assert_eq!(invocation.receiver(), Some(&"window"));
/// assert_eq!(invocation.args(), &[800, 600]);
///
/// let bare: Invocation<(), i32> = Invocation::new([1, 2, 3]);
/// assert!(bare.receiver().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<C, A> {
    receiver: Option<C>,
    args: Vec<A>,
}

impl<C, A> Invocation<C, A> {
    /// An invocation without a receiver.
    pub fn new(args: impl IntoIterator<Item = A>) -> Self {
        Self {
            receiver: None,
            args: args.into_iter().collect(),
        }
    }

    pub fn with_receiver(receiver: C, args: impl IntoIterator<Item = A>) -> Self {
        Self {
            receiver: Some(receiver),
            args: args.into_iter().collect(),
        }
    }

    pub fn receiver(&self) -> Option<&C> {
        self.receiver.as_ref()
    }

    pub fn args(&self) -> &[A] {
        &self.args
    }

    pub fn into_parts(self) -> (Option<C>, Vec<A>) {
        (self.receiver, self.args)
    }
}

impl<C, A> From<Vec<A>> for Invocation<C, A> {
    fn from(args: Vec<A>) -> Self {
        Self {
            receiver: None,
            args,
        }
    }
}

/// The wrapped callable, shared between a wrapper, its clones and any
/// deferred callback it has armed.
pub(crate) type Action<C, A> = Arc<dyn Fn(Invocation<C, A>) + Send + Sync + 'static>;

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// What a wrapper did with one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// The action ran synchronously, before `call` returned.
    Invoked,
    /// A deferred callback was armed, replacing any earlier one.
    Scheduled,
    /// The call was discarded and will never reach the action.
    Dropped,
}

impl Dispatch {
    pub const fn is_invoked(self) -> bool {
        matches!(self, Self::Invoked)
    }

    pub const fn is_scheduled(self) -> bool {
        matches!(self, Self::Scheduled)
    }

    pub const fn is_dropped(self) -> bool {
        matches!(self, Self::Dropped)
    }
}

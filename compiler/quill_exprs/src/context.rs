//! Ambient compile-time context.
//!
//! While the host compiler is inside a trigger body, expressions are
//! validated against the event kind(s) that trigger listens to. The
//! context is queried only during validation; evaluation never sees it.

use quill_ir::{EventKind, EventKindSet};

/// The event kind(s) the host compiler is currently compiling against.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CompileContext {
    current: EventKindSet,
}

impl CompileContext {
    /// Context for a trigger listening to a single event kind.
    pub const fn for_event(kind: EventKind) -> Self {
        CompileContext {
            current: EventKindSet::from_kind(kind),
        }
    }

    /// Context for a trigger listening to several event kinds.
    pub const fn for_events(kinds: EventKindSet) -> Self {
        CompileContext { current: kinds }
    }

    /// Is the current event one of the given kinds?
    pub const fn is_current_any(&self, kinds: EventKindSet) -> bool {
        self.current.intersects(kinds)
    }
}

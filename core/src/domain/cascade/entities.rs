use std::fmt;

/// Progress of one cascading delete.
///
/// `NotStarted → Began → ParentDeleted → LinkedDeleted → Committed`, with
/// `Aborted` reachable from every non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeState {
    NotStarted,
    Began,
    ParentDeleted,
    LinkedDeleted,
    Committed,
    Aborted,
}

impl CascadeState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CascadeState::Committed | CascadeState::Aborted)
    }
}

impl fmt::Display for CascadeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CascadeState::NotStarted => "not_started",
            CascadeState::Began => "began",
            CascadeState::ParentDeleted => "parent_deleted",
            CascadeState::LinkedDeleted => "linked_deleted",
            CascadeState::Committed => "committed",
            CascadeState::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// A parent collection whose records own a linked record, matched by the
/// shared `id`, in another collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadePairing {
    pub parent: &'static str,
    pub linked: &'static str,
}

impl CascadePairing {
    pub const fn new(parent: &'static str, linked: &'static str) -> Self {
        Self { parent, linked }
    }
}

//! Notification payloads.
//!
//! Change events carry only the kind and the full path of the affected node;
//! subscribers re-read current state from the document.

use std::fmt;

use sb_core::Path;

/// Discriminant of a [`ChangeEvent`], used to filter subscriptions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ChangeKind {
    Added,
    Updated,
    Deleted,
}

impl ChangeKind {
    pub const ALL: [ChangeKind; 3] = [ChangeKind::Added, ChangeKind::Updated, ChangeKind::Deleted];

    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Added   => "added",
            ChangeKind::Updated => "updated",
            ChangeKind::Deleted => "deleted",
        }
    }
}

/// One document change.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ChangeEvent {
    Added(Path),
    Updated(Path),
    Deleted(Path),
}

impl ChangeEvent {
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeEvent::Added(_)   => ChangeKind::Added,
            ChangeEvent::Updated(_) => ChangeKind::Updated,
            ChangeEvent::Deleted(_) => ChangeKind::Deleted,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ChangeEvent::Added(p) | ChangeEvent::Updated(p) | ChangeEvent::Deleted(p) => p,
        }
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind().as_str(), self.path())
    }
}

/// Selection changes published by the editing surface.
///
/// `primary` distinguishes the primary selection from an additional one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SelectionEvent {
    Selected { agent: String, primary: bool },
    Deselected { agent: String, primary: bool },
}

impl SelectionEvent {
    pub fn agent(&self) -> &str {
        match self {
            SelectionEvent::Selected { agent, .. } | SelectionEvent::Deselected { agent, .. } => agent,
        }
    }
}

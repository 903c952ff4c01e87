//! `WriteGateway` — one logical, announced write.
//!
//! A gateway is opened for "key K under parent path P".  On opening it
//! captures the tracking path (the deepest existing ancestor of P) and
//! whether `P/K` already exists.  On [`finish`](WriteGateway::finish) it
//! announces, shallowest first:
//!
//! 1. `Added` for every node strictly below the tracking path down to and
//!    including P — intermediates the write just materialized;
//! 2. `Added(P/K)` if `P/K` did not exist when the gateway opened, else
//!    `Updated(P/K)`.
//!
//! A suppressed gateway announces nothing; structural constructors use it
//! for the low-level writes inside one larger operation so that only the
//! outer gateway speaks.
//!
//! # Contract
//!
//! Each gateway performs exactly one write and is finished exactly once.
//! Writing twice, finishing with nothing written, or dropping the gateway
//! unfinished are programmer errors and panic in debug builds.

use sb_core::{Key, Path};
use tracing::{debug, trace};

use crate::{ChangeEvent, Document, Node};

#[must_use = "a write gateway must be finished"]
pub struct WriteGateway<'d> {
    doc:        &'d Document,
    target:     Path,
    tracking:   Path,
    existed:    bool,
    suppressed: bool,
    written:    bool,
    finished:   bool,
}

impl<'d> WriteGateway<'d> {
    pub(crate) fn open(doc: &'d Document, parent: &Path, key: Key, suppressed: bool) -> Self {
        let target = parent.child(key);
        let (tracking, existed) = {
            let tree = doc.tree();
            (tree.deepest_existing(parent), tree.contains(&target))
        };
        Self {
            doc,
            target,
            tracking,
            existed,
            suppressed,
            written: false,
            finished: false,
        }
    }

    /// Full path of the node this gateway writes.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Deepest ancestor of the parent path that existed when the gateway
    /// was opened.
    pub fn tracking(&self) -> &Path {
        &self.tracking
    }

    /// `true` if the target existed when the gateway was opened.
    pub fn existed(&self) -> bool {
        self.existed
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Store `node` at the target path, materializing missing ancestors.
    pub fn write(&mut self, node: impl Into<Node>) {
        debug_assert!(
            !self.written,
            "write gateway for {} used for a second write",
            self.target
        );
        self.doc.tree_mut().set(&self.target, node.into());
        self.written = true;
    }

    /// The events this gateway announces on finish, in order.
    pub fn pending_events(&self) -> Vec<ChangeEvent> {
        if self.suppressed || !self.written {
            return Vec::new();
        }
        let parent_len = self.target.len() - 1;
        let mut events: Vec<ChangeEvent> = (self.tracking.len() + 1..=parent_len)
            .map(|len| ChangeEvent::Added(self.target.prefix(len)))
            .collect();
        events.push(if self.existed {
            ChangeEvent::Updated(self.target.clone())
        } else {
            ChangeEvent::Added(self.target.clone())
        });
        events
    }

    /// Complete the write and deliver its notifications.
    pub fn finish(mut self) {
        self.finished = true;

        if self.suppressed {
            debug_assert!(
                self.written,
                "suppressed write gateway for {} finished with nothing written",
                self.target
            );
            trace!(path = %self.target, "quiet write");
            return;
        }
        debug_assert!(
            self.written,
            "write gateway for {} finished with nothing written",
            self.target
        );

        let events = self.pending_events();
        debug!(path = %self.target, existed = self.existed, events = events.len(), "write committed");
        let bus = self.doc.bus();
        for event in &events {
            bus.publish_change(event);
        }
    }
}

impl Drop for WriteGateway<'_> {
    fn drop(&mut self) {
        if !self.finished && !std::thread::panicking() {
            debug_assert!(false, "write gateway for {} dropped without finish", self.target);
        }
    }
}

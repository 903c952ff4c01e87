//! Synchronous publish/subscribe for document and selection changes.
//!
//! Delivery is a direct call-through on the publishing thread, in emission
//! order.  There is no queue: by the time `publish_change` returns, every
//! subscriber has handled the event.
//!
//! # Re-entrancy
//!
//! The subscriber list is snapshotted before each delivery and no internal
//! borrow is held while a handler runs, so a handler may publish further
//! events (directly or by writing to the document), subscribe, or
//! unsubscribe.  Nested events are delivered to completion before the outer
//! delivery continues.  A subscriber unsubscribed mid-delivery receives no
//! further events, including the remainder of the current one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sb_core::SubscriptionId;
use tracing::trace;

use crate::{ChangeEvent, ChangeKind, SelectionEvent};

/// Receives document change events.
///
/// Path filtering is the subscriber's job; the bus only filters by kind.
pub trait ChangeSubscriber {
    fn on_change(&self, event: &ChangeEvent);
}

impl<F: Fn(&ChangeEvent)> ChangeSubscriber for F {
    fn on_change(&self, event: &ChangeEvent) {
        self(event)
    }
}

/// Receives selection events from the editing surface.
pub trait SelectionSubscriber {
    fn on_selection(&self, event: &SelectionEvent);
}

impl<F: Fn(&SelectionEvent)> SelectionSubscriber for F {
    fn on_selection(&self, event: &SelectionEvent) {
        self(event)
    }
}

struct ChangeEntry {
    id:         SubscriptionId,
    kinds:      Vec<ChangeKind>,
    subscriber: Rc<dyn ChangeSubscriber>,
}

struct SelectionEntry {
    id:         SubscriptionId,
    subscriber: Rc<dyn SelectionSubscriber>,
}

/// Typed channels for change and selection events.
pub struct NotificationBus {
    next_id:    Cell<u64>,
    changes:    RefCell<Vec<ChangeEntry>>,
    selections: RefCell<Vec<SelectionEntry>>,
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            next_id:    Cell::new(0),
            changes:    RefCell::new(Vec::new()),
            selections: RefCell::new(Vec::new()),
        }
    }

    fn allocate_id(&self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.next().0);
        id
    }

    // ── Subscription ──────────────────────────────────────────────────────

    /// Deliver change events of the given `kinds` to `subscriber` until
    /// [`unsubscribe`](Self::unsubscribe) is called with the returned id.
    pub fn subscribe_changes(
        &self,
        kinds:      &[ChangeKind],
        subscriber: Rc<dyn ChangeSubscriber>,
    ) -> SubscriptionId {
        let id = self.allocate_id();
        self.changes.borrow_mut().push(ChangeEntry {
            id,
            kinds: kinds.to_vec(),
            subscriber,
        });
        id
    }

    pub fn subscribe_selection(&self, subscriber: Rc<dyn SelectionSubscriber>) -> SubscriptionId {
        let id = self.allocate_id();
        self.selections.borrow_mut().push(SelectionEntry { id, subscriber });
        id
    }

    /// Remove a subscription from whichever channel holds it.
    ///
    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut changes = self.changes.borrow_mut();
        let before = changes.len();
        changes.retain(|e| e.id != id);
        if changes.len() != before {
            return true;
        }
        drop(changes);

        let mut selections = self.selections.borrow_mut();
        let before = selections.len();
        selections.retain(|e| e.id != id);
        selections.len() != before
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.changes.borrow().iter().any(|e| e.id == id)
            || self.selections.borrow().iter().any(|e| e.id == id)
    }

    /// Total live subscriptions across both channels.
    pub fn subscriber_count(&self) -> usize {
        self.changes.borrow().len() + self.selections.borrow().len()
    }

    // ── Publication ───────────────────────────────────────────────────────

    pub fn publish_change(&self, event: &ChangeEvent) {
        let kind = event.kind();
        let targets: Vec<(SubscriptionId, Rc<dyn ChangeSubscriber>)> = self
            .changes
            .borrow()
            .iter()
            .filter(|e| e.kinds.contains(&kind))
            .map(|e| (e.id, Rc::clone(&e.subscriber)))
            .collect();

        trace!(%event, subscribers = targets.len(), "delivering change");
        for (id, subscriber) in targets {
            if self.is_subscribed(id) {
                subscriber.on_change(event);
            }
        }
    }

    pub fn publish_selection(&self, event: &SelectionEvent) {
        let targets: Vec<(SubscriptionId, Rc<dyn SelectionSubscriber>)> = self
            .selections
            .borrow()
            .iter()
            .map(|e| (e.id, Rc::clone(&e.subscriber)))
            .collect();

        trace!(agent = event.agent(), subscribers = targets.len(), "delivering selection");
        for (id, subscriber) in targets {
            if self.is_subscribed(id) {
                subscriber.on_selection(event);
            }
        }
    }
}

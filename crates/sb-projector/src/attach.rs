//! Subscribing a projector to its document's change channel.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use sb_core::SubscriptionId;
use sb_document::{ChangeEvent, ChangeKind, ChangeSubscriber, Document};
use sb_engine::SteeringEngine;
use tracing::debug;

use crate::Projector;

/// Bus-side handle: forwards events to the projector while it is alive.
struct Forward<E: SteeringEngine>(Weak<RefCell<Projector<E>>>);

impl<E: SteeringEngine> ChangeSubscriber for Forward<E> {
    fn on_change(&self, event: &ChangeEvent) {
        if let Some(projector) = self.0.upgrade() {
            projector.borrow_mut().handle(event);
        }
    }
}

/// A projector subscribed to its document's change notifications.
///
/// The subscription lives exactly as long as this guard: dropping it, or
/// calling [`detach`][Self::detach], unsubscribes from the bus.
///
/// # Panics
///
/// Event delivery borrows the projector mutably.  Holding the [`Ref`] from
/// [`projector`][Self::projector] across a document write panics.
pub struct Attached<E: SteeringEngine + 'static> {
    doc:          Rc<Document>,
    projector:    Rc<RefCell<Projector<E>>>,
    subscription: SubscriptionId,
}

impl<E: SteeringEngine + 'static> Projector<E> {
    /// Subscribe `projector` to added, updated and deleted notifications of
    /// its document.
    pub fn attach(projector: Projector<E>) -> Attached<E> {
        let doc = Rc::clone(projector.document());
        let projector = Rc::new(RefCell::new(projector));
        let forward = Forward(Rc::downgrade(&projector));
        let subscription = doc.bus().subscribe_changes(&ChangeKind::ALL, Rc::new(forward));
        debug!(%subscription, agent = projector.borrow().agent_name(), "projector attached");
        Attached { doc, projector, subscription }
    }
}

impl<E: SteeringEngine + 'static> Attached<E> {
    pub fn projector(&self) -> Ref<'_, Projector<E>> {
        self.projector.borrow()
    }

    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    /// Unsubscribe and hand back the projector.
    pub fn detach(self) -> Option<Projector<E>> {
        let projector = Rc::clone(&self.projector);
        drop(self);
        Rc::try_unwrap(projector).ok().map(RefCell::into_inner)
    }
}

impl<E: SteeringEngine + 'static> Drop for Attached<E> {
    fn drop(&mut self) {
        if self.doc.bus().unsubscribe(self.subscription) {
            debug!(subscription = %self.subscription, "projector detached");
        }
    }
}

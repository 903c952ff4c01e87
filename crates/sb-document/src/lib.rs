//! `sb-document` — the single source of truth for edited state.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`node`]     | `Node` (object / array / scalar) and `Value`                  |
//! | [`tree`]     | `Tree` — pure path-addressed storage, no notification logic   |
//! | [`event`]    | `ChangeEvent`, `ChangeKind`, `SelectionEvent`                 |
//! | [`bus`]      | `NotificationBus` and the subscriber traits                   |
//! | [`gateway`]  | `WriteGateway` — one scoped, announced write                  |
//! | [`document`] | `Document` — owns tree + bus + name/serial allocation         |
//!
//! # Write flow
//!
//! ```text
//! Document::gateway(parent, key)   capture deepest existing ancestor of parent
//!   └─ WriteGateway::write(node)    mutate the tree (materializing intermediates)
//!   └─ WriteGateway::finish()       Added(ancestor)…  then Added|Updated(target)
//!        └─ NotificationBus          synchronous, in order, on this thread
//! ```
//!
//! Everything is single-threaded: `Document` uses `RefCell`/`Cell` so that
//! subscribers can re-read the tree from inside their handlers.  No tree
//! borrow is held while notifications are delivered.

pub mod bus;
pub mod document;
pub mod event;
pub mod gateway;
pub mod node;
pub mod tree;

#[cfg(test)]
mod tests;

pub use bus::{ChangeSubscriber, NotificationBus, SelectionSubscriber};
pub use document::Document;
pub use event::{ChangeEvent, ChangeKind, SelectionEvent};
pub use gateway::WriteGateway;
pub use node::{Node, Value};
pub use tree::Tree;

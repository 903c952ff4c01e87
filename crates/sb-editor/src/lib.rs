//! `sb-editor` — typed cursors over the document tree.
//!
//! Each editor is bound to one schema depth and one path.  Editors are
//! stateless: every getter re-reads the document and every setter is one
//! announced write through a [`WriteGateway`](sb_document::WriteGateway).
//!
//! | Editor              | Path                                   | Constructs          |
//! |---------------------|----------------------------------------|---------------------|
//! | [`DocumentEditor`]  | `[]`                                   | agents              |
//! | [`AgentEditor`]     | `[agents, A]`                          | the composite       |
//! | [`CompositeEditor`] | `[agents, A, behaviors]`               | behaviors           |
//! | [`BehaviorEditor`]  | `[agents, A, behaviors, B]`            | goals               |
//! | [`GoalEditor`]      | `[agents, A, behaviors, B, goals, G]`  | —                   |
//!
//! # Edge weights
//!
//! A behavior's weight is its edge weight inside the agent's composite, and a
//! goal's weight its edge weight inside its behavior.  Motivators therefore
//! expose `weight()` for reading only; writes go through the parent's
//! `set_weight(child, to)`.
//!
//! # Contract violations
//!
//! Constructing an editor for a path of the wrong depth panics.  Looking up a
//! child that does not exist is an ordinary `None` / [`EditError::NotFound`].

mod access;
pub mod agent;
pub mod behavior;
pub mod composite;
pub mod document;
pub mod error;
pub mod goal;


pub use agent::AgentEditor;
pub use behavior::BehaviorEditor;
pub use composite::CompositeEditor;
pub use document::DocumentEditor;
pub use error::{EditError, EditResult};
pub use goal::GoalEditor;

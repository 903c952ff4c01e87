//! `sb-projector` — keeps one agent's live steering graph in sync with the
//! document.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`projector`] | `Projector<E>` — live graph, name indices, event handling    |
//! | [`attach`]    | `Attached<E>` — bus subscription guard for a projector       |
//! | [`read`]      | `goal_spec` — reads a `GoalSpec` through a goal editor       |
//! | [`stats`]     | `ProjectionStats` — counters of patch vs. rebuild work       |
//!
//! # Event handling
//!
//! ```text
//! event path does not name the agent         → ignored
//! deleted (anywhere in the agent's subtree)  → full rebuild
//! added/updated behavior or its attribute    → create-or-update live behavior + edge weight
//! added/updated goal `weight`                → patch edge weight in place
//! added/updated goal attribute (or below it)  → discard + rebuild live goal, keep edge weight
//! added/updated goal node                    → discard + rebuild live goal, weight from document
//! anything else                              → ignored
//! ```
//!
//! An event that names a live object missing from the projector's indices
//! means the graph has drifted from the document; the projector then rebuilds
//! everything from the document, which is authoritative.

pub mod attach;
pub mod projector;
pub mod read;
pub mod stats;


pub use attach::Attached;
pub use projector::Projector;
pub use read::goal_spec;
pub use stats::ProjectionStats;

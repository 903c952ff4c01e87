//! `sb-engine` — the boundary to the steering-behavior engine.
//!
//! The editor never integrates motion itself.  It only needs the engine to
//! build live objects and wire them into a weighted graph whose shape mirrors
//! the document; this crate defines that surface.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`spec`]   | `GoalSpec` — the parameter set a live goal is built from         |
//! | [`live`]   | `CompositeBehavior`, `Behavior`, `Goal` — the live object graph  |
//! | [`engine`] | `SteeringEngine` trait                                           |
//! | [`serial`] | `SerialEngine` — default engine issuing sequential identities    |
//!
//! # Design notes
//!
//! Edge weights belong to the (parent, child) pair, not to the child: a
//! `Behavior` stores the weight of each of its goals and a
//! `CompositeBehavior` stores the weight of each of its behaviors.  Changing a
//! weight therefore never touches the child object, which is what lets the
//! projector patch weights in place while goal parameter changes rebuild the
//! goal.

pub mod engine;
pub mod live;
pub mod serial;
pub mod spec;


pub use engine::SteeringEngine;
pub use live::{Behavior, CompositeBehavior, Goal};
pub use serial::SerialEngine;
pub use spec::GoalSpec;

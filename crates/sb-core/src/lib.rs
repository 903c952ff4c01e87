//! `sb-core` — foundational types for the steering-behavior editor core.
//!
//! This crate is a dependency of every other `sb-*` crate.  It intentionally
//! has no `sb-*` dependencies.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`key`]         | `Key` — one path segment (name or array index)        |
//! | [`path`]        | `Path` newtype and schema path constructors           |
//! | [`schema`]      | Fixed container keys, attribute keys, `PathKind`      |
//! | [`goal_type`]   | `GoalType` enum and its `GoalParam` subsets           |
//! | [`ids`]         | `BehaviorId`, `GoalId`, `SubscriptionId`              |
//! | [`names`]       | `NameGenerator` — seeded unique node names            |
//! | [`config`]      | `EditorConfig`, `AgentDefaults`                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod goal_type;
pub mod ids;
pub mod key;
pub mod names;
pub mod path;
pub mod schema;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AgentDefaults, EditorConfig};
pub use error::{CoreError, CoreResult};
pub use goal_type::{GoalParam, GoalType};
pub use ids::{BehaviorId, GoalId, SubscriptionId};
pub use key::Key;
pub use names::NameGenerator;
pub use path::Path;
pub use schema::PathKind;

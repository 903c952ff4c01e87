//! Core error type.
//!
//! Only recoverable conditions live here.  Schema contract violations
//! (wrong editor depth, misuse of a write gateway) are programmer errors and
//! panic at the call site instead.

use thiserror::Error;

/// The error type for `sb-core` parsing and validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown goal type {0:?}")]
    UnknownGoalType(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sb-core`.
pub type CoreResult<T> = Result<T, CoreError>;

use sb_core::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("{kind} {name:?} not found under {parent}")]
    NotFound {
        kind:   &'static str,
        name:   String,
        parent: Path,
    },
}

pub type EditResult<T> = Result<T, EditError>;

use rolodex_core::Violation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("{0}")]
    Violation(Violation),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl From<Violation> for StoreError {
    fn from(value: Violation) -> Self {
        StoreError::Violation(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Sql,
    Violation,
    MissingHomeDir,
    NotFound,
    InvalidDataPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::Violation(_) => StoreErrorKind::Violation,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
        }
    }

    /// The rejected constraint, if this error is a recoverable write rejection.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            StoreError::Violation(violation) => Some(*violation),
            _ => None,
        }
    }
}

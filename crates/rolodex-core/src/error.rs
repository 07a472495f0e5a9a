use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("expected 4 comma-separated fields, found {0}")]
    FieldCount(usize),
}

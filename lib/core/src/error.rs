use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Cannot convert field '{field}' of row {row} to a number")]
    Conversion { row: String, field: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BloomError {
    /// A constructor argument is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The bit storage could not be allocated.
    #[error("could not allocate bit storage: {0}")]
    Allocation(#[from] io::Error),
}

impl BloomError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BloomError::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, BloomError>;

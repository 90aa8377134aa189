use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("check digit needs 10 characters, got {0}")]
    CheckWindowTooShort(usize),

    #[error("invalid character {ch:?} at position {position} of check window")]
    InvalidCharacter { ch: char, position: usize },

    #[error("unknown ISO type code: {0}")]
    UnknownIsoCode(String),
}

pub type Result<T> = std::result::Result<T, ContainerError>;

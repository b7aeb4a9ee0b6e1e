//! Error types raised by repository implementations.

use game_core::{ErrorSeverity, GameError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid save slot name: {0:?}")]
    InvalidSlot(String),
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned | Self::Io(_) => ErrorSeverity::Recoverable,
            Self::Serialization(_) | Self::InvalidSlot(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "SAVE_LOCK_POISONED",
            Self::Io(_) => "SAVE_IO",
            Self::Serialization(_) => "SAVE_CORRUPT",
            Self::InvalidSlot(_) => "INVALID_SLOT",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

//! Runtime errors.

use game_core::{Direction, ErrorSeverity, GameError, InventoryError, ShopError};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Requests the runtime could not carry out. None of them leave the game in a
/// changed state.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("there is no exit {direction} from {room}")]
    NoExit { room: String, direction: Direction },

    #[error("there is nothing to fight in {room}")]
    NoEnemy { room: String },

    #[error("there is nobody at position {index} here")]
    UnknownNpc { index: usize },

    #[error("there is no item at position {index} here")]
    UnknownItem { index: usize },

    #[error("{npc} does not want to fight")]
    NotHostile { npc: String },

    #[error("{npc} will not trade with you")]
    NotFriendly { npc: String },

    #[error("no saved game in slot {slot}")]
    NoSave { slot: String },

    #[error("failed to load content: {0}")]
    Content(String),

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Shop(error) => error.severity(),
            Self::Inventory(error) => error.severity(),
            Self::Repository(error) => error.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoExit { .. } => "NO_EXIT",
            Self::NoEnemy { .. } => "NO_ENEMY",
            Self::UnknownNpc { .. } => "UNKNOWN_NPC",
            Self::UnknownItem { .. } => "UNKNOWN_ITEM",
            Self::NotHostile { .. } => "NOT_HOSTILE",
            Self::NotFriendly { .. } => "NOT_FRIENDLY",
            Self::NoSave { .. } => "NO_SAVE",
            Self::Content(_) => "CONTENT",
            Self::Shop(error) => error.error_code(),
            Self::Inventory(error) => error.error_code(),
            Self::Repository(error) => error.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

//! Repository layer for save games.
//!
//! Repositories handle data that CHANGES during gameplay: the player and
//! their position. Static content (rooms, NPCs, balance) comes from
//! `game-content` and is rebuilt on every start.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepo;
pub use traits::{SaveData, SaveRepository};

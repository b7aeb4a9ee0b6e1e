//! Runtime orchestration for the text adventure.
//!
//! This crate wires the rules in `game-core` and the content in
//! `game-content` into a playable [`Game`], and persists it through a
//! [`SaveRepository`].
//!
//! Modules are organized by responsibility:
//! - [`game`] hosts the orchestrator
//! - [`config`] reads runtime settings from the environment
//! - [`repository`] provides save-game storage backends
pub mod config;
pub mod error;
pub mod game;
pub mod repository;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use game::{Game, Interaction};
pub use repository::{
    FileSaveRepository, InMemorySaveRepo, RepositoryError, SaveData, SaveRepository,
};

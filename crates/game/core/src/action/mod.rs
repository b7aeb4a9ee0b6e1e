//! Choices made during a combat round.
//!
//! The player's choice arrives as a [`PlayerCommand`] from an
//! [`ActionProvider`]; the enemy's is an [`EnemyAction`] drawn from the
//! random source.
mod command;
mod enemy;

pub use command::{ActionProvider, PlayerCommand, TurnPrompt};
pub use enemy::EnemyAction;

//! Terminal client for the text adventure.
//!
//! - [`app`] runs the numbered main menu and the sub-menus behind it
//! - [`input`] reads lines and turns them into combat commands
//! - [`presentation`] renders rooms, status screens and game events
//! - [`config`] / [`logging`] bootstrap the process
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::App;
pub use config::CliConfig;
pub use input::PromptedCommands;
pub use presentation::ConsoleSink;

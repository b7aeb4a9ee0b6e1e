//! Combat and progression rules for a turn-based text adventure.
//!
//! `game-core` owns the characters, the world they stand in, and the rules
//! that move them: damage resolution ([`combat`]), the battle state machine
//! ([`engine::CombatSession`]) and rewards ([`progression`]). It performs no
//! I/O. Input arrives through an [`ActionProvider`], randomness through an
//! [`RngOracle`], and everything that happens leaves as a [`GameEvent`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod progression;
pub mod state;
pub mod stats;

pub use action::{ActionProvider, EnemyAction, PlayerCommand, TurnPrompt};
pub use combat::{AttackResult, SkillOutcome};
pub use config::{GameConfig, IntentPolicy};
pub use engine::{CombatSession, TurnPhase};
pub use env::{PcgRng, RngOracle, ScriptedRng};
pub use error::{ActionError, ErrorSeverity, GameError, InventoryError, ShopError};
pub use event::{EventSink, GameEvent, NullSink};
pub use progression::{BattleOutcome, DefeatReport, LevelUp, VictoryReport};
pub use state::{
    BaseStats, Direction, Enemy, Item, ItemUse, Npc, Player, Room, RoomId, Skill, SkillKind,
    World,
};
pub use stats::{CharacterStats, Damageable, HasStats, Healable};

//! Game state types.
//!
//! Role structs ([`Player`], [`Enemy`], [`Npc`]) embed the shared
//! [`CharacterStats`](crate::stats::CharacterStats) and add what only that
//! role needs. [`World`] holds the rooms they live in.
mod enemy;
mod item;
mod npc;
mod player;
mod skill;
mod world;

pub use enemy::{BaseStats, Enemy, LOOT_DESCRIPTION, LOOT_TABLE, derived_level, roll_loot};
pub use item::Item;
pub use npc::{NPC_LEVEL, Npc};
pub use player::{
    ItemUse, Player, STARTING_ATTACK, STARTING_DEFENSE, STARTING_MAX_HP, STARTING_MAX_MP,
};
pub use skill::{Skill, SkillKind};
pub use world::{Direction, Room, RoomId, World};

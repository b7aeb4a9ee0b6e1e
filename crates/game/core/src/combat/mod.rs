//! Combat resolution.
//!
//! Pure functions over character stats. They never roll dice except where a
//! [`RngOracle`](crate::env::RngOracle) is passed in explicitly, and they
//! never decide turn order; that is the job of
//! [`CombatSession`](crate::engine::CombatSession).

pub mod damage;
pub mod result;

pub use damage::{apply_attack, halve_if_defending, skill_damage};
pub use result::{AttackResult, SkillOutcome, resolve_enemy_attack, resolve_skill};

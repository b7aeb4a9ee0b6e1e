//! Stat model.
//!
//! Characters share one attribute block ([`CharacterStats`]) and expose
//! behavior through capability traits rather than a type hierarchy:
//!
//! ```text
//! [ CharacterStats ] ← HasStats ← Player / Enemy / Npc
//!          ↓
//! [ Damageable ]  receive_damage, is_alive
//! [ Healable ]    heal, restore_mp
//! ```
//!
//! All mutations clamp to `[0, max]`, so no caller can break the resource
//! invariant.

pub mod character;

pub use character::{
    CharacterStats, DEFENSE_DIVISOR, Damageable, HasStats, Healable, MINIMUM_DAMAGE, mitigate,
};

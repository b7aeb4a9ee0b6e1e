//! Player skills.

use core::fmt;

/// What a skill does when used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    /// Hits the enemy for `damage + attack / 2`.
    Strike,
    /// Restores the caster's HP. Never targets the enemy.
    Heal,
}

/// An immutable skill definition.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    name: String,
    damage: u32,
    mp_cost: u32,
    kind: SkillKind,
}

impl Skill {
    pub fn strike(name: impl Into<String>, damage: u32, mp_cost: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            mp_cost,
            kind: SkillKind::Strike,
        }
    }

    pub fn heal(name: impl Into<String>, mp_cost: u32) -> Self {
        Self {
            name: name.into(),
            damage: 0,
            mp_cost,
            kind: SkillKind::Heal,
        }
    }

    /// Skills every new character starts with, in menu order.
    pub fn starter_set() -> Vec<Skill> {
        vec![
            Skill::strike("Attack", 10, 0),
            Skill::strike("Power Strike", 15, 5),
            Skill::heal("Heal", 8),
        ]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base damage before the attacker's attack bonus. Zero for utility skills.
    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn mp_cost(&self) -> u32 {
        self.mp_cost
    }

    pub fn kind(&self) -> SkillKind {
        self.kind
    }

    pub fn is_heal(&self) -> bool {
        self.kind == SkillKind::Heal
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (damage: {}, MP cost: {})",
            self.name, self.damage, self.mp_cost
        )
    }
}

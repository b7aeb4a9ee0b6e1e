//! Hostile combatants and their rewards.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::stats::{CharacterStats, HasStats};

use super::Item;

/// Items an enemy may be carrying when spawned.
pub const LOOT_TABLE: [&str; 3] = ["Healing Potion", "Mana Potion", "Minor Health Elixir"];

/// Description given to every loot drop.
pub const LOOT_DESCRIPTION: &str = "Spoils taken from a defeated foe";

/// Stat line used to build enemies and NPCs from content data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl BaseStats {
    pub const fn new(max_hp: u32, max_mp: u32, attack: u32, defense: u32) -> Self {
        Self {
            max_hp,
            max_mp,
            attack,
            defense,
        }
    }
}

/// Level implied by an enemy's maximum HP.
///
/// | max HP   | level |
/// |----------|-------|
/// | ≤ 50     | 1     |
/// | 51–80    | 2     |
/// | 81–120   | 3     |
/// | 121–180  | 4     |
/// | > 180    | 5     |
pub fn derived_level(max_hp: u32) -> u32 {
    match max_hp {
        0..=50 => 1,
        51..=80 => 2,
        81..=120 => 3,
        121..=180 => 4,
        _ => 5,
    }
}

/// Rolls for a loot drop: `percent`% chance, then a uniform pick from
/// [`LOOT_TABLE`].
pub fn roll_loot(rng: &mut (impl RngOracle + ?Sized), percent: u32) -> Option<Item> {
    if !rng.chance(percent) {
        return None;
    }
    let name = LOOT_TABLE[rng.pick(LOOT_TABLE.len())];
    Some(Item::worthless(name, LOOT_DESCRIPTION))
}

/// An enemy. Level and rewards are fixed from its base stats at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    stats: CharacterStats,
    experience_reward: u32,
    gold_reward: u32,
    drop_item: Option<Item>,
}

impl Enemy {
    /// Builds an enemy with an explicit (possibly absent) drop.
    pub fn new(name: impl Into<String>, base: BaseStats, drop_item: Option<Item>) -> Self {
        let level = derived_level(base.max_hp);
        Self {
            stats: CharacterStats::new(
                name,
                base.max_hp,
                base.max_mp,
                base.attack,
                base.defense,
                level,
            ),
            experience_reward: base.max_hp / 2,
            gold_reward: base.max_hp / 4,
            drop_item,
        }
    }

    /// Builds an enemy and rolls its loot.
    pub fn spawn(
        name: impl Into<String>,
        base: BaseStats,
        rng: &mut (impl RngOracle + ?Sized),
        config: &GameConfig,
    ) -> Self {
        let drop_item = roll_loot(rng, config.loot_drop_percent);
        Self::new(name, base, drop_item)
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn experience_reward(&self) -> u32 {
        self.experience_reward
    }

    pub fn gold_reward(&self) -> u32 {
        self.gold_reward
    }

    pub fn drop_item(&self) -> Option<&Item> {
        self.drop_item.as_ref()
    }

    /// Raw strength of a basic attack: `attack + random(0..=variance)`,
    /// saturating at `u32::MAX`.
    pub fn attack_roll(&self, rng: &mut (impl RngOracle + ?Sized), variance: u32) -> u32 {
        self.stats.attack.saturating_add(rng.range(0, variance))
    }

    /// Permanently raises attack. Returns the new value.
    pub fn buff(&mut self, amount: u32) -> u32 {
        self.stats.attack = self.stats.attack.saturating_add(amount);
        self.stats.attack
    }
}

impl HasStats for Enemy {
    fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CharacterStats {
        &mut self.stats
    }
}

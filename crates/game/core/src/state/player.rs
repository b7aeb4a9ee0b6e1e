//! The player character.

use crate::config::GameConfig;
use crate::error::{ActionError, InventoryError};
use crate::stats::{CharacterStats, HasStats, Healable};

use super::{Item, Skill};

/// Base attributes of a freshly created character.
pub const STARTING_MAX_HP: u32 = 100;
pub const STARTING_MAX_MP: u32 = 50;
pub const STARTING_ATTACK: u32 = 10;
pub const STARTING_DEFENSE: u32 = 5;

/// Result of drinking or otherwise consuming an inventory item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemUse {
    pub item: Item,
    pub healed: u32,
}

/// The player: shared stats plus skills, inventory, currency and experience.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub(crate) stats: CharacterStats,
    pub(crate) skills: Vec<Skill>,
    pub(crate) inventory: Vec<Item>,
    pub(crate) gold: u32,
    pub(crate) experience: u32,
    pub(crate) max_experience: u32,
}

impl Player {
    /// Creates a level 1 character with the starter skills.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            stats: CharacterStats::new(
                name,
                STARTING_MAX_HP,
                STARTING_MAX_MP,
                STARTING_ATTACK,
                STARTING_DEFENSE,
                1,
            ),
            skills: Skill::starter_set(),
            inventory: Vec::new(),
            gold: GameConfig::STARTING_GOLD,
            experience: 0,
            max_experience: GameConfig::STARTING_MAX_EXPERIENCE,
        }
    }

    /// Replaces the experience counters. Mostly useful for setting up
    /// scenarios; `experience` is not checked against the threshold.
    pub fn with_experience(mut self, experience: u32, max_experience: u32) -> Self {
        self.experience = experience;
        self.max_experience = max_experience.max(1);
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = gold;
        self
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Experience needed for the next level.
    pub fn max_experience(&self) -> u32 {
        self.max_experience
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Takes gold if the balance allows it. Returns `false` otherwise.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        match self.gold.checked_sub(amount) {
            Some(rest) => {
                self.gold = rest;
                true
            }
            None => false,
        }
    }

    /// Picks a skill by index and pays its MP cost.
    ///
    /// Fails without touching MP when the index is out of range or MP is
    /// short.
    pub fn select_skill(&mut self, index: usize) -> Result<Skill, ActionError> {
        let skill = self
            .skills
            .get(index)
            .ok_or(ActionError::UnknownSkill { index })?;

        if !self.stats.try_spend_mp(skill.mp_cost()) {
            return Err(ActionError::InsufficientMp {
                skill: skill.name().to_owned(),
                required: skill.mp_cost(),
                available: self.stats.mp(),
            });
        }

        Ok(skill.clone())
    }

    /// Like [`Player::select_skill`], discarding the reason for failure.
    pub fn use_skill(&mut self, index: usize) -> Option<Skill> {
        self.select_skill(index).ok()
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Removes the item at `index`, shifting later items down.
    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        (index < self.inventory.len()).then(|| self.inventory.remove(index))
    }

    /// Drinks the potion at `index`, restoring `heal_amount` HP.
    ///
    /// Non-potions stay in the inventory and are rejected.
    pub fn use_item(&mut self, index: usize, heal_amount: u32) -> Result<ItemUse, InventoryError> {
        let item = self
            .inventory
            .get(index)
            .ok_or(InventoryError::UnknownSlot { index })?;

        if !item.is_potion() {
            return Err(InventoryError::NotConsumable {
                item: item.name().to_owned(),
            });
        }

        let item = self.inventory.remove(index);
        let healed = self.heal(heal_amount);
        Ok(ItemUse { item, healed })
    }
}

impl HasStats for Player {
    fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CharacterStats {
        &mut self.stats
    }
}

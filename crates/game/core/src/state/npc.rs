//! Non-player characters: dialogue, shops, and the occasional ambush.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::ShopError;
use crate::stats::{CharacterStats, HasStats};

use super::{BaseStats, Enemy, Item, Player};

/// NPCs are always this level, whatever their stats.
pub const NPC_LEVEL: u32 = 5;

/// A character the player can talk to. Friendly ones may run a shop; hostile
/// ones can be confronted in combat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    stats: CharacterStats,
    base: BaseStats,
    friendly: bool,
    dialogue: String,
    shop: Vec<Item>,
}

impl Npc {
    pub fn new(
        name: impl Into<String>,
        base: BaseStats,
        friendly: bool,
        dialogue: impl Into<String>,
    ) -> Self {
        Self {
            stats: CharacterStats::new(
                name,
                base.max_hp,
                base.max_mp,
                base.attack,
                base.defense,
                NPC_LEVEL,
            ),
            base,
            friendly,
            dialogue: dialogue.into(),
            shop: Vec::new(),
        }
    }

    pub fn with_shop(mut self, stock: impl IntoIterator<Item = Item>) -> Self {
        self.shop.extend(stock);
        self
    }

    pub fn is_friendly(&self) -> bool {
        self.friendly
    }

    pub fn dialogue(&self) -> &str {
        &self.dialogue
    }

    pub fn shop(&self) -> &[Item] {
        &self.shop
    }

    pub fn has_shop(&self) -> bool {
        !self.shop.is_empty()
    }

    /// Sells the item at `index` to `player`.
    ///
    /// Stock is unlimited: the shop keeps its copy.
    pub fn sell(&self, index: usize, player: &mut Player) -> Result<Item, ShopError> {
        if self.shop.is_empty() {
            return Err(ShopError::NoStock {
                merchant: self.name().to_owned(),
            });
        }

        let item = self
            .shop
            .get(index)
            .ok_or(ShopError::UnknownItem { index })?;

        if !player.spend_gold(item.value()) {
            return Err(ShopError::InsufficientGold {
                item: item.name().to_owned(),
                price: item.value(),
                gold: player.gold(),
            });
        }

        player.add_item(item.clone());
        Ok(item.clone())
    }

    /// Turns this NPC into an opponent with the same base stats.
    ///
    /// The enemy's level is derived from its HP like any other enemy, and
    /// loot is rolled fresh.
    pub fn to_enemy(&self, rng: &mut (impl RngOracle + ?Sized), config: &GameConfig) -> Enemy {
        Enemy::spawn(self.name(), self.base, rng, config)
    }
}

impl HasStats for Npc {
    fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CharacterStats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    fn blacksmith() -> Npc {
        Npc::new(
            "Blacksmith",
            BaseStats::new(150, 30, 25, 20),
            true,
            "Need gear? I have the good stuff!",
        )
        .with_shop([
            Item::new("Steel Sword", "A sharper blade", 50),
            Item::new("Chain Mail", "Solid protection", 80),
        ])
    }

    #[test]
    fn purchase_moves_gold_and_item() {
        let smith = blacksmith();
        let mut player = Player::new("Aria");

        let bought = smith.sell(0, &mut player).expect("affordable");
        assert_eq!(bought.name(), "Steel Sword");
        assert_eq!(player.gold(), 0);
        assert_eq!(player.inventory(), [bought]);
        assert_eq!(smith.shop().len(), 2);
    }

    #[test]
    fn purchase_without_funds_is_rejected() {
        let smith = blacksmith();
        let mut player = Player::new("Aria");

        assert_eq!(
            smith.sell(1, &mut player),
            Err(ShopError::InsufficientGold {
                item: "Chain Mail".into(),
                price: 80,
                gold: 50,
            })
        );
        assert_eq!(player.gold(), 50);
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn bad_index_and_empty_shop() {
        let mut player = Player::new("Aria");
        assert_eq!(
            blacksmith().sell(7, &mut player),
            Err(ShopError::UnknownItem { index: 7 })
        );

        let hermit = Npc::new("Hermit", BaseStats::new(40, 0, 3, 1), true, "...");
        assert!(matches!(
            hermit.sell(0, &mut player),
            Err(ShopError::NoStock { .. })
        ));
    }

    #[test]
    fn npc_level_is_fixed_but_enemy_level_is_derived() {
        let bandit = Npc::new("Bandit", BaseStats::new(70, 10, 14, 6), false, "Hand it over.");
        assert_eq!(bandit.stats().level, NPC_LEVEL);

        let mut rng = ScriptedRng::new([99]);
        let enemy = bandit.to_enemy(&mut rng, &GameConfig::default());
        assert_eq!(enemy.name(), "Bandit");
        assert_eq!(enemy.level(), 2);
        assert_eq!(enemy.experience_reward(), 35);
        assert!(enemy.drop_item().is_none());
    }
}

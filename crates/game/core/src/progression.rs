//! Battle rewards, leveling and recovery.

use crate::event::{EventSink, GameEvent};
use crate::state::{Enemy, Item, Player};
use crate::stats::{HasStats, Healable};

/// Stat increases granted on every level-up.
pub const LEVEL_UP_MAX_HP: u32 = 20;
pub const LEVEL_UP_MAX_MP: u32 = 10;
pub const LEVEL_UP_ATTACK: u32 = 2;
pub const LEVEL_UP_DEFENSE: u32 = 1;

/// The experience threshold grows by `NUMERATOR / DENOMINATOR` per level.
const THRESHOLD_GROWTH_NUMERATOR: u32 = 3;
const THRESHOLD_GROWTH_DENOMINATOR: u32 = 2;

/// Stats right after a level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub level: u32,
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryReport {
    pub enemy: String,
    pub experience: u32,
    pub gold: u32,
    pub level_up: Option<LevelUp>,
    pub loot: Option<Item>,
    pub recovered_hp: u32,
    pub recovered_mp: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefeatReport {
    pub enemy: String,
    pub revived_hp: u32,
}

/// How a battle ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    Victory(VictoryReport),
    Defeat(DefeatReport),
}

impl BattleOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, Self::Victory(_))
    }
}

impl Player {
    /// Adds experience and levels up at most once if the threshold is met.
    ///
    /// Surplus experience beyond one level is kept but does not trigger a
    /// second level-up until the next award.
    pub fn add_experience(&mut self, amount: u32) -> Option<LevelUp> {
        self.experience = self.experience.saturating_add(amount);
        (self.experience >= self.max_experience).then(|| self.level_up())
    }

    /// Applies one level-up unconditionally.
    pub fn level_up(&mut self) -> LevelUp {
        self.experience = self.experience.saturating_sub(self.max_experience);
        self.max_experience = (self.max_experience.saturating_mul(THRESHOLD_GROWTH_NUMERATOR)
            / THRESHOLD_GROWTH_DENOMINATOR)
            .max(1);

        let stats = &mut self.stats;
        stats.level += 1;
        stats.grow_maximums(LEVEL_UP_MAX_HP, LEVEL_UP_MAX_MP);
        stats.attack = stats.attack.saturating_add(LEVEL_UP_ATTACK);
        stats.defense = stats.defense.saturating_add(LEVEL_UP_DEFENSE);
        stats.restore_full();

        LevelUp {
            level: stats.level,
            max_hp: stats.max_hp(),
            max_mp: stats.max_mp(),
            attack: stats.attack,
            defense: stats.defense,
        }
    }
}

/// Pays out a won battle.
///
/// Order: experience (and a possible level-up), gold, loot, then a passive
/// recovery of a quarter of the (possibly raised) maxima.
pub fn award_victory(
    player: &mut Player,
    enemy: &Enemy,
    sink: &mut (impl EventSink + ?Sized),
) -> VictoryReport {
    let experience = enemy.experience_reward();
    let level_up = player.add_experience(experience);
    sink.emit(GameEvent::ExperienceGained {
        amount: experience,
        total: player.experience(),
        needed: player.max_experience(),
    });
    if let Some(level_up) = level_up {
        sink.emit(GameEvent::LeveledUp {
            level: level_up.level,
        });
    }

    let gold = enemy.gold_reward();
    player.add_gold(gold);
    sink.emit(GameEvent::GoldGained {
        amount: gold,
        total: player.gold(),
    });

    let loot = enemy.drop_item().cloned();
    if let Some(item) = &loot {
        player.add_item(item.clone());
        sink.emit(GameEvent::LootDropped { item: item.clone() });
    }

    let recovered_hp = player.heal(player.stats().max_hp() / 4);
    let recovered_mp = player.restore_mp(player.stats().max_mp() / 4);
    sink.emit(GameEvent::Recovered {
        hp: recovered_hp,
        mp: recovered_mp,
    });

    VictoryReport {
        enemy: enemy.name().to_owned(),
        experience,
        gold,
        level_up,
        loot,
        recovered_hp,
        recovered_mp,
    }
}

/// Brings a defeated player back at half HP.
pub fn revive(
    player: &mut Player,
    enemy: &Enemy,
    sink: &mut (impl EventSink + ?Sized),
) -> DefeatReport {
    let hp = player.stats().max_hp() / 2;
    player.stats_mut().set_hp(hp);
    sink.emit(GameEvent::Revived { hp });

    DefeatReport {
        enemy: enemy.name().to_owned(),
        revived_hp: hp,
    }
}

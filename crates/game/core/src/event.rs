//! Reporting boundary.
//!
//! Every observable state change is emitted as a [`GameEvent`]. The core never
//! prints; clients render events however they like.

use crate::action::EnemyAction;
use crate::error::ActionError;
use crate::state::Item;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    // ===== combat =====
    BattleStarted {
        enemy: String,
        level: u32,
    },
    RoundStarted {
        round: u32,
    },
    IntentRevealed {
        enemy: String,
        intent: EnemyAction,
    },
    PlayerDefended {
        player: String,
    },
    /// A damaging skill landed. `raw_damage` is before stance halving and
    /// defense mitigation; `dealt` is what the target actually lost.
    SkillUsed {
        skill: String,
        target: String,
        raw_damage: u32,
        dealt: u32,
        halved: bool,
    },
    Healed {
        skill: String,
        amount: u32,
    },
    /// The player's turn was consumed without effect.
    ActionRejected {
        error: ActionError,
    },
    EnemyAttacked {
        enemy: String,
        raw_damage: u32,
        dealt: u32,
        halved: bool,
    },
    EnemyDefended {
        enemy: String,
    },
    EnemyBuffed {
        enemy: String,
        attack: u32,
    },
    Victory {
        enemy: String,
    },
    Defeat {
        enemy: String,
    },

    // ===== progression =====
    ExperienceGained {
        amount: u32,
        total: u32,
        needed: u32,
    },
    GoldGained {
        amount: u32,
        total: u32,
    },
    LeveledUp {
        level: u32,
    },
    LootDropped {
        item: Item,
    },
    Recovered {
        hp: u32,
        mp: u32,
    },
    Revived {
        hp: u32,
    },

    // ===== exploration =====
    RoomEntered {
        room: String,
        first_visit: bool,
    },
    ItemPickedUp {
        item: Item,
    },
    ItemPurchased {
        item: Item,
        price: u32,
        gold_left: u32,
    },
    ItemUsed {
        item: Item,
        healed: u32,
    },
}

/// Receives events as they happen.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

//! Shared character attributes and the capability traits built on them.
//!
//! Every combatant (player, enemy, NPC) embeds one [`CharacterStats`]. Combat
//! code never cares which role it is talking to: it goes through the
//! [`Damageable`] and [`Healable`] capabilities, which are implemented for
//! anything exposing its stats via [`HasStats`].

/// Defense is divided by this before it is subtracted from incoming damage.
pub const DEFENSE_DIVISOR: u32 = 5;

/// Minimum damage any landed attack deals, regardless of defense.
pub const MINIMUM_DAMAGE: u32 = 1;

/// Attribute block shared by every character.
///
/// Invariant: `hp <= max_hp` and `mp <= max_mp`. Every mutator clamps, so the
/// invariant holds no matter which path changed the values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub name: String,
    hp: u32,
    max_hp: u32,
    mp: u32,
    max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub level: u32,
}

impl CharacterStats {
    /// Creates a character at full HP and MP.
    pub fn new(
        name: impl Into<String>,
        max_hp: u32,
        max_mp: u32,
        attack: u32,
        defense: u32,
        level: u32,
    ) -> Self {
        Self {
            name: name.into(),
            hp: max_hp,
            max_hp,
            mp: max_mp,
            max_mp,
            attack,
            defense,
            level,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn mp(&self) -> u32 {
        self.mp
    }

    pub fn max_mp(&self) -> u32 {
        self.max_mp
    }

    /// Sets HP, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    /// Sets MP, clamped to `[0, max_mp]`.
    pub fn set_mp(&mut self, mp: u32) {
        self.mp = mp.min(self.max_mp);
    }

    /// Raises both maxima. Current values are left alone.
    pub fn grow_maximums(&mut self, hp: u32, mp: u32) {
        self.max_hp = self.max_hp.saturating_add(hp);
        self.max_mp = self.max_mp.saturating_add(mp);
    }

    /// Restores HP and MP to their maxima.
    pub fn restore_full(&mut self) {
        self.hp = self.max_hp;
        self.mp = self.max_mp;
    }

    /// Deducts MP if enough is available. Returns `false` (and changes
    /// nothing) otherwise.
    pub fn try_spend_mp(&mut self, cost: u32) -> bool {
        match self.mp.checked_sub(cost) {
            Some(remaining) => {
                self.mp = remaining;
                true
            }
            None => false,
        }
    }
}

/// Damage actually taken after defense mitigation.
///
/// # Formula
///
/// ```text
/// mitigated = max(1, amount - defense / 5)
/// ```
///
/// Defense never negates a hit completely.
pub fn mitigate(amount: u32, defense: u32) -> u32 {
    amount
        .saturating_sub(defense / DEFENSE_DIVISOR)
        .max(MINIMUM_DAMAGE)
}

/// Access to the embedded stat block.
pub trait HasStats {
    fn stats(&self) -> &CharacterStats;

    fn stats_mut(&mut self) -> &mut CharacterStats;

    fn name(&self) -> &str {
        &self.stats().name
    }
}

impl HasStats for CharacterStats {
    fn stats(&self) -> &CharacterStats {
        self
    }

    fn stats_mut(&mut self) -> &mut CharacterStats {
        self
    }
}

/// Capability: can be hit.
pub trait Damageable {
    /// Applies an incoming attack and returns the HP actually lost.
    fn receive_damage(&mut self, amount: u32) -> u32;

    fn is_alive(&self) -> bool;
}

/// Capability: can recover HP and MP.
pub trait Healable {
    /// Adds HP up to the maximum. Returns the HP actually restored.
    fn heal(&mut self, amount: u32) -> u32;

    /// Adds MP up to the maximum. Returns the MP actually restored.
    fn restore_mp(&mut self, amount: u32) -> u32;
}

impl<T: HasStats + ?Sized> Damageable for T {
    fn receive_damage(&mut self, amount: u32) -> u32 {
        let stats = self.stats_mut();
        let dealt = mitigate(amount, stats.defense);
        stats.hp = stats.hp.saturating_sub(dealt);
        dealt
    }

    fn is_alive(&self) -> bool {
        self.stats().hp > 0
    }
}

impl<T: HasStats + ?Sized> Healable for T {
    fn heal(&mut self, amount: u32) -> u32 {
        let stats = self.stats_mut();
        let before = stats.hp;
        stats.hp = stats.hp.saturating_add(amount).min(stats.max_hp);
        stats.hp - before
    }

    fn restore_mp(&mut self, amount: u32) -> u32 {
        let stats = self.stats_mut();
        let before = stats.mp;
        stats.mp = stats.mp.saturating_add(amount).min(stats.max_mp);
        stats.mp - before
    }
}

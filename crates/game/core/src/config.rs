/// How the enemy intention shown before the player's turn relates to what the
/// enemy then does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IntentPolicy {
    /// The hint is rolled independently of the real action. Flavor only.
    #[default]
    Decorative,
    /// The hint is the action the enemy will take this round.
    Committed,
}

/// Balance constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// HP restored by the Heal skill.
    pub heal_skill_amount: u32,
    /// Attack gained each time an enemy buffs itself.
    pub enemy_buff_attack: u32,
    /// Upper bound (inclusive) of the random bonus added to enemy attacks.
    pub enemy_attack_variance: u32,
    /// Percent chance that a freshly spawned enemy carries loot.
    pub loot_drop_percent: u32,
    /// HP restored by drinking a potion outside combat.
    pub potion_heal_amount: u32,
    pub intent_policy: IntentPolicy,
}

impl GameConfig {
    // ===== fixed rules =====
    /// Starting gold of a new character.
    pub const STARTING_GOLD: u32 = 50;
    /// Experience needed for the first level-up.
    pub const STARTING_MAX_EXPERIENCE: u32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HEAL_SKILL_AMOUNT: u32 = 20;
    pub const DEFAULT_ENEMY_BUFF_ATTACK: u32 = 2;
    pub const DEFAULT_ENEMY_ATTACK_VARIANCE: u32 = 4;
    pub const DEFAULT_LOOT_DROP_PERCENT: u32 = 30;
    pub const DEFAULT_POTION_HEAL_AMOUNT: u32 = 30;

    pub fn new() -> Self {
        Self {
            heal_skill_amount: Self::DEFAULT_HEAL_SKILL_AMOUNT,
            enemy_buff_attack: Self::DEFAULT_ENEMY_BUFF_ATTACK,
            enemy_attack_variance: Self::DEFAULT_ENEMY_ATTACK_VARIANCE,
            loot_drop_percent: Self::DEFAULT_LOOT_DROP_PERCENT,
            potion_heal_amount: Self::DEFAULT_POTION_HEAL_AMOUNT,
            intent_policy: IntentPolicy::Decorative,
        }
    }

    pub fn with_intent_policy(mut self, intent_policy: IntentPolicy) -> Self {
        self.intent_policy = intent_policy;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Resolution of one combat action.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::state::{Enemy, Skill, SkillKind};
use crate::stats::{HasStats, Healable};

use super::damage::{apply_attack, skill_damage};

/// Damage of a single attack as it was dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Before stance halving and defense mitigation.
    pub raw: u32,
    /// HP the defender actually lost.
    pub dealt: u32,
    /// Whether the defender's stance halved the attack.
    pub halved: bool,
}

/// What a successfully selected skill did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillOutcome {
    Strike { skill: String, attack: AttackResult },
    Heal { skill: String, healed: u32 },
}

/// Resolves an already paid-for skill.
///
/// Strike skills hit `defender`; heal skills restore
/// [`GameConfig::heal_skill_amount`] HP to `user` and leave the defender alone.
pub fn resolve_skill<A, D>(
    skill: &Skill,
    user: &mut A,
    defender: &mut D,
    defender_defending: bool,
    config: &GameConfig,
) -> SkillOutcome
where
    A: HasStats + ?Sized,
    D: HasStats + ?Sized,
{
    match skill.kind() {
        SkillKind::Heal => SkillOutcome::Heal {
            skill: skill.name().to_owned(),
            healed: user.heal(config.heal_skill_amount),
        },
        SkillKind::Strike => {
            let raw = skill_damage(skill.damage(), user.stats().attack);
            SkillOutcome::Strike {
                skill: skill.name().to_owned(),
                attack: apply_attack(defender, raw, defender_defending),
            }
        }
    }
}

/// Resolves the enemy's basic attack against `target`.
///
/// Consumes exactly one value from `rng` for the attack variance.
pub fn resolve_enemy_attack<T>(
    enemy: &Enemy,
    target: &mut T,
    target_defending: bool,
    rng: &mut (impl RngOracle + ?Sized),
    config: &GameConfig,
) -> AttackResult
where
    T: HasStats + ?Sized,
{
    let raw = enemy.attack_roll(rng, config.enemy_attack_variance);
    apply_attack(target, raw, target_defending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{BaseStats, Player};
    use crate::stats::Damageable;

    fn wolf() -> Enemy {
        Enemy::new("Forest Wolf", BaseStats::new(60, 10, 12, 5), None)
    }

    #[test]
    fn power_strike_against_wolf() {
        let mut player = Player::new("Aria");
        let mut enemy = wolf();
        let skill = player.use_skill(1).expect("power strike");

        let outcome = resolve_skill(&skill, &mut player, &mut enemy, false, &GameConfig::default());
        // 15 + 10/2 = 20, minus 5/5 = 19
        assert_eq!(
            outcome,
            SkillOutcome::Strike {
                skill: "Power Strike".into(),
                attack: AttackResult {
                    raw: 20,
                    dealt: 19,
                    halved: false
                },
            }
        );
        assert_eq!(enemy.stats().hp(), 41);
    }

    #[test]
    fn defending_enemy_takes_half() {
        let mut player = Player::new("Aria");
        let mut enemy = wolf();
        let skill = player.use_skill(0).expect("attack");

        let outcome = resolve_skill(&skill, &mut player, &mut enemy, true, &GameConfig::default());
        // (10 + 5) / 2 = 7, minus 1 = 6
        let SkillOutcome::Strike { attack, .. } = outcome else {
            panic!("expected a strike");
        };
        assert_eq!(attack.dealt, 6);
        assert!(attack.halved);
    }

    #[test]
    fn heal_skill_restores_user_only() {
        let mut player = Player::new("Aria");
        player.receive_damage(51);
        let mut enemy = wolf();
        let skill = player.use_skill(2).expect("heal");

        let outcome = resolve_skill(&skill, &mut player, &mut enemy, false, &GameConfig::default());
        assert_eq!(
            outcome,
            SkillOutcome::Heal {
                skill: "Heal".into(),
                healed: 20
            }
        );
        assert_eq!(player.stats().hp(), 70);
        assert_eq!(enemy.stats().hp(), 60);
    }

    #[test]
    fn enemy_attack_uses_variance_and_stance() {
        let mut player = Player::new("Aria");
        let enemy = wolf();
        let config = GameConfig::default();

        // 12 + 4 = 16, minus 1 = 15
        let mut rng = ScriptedRng::new([4]);
        let hit = resolve_enemy_attack(&enemy, &mut player, false, &mut rng, &config);
        assert_eq!((hit.raw, hit.dealt), (16, 15));

        // (12 + 0) / 2 = 6, minus 1 = 5
        let mut rng = ScriptedRng::new([0]);
        let hit = resolve_enemy_attack(&enemy, &mut player, true, &mut rng, &config);
        assert_eq!((hit.raw, hit.dealt, hit.halved), (12, 5, true));
        assert_eq!(player.stats().hp(), 80);
    }
}

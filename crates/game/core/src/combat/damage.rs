//! Damage arithmetic.
//!
//! # Formula
//!
//! ```text
//! skill_raw   = skill.damage + attacker.attack / 2
//! enemy_raw   = enemy.attack + random(0..=variance)
//! staged      = raw / 2 if the defender is defending, else raw
//! dealt       = max(1, staged - defender.defense / 5)
//! ```
//!
//! The last step lives in [`Damageable::receive_damage`] so every damage
//! source goes through the same mitigation.

use crate::stats::Damageable;

use super::AttackResult;

/// Raw damage of a strike skill before stance and mitigation.
pub fn skill_damage(skill_damage: u32, attacker_attack: u32) -> u32 {
    skill_damage.saturating_add(attacker_attack / 2)
}

/// Halves (truncating) when the defender holds a defensive stance.
pub fn halve_if_defending(amount: u32, defending: bool) -> u32 {
    if defending { amount / 2 } else { amount }
}

/// Applies a raw attack to `target`, honoring its stance.
pub fn apply_attack<T>(target: &mut T, raw: u32, defending: bool) -> AttackResult
where
    T: Damageable + ?Sized,
{
    let staged = halve_if_defending(raw, defending);
    let dealt = target.receive_damage(staged);
    AttackResult {
        raw,
        dealt,
        halved: defending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::CharacterStats;

    #[test]
    fn skill_damage_adds_half_attack() {
        assert_eq!(skill_damage(15, 10), 20);
        assert_eq!(skill_damage(10, 11), 15);
        assert_eq!(skill_damage(0, 1), 0);
    }

    #[test]
    fn stance_halves_with_truncation() {
        assert_eq!(halve_if_defending(15, true), 7);
        assert_eq!(halve_if_defending(15, false), 15);
        assert_eq!(halve_if_defending(1, true), 0);
    }

    #[test]
    fn defended_attack_still_deals_minimum() {
        let mut wolf = CharacterStats::new("Forest Wolf", 60, 10, 12, 5, 2);
        let result = apply_attack(&mut wolf, 1, true);
        assert_eq!(result.raw, 1);
        assert_eq!(result.dealt, 1);
        assert!(result.halved);
        assert_eq!(wolf.hp(), 59);
    }

    #[test]
    fn undefended_attack_is_mitigated_by_defense() {
        let mut golem = CharacterStats::new("Rock Golem", 100, 20, 18, 15, 3);
        let result = apply_attack(&mut golem, 20, false);
        assert_eq!(result.dealt, 17);
        assert_eq!(golem.hp(), 83);
    }
}

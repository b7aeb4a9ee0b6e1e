use crate::action::{EnemyAction, PlayerCommand};
use crate::combat::{self, SkillOutcome};
use crate::env::RngOracle;
use crate::error::ActionError;
use crate::event::{EventSink, GameEvent};
use crate::stats::HasStats;

use super::CombatSession;

impl CombatSession<'_> {
    /// Carries out the player's command. Rejected commands still use up the
    /// turn.
    pub(super) fn player_turn(
        &mut self,
        command: PlayerCommand,
        sink: &mut (impl EventSink + ?Sized),
    ) {
        let index = match command {
            PlayerCommand::Defend => {
                self.player_defending = true;
                sink.emit(GameEvent::PlayerDefended {
                    player: self.player.name().to_owned(),
                });
                return;
            }
            PlayerCommand::Invalid(input) => {
                sink.emit(GameEvent::ActionRejected {
                    error: ActionError::Malformed { input },
                });
                return;
            }
            PlayerCommand::UseSkill(index) => index,
        };

        let skill = match self.player.select_skill(index) {
            Ok(skill) => skill,
            Err(error) => {
                sink.emit(GameEvent::ActionRejected { error });
                return;
            }
        };

        let event = match combat::resolve_skill(
            &skill,
            &mut *self.player,
            &mut *self.enemy,
            self.enemy_defending,
            self.config,
        ) {
            SkillOutcome::Heal { skill, healed } => GameEvent::Healed {
                skill,
                amount: healed,
            },
            SkillOutcome::Strike { skill, attack } => GameEvent::SkillUsed {
                skill,
                target: self.enemy.name().to_owned(),
                raw_damage: attack.raw,
                dealt: attack.dealt,
                halved: attack.halved,
            },
        };
        sink.emit(event);
    }

    pub(super) fn enemy_turn(
        &mut self,
        action: EnemyAction,
        rng: &mut (impl RngOracle + ?Sized),
        sink: &mut (impl EventSink + ?Sized),
    ) {
        let enemy = self.enemy.name().to_owned();
        let event = match action {
            EnemyAction::Attack => {
                let attack = combat::resolve_enemy_attack(
                    &*self.enemy,
                    &mut *self.player,
                    self.player_defending,
                    rng,
                    self.config,
                );
                GameEvent::EnemyAttacked {
                    enemy,
                    raw_damage: attack.raw,
                    dealt: attack.dealt,
                    halved: attack.halved,
                }
            }
            EnemyAction::Defend => {
                self.enemy_defending = true;
                GameEvent::EnemyDefended { enemy }
            }
            EnemyAction::Buff => GameEvent::EnemyBuffed {
                enemy,
                attack: self.enemy.buff(self.config.enemy_buff_attack),
            },
        };
        sink.emit(event);
    }
}

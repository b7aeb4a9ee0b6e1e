//! Battle state machine.
//!
//! A [`CombatSession`] borrows one player and one enemy for the length of a
//! battle and steps them through rounds until one side drops:
//!
//! ```text
//! PlayerTurn ──► EnemyTurn ──► PlayerTurn ──► ...
//!     │              │
//!     ▼              ▼
//!  Victory        Defeat
//! ```
//!
//! On either terminal the progression rules run before control returns to
//! the caller. A defeated player is revived at half their max HP, which
//! leaves them alive whenever max HP is at least 2.

mod turns;

use crate::action::{ActionProvider, EnemyAction, TurnPrompt};
use crate::config::{GameConfig, IntentPolicy};
use crate::env::RngOracle;
use crate::event::{EventSink, GameEvent};
use crate::progression::{self, BattleOutcome};
use crate::state::{Enemy, Player};
use crate::stats::{Damageable, HasStats};

/// Where a session is in its round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
}

impl TurnPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

/// One battle between the player and a single enemy.
pub struct CombatSession<'a> {
    player: &'a mut Player,
    enemy: &'a mut Enemy,
    config: &'a GameConfig,
    player_defending: bool,
    enemy_defending: bool,
    round: u32,
    phase: TurnPhase,
    outcome: Option<BattleOutcome>,
}

impl<'a> CombatSession<'a> {
    pub fn new(player: &'a mut Player, enemy: &'a mut Enemy, config: &'a GameConfig) -> Self {
        Self {
            player,
            enemy,
            config,
            player_defending: false,
            enemy_defending: false,
            round: 0,
            phase: TurnPhase::PlayerTurn,
            outcome: None,
        }
    }

    pub fn player(&self) -> &Player {
        &*self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &*self.enemy
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Rounds started so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player_defending(&self) -> bool {
        self.player_defending
    }

    pub fn enemy_defending(&self) -> bool {
        self.enemy_defending
    }

    /// Set once the battle has ended.
    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    /// Plays rounds until the battle ends.
    pub fn run(
        &mut self,
        provider: &mut (impl ActionProvider + ?Sized),
        rng: &mut (impl RngOracle + ?Sized),
        sink: &mut (impl EventSink + ?Sized),
    ) -> BattleOutcome {
        loop {
            if let Some(outcome) = &self.outcome {
                return outcome.clone();
            }
            self.play_round(provider, rng, sink);
        }
    }

    /// Plays a single round.
    ///
    /// Returns the outcome if the battle ended during this round, `None` if it
    /// continues or had already ended before the call.
    ///
    /// Random draws per round, in order: the revealed intention, the enemy's
    /// action (only under [`IntentPolicy::Decorative`]), and the attack
    /// variance (only if the enemy attacks).
    pub fn play_round(
        &mut self,
        provider: &mut (impl ActionProvider + ?Sized),
        rng: &mut (impl RngOracle + ?Sized),
        sink: &mut (impl EventSink + ?Sized),
    ) -> Option<BattleOutcome> {
        if self.phase.is_terminal() {
            return None;
        }
        if self.round == 0 {
            sink.emit(GameEvent::BattleStarted {
                enemy: self.enemy.name().to_owned(),
                level: self.enemy.level(),
            });
        }
        if let Some(outcome) = self.settle(sink) {
            return Some(outcome);
        }

        self.round += 1;
        self.phase = TurnPhase::PlayerTurn;
        sink.emit(GameEvent::RoundStarted { round: self.round });

        let intent = EnemyAction::roll(rng);
        sink.emit(GameEvent::IntentRevealed {
            enemy: self.enemy.name().to_owned(),
            intent,
        });

        let command = provider.next_command(&TurnPrompt {
            round: self.round,
            player: &*self.player,
            enemy: &*self.enemy,
            intent,
        });
        self.player_turn(command, sink);
        if let Some(outcome) = self.settle(sink) {
            return Some(outcome);
        }

        self.phase = TurnPhase::EnemyTurn;
        let action = match self.config.intent_policy {
            IntentPolicy::Committed => intent,
            IntentPolicy::Decorative => EnemyAction::roll(rng),
        };
        self.enemy_turn(action, rng, sink);

        self.player_defending = false;
        self.enemy_defending = false;

        let outcome = self.settle(sink);
        if outcome.is_none() {
            self.phase = TurnPhase::PlayerTurn;
        }
        outcome
    }

    /// Moves to a terminal phase if either side is down and runs progression.
    fn settle(&mut self, sink: &mut (impl EventSink + ?Sized)) -> Option<BattleOutcome> {
        let enemy_name = self.enemy.name().to_owned();
        let outcome = if !self.enemy.is_alive() {
            self.phase = TurnPhase::Victory;
            sink.emit(GameEvent::Victory { enemy: enemy_name });
            BattleOutcome::Victory(progression::award_victory(self.player, self.enemy, sink))
        } else if !self.player.is_alive() {
            self.phase = TurnPhase::Defeat;
            sink.emit(GameEvent::Defeat { enemy: enemy_name });
            BattleOutcome::Defeat(progression::revive(self.player, self.enemy, sink))
        } else {
            return None;
        };

        self.player_defending = false;
        self.enemy_defending = false;
        self.outcome = Some(outcome.clone());
        Some(outcome)
    }
}

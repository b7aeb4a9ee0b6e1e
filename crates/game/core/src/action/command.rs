//! Player turn input.

use crate::state::{Enemy, Player};

use super::EnemyAction;

/// What the player chose to do this turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerCommand {
    /// Use the skill at this index of the player's skill list.
    UseSkill(usize),
    /// Brace: halves incoming attacks for the rest of the round.
    Defend,
    /// Unparseable input. Consumes the turn without effect.
    Invalid(String),
}

impl PlayerCommand {
    /// Text input that selects [`PlayerCommand::Defend`].
    pub const DEFEND_SENTINEL: &'static str = "-1";

    /// Interprets one line of input. Never fails: garbage becomes
    /// [`PlayerCommand::Invalid`].
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed == Self::DEFEND_SENTINEL {
            return Self::Defend;
        }
        match trimmed.parse::<usize>() {
            Ok(index) => Self::UseSkill(index),
            Err(_) => Self::Invalid(trimmed.to_owned()),
        }
    }
}

/// Read-only view handed to the input collaborator before each player turn.
#[derive(Clone, Copy, Debug)]
pub struct TurnPrompt<'a> {
    pub round: u32,
    pub player: &'a Player,
    pub enemy: &'a Enemy,
    /// Intention shown to the player. Only binding under
    /// [`IntentPolicy::Committed`](crate::config::IntentPolicy::Committed).
    pub intent: EnemyAction,
}

/// Supplies the player's command for each turn.
///
/// Implementations may block (e.g. on stdin). Exactly one command is taken
/// per turn; there is no retry.
pub trait ActionProvider {
    fn next_command(&mut self, prompt: &TurnPrompt<'_>) -> PlayerCommand;
}

impl<F> ActionProvider for F
where
    F: FnMut(&TurnPrompt<'_>) -> PlayerCommand,
{
    fn next_command(&mut self, prompt: &TurnPrompt<'_>) -> PlayerCommand {
        self(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indices_and_sentinel() {
        assert_eq!(PlayerCommand::parse("0"), PlayerCommand::UseSkill(0));
        assert_eq!(PlayerCommand::parse(" 2\n"), PlayerCommand::UseSkill(2));
        assert_eq!(PlayerCommand::parse("-1"), PlayerCommand::Defend);
    }

    #[test]
    fn garbage_is_invalid_not_an_error() {
        assert_eq!(
            PlayerCommand::parse("fireball"),
            PlayerCommand::Invalid("fireball".into())
        );
        assert_eq!(PlayerCommand::parse("-2"), PlayerCommand::Invalid("-2".into()));
        assert_eq!(PlayerCommand::parse(""), PlayerCommand::Invalid(String::new()));
    }
}

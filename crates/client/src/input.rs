//! Line-based input.
//!
//! Combat commands are read through [`PromptedCommands`], an
//! [`ActionProvider`] that prints the turn prompt and blocks on the next line.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use game_core::{ActionProvider, PlayerCommand, TurnPrompt};

use crate::presentation::render_turn;

/// Reads one line without its trailing newline. `None` at end of input.
pub fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// True for `y` / `yes` in any case.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Prompts for and reads each combat command from a terminal.
pub struct PromptedCommands<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    output: &'a RefCell<W>,
}

impl<'a, R: BufRead, W: Write> PromptedCommands<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a RefCell<W>) -> Self {
        Self { input, output }
    }

    fn show_prompt(&self, prompt: &TurnPrompt<'_>) -> io::Result<()> {
        let mut output = self.output.borrow_mut();
        writeln!(output, "{}", render_turn(prompt))?;
        write!(output, "Choose a skill (or -1 to defend): ")?;
        output.flush()
    }
}

impl<R: BufRead, W: Write> ActionProvider for PromptedCommands<'_, R, W> {
    /// End of input or a read error wastes the turn.
    fn next_command(&mut self, prompt: &TurnPrompt<'_>) -> PlayerCommand {
        if let Err(error) = self.show_prompt(prompt) {
            tracing::warn!(%error, "Failed to write turn prompt");
        }
        match read_line(&mut *self.input) {
            Ok(Some(line)) => PlayerCommand::parse(&line),
            Ok(None) => PlayerCommand::Invalid(String::new()),
            Err(error) => {
                tracing::warn!(%error, "Failed to read command");
                PlayerCommand::Invalid(String::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use game_core::{BaseStats, Enemy, EnemyAction, Player};

    use super::*;

    #[test]
    fn read_line_strips_newlines() {
        let mut input = Cursor::new("north\r\nsouth\nlast");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("north"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("south"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("last"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }

    #[test]
    fn prompted_commands_parse_each_line() {
        let player = Player::new("Aria");
        let enemy = Enemy::new("Cave Bat", BaseStats::new(40, 5, 8, 3), None);
        let prompt = TurnPrompt {
            round: 1,
            player: &player,
            enemy: &enemy,
            intent: EnemyAction::Buff,
        };
        let mut input = Cursor::new("1\n-1\nfireball\n");
        let output = RefCell::new(Vec::new());
        let mut commands = PromptedCommands::new(&mut input, &output);

        assert_eq!(commands.next_command(&prompt), PlayerCommand::UseSkill(1));
        assert_eq!(commands.next_command(&prompt), PlayerCommand::Defend);
        assert_eq!(
            commands.next_command(&prompt),
            PlayerCommand::Invalid("fireball".into())
        );
        assert_eq!(
            commands.next_command(&prompt),
            PlayerCommand::Invalid(String::new())
        );

        let text = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(text.matches("=== Your turn ===").count(), 4);
    }
}

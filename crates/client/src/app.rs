//! Menu-driven game loop.
//!
//! [`App`] owns the terminal streams and the save repository. It is generic
//! over [`BufRead`] and [`Write`] so whole sessions can be scripted in tests.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use game_content::ContentFactory;
use game_core::{Direction, GameError, HasStats, Player, RngOracle};
use runtime::{Game, Interaction, RuntimeError, SaveData, SaveRepository};

use crate::input::{PromptedCommands, is_yes, read_line};
use crate::presentation::{
    ConsoleSink, HELP, MAIN_MENU, render_dialogue, render_exits, render_interactions,
    render_inventory, render_location, render_room, render_shop, render_status,
};

/// Name given to a character created with an empty name.
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

pub struct App<R: BufRead, W: Write, S: SaveRepository> {
    input: R,
    output: RefCell<W>,
    repo: S,
    slot: String,
}

impl<R: BufRead, W: Write, S: SaveRepository> App<R, W, S> {
    pub fn new(input: R, output: W, repo: S, slot: impl Into<String>) -> Self {
        Self {
            input,
            output: RefCell::new(output),
            repo,
            slot: slot.into(),
        }
    }

    pub fn into_output(self) -> W {
        self.into_parts().0
    }

    pub fn into_parts(self) -> (W, S) {
        (self.output.into_inner(), self.repo)
    }

    /// Welcome screen. Offers to continue from the save slot when one exists
    /// and falls back to character creation when loading is declined or fails.
    pub fn start<G: RngOracle>(&mut self, content: &ContentFactory, rng: G) -> Result<Game<G>> {
        self.say("\nWelcome to the MUD!")?;
        self.say(rule())?;

        let saved = if self.repo.exists(&self.slot) {
            let answer = self.ask("A saved game was found. Load it? (y/n): ")?;
            if answer.as_deref().is_some_and(is_yes) {
                self.load_save()?
            } else {
                None
            }
        } else {
            None
        };

        let player = match &saved {
            Some(data) => data.player.clone(),
            None => self.create_character()?,
        };
        let mut game = Game::from_content(content, player, rng)?;
        if let Some(data) = saved {
            game.restore(data);
            self.say(format!("Welcome back, {}!", game.player().name()))?;
        }
        Ok(game)
    }

    /// Runs the main menu until the player quits or input ends.
    pub fn run<G: RngOracle>(&mut self, game: &mut Game<G>) -> Result<()> {
        loop {
            self.say(render_location(game.current_room()))?;
            self.say(MAIN_MENU)?;
            let Some(choice) = self.ask("Choose an action: ")? else {
                tracing::info!("Input closed, leaving the game");
                break;
            };

            match choice.trim() {
                "1" => self.explore(game)?,
                "2" => self.travel(game)?,
                "3" => self.say(render_status(game.player()))?,
                "4" => self.inventory(game)?,
                "5" => self.interact(game)?,
                "6" => self.save(game)?,
                "7" => {
                    self.say("Thanks for playing!")?;
                    break;
                }
                "help" => self.say(HELP)?,
                _ => self.say("Unknown command, type 'help' for help.")?,
            }
        }
        Ok(())
    }

    fn load_save(&mut self) -> Result<Option<SaveData>> {
        match self.repo.load(&self.slot) {
            Ok(Some(data)) => Ok(Some(data)),
            Ok(None) => {
                self.say("The save slot is empty.")?;
                Ok(None)
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    code = error.error_code(),
                    slot = %self.slot,
                    "Failed to load save"
                );
                self.say(format!("Failed to load the game: {error}"))?;
                Ok(None)
            }
        }
    }

    fn create_character(&mut self) -> Result<Player> {
        self.say("\n=== Create your character ===")?;
        let name = self.ask("Enter your name: ")?.unwrap_or_default();
        let name = match name.trim() {
            "" => DEFAULT_PLAYER_NAME,
            trimmed => trimmed,
        };
        tracing::info!(name, "Character created");
        self.say(format!("Character created! Welcome to this world, {name}!"))?;
        Ok(Player::new(name))
    }

    fn explore<G: RngOracle>(&mut self, game: &mut Game<G>) -> Result<()> {
        game.explore();
        self.say(render_room(game.current_room(), game.world()))?;

        if game.current_room().enemies().is_empty() {
            return Ok(());
        }
        let answer = self.ask("\nAn enemy blocks your way! Attack? (y/n): ")?;
        if answer.as_deref().is_some_and(is_yes) {
            let mut commands = PromptedCommands::new(&mut self.input, &self.output);
            let mut sink = ConsoleSink::new(&self.output);
            let fought = game.fight_first_enemy(&mut commands, &mut sink);
            self.report(fought)?;
        }
        Ok(())
    }

    fn travel<G: RngOracle>(&mut self, game: &mut Game<G>) -> Result<()> {
        let room = game.current_room();
        if room.exits().is_empty() {
            return self.say("There are no exits here!");
        }
        self.say(format!("\nExits:{}", render_exits(room, game.world())))?;

        let Some(answer) = self.ask("Which direction? ")? else {
            return Ok(());
        };
        let Ok(direction) = Direction::from_str(answer.trim()) else {
            return self.say("There is no way in that direction!");
        };

        let mut sink = ConsoleSink::new(&self.output);
        match game.travel(direction, &mut sink) {
            Ok(_) => Ok(()),
            Err(RuntimeError::NoExit { .. }) => self.say("There is no way in that direction!"),
            Err(error) => self.say_error(&error),
        }
    }

    fn inventory<G: RngOracle>(&mut self, game: &mut Game<G>) -> Result<()> {
        self.say(render_inventory(game.player()))?;
        if !game.player().inventory().iter().any(|item| item.is_potion()) {
            return Ok(());
        }

        let Some(answer) = self.ask("Drink which item? (-1 to close): ")? else {
            return Ok(());
        };
        let Ok(index) = answer.trim().parse::<usize>() else {
            return Ok(());
        };
        let mut sink = ConsoleSink::new(&self.output);
        let used = game.use_item(index, &mut sink);
        self.report(used)
    }

    fn interact<G: RngOracle>(&mut self, game: &mut Game<G>) -> Result<()> {
        let room = game.current_room();
        if room.npcs().is_empty() && room.items().is_empty() {
            return self.say("There is nothing to interact with here.");
        }
        self.say(render_interactions(room))?;

        let Some(answer) = self.ask("Choose a target (or -1 to cancel): ")? else {
            return Ok(());
        };
        let choice = match answer.trim().parse::<i64>() {
            Ok(-1) => return Ok(()),
            Ok(choice) => usize::try_from(choice).ok(),
            Err(_) => return self.say("Please enter a valid number."),
        };

        match choice.and_then(|choice| game.interaction(choice)) {
            Some(Interaction::Talk(npc)) => self.talk(game, npc),
            Some(Interaction::PickUp(item)) => {
                let mut sink = ConsoleSink::new(&self.output);
                let picked = game.pick_up(item, &mut sink);
                self.report(picked)
            }
            None => self.say("Invalid choice."),
        }
    }

    fn talk<G: RngOracle>(&mut self, game: &mut Game<G>, npc_index: usize) -> Result<()> {
        let (dialogue, friendly, shop) = match game.talk(npc_index) {
            Ok(npc) => (
                render_dialogue(npc),
                npc.is_friendly(),
                npc.has_shop()
                    .then(|| render_shop(npc, game.player().gold())),
            ),
            Err(error) => return self.say_error(&error),
        };
        self.say(dialogue)?;

        if !friendly {
            self.say("This one looks hostile...")?;
            let answer = self.ask("Attack? (y/n): ")?;
            if answer.as_deref().is_some_and(is_yes) {
                let mut commands = PromptedCommands::new(&mut self.input, &self.output);
                let mut sink = ConsoleSink::new(&self.output);
                let fought = game.confront(npc_index, &mut commands, &mut sink);
                self.report(fought)?;
            }
            return Ok(());
        }

        let Some(shop) = shop else {
            return Ok(());
        };
        self.say(shop)?;
        let Some(answer) = self.ask("Enter an item number to buy (or -1 to leave): ")? else {
            return Ok(());
        };
        match answer.trim().parse::<usize>() {
            Ok(item) => {
                let mut sink = ConsoleSink::new(&self.output);
                let bought = game.buy(npc_index, item, &mut sink);
                self.report(bought)
            }
            Err(_) => self.say("You leave the shop."),
        }
    }

    fn save<G: RngOracle>(&mut self, game: &Game<G>) -> Result<()> {
        match game.save(&self.repo, &self.slot) {
            Ok(()) => self.say("Game saved."),
            Err(error) => {
                tracing::warn!(%error, slot = %self.slot, "Failed to save");
                self.say(format!("Save failed: {error}"))
            }
        }
    }

    /// Shows a refused request to the player. The game goes on.
    fn report<T>(&self, result: runtime::Result<T>) -> Result<()> {
        match result {
            Ok(_) => Ok(()),
            Err(error) => self.say_error(&error),
        }
    }

    fn say_error(&self, error: &RuntimeError) -> Result<()> {
        tracing::debug!(
            %error,
            code = error.error_code(),
            severity = error.severity().as_str(),
            "Request refused"
        );
        self.say(format!("You can't do that: {error}."))
    }

    fn say(&self, text: impl Display) -> Result<()> {
        writeln!(self.output.borrow_mut(), "{text}")?;
        Ok(())
    }

    /// Prints `question` without a newline and reads the answer. `None` once
    /// input is exhausted.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        {
            let mut output = self.output.borrow_mut();
            write!(output, "{question}")?;
            output.flush()?;
        }
        Ok(read_line(&mut self.input)?)
    }
}

fn rule() -> String {
    "=".repeat(40)
}

//! Text rendering for the terminal.
//!
//! Everything here is a pure `fn(&T) -> String` except [`ConsoleSink`], which
//! writes rendered events as the core emits them.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::io::Write;

use game_core::{EventSink, GameError, GameEvent, HasStats, Npc, Player, Room, TurnPrompt, World};

const RULE_WIDTH: usize = 40;

pub const MAIN_MENU: &str = "\
1. Explore the current room
2. Move to another room
3. Show character status
4. Show inventory
5. Interact with the surroundings
6. Save the game
7. Quit
Type 'help' for help";

pub const HELP: &str = "
=== Help ===
Commands:
  1 - Explore the current room
  2 - Move to another room
  3 - Show character status
  4 - Show inventory (and drink potions)
  5 - Interact with the surroundings
  6 - Save the game
  7 - Quit

Combat:
  * Attack: basic attack, costs no MP
  * Power Strike: costs 5 MP, hits harder
  * Heal: costs 8 MP, restores your HP
  * Defend (-1): halves the damage you take this round

Tips:
  * Defeat enemies for experience and gold
  * Leveling up raises your stats
  * Shops sell equipment and potions
  * Save often";

fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

/// Header shown above the main menu.
pub fn render_location(room: &Room) -> String {
    format!("\n{}\nLocation: {}\n{}", rule('='), room.name(), rule('='))
}

/// Full room description as shown by "explore".
pub fn render_room(room: &Room, world: &World) -> String {
    let mut out = format!(
        "\n{}\n{}\n{}\n{}",
        rule('='),
        room.name(),
        rule('-'),
        room.description()
    );

    if !room.items().is_empty() {
        out.push_str("\n\nItems:");
        for item in room.items() {
            let _ = write!(out, "\n  * {}", item.name());
        }
    }
    if !room.npcs().is_empty() {
        out.push_str("\n\nPeople:");
        for npc in room.npcs() {
            let _ = write!(out, "\n  * {}", npc.name());
        }
    }
    if !room.enemies().is_empty() {
        out.push_str("\n\nEnemies:");
        for enemy in room.enemies() {
            let _ = write!(out, "\n  * {} Lv.{}", enemy.name(), enemy.level());
        }
    }
    if !room.exits().is_empty() {
        out.push_str("\n\nExits:");
        out.push_str(&render_exits(room, world));
    }
    out
}

/// One line per exit: `  * north -> Dark Forest`.
pub fn render_exits(room: &Room, world: &World) -> String {
    let mut out = String::new();
    for (direction, target) in room.exits() {
        let name = world.room(*target).map_or("?", Room::name);
        let _ = write!(out, "\n  * {direction} -> {name}");
    }
    out
}

pub fn render_status(player: &Player) -> String {
    let stats = player.stats();
    format!(
        "\n=== {} ===\n\
         Level: {}\n\
         HP: {}/{}\n\
         MP: {}/{}\n\
         Attack: {}  Defense: {}\n\
         Experience: {}/{}\n\
         Gold: {}\n\
         Skills: {}\n\
         Items: {}",
        player.name(),
        stats.level,
        stats.hp(),
        stats.max_hp(),
        stats.mp(),
        stats.max_mp(),
        stats.attack,
        stats.defense,
        player.experience(),
        player.max_experience(),
        player.gold(),
        player.skills().len(),
        player.inventory().len(),
    )
}

pub fn render_inventory(player: &Player) -> String {
    let mut out = format!("\n=== Inventory ===\nGold: {}", player.gold());
    if player.inventory().is_empty() {
        out.push_str("\nYour inventory is empty.");
    }
    for (index, item) in player.inventory().iter().enumerate() {
        let _ = write!(out, "\n{index}. {item}");
    }
    out
}

/// Numbered list for the combined interact menu. NPCs come first, then
/// ground items continue the numbering.
pub fn render_interactions(room: &Room) -> String {
    let mut out = String::new();
    if !room.npcs().is_empty() {
        out.push_str("\nPeople:");
        for (index, npc) in room.npcs().iter().enumerate() {
            let _ = write!(out, "\n{index}. Talk to {}", npc.name());
        }
    }
    if !room.items().is_empty() {
        out.push_str("\nItems:");
        let offset = room.npcs().len();
        for (index, item) in room.items().iter().enumerate() {
            let _ = write!(out, "\n{}. Pick up {}", index + offset, item.name());
        }
    }
    out
}

pub fn render_dialogue(npc: &Npc) -> String {
    format!("\n{}: \"{}\"", npc.name(), npc.dialogue())
}

pub fn render_shop(npc: &Npc, gold: u32) -> String {
    let mut out = format!("\n{}'s shop\nYour gold: {gold}", npc.name());
    for (index, item) in npc.shop().iter().enumerate() {
        let _ = write!(out, "\n{index}. {} - {} gold", item.name(), item.value());
    }
    out
}

/// Status block and skill list shown before each player turn. The enemy's
/// intent is reported separately through [`GameEvent::IntentRevealed`].
pub fn render_turn(prompt: &TurnPrompt<'_>) -> String {
    let player = prompt.player.stats();
    let enemy = prompt.enemy.stats();
    let mut out = format!(
        "\n=== Your turn ===\n\
         Your HP: {}/{}  MP: {}/{}\n\
         {} HP: {}/{}\n\
         \nSkills:",
        player.hp(),
        player.max_hp(),
        player.mp(),
        player.max_mp(),
        prompt.enemy.name(),
        enemy.hp(),
        enemy.max_hp(),
    );
    for (index, skill) in prompt.player.skills().iter().enumerate() {
        let _ = write!(out, "\n{index}. {skill}");
    }
    out.push_str("\n-1. Defend");
    out
}

pub fn render_event(event: &GameEvent) -> String {
    match event {
        GameEvent::BattleStarted { enemy, level } => {
            format!("\nBattle! {enemy} Lv.{level} attacks.")
        }
        GameEvent::RoundStarted { round } => format!("\n--- Round {round} ---"),
        GameEvent::IntentRevealed { enemy, intent } => {
            format!("{enemy} intends to: {intent}")
        }
        GameEvent::PlayerDefended { .. } => "You raise your guard.".to_owned(),
        GameEvent::SkillUsed {
            skill,
            target,
            dealt,
            halved,
            ..
        } => {
            let line = format!("You use {skill} and deal {dealt} damage to {target}.");
            if *halved {
                format!("{target} is defending, damage halved!\n{line}")
            } else {
                line
            }
        }
        GameEvent::Healed { skill, amount } => {
            format!("You cast {skill} and recover {amount} HP.")
        }
        GameEvent::ActionRejected { error } => format!("Nothing happens: {error}."),
        GameEvent::EnemyAttacked {
            enemy,
            dealt,
            halved,
            ..
        } => {
            let line = format!("{enemy} attacks you for {dealt} damage.");
            if *halved {
                format!("You are defending, damage halved!\n{line}")
            } else {
                line
            }
        }
        GameEvent::EnemyDefended { enemy } => format!("{enemy} takes a defensive stance."),
        GameEvent::EnemyBuffed { enemy, attack } => {
            format!("{enemy} powers up! Attack is now {attack}.")
        }
        GameEvent::Victory { enemy } => format!("\nVictory! You defeated {enemy}."),
        GameEvent::Defeat { enemy } => format!("\nDefeat... {enemy} was too strong."),
        GameEvent::ExperienceGained {
            amount,
            total,
            needed,
        } => format!("Gained {amount} experience ({total}/{needed})."),
        GameEvent::GoldGained { amount, total } => {
            format!("Gained {amount} gold (now {total}).")
        }
        GameEvent::LeveledUp { level } => format!("Level up! You are now level {level}."),
        GameEvent::LootDropped { item } => format!("Loot: {}", item.name()),
        GameEvent::Recovered { hp, mp } => {
            format!("You catch your breath: +{hp} HP, +{mp} MP.")
        }
        GameEvent::Revived { hp } => format!("You come to with {hp} HP."),
        GameEvent::RoomEntered { room, first_visit } => {
            if *first_visit {
                format!("You arrive at {room} for the first time.")
            } else {
                format!("You arrive at {room}.")
            }
        }
        GameEvent::ItemPickedUp { item } => format!("Picked up {}.", item.name()),
        GameEvent::ItemPurchased {
            item,
            price,
            gold_left,
        } => format!("Bought {} for {price} gold ({gold_left} left).", item.name()),
        GameEvent::ItemUsed { item, healed } => {
            format!("Used {}, recovered {healed} HP.", item.name())
        }
    }
}

/// Writes each event to the shared terminal as soon as it is emitted.
pub struct ConsoleSink<'a, W: Write> {
    output: &'a RefCell<W>,
}

impl<'a, W: Write> ConsoleSink<'a, W> {
    pub fn new(output: &'a RefCell<W>) -> Self {
        Self { output }
    }
}

impl<W: Write> EventSink for ConsoleSink<'_, W> {
    fn emit(&mut self, event: GameEvent) {
        if let GameEvent::ActionRejected { error } = &event {
            tracing::debug!(
                code = error.error_code(),
                recoverable = error.severity().is_recoverable(),
                "Player turn rejected"
            );
        }
        tracing::trace!(?event, "Rendering event");
        let mut output = self.output.borrow_mut();
        if let Err(error) = writeln!(output, "{}", render_event(&event)) {
            tracing::warn!(%error, "Failed to write event");
        }
    }
}

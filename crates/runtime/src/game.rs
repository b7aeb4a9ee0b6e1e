//! Game orchestration.
//!
//! [`Game`] owns the world, the player and the random source, and exposes the
//! things a player can do between battles: look around, walk, talk, trade,
//! pick things up, drink potions, pick fights, save and load. Battles
//! themselves are delegated to [`CombatSession`].

use game_content::ContentFactory;
use game_core::{
    ActionProvider, BattleOutcome, CombatSession, Direction, EventSink, GameConfig, GameEvent,
    HasStats, Item, ItemUse, Npc, PcgRng, Player, RngOracle, Room, RoomId, World,
};

use crate::error::{Result, RuntimeError};
use crate::repository::{SaveData, SaveRepository};

/// Target of the combined "interact" menu: NPCs are listed first, then
/// ground items, under one running index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Talk(usize),
    PickUp(usize),
}

pub struct Game<R = PcgRng> {
    world: World,
    player: Player,
    current: RoomId,
    config: GameConfig,
    rng: R,
}

impl<R: RngOracle> Game<R> {
    /// Places `player` in the world's start room.
    pub fn new(world: World, player: Player, config: GameConfig, rng: R) -> Result<Self> {
        let current = world.start();
        if world.room(current).is_none() {
            return Err(RuntimeError::Content(format!(
                "start room {} does not exist",
                current.0
            )));
        }
        Ok(Self {
            world,
            player,
            current,
            config,
            rng,
        })
    }

    /// Builds the world and balance table from `content`. Enemy loot is rolled
    /// from `rng` before the game starts.
    pub fn from_content(content: &ContentFactory, player: Player, mut rng: R) -> Result<Self> {
        let config = content
            .load_config()
            .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;
        let world = content
            .load_world()
            .and_then(|spec| spec.build(&mut rng, &config))
            .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;

        tracing::info!(rooms = world.len(), "World built");
        Self::new(world, player, config, rng)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_room_id(&self) -> RoomId {
        self.current
    }

    pub fn current_room(&self) -> &Room {
        &self.world[self.current]
    }

    /// Looks around the current room and marks it visited.
    pub fn explore(&mut self) -> &Room {
        let room = &mut self.world[self.current];
        room.mark_visited();
        tracing::debug!(
            room = room.name(),
            enemies = room.enemies().len(),
            "Explored room"
        );
        room
    }

    /// Walks through the exit in `direction`.
    pub fn travel(
        &mut self,
        direction: Direction,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<&Room> {
        let here = &self.world[self.current];
        let target = here.exit(direction).ok_or_else(|| RuntimeError::NoExit {
            room: here.name().to_owned(),
            direction,
        })?;

        self.current = target;
        let room = &self.world[target];
        sink.emit(GameEvent::RoomEntered {
            room: room.name().to_owned(),
            first_visit: !room.is_visited(),
        });
        tracing::info!(room = room.name(), %direction, "Moved");
        Ok(room)
    }

    /// Fights the first enemy in the current room. A defeated enemy leaves the
    /// room; one that won stays, wounds and buffs included.
    pub fn fight_first_enemy(
        &mut self,
        provider: &mut (impl ActionProvider + ?Sized),
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<BattleOutcome> {
        let Self {
            world,
            player,
            current,
            config,
            rng,
        } = self;
        let room = &mut world[*current];
        let room_name = room.name().to_owned();
        let enemy = room.enemy_mut(0).ok_or_else(|| RuntimeError::NoEnemy {
            room: room_name.clone(),
        })?;

        tracing::info!(enemy = enemy.name(), room = %room_name, "Battle started");
        let outcome = CombatSession::new(player, enemy, config).run(provider, rng, sink);
        log_outcome(&outcome);

        if outcome.is_victory() {
            room.remove_enemy(0);
        }
        Ok(outcome)
    }

    pub fn talk(&self, npc_index: usize) -> Result<&Npc> {
        self.current_room()
            .npc(npc_index)
            .ok_or(RuntimeError::UnknownNpc { index: npc_index })
    }

    /// Buys from a friendly NPC's shop.
    pub fn buy(
        &mut self,
        npc_index: usize,
        item_index: usize,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<Item> {
        let npc = self.world[self.current]
            .npc(npc_index)
            .ok_or(RuntimeError::UnknownNpc { index: npc_index })?;
        if !npc.is_friendly() {
            return Err(RuntimeError::NotFriendly {
                npc: npc.name().to_owned(),
            });
        }

        let item = npc.sell(item_index, &mut self.player)?;
        sink.emit(GameEvent::ItemPurchased {
            item: item.clone(),
            price: item.value(),
            gold_left: self.player.gold(),
        });
        tracing::info!(item = item.name(), price = item.value(), "Item purchased");
        Ok(item)
    }

    /// Attacks a hostile NPC. The fight is against a fresh enemy built from
    /// the NPC's stats; the NPC itself stays in the room either way.
    pub fn confront(
        &mut self,
        npc_index: usize,
        provider: &mut (impl ActionProvider + ?Sized),
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<BattleOutcome> {
        let npc = self.world[self.current]
            .npc(npc_index)
            .ok_or(RuntimeError::UnknownNpc { index: npc_index })?;
        if npc.is_friendly() {
            return Err(RuntimeError::NotHostile {
                npc: npc.name().to_owned(),
            });
        }

        let mut enemy = npc.to_enemy(&mut self.rng, &self.config);
        tracing::info!(npc = npc.name(), "Confronting NPC");
        let outcome = CombatSession::new(&mut self.player, &mut enemy, &self.config).run(
            provider,
            &mut self.rng,
            sink,
        );
        log_outcome(&outcome);
        Ok(outcome)
    }

    /// Moves a ground item into the inventory.
    pub fn pick_up(&mut self, index: usize, sink: &mut (impl EventSink + ?Sized)) -> Result<Item> {
        let item = self.world[self.current]
            .take_item(index)
            .ok_or(RuntimeError::UnknownItem { index })?;
        self.player.add_item(item.clone());
        sink.emit(GameEvent::ItemPickedUp { item: item.clone() });
        tracing::debug!(item = item.name(), "Picked up item");
        Ok(item)
    }

    /// Drinks a potion from the inventory.
    pub fn use_item(
        &mut self,
        index: usize,
        sink: &mut (impl EventSink + ?Sized),
    ) -> Result<ItemUse> {
        let used = self.player.use_item(index, self.config.potion_heal_amount)?;
        sink.emit(GameEvent::ItemUsed {
            item: used.item.clone(),
            healed: used.healed,
        });
        tracing::debug!(item = used.item.name(), healed = used.healed, "Used item");
        Ok(used)
    }

    /// Maps a choice from the combined interact menu.
    pub fn interaction(&self, choice: usize) -> Option<Interaction> {
        let room = self.current_room();
        let npcs = room.npcs().len();
        if choice < npcs {
            Some(Interaction::Talk(choice))
        } else if choice < npcs + room.items().len() {
            Some(Interaction::PickUp(choice - npcs))
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> SaveData {
        SaveData {
            player: self.player.clone(),
            room: self.current_room().name().to_owned(),
        }
    }

    pub fn save(&self, repo: &(impl SaveRepository + ?Sized), slot: &str) -> Result<()> {
        repo.save(slot, &self.snapshot())?;
        tracing::info!(slot, "Game saved");
        Ok(())
    }

    /// Replaces the player with the one saved in `slot`. On error nothing
    /// changes.
    pub fn load(&mut self, repo: &(impl SaveRepository + ?Sized), slot: &str) -> Result<()> {
        let data = repo.load(slot)?.ok_or_else(|| RuntimeError::NoSave {
            slot: slot.to_owned(),
        })?;
        self.restore(data);
        tracing::info!(slot, player = self.player.name(), "Game loaded");
        Ok(())
    }

    /// Applies a save record. The saved room is looked up by name; if the
    /// world no longer has it the player starts over in the start room.
    pub fn restore(&mut self, data: SaveData) -> RoomId {
        self.player = data.player;
        self.current = match self.world.find(&data.room) {
            Some(id) => id,
            None => {
                tracing::warn!(room = %data.room, "Saved room not found, using start room");
                self.world.start()
            }
        };
        self.current
    }
}

fn log_outcome(outcome: &BattleOutcome) {
    match outcome {
        BattleOutcome::Victory(report) => tracing::info!(
            enemy = %report.enemy,
            experience = report.experience,
            gold = report.gold,
            leveled_up = report.level_up.is_some(),
            "Battle won"
        ),
        BattleOutcome::Defeat(report) => {
            tracing::info!(enemy = %report.enemy, hp = report.revived_hp, "Battle lost")
        }
    }
}

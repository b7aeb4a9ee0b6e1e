//! World layout loader.
//!
//! A world file lists rooms by name; exits refer to other rooms by name and
//! are resolved to [`RoomId`]s when the world is built. Enemies carry only
//! base stats: level, rewards and loot are decided at build time.

use std::collections::HashMap;
use std::path::Path;

use game_core::{
    BaseStats, Direction, Enemy, GameConfig, Item, Npc, RngOracle, Room, RoomId, World,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// The reference world shipped with the crate.
pub const BUILTIN_WORLD: &str = include_str!("../../data/world.ron");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcSpec {
    pub name: String,
    pub stats: BaseStats,
    pub friendly: bool,
    pub dialogue: String,
    #[serde(default)]
    pub shop: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub name: String,
    pub stats: BaseStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub npcs: Vec<NpcSpec>,
    #[serde(default)]
    pub enemies: Vec<EnemySpec>,
    #[serde(default)]
    pub exits: Vec<(Direction, String)>,
}

/// World file structure for RON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSpec {
    /// Name of the room new characters start in.
    pub start: String,
    pub rooms: Vec<RoomSpec>,
}

impl WorldSpec {
    /// Instantiates the world. Loot for every enemy is rolled from `rng`, in
    /// file order.
    ///
    /// Fails on duplicate room names and on exits or a start room that name
    /// an unknown room.
    pub fn build(
        &self,
        rng: &mut (impl RngOracle + ?Sized),
        config: &GameConfig,
    ) -> LoadResult<World> {
        let mut world = World::new();
        let mut ids: HashMap<&str, RoomId> = HashMap::new();

        for spec in &self.rooms {
            let mut room = Room::new(&spec.name, &spec.description);
            for item in &spec.items {
                room.add_item(item.clone());
            }
            for npc in &spec.npcs {
                room.add_npc(
                    Npc::new(&npc.name, npc.stats, npc.friendly, &npc.dialogue)
                        .with_shop(npc.shop.iter().cloned()),
                );
            }
            for enemy in &spec.enemies {
                room.add_enemy(Enemy::spawn(&enemy.name, enemy.stats, rng, config));
            }

            let id = world.add_room(room);
            if ids.insert(spec.name.as_str(), id).is_some() {
                anyhow::bail!("Duplicate room name '{}'", spec.name);
            }
        }

        for spec in &self.rooms {
            let from = ids[spec.name.as_str()];
            for (direction, target) in &spec.exits {
                let to = ids.get(target.as_str()).copied().ok_or_else(|| {
                    anyhow::anyhow!(
                        "Room '{}' has a {} exit to unknown room '{}'",
                        spec.name,
                        direction,
                        target
                    )
                })?;
                world.connect(from, *direction, to);
            }
        }

        let start = ids
            .get(self.start.as_str())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unknown start room '{}'", self.start))?;
        world.set_start(start);

        Ok(world)
    }
}

/// Loader for world layouts from RON files.
pub struct WorldLoader;

impl WorldLoader {
    /// Load a world layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<WorldSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a world layout from RON text.
    pub fn parse(content: &str) -> LoadResult<WorldSpec> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse world RON: {}", e))
    }

    /// The compiled-in reference world.
    pub fn builtin() -> LoadResult<WorldSpec> {
        Self::parse(BUILTIN_WORLD)
    }
}

//! Rooms and the exits between them.

use std::ops::{Index, IndexMut};

use super::{Enemy, Item, Npc};

/// Index of a room inside its [`World`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub usize);

/// Compass direction of an exit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "north", serialize = "n")]
    North,
    #[strum(to_string = "south", serialize = "s")]
    South,
    #[strum(to_string = "east", serialize = "e")]
    East,
    #[strum(to_string = "west", serialize = "w")]
    West,
}

/// A location. Contents are ordered; combat always picks the first enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    name: String,
    description: String,
    items: Vec<Item>,
    npcs: Vec<Npc>,
    enemies: Vec<Enemy>,
    exits: Vec<(Direction, RoomId)>,
    visited: bool,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            npcs: Vec::new(),
            enemies: Vec::new(),
            exits: Vec::new(),
            visited: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn exits(&self) -> &[(Direction, RoomId)] {
        &self.exits
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.push(npc);
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Adds an exit, replacing any existing exit in the same direction.
    pub fn add_exit(&mut self, direction: Direction, target: RoomId) {
        match self.exits.iter_mut().find(|(dir, _)| *dir == direction) {
            Some(exit) => exit.1 = target,
            None => self.exits.push((direction, target)),
        }
    }

    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(dir, _)| *dir == direction)
            .map(|(_, target)| *target)
    }

    /// Removes the ground item at `index`.
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn enemy_mut(&mut self, index: usize) -> Option<&mut Enemy> {
        self.enemies.get_mut(index)
    }

    pub fn remove_enemy(&mut self, index: usize) -> Option<Enemy> {
        (index < self.enemies.len()).then(|| self.enemies.remove(index))
    }

    pub fn npc(&self, index: usize) -> Option<&Npc> {
        self.npcs.get(index)
    }
}

/// All rooms of a game, addressed by [`RoomId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    rooms: Vec<Room>,
    start: RoomId,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room and returns its id. The first room added is the start room
    /// unless [`World::set_start`] says otherwise.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    pub fn set_start(&mut self, start: RoomId) {
        self.start = start;
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    /// One-way exit from `from` to `to`. Returns false if either room is
    /// unknown.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) -> bool {
        if to.0 >= self.rooms.len() {
            return false;
        }
        match self.rooms.get_mut(from.0) {
            Some(room) => {
                room.add_exit(direction, to);
                true
            }
            None => false,
        }
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Looks a room up by its exact name.
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.name == name)
            .map(RoomId)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Panics on an id that did not come from this world, like slice indexing.
impl Index<RoomId> for World {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }
}

impl IndexMut<RoomId> for World {
    fn index_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn directions_parse_loosely() {
        assert_eq!(Direction::from_str("north"), Ok(Direction::North));
        assert_eq!(Direction::from_str("N"), Ok(Direction::North));
        assert_eq!(Direction::from_str("West"), Ok(Direction::West));
        assert!(Direction::from_str("up").is_err());
        assert_eq!(Direction::East.to_string(), "east");
    }

    #[test]
    fn exits_resolve_and_replace() {
        let mut world = World::new();
        let hall = world.add_room(Room::new("Hall", "Stone and dust."));
        let forest = world.add_room(Room::new("Forest", "Trees."));
        let cave = world.add_room(Room::new("Cave", "Damp."));

        assert!(world.connect(hall, Direction::North, forest));
        assert_eq!(world.room(hall).and_then(|r| r.exit(Direction::North)), Some(forest));

        assert!(world.connect(hall, Direction::North, cave));
        let hall_room = world.room(hall).expect("hall");
        assert_eq!(hall_room.exit(Direction::North), Some(cave));
        assert_eq!(hall_room.exits().len(), 1);
        assert_eq!(hall_room.exit(Direction::South), None);

        assert!(!world.connect(hall, Direction::East, RoomId(9)));
    }

    #[test]
    fn find_by_name_and_start() {
        let mut world = World::new();
        world.add_room(Room::new("Hall", ""));
        let village = world.add_room(Room::new("Village", ""));
        assert_eq!(world.find("Village"), Some(village));
        assert_eq!(world.find("Moon"), None);
        assert_eq!(world.start(), RoomId(0));
        assert_eq!(world[village].name(), "Village");
    }

    #[test]
    fn taking_items_shifts_order() {
        let mut room = Room::new("Hall", "");
        room.add_item(Item::new("Healing Potion", "", 10));
        room.add_item(Item::new("Iron Sword", "", 30));
        assert_eq!(room.take_item(0).map(|i| i.name().to_owned()), Some("Healing Potion".into()));
        assert_eq!(room.items()[0].name(), "Iron Sword");
        assert!(room.take_item(5).is_none());
    }
}

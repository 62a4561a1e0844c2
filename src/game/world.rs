//! Room graph for the facility.
//!
//! Rooms live in a flat vector and refer to each other by [`RoomId`]. Exits are
//! stored per direction, so a one-way passage is simply an exit that has no
//! matching exit on the other side.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::game::errors::GameError;

pub type RoomId = usize;

pub const SERVER_ROOM: &str = "Server Room";
pub const COLD_STORAGE: &str = "Cold Storage";
pub const RESEARCH_LAB: &str = "Research Lab";
pub const MAINTENANCE_CORRIDOR: &str = "Maintenance Corridor";
pub const OBSERVATION_THEATER: &str = "Observation Theater";
pub const SUB_BASEMENT: &str = "Sub-Basement";
pub const CENTRAL_CONTROL: &str = "Central Control";

/// Map order; also the order rooms are created in [`RoomGraph::facility`].
pub const FACILITY_ROOMS: [&str; 7] = [
    SERVER_ROOM,
    COLD_STORAGE,
    RESEARCH_LAB,
    MAINTENANCE_CORRIDOR,
    OBSERVATION_THEATER,
    SUB_BASEMENT,
    CENTRAL_CONTROL,
];

pub const FLASHLIGHT: &str = "flashlight";
pub const BROKEN_KEYCARD: &str = "broken keycard";
pub const MEDKIT: &str = "medkit";
pub const ENCRYPTED_USB: &str = "encrypted USB";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Canonical order used before shuffling.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Parse a direction word; accepts full names and single letters.
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    fn slot(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-shot question bound to a room.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Puzzle {
    pub question: String,
    pub answer: String,
    pub reward: String,
}

impl Puzzle {
    pub fn new(question: &str, answer: &str, reward: &str) -> Self {
        Puzzle {
            question: question.to_string(),
            answer: answer.to_string(),
            reward: reward.to_string(),
        }
    }

    /// Exact, case-sensitive comparison against the expected answer.
    pub fn accepts(&self, answer: &str) -> bool {
        self.answer == answer
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    exits: [Option<RoomId>; 4],
    pub visited: bool,
    /// Stays on the room after pickup; inventory membership blocks re-collection.
    pub item: Option<String>,
    pub puzzle: Option<Puzzle>,
    pub puzzle_solved: bool,
}

impl Room {
    fn new(name: &str) -> Self {
        Room {
            name: name.to_string(),
            exits: [None; 4],
            visited: false,
            item: None,
            puzzle: None,
            puzzle_solved: false,
        }
    }

    pub fn exit(&self, dir: Direction) -> Option<RoomId> {
        self.exits[dir.slot()]
    }

    /// Directions that lead somewhere, in canonical order.
    pub fn open_exits(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.exit(*d).is_some())
            .collect()
    }

    /// The puzzle, if one is still waiting to be solved here.
    pub fn pending_puzzle(&self) -> Option<&Puzzle> {
        if self.puzzle_solved {
            None
        } else {
            self.puzzle.as_ref()
        }
    }
}

/// Read-only view of one room for the `map` dump.
#[derive(Debug, Serialize)]
pub struct RoomSummary<'a> {
    pub name: &'a str,
    pub exits: BTreeMap<&'static str, &'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puzzle: Option<&'a Puzzle>,
}

#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    pub fn new() -> Self {
        RoomGraph { rooms: Vec::new() }
    }

    /// Build the seven-room facility with its items and the lab puzzle.
    pub fn facility() -> Self {
        let mut g = RoomGraph::new();
        let [server, cold, lab, corridor, theater, basement, control] =
            FACILITY_ROOMS.map(|name| g.add_room(name));

        g.link_both(server, Direction::East, lab);
        g.link_both(server, Direction::South, cold);
        g.link_both(cold, Direction::East, corridor);
        g.link_both(lab, Direction::South, corridor);
        g.link_both(corridor, Direction::East, basement);
        g.link_both(lab, Direction::East, theater);
        g.link_both(control, Direction::South, basement);

        g.place_item(server, FLASHLIGHT);
        // Never used by any rule; kept as scenery.
        g.place_item(cold, BROKEN_KEYCARD);
        g.place_puzzle(
            lab,
            Puzzle::new("Enter the 3-digit lab code (hint: 123)", "123", ENCRYPTED_USB),
        );
        g.place_item(corridor, MEDKIT);
        g
    }

    pub fn add_room(&mut self, name: &str) -> RoomId {
        let id = self.rooms.len();
        self.rooms.push(Room::new(name));
        id
    }

    /// One-way passage from `from` to `to`. Both must be ids returned by
    /// [`RoomGraph::add_room`]; anything else panics.
    pub fn link(&mut self, from: RoomId, dir: Direction, to: RoomId) {
        assert!(to < self.rooms.len(), "link target {} is not a room", to);
        self.rooms[from].exits[dir.slot()] = Some(to);
    }

    /// Passage in `dir` from `a` to `b`, plus the way back.
    pub fn link_both(&mut self, a: RoomId, dir: Direction, b: RoomId) {
        self.link(a, dir, b);
        self.link(b, dir.opposite(), a);
    }

    pub fn place_item(&mut self, id: RoomId, item: &str) {
        self.rooms[id].item = Some(item.to_string());
    }

    pub fn place_puzzle(&mut self, id: RoomId, puzzle: Puzzle) {
        self.rooms[id].puzzle = Some(puzzle);
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Ok if `id` names a room in this graph.
    pub fn check_id(&self, id: RoomId) -> Result<(), GameError> {
        if id < self.rooms.len() {
            Ok(())
        } else {
            Err(GameError::InvalidRoomId {
                id,
                len: self.rooms.len(),
            })
        }
    }

    /// Panics if `id` is not in the graph; ids from [`RoomGraph::add_room`]
    /// and [`RoomGraph::exit`] always are.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id]
    }

    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id]
    }

    pub fn id_of(&self, name: &str) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.name == name)
    }

    pub fn require(&self, name: &str) -> Result<RoomId, GameError> {
        self.id_of(name)
            .ok_or_else(|| GameError::UnknownRoom(name.to_string()))
    }

    pub fn room_named(&self, name: &str) -> Option<&Room> {
        self.id_of(name).map(|id| &self.rooms[id])
    }

    pub fn exit(&self, id: RoomId, dir: Direction) -> Option<RoomId> {
        self.rooms.get(id).and_then(|room| room.exit(dir))
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate()
    }

    /// Rooms with their exits resolved to names.
    pub fn layout(&self) -> Vec<RoomSummary<'_>> {
        self.rooms
            .iter()
            .map(|room| RoomSummary {
                name: &room.name,
                exits: Direction::ALL
                    .into_iter()
                    .filter_map(|d| {
                        let to = self.rooms.get(room.exit(d)?)?;
                        Some((d.as_str(), to.name.as_str()))
                    })
                    .collect(),
                item: room.item.as_deref(),
                puzzle: room.puzzle.as_ref(),
            })
            .collect()
    }
}

//! Player, adversary and the session state that ties them to the room graph.

use crate::game::errors::GameError;
use crate::game::world::{RoomGraph, RoomId, OBSERVATION_THEATER, SERVER_ROOM};

pub const STARTING_HEALTH: i32 = 100;

/// Insertion-ordered set of item names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory { items: Vec::new() }
    }

    /// Add an item unless it is already held. Returns true if it was added.
    pub fn add(&mut self, item: &str) -> bool {
        if self.contains(item) {
            return false;
        }
        self.items.push(item.to_string());
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Remove an item, keeping the order of the rest. Returns true if it was held.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: RoomId,
    pub inventory: Inventory,
    pub health: i32,
}

impl Player {
    pub fn new(start: RoomId) -> Self {
        Player {
            position: start,
            inventory: Inventory::new(),
            health: STARTING_HEALTH,
        }
    }

    /// Apply a penalty; health never drops below zero.
    pub fn damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    pub fn is_down(&self) -> bool {
        self.health <= 0
    }
}

#[derive(Debug, Clone)]
pub struct Adversary {
    pub position: RoomId,
    /// Set by nothing yet; no rule reads it.
    pub alert: bool,
}

impl Adversary {
    pub fn new(start: RoomId) -> Self {
        Adversary {
            position: start,
            alert: false,
        }
    }
}

/// Everything a session mutates: the rooms and the two actors walking them.
#[derive(Debug, Clone)]
pub struct GameState {
    pub rooms: RoomGraph,
    pub player: Player,
    pub adversary: Adversary,
}

impl GameState {
    /// Standard facility: player wakes in the Server Room, the AI waits in the
    /// Observation Theater.
    pub fn facility() -> Result<Self, GameError> {
        let rooms = RoomGraph::facility();
        let player = rooms.require(SERVER_ROOM)?;
        let adversary = rooms.require(OBSERVATION_THEATER)?;
        GameState::new(rooms, player, adversary)
    }

    /// Session over a custom graph. Both start ids must name rooms in it.
    pub fn new(
        rooms: RoomGraph,
        player_start: RoomId,
        adversary_start: RoomId,
    ) -> Result<Self, GameError> {
        rooms.check_id(player_start)?;
        rooms.check_id(adversary_start)?;
        Ok(GameState {
            rooms,
            player: Player::new(player_start),
            adversary: Adversary::new(adversary_start),
        })
    }

    pub fn player_room_name(&self) -> &str {
        &self.rooms.room(self.player.position).name
    }

    pub fn adversary_room_name(&self) -> &str {
        &self.rooms.room(self.adversary.position).name
    }

    pub fn co_located(&self) -> bool {
        self.player.position == self.adversary.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_add_is_idempotent_and_ordered() {
        let mut inv = Inventory::new();
        assert!(inv.add("flashlight"));
        assert!(inv.add("medkit"));
        assert!(!inv.add("flashlight"));
        assert_eq!(inv.iter().collect::<Vec<_>>(), vec!["flashlight", "medkit"]);
        assert!(inv.remove("flashlight"));
        assert!(!inv.remove("flashlight"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut p = Player::new(0);
        p.damage(30);
        assert_eq!(p.health, 70);
        p.damage(90);
        assert_eq!(p.health, 0);
        assert!(p.is_down());
        p.heal(20);
        assert_eq!(p.health, 20);
    }

    #[test]
    fn facility_start_positions() {
        let gs = GameState::facility().unwrap();
        assert_eq!(gs.player_room_name(), "Server Room");
        assert_eq!(gs.adversary_room_name(), "Observation Theater");
        assert_eq!(gs.player.health, STARTING_HEALTH);
        assert!(gs.player.inventory.is_empty());
        assert!(!gs.adversary.alert);
        assert!(!gs.co_located());
    }

    #[test]
    fn start_ids_outside_the_graph_are_rejected() {
        let err = GameState::new(RoomGraph::new(), 3, 3).unwrap_err();
        assert!(matches!(err, GameError::InvalidRoomId { id: 3, len: 0 }));

        let mut rooms = RoomGraph::new();
        let only = rooms.add_room("Closet");
        assert!(GameState::new(rooms.clone(), only, only + 1).is_err());
        let gs = GameState::new(rooms, only, only).unwrap();
        assert!(gs.co_located());
    }
}

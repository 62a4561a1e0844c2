//! Game core: the facility, its two inhabitants and the turn loop.
//!
//! Nothing in here touches stdin or stdout; all player interaction goes
//! through the [`Console`] trait so sessions can be scripted end to end.

pub mod actors;
pub mod adversary;
pub mod command;
pub mod encounter;
pub mod engine;
pub mod errors;
pub mod events;
pub mod io;
pub mod render;
pub mod world;

pub use actors::{Adversary, GameState, Inventory, Player, STARTING_HEALTH};
pub use adversary::{move_adversary, random_exit, shuffled_directions};
pub use command::{parse_action, Action};
pub use encounter::{resolve_encounter, EncounterOutcome, EXPOSED_PENALTY};
pub use engine::{check_end, Ending, Game, GameStatus, MEDKIT_HEAL};
pub use errors::GameError;
pub use events::{
    encounter_probability, resolve_room_event, RoomEvent, ENCOUNTER_CHANCE, WRONG_ANSWER_PENALTY,
};
pub use io::{Console, ScriptedConsole};
pub use world::*;

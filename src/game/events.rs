//! What happens when the player enters or examines a room.
//!
//! Exactly one branch fires per visit, in priority order: a pending puzzle,
//! then an uncollected item, then a roll for the AI showing up.

use log::debug;
use rand::Rng;

use crate::game::actors::GameState;
use crate::game::encounter::{resolve_encounter, EncounterOutcome};
use crate::game::errors::GameError;
use crate::game::io::Console;
use crate::logutil::preview_input;

/// Chance per visit that a co-located AI notices the player.
pub const ENCOUNTER_CHANCE: f64 = 0.3;
/// Health lost on a wrong puzzle answer.
pub const WRONG_ANSWER_PENALTY: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    PuzzleSolved { reward: String },
    PuzzleFailed,
    ItemFound(String),
    Encounter(EncounterOutcome),
    /// The roll came up empty, or it hit while the AI was elsewhere.
    Quiet,
}

/// Clamp an encounter chance into `0.0..=1.0`; NaN counts as never.
pub fn encounter_probability(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}

pub fn resolve_room_event<R: Rng + ?Sized>(
    state: &mut GameState,
    console: &mut dyn Console,
    rng: &mut R,
    encounter_chance: f64,
) -> Result<RoomEvent, GameError> {
    let here = state.player.position;

    if let Some(puzzle) = state.rooms.room(here).pending_puzzle().cloned() {
        console.display(&format!("You encounter a puzzle: {}", puzzle.question))?;
        let raw = console.request_line("Answer: ")?;
        let answer = raw.trim();
        debug!(
            "puzzle answer in {}: '{}'",
            state.player_room_name(),
            preview_input(answer)
        );
        if puzzle.accepts(answer) {
            console.display(&format!("Correct! You receive {}", puzzle.reward))?;
            state.player.inventory.add(&puzzle.reward);
            state.rooms.room_mut(here).puzzle_solved = true;
            return Ok(RoomEvent::PuzzleSolved {
                reward: puzzle.reward,
            });
        }
        console.display("Incorrect! The AI notices your failure!")?;
        state.player.damage(WRONG_ANSWER_PENALTY);
        return Ok(RoomEvent::PuzzleFailed);
    }

    let uncollected = state
        .rooms
        .room(here)
        .item
        .clone()
        .filter(|item| !state.player.inventory.contains(item));
    if let Some(item) = uncollected {
        console.display(&format!("You find a {} in the room.", item))?;
        state.player.inventory.add(&item);
        return Ok(RoomEvent::ItemFound(item));
    }

    if rng.gen_bool(encounter_probability(encounter_chance)) && state.co_located() {
        console.display("The AI finds you! You must flee or hide!")?;
        let outcome = resolve_encounter(state, console, rng)?;
        return Ok(RoomEvent::Encounter(outcome));
    }
    Ok(RoomEvent::Quiet)
}

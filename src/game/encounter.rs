//! Face-to-face confrontation with the AI: hide or flee.

use log::debug;
use rand::Rng;

use crate::game::actors::GameState;
use crate::game::adversary::random_exit;
use crate::game::errors::GameError;
use crate::game::io::Console;
use crate::game::world::{Direction, RoomId, FLASHLIGHT};

/// Health lost when a carried flashlight gives the player away.
pub const EXPOSED_PENALTY: i32 = 30;

const HIDE: &str = "hide";
const FLEE: &str = "flee";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// Hid in the dark; nothing changes.
    Hidden,
    /// Tried to hide while holding the flashlight.
    Exposed,
    /// Ran through an exit. The destination is not marked visited.
    Fled { direction: Direction, to: RoomId },
    /// Nowhere to run; health drops to zero.
    Captured,
}

pub fn resolve_encounter<R: Rng + ?Sized>(
    state: &mut GameState,
    console: &mut dyn Console,
    rng: &mut R,
) -> Result<EncounterOutcome, GameError> {
    console.display("Do you try to hide or flee? (hide/flee)")?;
    let choice = console.request_choice(&[HIDE, FLEE])?;

    let outcome = if choice == HIDE {
        if state.player.inventory.contains(FLASHLIGHT) {
            state.player.damage(EXPOSED_PENALTY);
            console.display("Your flashlight exposes you! The AI strikes!")?;
            EncounterOutcome::Exposed
        } else {
            console.display("You hide in the shadows and escape detection.")?;
            EncounterOutcome::Hidden
        }
    } else {
        match random_exit(&state.rooms, state.player.position, rng) {
            Some((direction, to)) => {
                state.player.position = to;
                console.display(&format!(
                    "You flee {} to {}.",
                    direction,
                    state.player_room_name()
                ))?;
                EncounterOutcome::Fled { direction, to }
            }
            None => {
                state.player.health = 0;
                console.display("No escape route! The AI catches you!")?;
                EncounterOutcome::Captured
            }
        }
    };
    debug!("encounter resolved: {:?}", outcome);
    Ok(outcome)
}

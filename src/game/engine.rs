//! Turn controller and end-condition check.
//!
//! A [`Game`] owns the whole session: room graph, both actors and the random
//! source. Each call to [`Game::play_turn`] shows the status, reads one action,
//! resolves it, lets the AI wander, then checks for an ending.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::actors::GameState;
use crate::game::adversary::move_adversary;
use crate::game::command::{parse_action, Action};
use crate::game::errors::GameError;
use crate::game::events::{encounter_probability, resolve_room_event, ENCOUNTER_CHANCE};
use crate::game::io::Console;
use crate::game::render::{intro_lines, map_lines, status_lines, ACTION_MENU, MAP_HEADER};
use crate::game::world::{Direction, ENCRYPTED_USB, MEDKIT, SUB_BASEMENT};
use crate::logutil::preview_input;

pub const MEDKIT_HEAL: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    DeadOrCaptured,
    Survivor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Ended(Ending),
}

/// Terminal check; death is checked before escape.
pub fn check_end(gs: &GameState) -> Option<Ending> {
    if gs.player.is_down() {
        return Some(Ending::DeadOrCaptured);
    }
    if gs.player_room_name() == SUB_BASEMENT && gs.player.inventory.contains(ENCRYPTED_USB) {
        return Some(Ending::Survivor);
    }
    None
}

pub struct Game<R: Rng = StdRng> {
    state: GameState,
    rng: R,
    status: GameStatus,
    turn: u32,
    encounter_chance: f64,
}

impl Game<StdRng> {
    /// Fresh facility session. Without a seed the random source comes from entropy.
    pub fn new(seed: Option<u64>) -> Result<Self, GameError> {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Ok(Game::with_rng(GameState::facility()?, rng))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(state: GameState, rng: R) -> Self {
        Game {
            state,
            rng,
            status: GameStatus::Running,
            turn: 0,
            encounter_chance: ENCOUNTER_CHANCE,
        }
    }

    /// Override the per-visit encounter roll. Clamped to `0.0..=1.0`; NaN
    /// disables encounters.
    pub fn with_encounter_chance(mut self, chance: f64) -> Self {
        self.encounter_chance = encounter_probability(chance);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of turns started so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn intro(&self, console: &mut dyn Console) -> Result<(), GameError> {
        for line in intro_lines() {
            console.display(line)?;
        }
        Ok(())
    }

    /// Play turns until an ending is reached.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<Ending, GameError> {
        info!(
            "session start: player in {}, AI in {}",
            self.state.player_room_name(),
            self.state.adversary_room_name()
        );
        loop {
            if let GameStatus::Ended(ending) = self.play_turn(console)? {
                return Ok(ending);
            }
        }
    }

    /// Play one full turn. Once the game has ended this is a no-op.
    pub fn play_turn(&mut self, console: &mut dyn Console) -> Result<GameStatus, GameError> {
        if let GameStatus::Ended(_) = self.status {
            return Ok(self.status);
        }
        self.turn = self.turn.saturating_add(1);

        self.show_status(console)?;
        console.display(ACTION_MENU)?;
        let raw = console.request_line("> ")?;
        let action = parse_action(&raw);
        debug!(
            "turn {}: '{}' -> {:?}",
            self.turn,
            preview_input(raw.trim()),
            action
        );
        self.apply(action, console)?;

        move_adversary(&mut self.state, &mut self.rng);

        if let Some(ending) = check_end(&self.state) {
            announce(ending, console)?;
            info!(
                "session ended on turn {}: {:?} (health {}, room {})",
                self.turn,
                ending,
                self.state.player.health,
                self.state.player_room_name()
            );
            self.status = GameStatus::Ended(ending);
        }
        Ok(self.status)
    }

    fn show_status(&self, console: &mut dyn Console) -> Result<(), GameError> {
        console.display("")?;
        for line in status_lines(&self.state) {
            console.display(&line)?;
        }
        console.display("")?;
        console.display(MAP_HEADER)?;
        for line in map_lines(&self.state) {
            console.display_map_line(&line)?;
        }
        console.display("")
    }

    /// Resolve one player action against the current state.
    pub fn apply(&mut self, action: Action, console: &mut dyn Console) -> Result<(), GameError> {
        match action {
            Action::Move(Some(dir)) => self.move_player(dir, console),
            Action::Move(None) => console.display("You can't go that way."),
            Action::Examine => {
                console.display(&format!("You examine {}.", self.state.player_room_name()))?;
                self.room_event(console)
            }
            Action::Use(item) => self.use_item(&item, console),
            Action::Hide => console.display("You hide in the shadows, avoiding detection."),
            Action::Unknown => console.display("Unknown action. Try again."),
        }
    }

    fn move_player(&mut self, dir: Direction, console: &mut dyn Console) -> Result<(), GameError> {
        let Some(to) = self.state.rooms.exit(self.state.player.position, dir) else {
            return console.display("You can't go that way.");
        };
        self.state.player.position = to;
        self.state.rooms.room_mut(to).visited = true;
        console.display(&format!(
            "You move {} to {}.",
            dir,
            self.state.player_room_name()
        ))?;
        self.room_event(console)
    }

    fn room_event(&mut self, console: &mut dyn Console) -> Result<(), GameError> {
        let event = resolve_room_event(
            &mut self.state,
            console,
            &mut self.rng,
            self.encounter_chance,
        )?;
        debug!("room event in {}: {:?}", self.state.player_room_name(), event);
        Ok(())
    }

    fn use_item(&mut self, item: &str, console: &mut dyn Console) -> Result<(), GameError> {
        if !self.state.player.inventory.contains(item) {
            return console.display(&format!("You don't have {}.", item));
        }
        console.display(&format!("You use {}.", item))?;
        if item == MEDKIT {
            self.state.player.heal(MEDKIT_HEAL);
            self.state.player.inventory.remove(item);
            console.display("You regain 20 health!")
        } else {
            console.display("Nothing happens.")
        }
    }
}

fn announce(ending: Ending, console: &mut dyn Console) -> Result<(), GameError> {
    match ending {
        Ending::DeadOrCaptured => {
            console.display("You have succumbed to your injuries or been captured by the AI.")?;
            console.display("GAME OVER: DEAD or CAPTURED")
        }
        Ending::Survivor => {
            console.display("You hack the AI and proceed to the escape hatch!")?;
            console.display("CONGRATULATIONS: SURVIVOR ENDING")
        }
    }
}

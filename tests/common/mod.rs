//! Shared fixtures for session-level tests.

use facility_black::game::{Game, GameState};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Facility session with a fixed seed and the encounter roll pinned.
pub fn seeded_game(seed: u64, encounter_chance: f64) -> Game<StdRng> {
    Game::with_rng(
        GameState::facility().expect("facility rooms"),
        StdRng::seed_from_u64(seed),
    )
    .with_encounter_chance(encounter_chance)
}

/// Session where the AI never shows up on a visit.
#[allow(dead_code)]
pub fn quiet_game(seed: u64) -> Game<StdRng> {
    seeded_game(seed, 0.0)
}

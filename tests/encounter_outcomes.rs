mod common;

use facility_black::game::{
    Direction, Ending, Game, GameState, GameStatus, RoomGraph, ScriptedConsole, FLASHLIGHT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Two rooms wired one way: the AI starts in the dead end and can never leave it.
fn trap() -> GameState {
    let mut rooms = RoomGraph::new();
    let hall = rooms.add_room("Hall");
    let cell = rooms.add_room("Cell");
    rooms.link(hall, Direction::East, cell);
    GameState::new(rooms, hall, cell).unwrap()
}

#[test]
fn fleeing_a_sealed_room_is_fatal() {
    let mut game = Game::with_rng(trap(), StdRng::seed_from_u64(4)).with_encounter_chance(1.0);
    let mut console = ScriptedConsole::new(["move east", "flee"]);

    let status = game.play_turn(&mut console).unwrap();

    assert_eq!(status, GameStatus::Ended(Ending::DeadOrCaptured));
    assert_eq!(game.state().player.health, 0);
    assert!(console.saw("The AI finds you! You must flee or hide!"));
    assert!(console.saw("No escape route! The AI catches you!"));
    assert!(console.saw("GAME OVER: DEAD or CAPTURED"));
}

#[test]
fn hiding_with_the_flashlight_hurts() {
    let mut game = Game::with_rng(trap(), StdRng::seed_from_u64(4)).with_encounter_chance(1.0);
    game.state_mut().player.inventory.add(FLASHLIGHT);
    let mut console = ScriptedConsole::new(["move east", "run", "hide"]);

    assert_eq!(game.play_turn(&mut console).unwrap(), GameStatus::Running);
    assert_eq!(game.state().player.health, 70);
    assert!(console.saw("Invalid choice. Options: hide, flee"));
    assert!(console.saw("Your flashlight exposes you! The AI strikes!"));
}

#[test]
fn hiding_empty_handed_is_free() {
    let mut game = Game::with_rng(trap(), StdRng::seed_from_u64(4)).with_encounter_chance(1.0);
    let mut console = ScriptedConsole::new(["move east", "HIDE"]);
    game.play_turn(&mut console).unwrap();
    assert_eq!(game.state().player.health, 100);
    assert!(console.saw("You hide in the shadows and escape detection."));
}

#[test]
fn certain_roll_is_quiet_when_ai_is_elsewhere() {
    let mut game = common::seeded_game(8, 1.0);
    let mut console = ScriptedConsole::new(["examine", "examine"]);

    // First examine picks up the flashlight; the AI's only exit from the
    // theater leads into the Research Lab.
    game.play_turn(&mut console).unwrap();
    assert!(game.state().player.inventory.contains(FLASHLIGHT));
    assert_eq!(game.state().adversary_room_name(), "Research Lab");

    game.play_turn(&mut console).unwrap();
    assert!(!console.saw("The AI finds you!"));
    assert_eq!(game.state().player.health, 100);
}

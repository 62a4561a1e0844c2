//! Text for the status block, the facility map and the fixed story beats.

use crate::game::actors::GameState;

pub const ACTION_MENU: &str =
    "Choose an action: move north/south/east/west, examine, use <item>, hide";

pub fn intro_lines() -> [&'static str; 4] {
    [
        "AI HORROR: FACILITY BLACK",
        "You wake up in a dark, abandoned underground facility.",
        "A cold mechanical voice echoes:",
        "\"Hello, human. You are awake. That was a mistake.\"",
    ]
}

pub fn status_lines(gs: &GameState) -> [String; 3] {
    let inventory = if gs.player.inventory.is_empty() {
        "(empty)".to_string()
    } else {
        gs.player.inventory.iter().collect::<Vec<_>>().join(", ")
    };
    [
        format!("Current room: {}", gs.player_room_name()),
        format!("Health: {}", gs.player.health),
        format!("Inventory: {}", inventory),
    ]
}

pub const MAP_HEADER: &str = "Facility Map (Visited = X, Current = P):";

/// One `[Abc:M]` cell per room in graph order: P = player here, X = visited.
pub fn map_lines(gs: &GameState) -> Vec<String> {
    gs.rooms
        .iter()
        .map(|(id, room)| {
            let mark = if id == gs.player.position {
                'P'
            } else if room.visited {
                'X'
            } else {
                ' '
            };
            let short: String = room.name.chars().take(3).collect();
            format!("[{}:{}]", short, mark)
        })
        .collect()
}

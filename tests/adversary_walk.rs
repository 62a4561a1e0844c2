use facility_black::game::{move_adversary, GameState, FACILITY_ROOMS};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn walk(seed: u64, steps: usize) -> Vec<String> {
    let mut gs = GameState::facility().unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..steps)
        .map(|_| {
            move_adversary(&mut gs, &mut rng);
            gs.adversary_room_name().to_string()
        })
        .collect()
}

#[test]
fn same_seed_same_patrol() {
    assert_eq!(walk(2024, 50), walk(2024, 50));
}

#[test]
fn patrol_stays_inside_the_facility() {
    let path = walk(77, 200);
    assert!(path.iter().all(|room| FACILITY_ROOMS.contains(&room.as_str())));
    // Observation Theater's only door opens onto the lab.
    assert_eq!(path[0], "Research Lab");
}

#[test]
fn long_patrol_reaches_every_room() {
    let path = walk(5, 2000);
    for room in FACILITY_ROOMS {
        assert!(path.iter().any(|r| r == room), "AI never reached {}", room);
    }
}

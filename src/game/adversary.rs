//! The facility AI's random walk.
//!
//! No pursuit, no memory: each turn the AI shuffles the four directions and
//! takes the first one with an exit.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::actors::GameState;
use crate::game::world::{Direction, RoomGraph, RoomId};

/// The four directions in a fresh uniform order.
pub fn shuffled_directions<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 4] {
    let mut dirs = Direction::ALL;
    dirs.shuffle(rng);
    dirs
}

/// First exit out of `from` in a random direction order, if the room has any.
pub fn random_exit<R: Rng + ?Sized>(
    rooms: &RoomGraph,
    from: RoomId,
    rng: &mut R,
) -> Option<(Direction, RoomId)> {
    shuffled_directions(rng)
        .into_iter()
        .find_map(|d| rooms.exit(from, d).map(|to| (d, to)))
}

/// Advance the AI one step. Returns the direction taken, or None if it is boxed in.
pub fn move_adversary<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<Direction> {
    let (dir, to) = random_exit(&state.rooms, state.adversary.position, rng)?;
    trace!(
        "adversary {} -> {} ({})",
        state.adversary_room_name(),
        state.rooms.room(to).name,
        dir
    );
    state.adversary.position = to;
    Some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn walk(seed: u64, steps: usize) -> Vec<RoomId> {
        let mut gs = GameState::facility().unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        (0..steps)
            .map(|_| {
                move_adversary(&mut gs, &mut rng);
                gs.adversary.position
            })
            .collect()
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let mut dirs = shuffled_directions(&mut rng).to_vec();
            dirs.sort_by_key(|d| d.as_str());
            let mut all = Direction::ALL.to_vec();
            all.sort_by_key(|d| d.as_str());
            assert_eq!(dirs, all);
        }
    }

    #[test]
    fn seeded_walk_is_reproducible() {
        assert_eq!(walk(42, 50), walk(42, 50));
    }

    #[test]
    fn every_step_follows_an_exit() {
        let mut gs = GameState::facility().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let before = gs.adversary.position;
            let dir = move_adversary(&mut gs, &mut rng).expect("facility rooms all have exits");
            assert_eq!(gs.rooms.exit(before, dir), Some(gs.adversary.position));
        }
    }

    #[test]
    fn boxed_in_adversary_stays_put() {
        let mut rooms = RoomGraph::new();
        let cell = rooms.add_room("Cell");
        let hall = rooms.add_room("Hall");
        rooms.link(hall, Direction::North, cell);
        let mut gs = GameState::new(rooms, hall, cell).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(move_adversary(&mut gs, &mut rng), None);
        assert_eq!(gs.adversary.position, cell);
    }
}

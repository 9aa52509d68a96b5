//! Per-frame simulation update
//!
//! Orchestrates one variable-timestep frame: spawning, player motion, ghost
//! motion, collision resolution. Everything scales by the measured dt, so
//! frame rate only affects integration error, never nominal velocity.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::motion::{step_ghosts, step_player};
use super::state::GameState;

/// Advance the whole simulation by one frame of `dt` seconds.
///
/// `direction` is the player input vector with each axis in {-1, 0, 1}.
/// Returns the number of ghosts caught this frame.
pub fn tick(state: &mut GameState, direction: Vec2, dt: f32) -> usize {
    let GameState {
        rng,
        player,
        ghosts,
        spawner,
        tuning,
        ..
    } = state;

    spawner.run(ghosts, rng, tuning, dt);
    step_player(player, direction, tuning, dt);
    step_ghosts(ghosts, rng, tuning, dt);

    resolve_collisions(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ghost;
    use crate::tuning::Tuning;

    #[test]
    fn population_grows_by_one_after_spawn_interval() {
        let mut state = GameState::new(11, Tuning::default());
        // Park the player in a corner so nothing collides
        state.player.pos = Vec2::new(40.0, 40.0);
        for ghost in state.ghosts.iter_mut() {
            ghost.pos = Vec2::new(700.0, 500.0);
        }
        assert_eq!(state.ghosts.len(), 5);

        for _ in 0..35 {
            tick(&mut state, Vec2::ZERO, 0.1);
        }
        assert_eq!(state.ghosts.len(), 6);
    }

    #[test]
    fn overlapping_ghost_goes_invisible_and_freezes() {
        let tuning = Tuning {
            initial_ghosts: 0,
            ..Tuning::default()
        };
        let mut state = GameState::new(5, tuning);
        state.ghosts.push(Ghost::new(state.player.pos));

        let caught = tick(&mut state, Vec2::ZERO, 0.016);
        assert_eq!(caught, 1);
        assert!(!state.ghosts.get(0).unwrap().visible);

        let frozen_pos = state.ghosts.get(0).unwrap().pos;
        for _ in 0..200 {
            tick(&mut state, Vec2::ZERO, 0.016);
        }
        assert_eq!(state.ghosts.get(0).unwrap().pos, frozen_pos);
    }

    #[test]
    fn collision_uses_post_motion_positions() {
        // Collision resolves after ghost motion: a ghost that starts the
        // frame overlapping the player but slides out of overlap within the
        // same frame is not caught.
        let tuning = Tuning {
            initial_ghosts: 0,
            ..Tuning::default()
        };
        let mut state = GameState::new(2, tuning);
        // Player bounds span x 360..440; ghost starts just inside the right
        // edge and moves right, clearing the overlap this frame
        let mut ghost = Ghost::new(Vec2::new(438.0, 300.0));
        ghost.vel = Vec2::new(100.0, 0.0);
        ghost.turn_elapsed = 0.0;
        state.ghosts.push(ghost);

        let caught = tick(&mut state, Vec2::ZERO, 0.1);
        assert_eq!(caught, 0);
        let ghost = state.ghosts.get(0).unwrap();
        assert!(ghost.visible);
        assert_eq!(ghost.pos.x, 448.0);
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut state = GameState::new(3, Tuning::default());
        let before = state.player.pos;
        let ghost_positions: Vec<_> = state.ghosts.iter().map(|g| g.pos).collect();

        tick(&mut state, Vec2::new(1.0, 1.0), 0.0);

        assert_eq!(state.player.pos, before);
        for (ghost, pos) in state.ghosts.iter().zip(ghost_positions) {
            assert_eq!(ghost.pos, pos);
        }
    }

    #[test]
    fn caught_ghosts_do_not_respawn_in_their_slot() {
        let tuning = Tuning {
            initial_ghosts: 1,
            max_ghosts: 1,
            ..Tuning::default()
        };
        let mut state = GameState::new(8, tuning);
        if let Some(ghost) = state.ghosts.get_mut(0) {
            ghost.pos = state.player.pos;
        }

        tick(&mut state, Vec2::ZERO, 0.016);
        assert_eq!(state.ghosts.visible_count(), 0);

        // Pool is at capacity even though its only ghost is gone: no respawn
        for _ in 0..500 {
            tick(&mut state, Vec2::ZERO, 0.1);
        }
        assert_eq!(state.ghosts.len(), 1);
        assert_eq!(state.ghosts.visible_count(), 0);
    }
}

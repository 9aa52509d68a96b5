//! Ghost spawning
//!
//! At most one new ghost per spawn interval, never past the population cap.
//! The timer is explicit state here rather than a hidden static so tests can
//! drive it frame by frame.

use rand_pcg::Pcg32;

use super::state::{Ghost, GhostPool, random_scene_pos};
use crate::tuning::Tuning;

/// Spawn timing state
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    /// Seconds accumulated since the last successful spawn
    elapsed: f32,
}

impl Spawner {
    /// Advance the spawn timer by `dt` and maybe introduce one new ghost at a
    /// uniformly random scene position. The timer only resets on a successful
    /// spawn; at capacity nothing happens.
    ///
    /// Returns whether a ghost was spawned this frame.
    pub fn run(&mut self, pool: &mut GhostPool, rng: &mut Pcg32, tuning: &Tuning, dt: f32) -> bool {
        self.elapsed += dt;
        if pool.len() >= tuning.max_ghosts || self.elapsed < tuning.spawn_interval {
            return false;
        }
        pool.push(Ghost::new(random_scene_pos(rng, tuning)));
        self.elapsed = 0.0;
        log::debug!("Spawned ghost, population now {}", pool.len());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn fixture(initial: usize) -> (Spawner, GhostPool, Pcg32, Tuning) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pool = GhostPool::default();
        for _ in 0..initial {
            pool.push(Ghost::new(random_scene_pos(&mut rng, &tuning)));
        }
        (Spawner::default(), pool, rng, tuning)
    }

    #[test]
    fn no_spawn_before_interval() {
        let (mut spawner, mut pool, mut rng, tuning) = fixture(5);
        assert!(!spawner.run(&mut pool, &mut rng, &tuning, 2.9));
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn one_ghost_after_interval_elapses() {
        // Start with 5 ghosts, cap 10, interval 3s: after 3s of simulated
        // time the population becomes 6.
        let (mut spawner, mut pool, mut rng, tuning) = fixture(5);
        for _ in 0..6 {
            spawner.run(&mut pool, &mut rng, &tuning, 0.5);
        }
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn timer_resets_on_spawn() {
        let (mut spawner, mut pool, mut rng, tuning) = fixture(5);
        assert!(spawner.run(&mut pool, &mut rng, &tuning, 3.0));
        // Fresh interval begins; the next frame must not spawn again
        assert!(!spawner.run(&mut pool, &mut rng, &tuning, 0.1));
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let (mut spawner, mut pool, mut rng, tuning) = fixture(9);
        assert!(spawner.run(&mut pool, &mut rng, &tuning, 10.0));
        assert_eq!(pool.len(), 10);
        for _ in 0..20 {
            assert!(!spawner.run(&mut pool, &mut rng, &tuning, 10.0));
        }
        assert_eq!(pool.len(), 10);
    }

    #[test]
    fn spawned_ghost_lands_inside_scene() {
        let (mut spawner, mut pool, mut rng, tuning) = fixture(0);
        spawner.run(&mut pool, &mut rng, &tuning, 5.0);
        let ghost = pool.get(0).unwrap();
        assert!(ghost.pos.x >= 0.0 && ghost.pos.x < tuning.scene_width);
        assert!(ghost.pos.y >= 0.0 && ghost.pos.y < tuning.scene_height);
        assert!(ghost.visible);
    }
}

//! Entity types and the ghost store

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::spawn::Spawner;
use crate::tuning::Tuning;

/// The player-controlled circle
#[derive(Debug, Clone)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Speed in pixels/second
    pub speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_start_x, tuning.player_start_y),
            radius: tuning.player_radius,
            speed: tuning.player_speed,
        }
    }

    /// Axis-aligned bounds circumscribing the player circle
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos - Vec2::splat(self.radius), Vec2::splat(self.radius * 2.0))
    }
}

/// A roaming obstacle sprite
#[derive(Debug, Clone)]
pub struct Ghost {
    /// Top-left corner of the sprite bounds
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds since this ghost last re-rolled its velocity
    pub turn_elapsed: f32,
    /// Alive tag: flips off on contact with the player, permanently
    pub visible: bool,
}

impl Ghost {
    /// A fresh ghost sits still until its first direction change comes due
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            turn_elapsed: 0.0,
            visible: true,
        }
    }

    /// Sprite bounds for the given (post-scale) sprite extent
    pub fn bounds(&self, size: Vec2) -> Aabb {
        Aabb::new(self.pos, size)
    }
}

/// Growable ghost store
///
/// Ghosts are never removed or reordered; death is the `visible` tag flipping
/// off. The population cap is the spawner's job, not the store's.
#[derive(Debug, Clone, Default)]
pub struct GhostPool {
    ghosts: Vec<Ghost>,
}

impl GhostPool {
    pub fn push(&mut self, ghost: Ghost) {
        self.ghosts.push(ghost);
    }

    pub fn len(&self) -> usize {
        self.ghosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ghosts.is_empty()
    }

    /// Ghosts still in play
    pub fn visible_count(&self) -> usize {
        self.ghosts.iter().filter(|g| g.visible).count()
    }

    pub fn get(&self, index: usize) -> Option<&Ghost> {
        self.ghosts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Ghost> {
        self.ghosts.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ghost> {
        self.ghosts.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ghost> {
        self.ghosts.iter_mut()
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Player,
    pub ghosts: GhostPool,
    pub spawner: Spawner,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh run: seeded RNG, player at its start position, and the
    /// initial ghost batch scattered uniformly across the scene.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ghosts = GhostPool::default();
        for _ in 0..tuning.initial_ghosts {
            ghosts.push(Ghost::new(random_scene_pos(&mut rng, &tuning)));
        }
        Self {
            seed,
            rng,
            player: Player::new(&tuning),
            ghosts,
            spawner: Spawner::default(),
            tuning,
        }
    }
}

/// Uniform position draw over the full scene, independent per axis
pub fn random_scene_pos(rng: &mut Pcg32, tuning: &Tuning) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..tuning.scene_width),
        rng.random_range(0.0..tuning.scene_height),
    )
}

//! Player and ghost kinematics
//!
//! Variable-timestep integration: every displacement is velocity times the
//! measured frame dt. Ghosts reflect off scene edges instead of stopping;
//! the player clamps.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GhostPool, Player};
use crate::tuning::Tuning;

/// Advance the player along the input direction, keeping the full circular
/// extent inside the scene.
pub fn step_player(player: &mut Player, direction: Vec2, tuning: &Tuning, dt: f32) {
    let new_pos = player.pos + direction * player.speed * dt;
    player.pos = Vec2::new(
        new_pos.x.clamp(player.radius, tuning.scene_width - player.radius),
        new_pos.y.clamp(player.radius, tuning.scene_height - player.radius),
    );
}

/// Advance every visible ghost: periodic random re-direction, integration,
/// then boundary reflection. Invisible ghosts are frozen - no motion, no
/// timer advance.
pub fn step_ghosts(pool: &mut GhostPool, rng: &mut Pcg32, tuning: &Tuning, dt: f32) {
    let max = tuning.scene_size() - tuning.ghost_size();
    let range = tuning.ghost_speed_range;

    for ghost in pool.iter_mut() {
        if !ghost.visible {
            continue;
        }

        ghost.turn_elapsed += dt;
        if ghost.turn_elapsed > tuning.direction_change_every {
            ghost.vel = Vec2::new(rng.random_range(-range..=range), rng.random_range(-range..=range));
            ghost.turn_elapsed = 0.0;
        }

        ghost.pos += ghost.vel * dt;

        // Reflect, not stop: flip the velocity axis that hit the edge
        if ghost.pos.x < 0.0 || ghost.pos.x > max.x {
            ghost.vel.x = -ghost.vel.x;
        }
        if ghost.pos.y < 0.0 || ghost.pos.y > max.y {
            ghost.vel.y = -ghost.vel.y;
        }
        ghost.pos = ghost.pos.clamp(Vec2::ZERO, max);
    }
}

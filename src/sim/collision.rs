//! Axis-aligned collision between the player and visible ghosts

use glam::Vec2;

use super::state::GameState;

/// Axis-aligned bounding box, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test: boxes that merely touch along an edge do not
    /// intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max().x
            && other.min.x < self.max().x
            && self.min.y < other.max().y
            && other.min.y < self.max().y
    }
}

/// Mark every visible ghost whose bounds overlap the player's as out of play.
///
/// Each overlap is independent; all of them are resolved in the same frame,
/// in any order. Returns how many ghosts were removed.
pub fn resolve_collisions(state: &mut GameState) -> usize {
    let player_bounds = state.player.bounds();
    let ghost_size = state.tuning.ghost_size();

    let mut caught = 0;
    for ghost in state.ghosts.iter_mut() {
        if ghost.visible && ghost.bounds(ghost_size).intersects(&player_bounds) {
            ghost.visible = false;
            caught += 1;
        }
    }
    if caught > 0 {
        log::debug!(
            "Caught {caught} ghost(s), {} still in play",
            state.ghosts.visible_count()
        );
    }
    caught
}

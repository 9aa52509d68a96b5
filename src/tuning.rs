//! Data-driven gameplay numbers
//!
//! Everything the simulation needs to know that isn't code. Defaults match
//! the built-in balance; a JSON file next to the binary can override any
//! subset of fields for experimentation.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scene bounds in pixels
    pub scene_width: f32,
    pub scene_height: f32,

    // === Player ===
    pub player_start_x: f32,
    pub player_start_y: f32,
    /// Player circle radius
    pub player_radius: f32,
    /// Player speed in pixels/second
    pub player_speed: f32,

    // === Ghosts ===
    /// Seconds between random velocity re-rolls per ghost
    pub direction_change_every: f32,
    /// Ghost velocity axes drawn uniformly from [-range, range]
    pub ghost_speed_range: f32,
    /// Sprite scale applied to the ghost texture when drawing
    pub ghost_sprite_scale: f32,
    /// Ghost sprite extent in pixels (post-scale); the app overwrites these
    /// from the dimensions of the texture it actually loads
    pub ghost_width: f32,
    pub ghost_height: f32,

    // === Spawning ===
    pub initial_ghosts: usize,
    pub max_ghosts: usize,
    /// Minimum seconds between introducing two new ghosts
    pub spawn_interval: f32,

    /// Presentation cap requested from the window
    pub frame_rate_cap: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            direction_change_every: DIRECTION_CHANGE_EVERY,
            ghost_speed_range: GHOST_SPEED_RANGE,
            ghost_sprite_scale: GHOST_SPRITE_SCALE,
            ghost_width: GHOST_FALLBACK_SIZE,
            ghost_height: GHOST_FALLBACK_SIZE,
            initial_ghosts: INITIAL_GHOSTS,
            max_ghosts: MAX_GHOSTS,
            spawn_interval: SPAWN_INTERVAL,
            frame_rate_cap: FRAME_RATE_CAP,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from `path`, falling back to defaults when the
    /// file is absent or malformed. A malformed file is worth a warning; a
    /// missing one is the normal case.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {}", path.display());
                    tuning.sanitized()
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Clamp loaded values the rest of the game divides by. A zero frame
    /// cap would turn the per-frame dt infinite.
    fn sanitized(mut self) -> Self {
        if self.frame_rate_cap == 0 {
            log::warn!("frame_rate_cap of 0 is not usable, clamping to 1");
            self.frame_rate_cap = 1;
        }
        self
    }

    /// Scene bounds as a vector
    pub fn scene_size(&self) -> Vec2 {
        Vec2::new(self.scene_width, self.scene_height)
    }

    /// Ghost sprite extent as a vector
    pub fn ghost_size(&self) -> Vec2 {
        Vec2::new(self.ghost_width, self.ghost_height)
    }
}

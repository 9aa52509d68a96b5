//! Ghost Dodge - a small 2D dodge-the-ghosts arcade game
//!
//! Core modules:
//! - `sim`: Real-time simulation (entities, spawning, motion, collisions)
//! - `platform`: Windowing/rendering collaborator seam + headless backend
//! - `app`: Frame loop wiring input, simulation, and rendering together
//! - `tuning`: Data-driven gameplay numbers

pub mod app;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Gameplay constant defaults
pub mod consts {
    /// Scene dimensions in pixels
    pub const SCENE_WIDTH: f32 = 800.0;
    pub const SCENE_HEIGHT: f32 = 600.0;

    /// Player defaults - a circle starting at scene center
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_RADIUS: f32 = 40.0;
    /// Player speed in pixels/second
    pub const PLAYER_SPEED: f32 = 150.0;

    /// Seconds between random velocity re-rolls per ghost
    pub const DIRECTION_CHANGE_EVERY: f32 = 2.0;
    /// Ghost velocity axes drawn uniformly from [-range, range]
    pub const GHOST_SPEED_RANGE: f32 = 100.0;
    /// Sprite scale applied to the ghost texture when drawing
    pub const GHOST_SPRITE_SCALE: f32 = 0.1;
    /// Ghost extent in pixels when no texture has been measured yet
    pub const GHOST_FALLBACK_SIZE: f32 = 64.0;

    /// Spawning
    pub const INITIAL_GHOSTS: usize = 5;
    pub const MAX_GHOSTS: usize = 10;
    /// Minimum seconds between introducing two new ghosts
    pub const SPAWN_INTERVAL: f32 = 3.0;

    /// Presentation cap requested from the windowing collaborator
    pub const FRAME_RATE_CAP: u32 = 120;
}

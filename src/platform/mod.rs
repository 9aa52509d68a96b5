//! Windowing/rendering collaborator seam
//!
//! The game needs very little from the outside world: a window, a stream of
//! input events, a handful of draw calls, and a restartable clock. `Platform`
//! captures exactly that seam. A real windowed backend lives outside this
//! crate; `headless` provides the windowless one used by tests and the demo
//! binary.

pub mod headless;

pub use headless::HeadlessPlatform;

use std::path::Path;

use anyhow::Result;
use glam::Vec2;

/// Directional keys the game reacts to; everything else is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// One OS input event pulled off the window's queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// User or OS asked the window to close
    Closed,
    KeyDown(Key),
    KeyUp(Key),
}

/// Handle to a loaded texture. Carries pixel dimensions so the simulation can
/// size sprite bounds from what was actually loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Pixel dimensions as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// RGBA clear color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

/// One sprite draw call: which texture, where, at what scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub texture: Texture,
    /// Top-left corner in scene coordinates
    pub pos: Vec2,
    pub scale: f32,
}

/// Everything the frame loop consumes from the windowing collaborator
pub trait Platform {
    /// Open the game window
    fn create_window(&mut self, width: u32, height: u32, title: &str);

    /// Ask the backend to cap presentation at `fps` frames per second
    fn set_frame_rate_cap(&mut self, fps: u32);

    /// Whether the window is still open
    fn is_open(&self) -> bool;

    /// Close the window; `is_open` reports false afterwards
    fn close(&mut self);

    /// Pull the next pending input event, if any
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Load an image asset. Failure here is fatal at startup.
    fn load_texture(&mut self, path: &Path) -> Result<Texture>;

    /// Seconds elapsed since the last call (or since creation), then restart
    fn restart_clock(&mut self) -> f32;

    fn clear(&mut self, color: Color);

    fn draw(&mut self, sprite: Sprite);

    fn present(&mut self);
}

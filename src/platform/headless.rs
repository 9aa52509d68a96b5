//! Windowless backend
//!
//! Drives the frame loop without opening a window: input events come from a
//! scripted queue, draw calls are recorded, and the clock is either a real
//! `Instant` or a fixed per-frame dt. Used by the demo binary's smoke run and
//! by the test suite.

use std::collections::VecDeque;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use super::{Color, InputEvent, Platform, Sprite, Texture};

#[derive(Debug)]
pub struct HeadlessPlatform {
    open: bool,
    events: VecDeque<InputEvent>,
    clock: Instant,
    /// Fixed dt override for deterministic runs (None = wall clock)
    forced_dt: Option<f32>,
    /// Emit a close event once this many frames have been presented
    auto_close_after: Option<u64>,
    next_texture_id: u32,
    frame_rate_cap: Option<u32>,
    /// Sprites drawn since the last clear
    pub draws: Vec<Sprite>,
    pub last_clear: Option<Color>,
    pub frames_presented: u64,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self {
            open: false,
            events: VecDeque::new(),
            clock: Instant::now(),
            forced_dt: None,
            auto_close_after: None,
            next_texture_id: 0,
            frame_rate_cap: None,
            draws: Vec::new(),
            last_clear: None,
            frames_presented: 0,
        }
    }

    /// Replace the wall clock with a constant per-frame dt
    pub fn with_fixed_dt(dt: f32) -> Self {
        Self {
            forced_dt: Some(dt),
            ..Self::new()
        }
    }

    /// Report a close event after `frames` presented frames, so a scripted
    /// run terminates the way a user closing the window would
    pub fn auto_close_after(&mut self, frames: u64) {
        self.auto_close_after = Some(frames);
    }

    /// Queue an input event for a later poll
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn frame_rate_cap(&self) -> Option<u32> {
        self.frame_rate_cap
    }
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for HeadlessPlatform {
    fn create_window(&mut self, width: u32, height: u32, title: &str) {
        self.open = true;
        log::info!("Headless window {width}x{height} \"{title}\"");
    }

    fn set_frame_rate_cap(&mut self, fps: u32) {
        self.frame_rate_cap = Some(fps);
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        if let Some(limit) = self.auto_close_after {
            if self.frames_presented >= limit {
                self.auto_close_after = None;
                return Some(InputEvent::Closed);
            }
        }
        self.events.pop_front()
    }

    fn load_texture(&mut self, path: &Path) -> Result<Texture> {
        let (width, height) = image::image_dimensions(path)
            .with_context(|| format!("failed to load image asset {}", path.display()))?;
        let id = self.next_texture_id;
        self.next_texture_id += 1;
        log::debug!("Loaded texture {} ({width}x{height})", path.display());
        Ok(Texture { id, width, height })
    }

    fn restart_clock(&mut self) -> f32 {
        if let Some(dt) = self.forced_dt {
            return dt;
        }
        let elapsed = self.clock.elapsed().as_secs_f32();
        self.clock = Instant::now();
        elapsed
    }

    fn clear(&mut self, color: Color) {
        self.draws.clear();
        self.last_clear = Some(color);
    }

    fn draw(&mut self, sprite: Sprite) {
        self.draws.push(sprite);
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

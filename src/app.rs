//! Frame loop: input sampling, simulation update, render hand-off
//!
//! Two phases: `Running` while the window is open, `Terminated` once a close
//! event is observed during input sampling. There is no fixed timestep; each
//! frame advances the simulation by the measured wall-clock delta.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;

use crate::platform::{Color, InputEvent, Key, Platform, Sprite, Texture};
use crate::sim::{GameState, tick};
use crate::tuning::Tuning;

const WINDOW_TITLE: &str = "Ghost Dodge";
const CLEAR_COLOR: Color = Color::WHITE;

/// Frame loop phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated,
}

/// The image assets the game cannot start without
#[derive(Debug, Clone, Copy)]
pub struct Assets {
    pub background: Texture,
    pub player: Texture,
    pub ghost: Texture,
}

impl Assets {
    /// Load all required textures from `dir`, failing fast on the first miss
    pub fn load<P: Platform>(platform: &mut P, dir: &Path) -> Result<Self> {
        Ok(Self {
            background: platform.load_texture(&dir.join("background.png"))?,
            player: platform.load_texture(&dir.join("pacman.png"))?,
            ghost: platform.load_texture(&dir.join("ghost.png"))?,
        })
    }
}

/// The game application: platform, simulation state, and input tracking
pub struct App<P: Platform> {
    platform: P,
    pub state: GameState,
    assets: Assets,
    /// Player input direction, each axis in {-1, 0, 1}, last-event-wins
    direction: Vec2,
    phase: Phase,
}

impl<P: Platform> App<P> {
    /// Open the window, load assets, and build the initial game state.
    /// A missing asset is fatal: the error propagates and the process should
    /// exit with a failure code before the loop ever starts.
    pub fn new(mut platform: P, seed: u64, mut tuning: Tuning, asset_dir: &Path) -> Result<Self> {
        platform.create_window(
            tuning.scene_width as u32,
            tuning.scene_height as u32,
            WINDOW_TITLE,
        );
        platform.set_frame_rate_cap(tuning.frame_rate_cap);

        let assets = Assets::load(&mut platform, asset_dir).context("loading image assets")?;

        // Ghost bounds follow the texture that was actually loaded
        let scaled = assets.ghost.size() * tuning.ghost_sprite_scale;
        tuning.ghost_width = scaled.x;
        tuning.ghost_height = scaled.y;

        log::info!("Starting run with seed {seed}");
        Ok(Self {
            platform,
            state: GameState::new(seed, tuning),
            assets,
            direction: Vec2::ZERO,
            phase: Phase::Running,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Drain the event queue. A close event transitions to `Terminated`;
    /// arrow key down/up events steer the player with independent axes.
    /// Opposing keys held together resolve to whatever the last event set.
    fn process_input(&mut self) {
        while let Some(event) = self.platform.poll_event() {
            match event {
                InputEvent::Closed => {
                    self.phase = Phase::Terminated;
                    self.platform.close();
                }
                InputEvent::KeyDown(key) => match key {
                    Key::Up => self.direction.y = -1.0,
                    Key::Down => self.direction.y = 1.0,
                    Key::Left => self.direction.x = -1.0,
                    Key::Right => self.direction.x = 1.0,
                    Key::Other => {}
                },
                InputEvent::KeyUp(key) => match key {
                    Key::Up | Key::Down => self.direction.y = 0.0,
                    Key::Left | Key::Right => self.direction.x = 0.0,
                    Key::Other => {}
                },
            }
        }
    }

    /// Hand the visible entity set to the renderer: background first, then
    /// the player, then every ghost still in play.
    fn render(&mut self) {
        self.platform.clear(CLEAR_COLOR);
        self.platform.draw(Sprite {
            texture: self.assets.background,
            pos: Vec2::ZERO,
            scale: 1.0,
        });

        let player = &self.state.player;
        self.platform.draw(Sprite {
            texture: self.assets.player,
            pos: player.pos - Vec2::splat(player.radius),
            scale: 1.0,
        });

        let scale = self.state.tuning.ghost_sprite_scale;
        for ghost in self.state.ghosts.iter().filter(|g| g.visible) {
            self.platform.draw(Sprite {
                texture: self.assets.ghost,
                pos: ghost.pos,
                scale,
            });
        }

        self.platform.present();
    }

    /// One frame: measure elapsed time, sample input, update, render
    pub fn frame(&mut self) {
        let dt = self.platform.restart_clock();
        self.process_input();
        if self.phase == Phase::Terminated {
            return;
        }
        tick(&mut self.state, self.direction, dt);
        self.render();
    }

    /// Run frames until the window closes
    pub fn run(&mut self) {
        while self.phase == Phase::Running && self.platform.is_open() {
            self.frame();
        }
        log::info!(
            "Run over: {} of {} ghosts caught",
            self.state.ghosts.len() - self.state.ghosts.visible_count(),
            self.state.ghosts.len()
        );
    }
}

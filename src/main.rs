//! Ghost Dodge entry point
//!
//! Wires the frame loop to a backend. A windowed backend implements
//! `platform::Platform` outside this crate; the binary ships with a bounded
//! headless run that exercises the full loop (assets, input, simulation,
//! render hand-off) without a display.

use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use ghost_dodge::app::App;
use ghost_dodge::platform::{HeadlessPlatform, InputEvent, Key};
use ghost_dodge::tuning::Tuning;

const ASSET_DIR: &str = "resources";
const TUNING_FILE: &str = "tuning.json";

fn main() -> ExitCode {
    env_logger::init();

    let tuning = Tuning::load_or_default(Path::new(TUNING_FILE));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    // Headless smoke run: steer toward the lower-right for ten simulated
    // seconds at the capped frame rate, then close.
    let frame_dt = 1.0 / tuning.frame_rate_cap as f32;
    let mut platform = HeadlessPlatform::with_fixed_dt(frame_dt);
    platform.auto_close_after(10 * tuning.frame_rate_cap as u64);
    platform.push_event(InputEvent::KeyDown(Key::Right));
    platform.push_event(InputEvent::KeyDown(Key::Down));

    let mut app = match App::new(platform, seed, tuning, Path::new(ASSET_DIR)) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Startup failed: {e:#}");
            return ExitCode::from(1);
        }
    };

    app.run();
    ExitCode::SUCCESS
}

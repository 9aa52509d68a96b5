//! Real-time simulation module
//!
//! All gameplay logic lives here. This module is pure and deterministic:
//! - Seeded RNG only
//! - Variable timestep: every motion scales by the measured frame dt
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, resolve_collisions};
pub use motion::{step_ghosts, step_player};
pub use spawn::Spawner;
pub use state::{GameState, Ghost, GhostPool, Player};
pub use tick::tick;

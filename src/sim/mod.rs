//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (blimps in insertion order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::{Body, Rect};
pub use collision::resolve_hits;
pub use motion::{apply_fall, update_blimp, update_player};
pub use spawn::{SpawnTimer, spawn_blimp};
pub use state::{Blimp, GameEvent, Player, SessionPhase, SessionState};
pub use tick::{TickInput, tick};

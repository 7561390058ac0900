//! Blimp Dodge - an arcade survival game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, session lifecycle)
//!
//! Rendering, input polling, and tween playback are collaborators outside
//! this crate: the sim exposes read-only projections (positions, health,
//! alpha) and an outbound cosmetic event queue, and consumes a small
//! [`sim::TickInput`] each tick.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth movement)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Stage dimensions (landscape, iPhone 5 resolution)
    pub const STAGE_WIDTH: f32 = 1136.0;
    pub const STAGE_HEIGHT: f32 = 640.0;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = 150.0;
    pub const PLAYER_HALF_WIDTH: f32 = 24.0;
    pub const PLAYER_HALF_HEIGHT: f32 = 24.0;
    /// Easing divisor for the player's proportional controller.
    /// 1.0 snaps straight to the target; larger values approach sluggishly.
    pub const EASING_FACTOR: f32 = 0.5;
    pub const MAX_HEALTH: i32 = 100;

    /// Damage dealt by a single blimp contact
    pub const HIT_DAMAGE: i32 = 20;

    /// Blimp defaults
    pub const BLIMP_HALF_WIDTH: f32 = 48.0;
    pub const BLIMP_HALF_HEIGHT: f32 = 24.0;
    /// Blimps spawn this far past the right stage edge
    pub const SPAWN_X_OFFSET: f32 = 200.0;
    /// Leftward cruise speed magnitude range
    pub const BLIMP_SPEED_MIN: f32 = 250.0;
    pub const BLIMP_SPEED_MAX: f32 = 400.0;
    pub const BLIMP_SCALE_MIN: f32 = 1.0;
    pub const BLIMP_SCALE_MAX: f32 = 1.5;
    /// Downward velocity forced on a blimp once it has hit the player
    pub const FALL_SPEED: f32 = 100.0;

    /// Recurring spawn period in simulated seconds
    pub const SPAWN_PERIOD_SECS: f32 = 2.5;

    /// Apron around the stage; entities outside it are culled. Wide enough
    /// that the off-right spawn point (STAGE_WIDTH + SPAWN_X_OFFSET) is
    /// still inside.
    pub const CULL_APRON: f32 = 250.0;

    /// Cosmetic hit tween request parameters (radians, seconds)
    pub const HIT_TWEEN_ROTATION: f32 = -std::f32::consts::FRAC_PI_8;
    pub const HIT_TWEEN_SECS: f32 = 0.3;
}

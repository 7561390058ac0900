//! Per-entity movement rules
//!
//! The player runs a fixed-ratio proportional controller toward its target
//! position; blimps cruise at the constant velocity they spawned with until
//! a hit flips them into a slow downward fall. Velocity is recomputed here
//! every tick and then integrated; nothing else in the sim writes velocity
//! except the one-shot fall transition in the collision resolver.

use glam::Vec2;

use super::state::{Blimp, Player};
use crate::consts::*;

/// Advance the player one tick. `pointer` is the held pointer position, if
/// any; while held it re-targets the controller every tick.
pub fn update_player(player: &mut Player, pointer: Option<Vec2>, dt: f32) {
    if let Some(target) = pointer {
        player.target = target;
    }
    // Proportional controller: close a fixed fraction of the remaining gap
    // per second on each axis. At rest on target this is exactly zero, so
    // the player never drifts.
    player.body.vel = (player.target - player.body.pos) / EASING_FACTOR;
    player.body.integrate(dt);
}

/// Advance a blimp one tick. Velocity is untouched here; cruise velocity is
/// set at spawn and the fall velocity by [`apply_fall`].
pub fn update_blimp(blimp: &mut Blimp, dt: f32) {
    blimp.body.integrate(dt);
}

/// One-shot falling transition when a blimp registers its hit: horizontal
/// speed halves, vertical becomes a fixed downward drop. Never applied
/// twice; the caller guards on the `hit` latch.
pub fn apply_fall(blimp: &mut Blimp) {
    blimp.body.vel.x /= 2.0;
    blimp.body.vel.y = FALL_SPEED;
}

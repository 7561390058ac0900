//! Fixed timestep session tick
//!
//! One tick advances a session in a fixed order: spawn schedule, movement,
//! collision resolution, bounds culling, then the terminal check. The order
//! matters: a blimp spawned this tick moves and can collide this tick, and
//! a lethal hit tears the session down before the next tick begins.

use glam::Vec2;

use super::body::Rect;
use super::collision::resolve_hits;
use super::motion::{update_blimp, update_player};
use super::spawn::spawn_blimp;
use super::state::{GameEvent, SessionPhase, SessionState};
use crate::consts::*;

/// Input snapshot for a single tick, sampled by the driver from the input
/// collaborator. `primary_pressed` is edge-triggered (one press, one tick)
/// and only matters for the game-over restart.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Primary pointer/control currently held
    pub pointer_held: bool,
    /// Current pointer position in stage coordinates
    pub pointer: Vec2,
    /// Primary control was pressed since the last tick
    pub primary_pressed: bool,
}

/// Stage rectangle plus the cull apron; a blimp whose position leaves this
/// is reclaimed immediately, hit or not.
fn cull_bounds() -> Rect {
    Rect::new(
        Vec2::new(-CULL_APRON, -CULL_APRON),
        Vec2::new(STAGE_WIDTH + CULL_APRON, STAGE_HEIGHT + CULL_APRON),
    )
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut SessionState, input: &TickInput, dt: f32) {
    if state.phase == SessionPhase::GameOver {
        // Dead session: nothing advances. The armed one-shot restart
        // trigger replaces it wholesale with a fresh one.
        if state.restart_armed && input.primary_pressed {
            restart(state);
        }
        return;
    }

    state.time_ticks += 1;

    // 1. Spawn schedule. A long tick can owe several blimps.
    let due = state.spawn.as_mut().map_or(0, |timer| timer.advance(dt));
    for _ in 0..due {
        let id = state.next_blimp_id();
        let blimp = spawn_blimp(id, &mut state.rng);
        log::debug!("spawned blimp {} at y={:.1}", id, blimp.body.pos.y);
        state.blimps.push(blimp);
    }

    // 2. Movement
    let pointer = input.pointer_held.then_some(input.pointer);
    update_player(&mut state.player, pointer, dt);
    for blimp in &mut state.blimps {
        update_blimp(blimp, dt);
    }

    // 3. Collision resolution (insertion order, see resolve_hits)
    resolve_hits(&mut state.player, &mut state.blimps, &mut state.events);

    // 4. Cull anything that left the stage apron, hit or not
    let bounds = cull_bounds();
    state.blimps.retain(|blimp| {
        let inside = bounds.contains(blimp.body.pos);
        if !inside {
            log::debug!("culled blimp {}", blimp.id);
        }
        inside
    });

    // 5. Terminal check: exactly zero ends the session
    if state.player.health <= 0 {
        game_over(state);
    }
}

/// Running -> GameOver: cancel the spawn schedule, clear the sky, take the
/// player out of the simulation, and arm the restart trigger.
fn game_over(state: &mut SessionState) {
    log::info!(
        "game over after {} ticks (health {})",
        state.time_ticks,
        state.player.health
    );
    state.phase = SessionPhase::GameOver;
    // Cancelling the timer here is mandatory: a live timer would keep
    // spawning into a dead session.
    state.spawn = None;
    state.blimps.clear();
    state.player.alive = false;
    state.player.body.vel = Vec2::ZERO;
    state.restart_armed = true;
    state.events.push(GameEvent::SessionOver);
}

/// GameOver -> fresh session. A full re-initialization, never a partial
/// reset of the old entities.
fn restart(state: &mut SessionState) {
    let seed = state.successor_seed();
    log::info!("restarting with seed {seed}");
    *state = SessionState::new(seed);
}

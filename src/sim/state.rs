//! Session state and core simulation types
//!
//! Everything the sim mutates lives here; the renderer only reads
//! projections (positions, health, [`Player::alpha`]) and drains the
//! cosmetic event queue.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::spawn::SpawnTimer;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    Running,
    /// Health depleted; waiting for the restart trigger
    GameOver,
}

/// The player's flyer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Last commanded destination; the easing controller steers toward it
    pub target: Vec2,
    /// Remaining health. Never increases; may go past zero on the lethal
    /// hit (the terminal check uses `<= 0`).
    pub health: i32,
    /// False once the session has ended; a dead player gets no updates
    pub alive: bool,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            body: Body::new(spawn, Vec2::new(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT)),
            target: spawn,
            health: MAX_HEALTH,
            alive: true,
        }
    }

    /// Opacity projection for rendering. Tracks health exactly, so it is
    /// unclamped and briefly dips below 0.0 on the lethal hit.
    pub fn alpha(&self) -> f32 {
        self.health as f32 / MAX_HEALTH as f32
    }
}

/// A spawned hazard blimp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blimp {
    /// Allocation order doubles as the stable collision order
    pub id: u32,
    pub body: Body,
    /// Cosmetic size factor; also scales the collision box
    pub scale: f32,
    /// Latches true on first player contact and never resets; damage and
    /// the falling transition fire only on the false -> true edge
    pub hit: bool,
}

/// Fire-and-forget requests to the cosmetic/tween collaborator. The sim
/// never awaits completion and receives no result back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Rotate the blimp to [`HIT_TWEEN_ROTATION`] over [`HIT_TWEEN_SECS`]
    HitTween { blimp_id: u32 },
    /// The session just ended; show the game-over overlay
    SessionOver,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG; all spawn randomness flows through it
    #[serde(skip, default = "default_rng")]
    pub rng: Pcg32,
    pub phase: SessionPhase,
    pub player: Player,
    /// Live blimps in insertion order
    pub blimps: Vec<Blimp>,
    /// Recurring spawn schedule; `None` once cancelled at game over
    pub spawn: Option<SpawnTimer>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Set on the Running -> GameOver transition; the next primary press
    /// tears this session down and builds a fresh one
    pub restart_armed: bool,
    /// Pending cosmetic requests, drained by the driver each frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next blimp ID
    next_id: u32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

impl SessionState {
    /// Create a fresh session: full health, empty sky, armed spawn timer.
    pub fn new(seed: u64) -> Self {
        let spawn_point = Vec2::new(PLAYER_SPAWN_X, STAGE_HEIGHT / 2.0);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::Running,
            player: Player::new(spawn_point),
            blimps: Vec::new(),
            spawn: Some(SpawnTimer::new(SPAWN_PERIOD_SECS)),
            time_ticks: 0,
            restart_armed: false,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new blimp ID
    pub fn next_blimp_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Seed for the session that replaces this one on restart. Derived
    /// from the current seed so a whole run stays reproducible.
    pub fn successor_seed(&self) -> u64 {
        self.seed.wrapping_mul(6364136223846793005).wrapping_add(1)
    }

    /// Take all pending cosmetic events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let state = SessionState::new(7);
        assert_eq!(state.phase, SessionPhase::Running);
        assert_eq!(state.player.health, MAX_HEALTH);
        assert!(state.player.alive);
        assert!(state.blimps.is_empty());
        assert!(state.spawn.is_some());
        assert!(!state.restart_armed);
        assert_eq!(state.player.body.pos, state.player.target);
    }

    #[test]
    fn test_alpha_tracks_health() {
        let mut state = SessionState::new(7);
        assert_eq!(state.player.alpha(), 1.0);
        state.player.health = 40;
        assert_eq!(state.player.alpha(), 0.4);
        // Unclamped past the lethal hit
        state.player.health = -20;
        assert_eq!(state.player.alpha(), -0.2);
    }

    #[test]
    fn test_blimp_ids_monotonic() {
        let mut state = SessionState::new(7);
        let a = state.next_blimp_id();
        let b = state.next_blimp_id();
        assert!(b > a);
    }

    #[test]
    fn test_successor_seed_differs() {
        let state = SessionState::new(42);
        assert_ne!(state.successor_seed(), state.seed);
    }
}

//! Blimp Dodge entry point
//!
//! Headless native driver: runs the deterministic sim with a fixed-timestep
//! accumulator and a scripted autopilot standing in for the pointer, logging
//! the cosmetic events a renderer would consume. Useful for watching a full
//! session lifecycle (play, game over, restart) from the terminal.
//!
//! Usage: `blimp-dodge [--seed N] [--dump-state]`

use blimp_dodge::consts::*;
use blimp_dodge::sim::{GameEvent, SessionPhase, SessionState, TickInput, tick};
use glam::Vec2;

/// Driver-side frame rate (the sim substeps at SIM_DT underneath)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Hard stop so a lucky autopilot run cannot loop forever
const MAX_FRAMES: u32 = 60 * 600;

/// Game instance holding sim state and the frame accumulator
struct Game {
    state: SessionState,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(seed: u64) -> Self {
        Self {
            state: SessionState::new(seed),
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Run simulation ticks for one frame's worth of time
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input;
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.primary_pressed = false;
        }
    }
}

/// Scripted pointer: chase the nearest blimp so the demo reliably takes
/// hits and reaches game over instead of dodging forever.
fn autopilot(state: &SessionState) -> TickInput {
    let target = state
        .blimps
        .iter()
        .filter(|b| !b.hit)
        .min_by(|a, b| {
            let da = (a.body.pos - state.player.body.pos).length();
            let db = (b.body.pos - state.player.body.pos).length();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|b| b.body.pos.clamp(Vec2::ZERO, Vec2::new(STAGE_WIDTH, STAGE_HEIGHT)));

    match target {
        Some(pointer) => TickInput {
            pointer_held: true,
            pointer,
            primary_pressed: false,
        },
        None => TickInput::default(),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let dump_state = args.iter().any(|a| a == "--dump-state");
    let seed = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB11);

    log::info!("Blimp Dodge starting (seed {seed})");

    let mut game = Game::new(seed);
    let mut sessions_ended = 0;

    for _ in 0..MAX_FRAMES {
        game.input = match game.state.phase {
            SessionPhase::Running => autopilot(&game.state),
            // Dead session: push the primary button to restart
            SessionPhase::GameOver => TickInput {
                primary_pressed: true,
                ..Default::default()
            },
        };
        game.update(FRAME_DT);

        // Stand-in for the effects collaborator: just log the requests
        for event in game.state.drain_events() {
            match event {
                GameEvent::HitTween { blimp_id } => log::info!(
                    "tween request: rotate blimp {blimp_id} to {HIT_TWEEN_ROTATION:.3} rad over {HIT_TWEEN_SECS}s"
                ),
                GameEvent::SessionOver => {
                    sessions_ended += 1;
                    log::info!("session {sessions_ended} over - click to play again");
                }
            }
        }

        // One full session plus a restarted one is enough of a demo
        if sessions_ended >= 2 {
            break;
        }
    }

    if dump_state {
        match serde_json::to_string_pretty(&game.state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("state dump failed: {err}"),
        }
    }

    log::info!(
        "done: {} session(s) ended, final health {}",
        sessions_ended,
        game.state.player.health
    );
}

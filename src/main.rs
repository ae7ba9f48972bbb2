//! Headless autopilot demo
//!
//! Runs the simulation without a renderer: a simple controller tracks the
//! ball with a wandering offset so returns come off at varied angles, and
//! the run is summarized when it ends. Useful as a smoke test and as a
//! reference for wiring the sim into a real host loop.

use brickbreak::SimConfig;
use brickbreak::sim::{BallState, GameEvent, GamePhase, GameState, TickInput, tick};

const MAX_TICKS: u64 = 500_000;

/// Track the ball, offset by a slow oscillation so the paddle never settles
/// into a perfectly vertical return
fn autopilot(state: &GameState) -> TickInput {
    let wobble = (state.time_ticks as f32 * 0.01).sin() * state.paddle.half.x * 0.8;
    TickInput {
        pointer_x: Some(match state.ball.state {
            BallState::Free => state.ball.pos.x + wobble,
            BallState::Held => state.paddle.pos.x,
        }),
        launch: state.phase == GamePhase::Serve,
        ..TickInput::default()
    }
}

fn main() {
    env_logger::init();
    log::info!("brickbreak headless demo starting");

    let mut state = GameState::new(SimConfig::default());

    while state.phase != GamePhase::GameOver && state.time_ticks < MAX_TICKS {
        let input = autopilot(&state);
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                GameEvent::BrickDestroyed { row, col } => {
                    log::debug!("brick ({row}, {col}) destroyed, score {}", state.score);
                }
                GameEvent::LifeLost => {
                    log::info!("life lost, {} remaining", state.lives);
                }
                _ => {}
            }
        }
    }

    let total = state.config.brick_rows * state.config.brick_cols;
    println!(
        "finished after {} ticks: score {}, lives {}, bricks {}/{} broken",
        state.time_ticks,
        state.score,
        state.lives,
        total - state.bricks.alive_count(),
        total,
    );
}

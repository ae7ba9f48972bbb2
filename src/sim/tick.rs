//! Per-frame simulation tick
//!
//! One call advances the whole arena by one step: input, paddle, ball,
//! collisions, terminal check. There is no dt parameter - the baseline
//! games integrate one velocity step per rendered frame, so a tick IS the
//! unit of time.

use super::collision::{circle_rect_overlap, swept_brick_hit};
use super::state::{BallState, GameEvent, GamePhase, GameState};

/// Input commands for a single tick
///
/// `move_left`/`move_right` are held-key samples; `launch`, `pause` and
/// `confirm` are press edges. A `pointer_x` (absolute pointer position, the
/// mouse-driven variants) overrides the held keys when present.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub pointer_x: Option<f32>,
    pub launch: bool,
    pub pause: bool,
    pub confirm: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Game over accepts exactly one input: confirm restarts
    if state.phase == GamePhase::GameOver {
        if input.confirm {
            state.reset();
        }
        return;
    }

    // Pause toggle; resuming picks the phase back up from the ball
    if input.pause {
        state.phase = match state.phase {
            GamePhase::Paused => {
                if state.ball.state == BallState::Held {
                    GamePhase::Serve
                } else {
                    GamePhase::Playing
                }
            }
            _ => GamePhase::Paused,
        };
    }
    if state.phase == GamePhase::Paused {
        return;
    }

    state.time_ticks += 1;
    let config = state.config.clone();

    // Paddle movement: absolute pointer wins over held keys, clamp always
    if let Some(x) = input.pointer_x {
        state.paddle.pos.x = x;
    } else {
        if input.move_left {
            state.paddle.pos.x -= config.paddle_speed;
        }
        if input.move_right {
            state.paddle.pos.x += config.paddle_speed;
        }
    }
    state.paddle.pos.x = config.clamp_paddle_x(state.paddle.pos.x);

    // Launch straight up
    if state.ball.state == BallState::Held && input.launch {
        state.ball.launch(config.ball_speed);
        state.phase = GamePhase::Playing;
        state.events.push(GameEvent::Launched);
    }

    match state.ball.state {
        BallState::Held => {
            state.ball.follow_paddle(&state.paddle, config.serve_y());
        }
        BallState::Free => {
            // One Euler step, then resolve against what we hit
            state.ball.pos += state.ball.vel;

            // Side and top walls reflect; the bottom edge costs a life
            if state.ball.pos.x + state.ball.radius >= config.arena_width
                || state.ball.pos.x - state.ball.radius <= 0.0
            {
                state.ball.vel.x = -state.ball.vel.x;
            }
            if state.ball.pos.y - state.ball.radius <= 0.0 {
                state.ball.vel.y = -state.ball.vel.y;
            }
            if state.ball.pos.y + state.ball.radius >= config.arena_height {
                state.ball.drop_to_held();
                state.ball.follow_paddle(&state.paddle, config.serve_y());
                state.lives = state.lives.saturating_sub(1);
                state.phase = GamePhase::Serve;
                state.events.push(GameEvent::LifeLost);
            }
        }
    }

    if state.ball.state == BallState::Free {
        // Paddle bounce: only while descending; the return angle comes from
        // the impact offset, not the incoming direction
        if circle_rect_overlap(state.ball.pos, state.ball.radius, &state.paddle.rect())
            && state.ball.vel.y > 0.0
        {
            state.ball.vel.y = -state.ball.vel.y;
            state.ball.vel.x = (state.ball.pos.x - state.paddle.pos.x) / state.paddle.half.x
                * config.bounce_factor;
            state.events.push(GameEvent::PaddleHit);
        }

        // Brick field, row-major; a hit flips the cell and reflects the ball
        // immediately, so later cells this tick see the updated velocity
        for row in 0..state.bricks.rows() {
            for col in 0..state.bricks.cols() {
                if !state.bricks.is_alive(row, col) {
                    continue;
                }
                let rect = state.bricks.cell_rect(row, col);
                if let Some(side) =
                    swept_brick_hit(state.ball.pos, state.ball.radius, state.ball.vel, &rect)
                {
                    state.bricks.destroy(row, col);
                    if side.reflects_y() {
                        state.ball.vel.y = -state.ball.vel.y;
                    } else {
                        state.ball.vel.x = -state.ball.vel.x;
                    }
                    state.score += config.brick_points;
                    state.events.push(GameEvent::BrickDestroyed { row, col });
                }
            }
        }
    }

    // Terminal: out of lives, or nothing left to break - one flag, one
    // restart path for both
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { cleared: false });
        log::info!("game over at tick {} (score {})", state.time_ticks, state.score);
    } else if !state.bricks.any_alive() {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { cleared: true });
        log::info!(
            "board cleared at tick {} (score {}, lives {})",
            state.time_ticks,
            state.score,
            state.lives
        );
    }
}

//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here, owned by one [`GameState`].
//! The whole state is serializable so hosts can snapshot and diff runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::config::SimConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball held above the paddle, waiting for launch input
    Serve,
    /// Ball in flight
    Playing,
    /// Game is paused
    Paused,
    /// Out of lives, or every brick destroyed
    GameOver,
}

/// Ball state - held above the paddle or in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Tracking the paddle X at the serve offset, zero velocity
    Held,
    /// Free-moving
    Free,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position
    pub pos: Vec2,
    /// Half-extents
    pub half: Vec2,
}

impl Paddle {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(config.arena_width / 2.0, config.paddle_y()),
            half: Vec2::new(config.paddle_width / 2.0, config.paddle_height / 2.0),
        }
    }

    /// The paddle as a box for collision tests
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.half)
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(config.arena_width / 2.0, config.serve_y()),
            vel: Vec2::ZERO,
            radius: config.ball_radius,
            state: BallState::Held,
        }
    }

    /// Pin a held ball above the paddle
    pub fn follow_paddle(&mut self, paddle: &Paddle, serve_y: f32) {
        if self.state == BallState::Held {
            self.pos = Vec2::new(paddle.pos.x, serve_y);
        }
    }

    /// Launch straight up from the held position
    pub fn launch(&mut self, speed: f32) {
        if self.state == BallState::Held {
            self.vel = Vec2::new(0.0, -speed);
            self.state = BallState::Free;
        }
    }

    /// Zero the velocity and return to the held position
    pub fn drop_to_held(&mut self) {
        self.vel = Vec2::ZERO;
        self.state = BallState::Held;
    }
}

/// The destructible brick field, a flat row-major array of alive flags
///
/// Cell centers are derived from the grid position: column `j` sits at
/// `j * cell_w + cell_w / 2`, row `i` at `i * cell_h + margin_top`, with a
/// top margin of two cell heights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    cell_size: Vec2,
    margin_top: f32,
    alive: Vec<bool>,
}

impl BrickGrid {
    pub fn new(config: &SimConfig) -> Self {
        let cell_size = config.brick_size();
        Self {
            rows: config.brick_rows,
            cols: config.brick_cols,
            cell_size,
            margin_top: cell_size.y * 2.0,
            alive: vec![true; config.brick_rows * config.brick_cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Center of cell `(row, col)`
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            col as f32 * self.cell_size.x + self.cell_size.x / 2.0,
            row as f32 * self.cell_size.y + self.margin_top,
        )
    }

    /// Bounding box of cell `(row, col)`
    pub fn cell_rect(&self, row: usize, col: usize) -> Aabb {
        Aabb::from_size(self.cell_center(row, col), self.cell_size)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.alive[row * self.cols + col]
    }

    /// Flip a cell to dead; a no-op if it already is
    pub fn destroy(&mut self, row: usize, col: usize) {
        self.alive[row * self.cols + col] = false;
    }

    pub fn alive_count(&self) -> usize {
        self.alive.iter().filter(|a| **a).count()
    }

    pub fn any_alive(&self) -> bool {
        self.alive.iter().any(|a| *a)
    }

    /// Iterate `(row, col)` of alive cells in row-major order
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, a)| **a)
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }
}

/// Things that happened during one tick, for hosts to drive audio/FX/logs
///
/// Cleared at the start of every tick; never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Launched,
    PaddleHit,
    BrickDestroyed { row: usize, col: usize },
    LifeLost,
    /// Terminal transition; `cleared` is true on a full board clear
    GameOver { cleared: bool },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Variant tuning this run was created with
    pub config: SimConfig,
    /// Current phase
    pub phase: GamePhase,
    /// Remaining lives
    pub lives: u32,
    /// Score
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player paddle
    pub paddle: Paddle,
    /// The ball
    pub ball: Ball,
    /// Destructible brick field
    pub bricks: BrickGrid,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh game: paddle centered, ball held, all bricks alive
    pub fn new(config: SimConfig) -> Self {
        let paddle = Paddle::new(&config);
        let ball = Ball::new(&config);
        let bricks = BrickGrid::new(&config);
        Self {
            phase: GamePhase::Serve,
            lives: config.max_lives,
            score: 0,
            time_ticks: 0,
            paddle,
            ball,
            bricks,
            events: Vec::new(),
            config,
        }
    }

    /// Full reset back to the initial layout; the only path out of game over
    pub fn reset(&mut self) {
        log::info!("resetting game (score was {})", self.score);
        *self = Self::new(self.config.clone());
    }
}

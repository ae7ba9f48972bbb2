//! Variant tuning
//!
//! The source games differ only in constants (grid size, speeds, paddle
//! size, bounce factor). One [`SimConfig`] parameterizes them all; the
//! default is the baseline keyboard variant from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning knobs for one simulation instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,
    /// Brick grid rows
    pub brick_rows: usize,
    /// Brick grid columns (cell width is `arena_width / brick_cols`)
    pub brick_cols: usize,
    /// Brick cell height
    pub brick_height: f32,
    /// Score per destroyed brick
    pub brick_points: u32,
    /// Paddle width
    pub paddle_width: f32,
    /// Paddle height
    pub paddle_height: f32,
    /// Paddle movement per tick under held-key input
    pub paddle_speed: f32,
    /// Ball radius
    pub ball_radius: f32,
    /// Launch speed in pixels per tick
    pub ball_speed: f32,
    /// Angled-return scale on paddle bounces
    pub bounce_factor: f32,
    /// Vertical gap between paddle center and a held ball
    pub serve_offset: f32,
    /// Starting lives
    pub max_lives: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_height: BRICK_HEIGHT,
            brick_points: BRICK_POINTS,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            bounce_factor: BOUNCE_FACTOR,
            serve_offset: SERVE_OFFSET,
            max_lives: MAX_LIVES,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brick cell size (width follows from the column count)
    pub fn brick_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.arena_width / self.brick_cols as f32, self.brick_height)
    }

    /// Y coordinate of the paddle center (7/8 of the way down)
    pub fn paddle_y(&self) -> f32 {
        self.arena_height * 7.0 / 8.0
    }

    /// Y coordinate of a held ball
    pub fn serve_y(&self) -> f32 {
        self.paddle_y() - self.serve_offset
    }

    /// Clamp a paddle center X to the arena
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        let half_w = self.paddle_width / 2.0;
        x.clamp(half_w, self.arena_width - half_w)
    }

    /// The sprite variant: mouse-driven paddle, slightly faster ball
    pub fn sprite_variant() -> Self {
        Self {
            paddle_width: 228.0,
            paddle_height: 25.0,
            ball_speed: 5.0,
            ..Self::default()
        }
    }
}

//! Brickbreak - a paddle-and-brick arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `config`: Variant tuning (grid size, speeds, bounce factor)
//!
//! The crate contains no rendering or input plumbing. A host feeds one
//! [`sim::TickInput`] per frame into [`sim::tick`] and draws whatever it
//! likes from the resulting [`sim::GameState`].

pub mod config;
pub mod sim;

pub use config::SimConfig;

/// Baseline tuning constants (the classic keyboard-driven variant)
pub mod consts {
    /// Arena dimensions in pixels
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 675.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 15;
    /// Brick cell height; cell width is `ARENA_WIDTH / BRICK_COLS`
    pub const BRICK_HEIGHT: f32 = 40.0;
    /// Score awarded per destroyed brick
    pub const BRICK_POINTS: u32 = 10;

    /// Paddle defaults - the paddle rides at 7/8 arena height
    pub const PADDLE_WIDTH: f32 = ARENA_WIDTH / 7.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Horizontal paddle movement per tick while a key is held
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Launch speed, straight up, in pixels per tick
    pub const BALL_SPEED: f32 = 4.0;
    /// Scale applied to the normalized impact offset on a paddle bounce
    pub const BOUNCE_FACTOR: f32 = 5.0;
    /// Vertical gap between paddle center and a held ball
    pub const SERVE_OFFSET: f32 = 30.0;

    /// Starting lives
    pub const MAX_LIVES: u32 = 5;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One integration step per tick, no wall-clock time
//! - Stable iteration order (row-major over the brick grid)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{HitSide, circle_rect_overlap, swept_brick_hit};
pub use state::{Ball, BallState, BrickGrid, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};

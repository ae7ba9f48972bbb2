//! Collision detection for the arena
//!
//! Two tests cover everything: a circle-vs-box overlap for the paddle, and
//! the four-branch swept edge check for bricks. The swept check compares the
//! ball's leading edge against `brick edge + velocity`, i.e. it assumes the
//! ball moves less than a cell per tick. That is the behavior of the source
//! games, tunneling at high speed included, and it is kept as-is.

use glam::Vec2;

use super::aabb::Aabb;

/// Which side of a brick the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSide {
    /// Struck from underneath while moving up
    Below,
    /// Struck from on top while moving down
    Above,
    /// Struck the left face while moving right
    Left,
    /// Struck the right face while moving left
    Right,
}

impl HitSide {
    /// True if the bounce inverts the Y velocity (X otherwise)
    #[inline]
    pub fn reflects_y(&self) -> bool {
        matches!(self, HitSide::Below | HitSide::Above)
    }
}

/// Circle-vs-box overlap via closest point
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Aabb) -> bool {
    let closest = rect.closest_point(center);
    (center - closest).length_squared() <= radius * radius
}

/// Swept brick check, evaluated after the ball has moved by `vel`
///
/// The four sides are tried in a fixed priority order (below, above, left,
/// right) and the first match wins, so a brick registers at most one hit per
/// tick. Each branch requires:
/// - the leading edge of the ball to have crossed the brick face this tick
///   (current position past the face, previous position - reconstructed as
///   `face + vel` - not yet past it),
/// - lateral overlap within the brick half-extent plus 2/3 of the ball
///   radius,
/// - the velocity sign to point at the face.
pub fn swept_brick_hit(pos: Vec2, radius: f32, vel: Vec2, brick: &Aabb) -> Option<HitSide> {
    let margin = radius * 2.0 / 3.0;
    let overlap_x = (pos.x - brick.center.x).abs() < brick.half.x + margin;
    let overlap_y = (pos.y - brick.center.y).abs() < brick.half.y + margin;

    if pos.y - radius <= brick.bottom()
        && pos.y - radius > brick.bottom() + vel.y
        && overlap_x
        && vel.y < 0.0
    {
        Some(HitSide::Below)
    } else if pos.y + radius >= brick.top()
        && pos.y + radius < brick.top() + vel.y
        && overlap_x
        && vel.y > 0.0
    {
        Some(HitSide::Above)
    } else if pos.x + radius >= brick.left()
        && pos.x + radius < brick.left() + vel.x
        && overlap_y
        && vel.x > 0.0
    {
        Some(HitSide::Left)
    } else if pos.x - radius <= brick.right()
        && pos.x - radius > brick.right() + vel.x
        && overlap_y
        && vel.x < 0.0
    {
        Some(HitSide::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick() -> Aabb {
        // Cell centered at (100, 100), 60 wide, 40 tall
        Aabb::from_size(Vec2::new(100.0, 100.0), Vec2::new(60.0, 40.0))
    }

    #[test]
    fn test_circle_rect_overlap() {
        let rect = brick();
        // Center inside
        assert!(circle_rect_overlap(Vec2::new(100.0, 100.0), 5.0, &rect));
        // Touching the right edge
        assert!(circle_rect_overlap(Vec2::new(135.0, 100.0), 5.0, &rect));
        // Clear of the corner
        assert!(!circle_rect_overlap(Vec2::new(140.0, 130.0), 5.0, &rect));
        // Corner within radius
        assert!(circle_rect_overlap(Vec2::new(133.0, 123.0), 5.0, &rect));
    }

    #[test]
    fn test_hit_below() {
        let rect = brick(); // bottom edge at y=120
        let vel = Vec2::new(0.0, -4.0);
        // Ball rising, leading edge just crossed the bottom face this tick
        let pos = Vec2::new(100.0, 118.0 + 12.0);
        let hit = swept_brick_hit(pos, 12.0, vel, &rect);
        assert_eq!(hit, Some(HitSide::Below));
        assert!(hit.unwrap().reflects_y());
    }

    #[test]
    fn test_hit_above() {
        let rect = brick(); // top edge at y=80
        let vel = Vec2::new(0.0, 4.0);
        let pos = Vec2::new(100.0, 82.0 - 12.0);
        assert_eq!(swept_brick_hit(pos, 12.0, vel, &rect), Some(HitSide::Above));
    }

    #[test]
    fn test_hit_left() {
        let rect = brick(); // left edge at x=70
        let vel = Vec2::new(4.0, 0.0);
        let pos = Vec2::new(72.0 - 12.0, 100.0);
        let hit = swept_brick_hit(pos, 12.0, vel, &rect);
        assert_eq!(hit, Some(HitSide::Left));
        assert!(!hit.unwrap().reflects_y());
    }

    #[test]
    fn test_hit_right() {
        let rect = brick(); // right edge at x=130
        let vel = Vec2::new(-4.0, 0.0);
        let pos = Vec2::new(128.0 + 12.0, 100.0);
        assert_eq!(swept_brick_hit(pos, 12.0, vel, &rect), Some(HitSide::Right));
    }

    #[test]
    fn test_velocity_sign_gates_hit() {
        let rect = brick();
        // Same geometry as test_hit_below but the ball is moving down
        let pos = Vec2::new(100.0, 130.0);
        assert_eq!(swept_brick_hit(pos, 12.0, Vec2::new(0.0, 4.0), &rect), None);
    }

    #[test]
    fn test_lateral_margin() {
        let rect = brick();
        let vel = Vec2::new(0.0, -4.0);
        let y = 118.0 + 12.0;
        let margin = 12.0 * 2.0 / 3.0;
        // Just inside the lateral window
        let inside = Vec2::new(100.0 + 30.0 + margin - 0.5, y);
        assert_eq!(swept_brick_hit(inside, 12.0, vel, &rect), Some(HitSide::Below));
        // Just outside
        let outside = Vec2::new(100.0 + 30.0 + margin + 0.5, y);
        assert_eq!(swept_brick_hit(outside, 12.0, vel, &rect), None);
    }

    #[test]
    fn test_at_most_one_side_per_tick() {
        let rect = brick();
        // Diagonal approach into the bottom-left corner region; both the
        // Below and Left branches could plausibly trigger, priority order
        // must pick exactly one (Below first).
        let vel = Vec2::new(4.0, -4.0);
        let pos = Vec2::new(70.0, 118.0 + 12.0);
        assert_eq!(swept_brick_hit(pos, 12.0, vel, &rect), Some(HitSide::Below));
    }

    #[test]
    fn test_fast_ball_tunnels() {
        let rect = brick();
        // Fast diagonal step from (80, 130) to (140, 70) passes straight
        // through the cell interior, but the leading edge overshoots every
        // face window. Known source behavior, kept as-is.
        let vel = Vec2::new(60.0, -60.0);
        let pos = Vec2::new(140.0, 70.0);
        assert_eq!(swept_brick_hit(pos, 12.0, vel, &rect), None);
    }
}

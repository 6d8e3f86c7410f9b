//! Collision detection and response
//!
//! Axis-aligned boxes only: the ball is tested by its bounding box against
//! the field walls, the paddle and each brick. Each function mutates the
//! ball in place and reports what happened so the caller can score it and
//! turn it into events.

use glam::Vec2;
use serde::Serialize;

use super::state::{Ball, Brick, Paddle};
use crate::consts::MAX_BOUNCE_ANGLE;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square box enclosing a circle
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    /// Overlap test; touching edges count as overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
    }
}

/// Field wall struck by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Reflect the ball off the left, right and top walls.
///
/// Returns every wall hit this tick (a corner yields two). The ball is
/// clamped back inside by its radius. The bottom is open.
pub fn collide_walls(ball: &mut Ball, field_width: f32) -> Vec<Wall> {
    let mut hits = Vec::new();
    let r = ball.radius;

    if ball.pos.x - r <= 0.0 {
        ball.vel.x = ball.vel.x.abs();
        ball.pos.x = r;
        hits.push(Wall::Left);
    } else if ball.pos.x + r >= field_width {
        ball.vel.x = -ball.vel.x.abs();
        ball.pos.x = field_width - r;
        hits.push(Wall::Right);
    }

    if ball.pos.y - r <= 0.0 {
        ball.vel.y = ball.vel.y.abs();
        ball.pos.y = r;
        hits.push(Wall::Top);
    }

    hits
}

/// Outcome of a paddle bounce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    /// Impact offset from paddle center in [-1, 1]
    pub hit_pos: f32,
    /// Bounce angle off vertical (radians)
    pub angle: f32,
    /// Contact point on the paddle's top edge
    pub point: Vec2,
}

/// Velocity leaving the paddle for an impact offset in [-1, 1]
pub fn bounce_velocity(hit_pos: f32, speed: f32) -> Vec2 {
    let angle = hit_pos.clamp(-1.0, 1.0) * MAX_BOUNCE_ANGLE;
    Vec2::new(angle.sin() * speed, -(angle.cos() * speed).abs())
}

/// Bounce the ball off the paddle if it is moving down and overlapping.
///
/// The outgoing direction depends only on where the ball struck, never on
/// the incoming angle, and always points up.
pub fn collide_paddle(ball: &mut Ball, paddle: &Paddle) -> Option<PaddleHit> {
    if ball.vel.y <= 0.0 || !ball.aabb().overlaps(&paddle.aabb()) {
        return None;
    }

    let half_width = paddle.width / 2.0;
    let hit_pos = ((ball.pos.x - paddle.center_x()) / half_width).clamp(-1.0, 1.0);
    let speed = ball.vel.length();

    ball.vel = bounce_velocity(hit_pos, speed);
    ball.pos.y = paddle.pos.y - ball.radius;

    Some(PaddleHit {
        hit_pos,
        angle: hit_pos * MAX_BOUNCE_ANGLE,
        point: Vec2::new(ball.pos.x, paddle.pos.y),
    })
}

/// Which face of a brick the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSide {
    /// Left or right face; horizontal velocity flips
    Horizontal,
    /// Top or bottom face; vertical velocity flips
    Vertical,
}

/// Decide the struck face from the ball center's offset, normalized by
/// brick size. Ties go to the top/bottom face.
pub fn hit_side(ball_pos: Vec2, brick: &Brick) -> HitSide {
    let delta = ball_pos - brick.center();
    if (delta.x / brick.width).abs() > (delta.y / brick.height).abs() {
        HitSide::Horizontal
    } else {
        HitSide::Vertical
    }
}

/// Outcome of a brick hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickHit {
    /// Index of the destroyed brick in the grid
    pub index: usize,
    pub side: HitSide,
    pub points: u64,
    pub color_class: u32,
    pub center: Vec2,
}

/// Destroy the first visible brick overlapping the ball, in grid order.
///
/// At most one brick is destroyed per call even when several overlap.
pub fn collide_bricks(ball: &mut Ball, bricks: &mut [Brick]) -> Option<BrickHit> {
    let ball_box = ball.aabb();
    let (index, brick) = bricks
        .iter_mut()
        .enumerate()
        .find(|(_, b)| b.visible && ball_box.overlaps(&b.aabb()))?;

    let side = hit_side(ball.pos, brick);
    match side {
        HitSide::Horizontal => ball.vel.x = -ball.vel.x,
        HitSide::Vertical => ball.vel.y = -ball.vel.y,
    }
    brick.visible = false;

    Some(BrickHit {
        index,
        side,
        points: brick.points,
        color_class: brick.color_class(),
        center: brick.center(),
    })
}

/// The ball's top edge has passed below the field bottom
pub fn ball_below_field(ball: &Ball, field_height: f32) -> bool {
    ball.pos.y - ball.radius > field_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::build_bricks;

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y), vel.length(), 12.0);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_aabb_overlap_inclusive() {
        let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let touching = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let apart = Aabb::new(Vec2::new(10.1, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn test_left_wall_reflects_and_clamps() {
        let mut ball = ball_at(5.0, 300.0, Vec2::new(-3.0, 2.0));
        let hits = collide_walls(&mut ball, 800.0);
        assert_eq!(hits, vec![Wall::Left]);
        assert_eq!(ball.vel, Vec2::new(3.0, 2.0));
        assert_eq!(ball.pos.x, ball.radius);
    }

    #[test]
    fn test_right_wall_reflects_and_clamps() {
        let mut ball = ball_at(798.0, 300.0, Vec2::new(3.0, 2.0));
        let hits = collide_walls(&mut ball, 800.0);
        assert_eq!(hits, vec![Wall::Right]);
        assert_eq!(ball.vel.x, -3.0);
        assert_eq!(ball.pos.x, 800.0 - ball.radius);
    }

    #[test]
    fn test_top_corner_hits_two_walls() {
        let mut ball = ball_at(2.0, 2.0, Vec2::new(-3.0, -4.0));
        let hits = collide_walls(&mut ball, 800.0);
        assert_eq!(hits, vec![Wall::Left, Wall::Top]);
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_no_bottom_wall() {
        let mut ball = ball_at(400.0, 700.0, Vec2::new(0.0, 4.0));
        assert!(collide_walls(&mut ball, 800.0).is_empty());
        assert!(ball_below_field(&ball, 600.0));
    }

    #[test]
    fn test_paddle_center_hit_bounces_straight_up() {
        let settings = Settings::default();
        let paddle = Paddle::new(&settings);
        let mut ball = ball_at(paddle.center_x(), paddle.pos.y - 5.0, Vec2::new(0.0, 4.0));

        let hit = collide_paddle(&mut ball, &paddle).unwrap();
        assert_eq!(hit.hit_pos, 0.0);
        assert!(ball.vel.x.abs() < 1e-6);
        assert!((ball.vel.y + 4.0).abs() < 1e-6);
        assert_eq!(ball.pos.y, paddle.pos.y - ball.radius);
    }

    #[test]
    fn test_paddle_edge_hit_bounces_sixty_degrees() {
        let settings = Settings::default();
        let paddle = Paddle::new(&settings);
        let mut ball = ball_at(
            paddle.pos.x + paddle.width,
            paddle.pos.y,
            Vec2::new(-2.0, 3.0),
        );
        let speed = ball.vel.length();

        let hit = collide_paddle(&mut ball, &paddle).unwrap();
        assert_eq!(hit.hit_pos, 1.0);
        assert!((ball.vel.length() - speed).abs() < 1e-4);
        assert!(ball.vel.x > 0.0 && ball.vel.y < 0.0);
        let angle = ball.vel.x.atan2(-ball.vel.y);
        assert!((angle - MAX_BOUNCE_ANGLE).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_ignored_when_moving_up() {
        let settings = Settings::default();
        let paddle = Paddle::new(&settings);
        let mut ball = ball_at(paddle.center_x(), paddle.pos.y, Vec2::new(0.0, -4.0));
        assert!(collide_paddle(&mut ball, &paddle).is_none());
        assert_eq!(ball.vel, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_hit_side_by_normalized_offset() {
        let brick = build_bricks(&Settings::default()).remove(0);
        let c = brick.center();
        let from_left = c - Vec2::new(brick.width / 2.0 + 2.0, 1.0);
        let from_below = c + Vec2::new(1.0, brick.height / 2.0 + 2.0);
        assert_eq!(hit_side(from_left, &brick), HitSide::Horizontal);
        assert_eq!(hit_side(from_below, &brick), HitSide::Vertical);
    }

    #[test]
    fn test_one_brick_per_call_when_overlapping_two() {
        let mut bricks = build_bricks(&Settings::default());
        // Ball centered on the gap between the first two bricks
        let gap_x = bricks[0].pos.x + bricks[0].width + 2.5;
        let mut ball = ball_at(gap_x, bricks[0].center().y + 30.0, Vec2::new(0.0, -4.0));
        ball.pos.y = bricks[0].pos.y + bricks[0].height + 5.0;
        assert!(ball.aabb().overlaps(&bricks[0].aabb()));
        assert!(ball.aabb().overlaps(&bricks[1].aabb()));

        let hit = collide_bricks(&mut ball, &mut bricks).unwrap();
        assert_eq!(hit.index, 0);
        assert!(!bricks[0].visible);
        assert!(bricks[1].visible);
        assert_eq!(hit.side, HitSide::Vertical);
        assert_eq!(ball.vel, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_invisible_bricks_skipped() {
        let mut bricks = build_bricks(&Settings::default());
        bricks[0].visible = false;
        let mut ball = ball_at(bricks[0].center().x, bricks[0].center().y, Vec2::new(0.0, -4.0));
        assert!(collide_bricks(&mut ball, &mut bricks).is_none());
        assert_eq!(ball.vel, Vec2::new(0.0, -4.0));
    }
}

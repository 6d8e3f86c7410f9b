//! Game state and core simulation types
//!
//! The session state owns the ball, paddle and brick grid exclusively.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to start
    Start,
    /// Active gameplay
    Playing,
    /// Game is paused; the simulation is frozen
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Magnitude of `vel`, kept in sync after every speed change
    pub speed: f32,
    pub max_speed: f32,
    /// Recent positions for rendering (oldest first)
    pub trail: VecDeque<Vec2>,
}

impl Ball {
    pub fn new(pos: Vec2, speed: f32, max_speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, speed),
            radius: BALL_RADIUS,
            speed,
            max_speed,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Move one tick along the current velocity and record the trail.
    ///
    /// Velocity is already expressed per tick, so `dt` does not scale it.
    pub fn advance(&mut self, _dt: f32) {
        self.pos += self.vel;
        self.trail.push_back(self.pos);
        while self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// Change speed while keeping the direction of travel
    pub fn set_speed(&mut self, speed: f32) {
        let speed = speed.clamp(0.0, self.max_speed);
        self.speed = speed;
        let current = self.vel.length();
        if current > f32::EPSILON {
            self.vel = self.vel / current * speed;
        } else {
            // Degenerate velocity: serve straight down
            self.vel = Vec2::new(0.0, speed);
        }
    }

    /// Point the ball at `angle` off vertical, always moving downward
    pub fn launch(&mut self, angle: f32) {
        self.vel = Vec2::new(angle.sin() * self.speed, (angle.cos() * self.speed).abs());
    }

    /// Clear trail (on respawn)
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::around(self.pos, self.radius)
    }
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels moved per tick while a direction is held
    pub speed: f32,
}

impl Paddle {
    /// Centered paddle near the bottom of the field
    pub fn new(settings: &Settings) -> Self {
        let mut paddle = Self {
            pos: Vec2::ZERO,
            width: settings.paddle_width,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        };
        paddle.reset(settings);
        paddle
    }

    /// Re-center and apply the configured width
    pub fn reset(&mut self, settings: &Settings) {
        self.width = settings.paddle_width;
        self.pos = Vec2::new(
            (settings.field_width - self.width) / 2.0,
            settings.field_height - PADDLE_BOTTOM_OFFSET,
        );
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Move horizontally by `dx`, then clamp inside `[0, field_width - width]`
    pub fn move_by(&mut self, dx: f32, field_width: f32) {
        self.pos.x = (self.pos.x + dx).clamp(0.0, (field_width - self.width).max(0.0));
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + Vec2::new(self.width, self.height))
    }
}

/// A brick in the grid
#[derive(Debug, Clone)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub row: u32,
    pub col: u32,
    pub points: u64,
    /// Destroyed bricks stay in the grid, hidden
    pub visible: bool,
}

impl Brick {
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + Vec2::new(self.width, self.height))
    }

    /// Color class for rendering (one per row)
    pub fn color_class(&self) -> u32 {
        self.row
    }
}

/// Build a fresh, fully visible brick grid in row-major order
pub fn build_bricks(settings: &Settings) -> Vec<Brick> {
    let width = settings.brick_width();
    let rows = settings.brick_rows;
    let cols = settings.brick_cols;

    let mut bricks = Vec::with_capacity((rows as usize).saturating_mul(cols as usize));
    for row in 0..rows {
        for col in 0..cols {
            let x = BRICK_SIDE_OFFSET + col as f32 * (width + BRICK_PADDING);
            let y = BRICK_TOP_OFFSET + row as f32 * (BRICK_HEIGHT + BRICK_PADDING);
            bricks.push(Brick {
                pos: Vec2::new(x, y),
                width,
                height: BRICK_HEIGHT,
                row,
                col,
                points: settings.brick_scoring.points(row, rows),
                visible: true,
            });
        }
    }
    bricks
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed used for launch angles
    pub seed: u64,
    rng: Pcg32,
    /// Configuration captured at session start/restart
    pub settings: Settings,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Current level (1-based)
    pub level: u32,
    /// Set while a ball loss is being processed; cleared by `reset_ball`
    pub ball_lost: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: Vec<Brick>,
}

impl GameState {
    /// Create a new session in the Start phase
    pub fn new(seed: u64, settings: Settings) -> Self {
        let settings = settings.sanitized();
        let center = field_center(&settings);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            paddle: Paddle::new(&settings),
            ball: Ball::new(
                center,
                settings.initial_ball_speed,
                settings.max_ball_speed,
            ),
            bricks: build_bricks(&settings),
            settings,
            phase: GamePhase::Start,
            score: 0,
            lives: INITIAL_LIVES,
            level: 1,
            ball_lost: false,
            time_ticks: 0,
        };
        state.reset_ball();
        state
    }

    /// Serve the ball from the field center at a random angle within ±60°
    /// of vertical, heading down, at the current speed.
    pub fn reset_ball(&mut self) {
        let angle = self.rng.random_range(-MAX_LAUNCH_ANGLE..=MAX_LAUNCH_ANGLE);
        self.ball.pos = field_center(&self.settings);
        self.ball.launch(angle);
        self.ball.clear_trail();
        self.ball_lost = false;
    }

    /// Reset score, lives, level, paddle and bricks using `settings`
    pub fn reset_run(&mut self, settings: Settings) {
        self.settings = settings.sanitized();
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.level = 1;
        self.time_ticks = 0;
        self.paddle.reset(&self.settings);
        self.ball.max_speed = self.settings.max_ball_speed;
        self.ball.speed = self.settings.initial_ball_speed;
        self.bricks = build_bricks(&self.settings);
        self.reset_ball();
    }

    /// Replace the brick grid with a fresh one
    pub fn rebuild_bricks(&mut self) {
        self.bricks = build_bricks(&self.settings);
    }

    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    pub fn all_bricks_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.visible)
    }
}

fn field_center(settings: &Settings) -> Vec2 {
    Vec2::new(settings.field_width / 2.0, settings.field_height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_keeps_last_ten() {
        let mut ball = Ball::new(Vec2::ZERO, 1.0, 10.0);
        ball.vel = Vec2::new(1.0, 0.0);
        for _ in 0..15 {
            ball.advance(FRAME_DT);
        }
        assert_eq!(ball.trail.len(), TRAIL_LENGTH);
        assert_eq!(ball.trail.front().copied(), Some(Vec2::new(6.0, 0.0)));
        assert_eq!(ball.trail.back().copied(), Some(Vec2::new(15.0, 0.0)));
    }

    #[test]
    fn test_set_speed_keeps_direction() {
        let mut ball = Ball::new(Vec2::ZERO, 5.0, 12.0);
        ball.vel = Vec2::new(3.0, 4.0);
        ball.set_speed(10.0);
        assert!((ball.vel - Vec2::new(6.0, 8.0)).length() < 1e-4);
        assert_eq!(ball.speed, 10.0);
    }

    #[test]
    fn test_set_speed_zero_velocity_falls_back_downward() {
        let mut ball = Ball::new(Vec2::ZERO, 4.0, 12.0);
        ball.vel = Vec2::ZERO;
        ball.set_speed(6.0);
        assert_eq!(ball.vel, Vec2::new(0.0, 6.0));
    }

    #[test]
    fn test_set_speed_clamps_to_max() {
        let mut ball = Ball::new(Vec2::ZERO, 4.0, 12.0);
        ball.set_speed(50.0);
        assert_eq!(ball.speed, 12.0);
        assert!((ball.vel.length() - 12.0).abs() < 1e-4);
    }

    #[test]
    fn test_reset_ball_launches_downward_within_sixty_degrees() {
        let mut state = GameState::new(7, Settings::default());
        for _ in 0..100 {
            state.reset_ball();
            let vel = state.ball.vel;
            assert!(vel.y >= 0.0);
            assert!((vel.length() - state.ball.speed).abs() < 1e-4);
            let angle = vel.x.atan2(vel.y).abs();
            assert!(angle <= MAX_LAUNCH_ANGLE + 1e-4);
        }
    }

    #[test]
    fn test_paddle_clamped_to_field() {
        let settings = Settings::default();
        let mut paddle = Paddle::new(&settings);
        paddle.move_by(-10_000.0, settings.field_width);
        assert_eq!(paddle.pos.x, 0.0);
        paddle.move_by(10_000.0, settings.field_width);
        assert_eq!(paddle.pos.x, settings.field_width - paddle.width);
    }

    #[test]
    fn test_build_bricks_grid() {
        let settings = Settings::default();
        let bricks = build_bricks(&settings);
        assert_eq!(bricks.len(), (BRICK_ROWS * BRICK_COLS) as usize);
        assert!(bricks.iter().all(|b| b.visible));
        // Row-major order, last brick inside the field
        let last = bricks.last().unwrap();
        assert_eq!((last.row, last.col), (BRICK_ROWS - 1, BRICK_COLS - 1));
        assert!(last.pos.x + last.width <= settings.field_width);
    }

    #[test]
    fn test_new_state_in_start_phase() {
        let state = GameState::new(1, Settings::default());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert!(!state.ball_lost);
    }
}

//! Paddle Bounce - brick breaker simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `effects`: Maps simulation events to render/audio hints
//! - `session`: Frame driver owning state, input and deferred actions
//! - `settings`: External configuration with safe defaults
//! - `platform`: Browser bridge (wasm32 only)

pub mod effects;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use effects::{EffectDispatcher, RenderHint, SoundCue};
pub use session::{FrameOutput, Session};
pub use settings::{BrickScoring, Settings};

/// Game configuration constants
pub mod consts {
    /// Nominal host frame duration (60 Hz), informational only
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Default playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Gap between paddle top and field bottom
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;
    /// Pixels per tick while a direction key is held
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults (speeds are in pixels per tick)
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 4.0;
    pub const BALL_MAX_SPEED: f32 = 12.0;
    /// Speed gained per level
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Positions kept in the cosmetic ball trail
    pub const TRAIL_LENGTH: usize = 10;

    /// Largest bounce angle off vertical, reached at the paddle edge (60°)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Largest launch angle off vertical on ball reset (60°)
    pub const MAX_LAUNCH_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_TOP_OFFSET: f32 = 60.0;
    pub const BRICK_SIDE_OFFSET: f32 = 30.0;
    /// Narrowest brick a column count may produce
    pub const MIN_BRICK_WIDTH: f32 = 10.0;
    /// Free space kept between the lowest brick row and the paddle top
    pub const BRICK_CLEARANCE: f32 = 4.0 * BALL_RADIUS;

    /// Largest accepted playfield dimension
    pub const MAX_FIELD_SIZE: f32 = 4096.0;

    /// Progression
    pub const INITIAL_LIVES: u8 = 3;
    pub const PADDLE_HIT_POINTS: u64 = 1;
    pub const LEVEL_BONUS_PER_LEVEL: u64 = 100;

    /// Delay before the ball is served again after a life is lost
    pub const BALL_RESET_DELAY_MS: f64 = 1000.0;
}

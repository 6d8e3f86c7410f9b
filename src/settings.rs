//! Game settings and preferences
//!
//! Supplied by the host and persisted separately in LocalStorage. The core
//! reads gameplay values at session start/restart; missing or malformed
//! values fall back to the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Points awarded per brick, based on its row
///
/// Rows are counted from the bottom of the grid, so the top row is worth
/// the most: `base + per_row * rows_from_bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickScoring {
    pub base: u64,
    pub per_row: u64,
}

impl Default for BrickScoring {
    fn default() -> Self {
        Self { base: 1, per_row: 1 }
    }
}

impl BrickScoring {
    /// Point value for a brick in `row` (0 = top) of a grid with `rows` rows
    pub fn points(&self, row: u32, rows: u32) -> u64 {
        let from_bottom = rows.saturating_sub(row.saturating_add(1)) as u64;
        self.per_row
            .saturating_mul(from_bottom)
            .saturating_add(self.base)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Gameplay ===
    pub paddle_width: f32,
    /// Ball speed at level 1 (pixels per tick)
    pub initial_ball_speed: f32,
    /// Upper clamp for ball speed
    pub max_ball_speed: f32,
    /// Speed gained per level cleared
    pub speed_increment: f32,
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_scoring: BrickScoring,

    // === Audio ===
    pub sound_enabled: bool,

    // === Visual Effects ===
    /// Particle bursts on hits
    pub particles: bool,
    /// Screen shake on impacts
    pub screen_shake: bool,
    /// Ball trails
    pub trails: bool,
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            initial_ball_speed: BALL_START_SPEED,
            max_ball_speed: BALL_MAX_SPEED,
            speed_increment: SPEED_INCREMENT,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_scoring: BrickScoring::default(),

            sound_enabled: true,

            particles: true,
            screen_shake: true,
            trails: true,
            reduced_motion: false,
        }
    }
}

/// Replace a non-finite or non-positive value with its default
fn positive_or(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("Invalid setting {name}={value}, using default {default}");
        default
    }
}

/// Replace a playfield dimension outside `(0, MAX_FIELD_SIZE]` with its default
fn field_size_or(name: &str, value: f32, default: f32) -> f32 {
    let value = positive_or(name, value, default);
    if value > MAX_FIELD_SIZE {
        log::warn!("Setting {name}={value} exceeds {MAX_FIELD_SIZE}, using default {default}");
        return default;
    }
    value
}

impl Settings {
    /// Parse settings from JSON; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Parse settings from JSON, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse settings: {e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Return a copy with every unusable value replaced by its default
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.field_width = field_size_or("field_width", self.field_width, defaults.field_width);
        self.field_height =
            field_size_or("field_height", self.field_height, defaults.field_height);
        if self.max_brick_rows() == 0 {
            log::warn!(
                "field_height {} leaves no room for bricks above the paddle, using default",
                self.field_height
            );
            self.field_height = defaults.field_height;
        }
        self.paddle_width = positive_or("paddle_width", self.paddle_width, defaults.paddle_width);
        self.initial_ball_speed = positive_or(
            "initial_ball_speed",
            self.initial_ball_speed,
            defaults.initial_ball_speed,
        );
        self.max_ball_speed =
            positive_or("max_ball_speed", self.max_ball_speed, defaults.max_ball_speed);
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            log::warn!(
                "Invalid setting speed_increment={}, using default",
                self.speed_increment
            );
            self.speed_increment = defaults.speed_increment;
        }

        if self.max_ball_speed < self.initial_ball_speed {
            log::warn!(
                "max_ball_speed {} below initial_ball_speed {}, using default speeds",
                self.max_ball_speed,
                self.initial_ball_speed
            );
            self.initial_ball_speed = defaults.initial_ball_speed;
            self.max_ball_speed = defaults.max_ball_speed;
        }

        if self.paddle_width >= self.field_width {
            log::warn!("paddle_width {} does not fit the field", self.paddle_width);
            self.paddle_width = defaults.paddle_width.min(self.field_width / 4.0);
        }

        let max_rows = self.max_brick_rows();
        if self.brick_rows == 0 || self.brick_rows > max_rows {
            log::warn!(
                "brick_rows {} does not fit above the paddle (max {max_rows})",
                self.brick_rows
            );
            self.brick_rows = defaults.brick_rows.min(max_rows);
        }
        if self.brick_cols == 0 || self.brick_width() < MIN_BRICK_WIDTH {
            log::warn!("brick_cols {} does not fit the field", self.brick_cols);
            self.brick_cols = defaults.brick_cols;
        }
        if self.brick_width() < MIN_BRICK_WIDTH {
            self.field_width = defaults.field_width;
            self.paddle_width = self.paddle_width.min(defaults.paddle_width);
        }

        self
    }

    /// Width of a single brick given the field width and column count
    pub fn brick_width(&self) -> f32 {
        let cols = self.brick_cols.max(1) as f32;
        let gaps = (cols - 1.0) * BRICK_PADDING;
        (self.field_width - 2.0 * BRICK_SIDE_OFFSET - gaps) / cols
    }

    /// Copy the presentation toggles from `other`, leaving gameplay values
    pub fn apply_effects(&mut self, other: &Settings) {
        self.sound_enabled = other.sound_enabled;
        self.particles = other.particles;
        self.screen_shake = other.screen_shake;
        self.trails = other.trails;
        self.reduced_motion = other.reduced_motion;
    }

    /// Most brick rows that fit between the top offset and the paddle,
    /// leaving `BRICK_CLEARANCE` free above the paddle
    pub fn max_brick_rows(&self) -> u32 {
        let paddle_top = self.field_height - PADDLE_BOTTOM_OFFSET;
        let room = paddle_top - BRICK_CLEARANCE - BRICK_TOP_OFFSET + BRICK_PADDING;
        if room.is_finite() && room > 0.0 {
            (room / (BRICK_HEIGHT + BRICK_PADDING)).floor() as u32
        } else {
            0
        }
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paddle_bounce_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

//! Presentation hints derived from simulation events
//!
//! The simulation reports what happened; this module decides what it should
//! look and sound like. Nothing here draws or plays audio - hints are handed
//! to the host, which owns the canvas and the audio context.

use glam::Vec2;
use serde::Serialize;

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoundCue {
    /// Ball hits a wall
    WallHit,
    /// Ball hits paddle
    PaddleHit,
    /// Brick destroyed
    BrickBreak,
    /// Ball fell past the paddle
    LifeLost,
    /// All bricks cleared
    LevelComplete,
    /// Run ended
    GameOver,
}

/// A single presentation effect for the host to perform
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RenderHint {
    Sound { cue: SoundCue },
    /// Burst of particles at `pos`, color as 0xRRGGBB
    Particles { pos: Vec2, color: u32, count: u32 },
    /// Background music should start or stop
    Music { playing: bool },
}

/// Particles per burst
const PARTICLE_COUNT: u32 = 8;

const WALL_COLOR: u32 = 0xFFD700;
const PADDLE_COLOR: u32 = 0x4CAF50;
const LIFE_LOST_COLOR: u32 = 0xFF4444;
const LEVEL_COLOR: u32 = 0xFFFFFF;

/// Row-based brick colors (from top to bottom)
pub const BRICK_COLORS: &[u32] = &[
    0xFF0000, // Red
    0xFF7F00, // Orange
    0xFFFF00, // Yellow
    0x00FF00, // Green
    0x0000FF, // Blue
    0x4B0082, // Indigo
    0x9400D3, // Violet
    0xFF1493, // Deep Pink
];

/// Color for a brick color class
pub fn brick_color(color_class: u32) -> u32 {
    BRICK_COLORS[color_class as usize % BRICK_COLORS.len()]
}

/// Screen shake intensity per impact kind
const WALL_SHAKE: f32 = 5.0;
const PADDLE_SHAKE: f32 = 8.0;
const BRICK_SHAKE: f32 = 4.0;
const LIFE_LOST_SHAKE: f32 = 15.0;
const LEVEL_SHAKE: f32 = 10.0;
/// Shake lost per update
const SHAKE_DECAY: f32 = 0.5;

/// Maps events to render hints and tracks screen shake
#[derive(Debug, Clone)]
pub struct EffectDispatcher {
    sound_enabled: bool,
    particles: bool,
    screen_shake: bool,
    shake: f32,
}

impl EffectDispatcher {
    pub fn new(settings: &Settings) -> Self {
        let mut dispatcher = Self {
            sound_enabled: true,
            particles: true,
            screen_shake: true,
            shake: 0.0,
        };
        dispatcher.configure(settings);
        dispatcher
    }

    /// Pick up effect toggles from new settings
    pub fn configure(&mut self, settings: &Settings) {
        self.sound_enabled = settings.sound_enabled;
        self.particles = settings.particles;
        self.screen_shake = settings.effective_screen_shake();
        if !self.screen_shake {
            self.shake = 0.0;
        }
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Current screen shake magnitude in pixels
    pub fn shake(&self) -> f32 {
        self.shake
    }

    /// Clear lingering effects (new run)
    pub fn reset(&mut self) {
        self.shake = 0.0;
    }

    /// Let the shake settle by one update
    pub fn decay(&mut self) {
        self.shake = (self.shake - SHAKE_DECAY).max(0.0);
    }

    /// Music hint for a lifecycle change; `None` when sound is off and
    /// music is being asked to start
    pub fn music(&self, playing: bool) -> Option<RenderHint> {
        if playing && !self.sound_enabled {
            return None;
        }
        Some(RenderHint::Music { playing })
    }

    /// Translate events into hints, in event order
    pub fn dispatch(&mut self, events: &[GameEvent]) -> Vec<RenderHint> {
        let mut hints = Vec::new();
        for event in events {
            let (cue, color, shake) = match *event {
                GameEvent::WallHit { .. } => (SoundCue::WallHit, WALL_COLOR, WALL_SHAKE),
                GameEvent::PaddleHit { .. } => (SoundCue::PaddleHit, PADDLE_COLOR, PADDLE_SHAKE),
                GameEvent::BrickDestroyed { color_class, .. } => {
                    (SoundCue::BrickBreak, brick_color(color_class), BRICK_SHAKE)
                }
                GameEvent::LifeLost { .. } => {
                    (SoundCue::LifeLost, LIFE_LOST_COLOR, LIFE_LOST_SHAKE)
                }
                GameEvent::LevelComplete { .. } => {
                    (SoundCue::LevelComplete, LEVEL_COLOR, LEVEL_SHAKE)
                }
                GameEvent::GameOver { .. } => {
                    if let Some(hint) = self.music(false) {
                        hints.push(hint);
                    }
                    if self.sound_enabled {
                        hints.push(RenderHint::Sound {
                            cue: SoundCue::GameOver,
                        });
                    }
                    continue;
                }
            };

            if self.sound_enabled {
                hints.push(RenderHint::Sound { cue });
            }
            if self.particles {
                hints.push(RenderHint::Particles {
                    pos: event.pos(),
                    color,
                    count: PARTICLE_COUNT,
                });
            }
            if self.screen_shake {
                self.shake = self.shake.max(shake);
            }
        }
        hints
    }
}

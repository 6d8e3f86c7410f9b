//! Semantic events emitted by the simulation
//!
//! Physics never plays sounds or spawns particles itself; each tick returns
//! the events that happened and collaborators decide how to present them.

use glam::Vec2;
use serde::Serialize;

use super::collision::Wall;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    WallHit { pos: Vec2, wall: Wall },
    PaddleHit { pos: Vec2, hit_pos: f32 },
    BrickDestroyed { pos: Vec2, color_class: u32, points: u64 },
    LifeLost { pos: Vec2, lives_left: u8 },
    LevelComplete { pos: Vec2, level: u32, bonus: u64 },
    GameOver { pos: Vec2, score: u64 },
}

/// Event kind without payload, for mapping to effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    WallHit,
    PaddleHit,
    BrickDestroyed,
    LifeLost,
    LevelComplete,
    GameOver,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::WallHit { .. } => EventKind::WallHit,
            GameEvent::PaddleHit { .. } => EventKind::PaddleHit,
            GameEvent::BrickDestroyed { .. } => EventKind::BrickDestroyed,
            GameEvent::LifeLost { .. } => EventKind::LifeLost,
            GameEvent::LevelComplete { .. } => EventKind::LevelComplete,
            GameEvent::GameOver { .. } => EventKind::GameOver,
        }
    }

    /// Where the event happened, in field coordinates
    pub fn pos(&self) -> Vec2 {
        match *self {
            GameEvent::WallHit { pos, .. }
            | GameEvent::PaddleHit { pos, .. }
            | GameEvent::BrickDestroyed { pos, .. }
            | GameEvent::LifeLost { pos, .. }
            | GameEvent::LevelComplete { pos, .. }
            | GameEvent::GameOver { pos, .. } => pos,
        }
    }
}

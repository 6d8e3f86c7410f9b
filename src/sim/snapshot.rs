//! Read-only view of the game for renderers and UI

use glam::Vec2;
use serde::Serialize;

use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Oldest first; empty when trails are disabled
    pub trail: Vec<Vec2>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddleView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrickView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color_class: u32,
    pub visible: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub field_width: f32,
    pub field_height: f32,
    pub ball: BallView,
    pub paddle: PaddleView,
    pub bricks: Vec<BrickView>,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub phase: GamePhase,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let ball = &state.ball;
        let paddle = &state.paddle;
        let trail = if state.settings.trails {
            ball.trail.iter().copied().collect()
        } else {
            Vec::new()
        };

        Self {
            field_width: state.settings.field_width,
            field_height: state.settings.field_height,
            ball: BallView {
                pos: ball.pos,
                radius: ball.radius,
                speed: ball.speed,
                trail,
            },
            paddle: PaddleView {
                pos: paddle.pos,
                width: paddle.width,
                height: paddle.height,
            },
            bricks: state
                .bricks
                .iter()
                .map(|b| BrickView {
                    pos: b.pos,
                    width: b.width,
                    height: b.height,
                    color_class: b.color_class(),
                    visible: b.visible,
                })
                .collect(),
            score: state.score,
            lives: state.lives,
            level: state.level,
            phase: state.phase,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = GameState::new(5, Settings::default());
        state.bricks[2].visible = false;
        state.score = 17;

        let snapshot = Snapshot::capture(&state);
        assert_eq!(snapshot.bricks.len(), state.bricks.len());
        assert!(!snapshot.bricks[2].visible);
        assert_eq!(snapshot.score, 17);
        assert_eq!(snapshot.phase, GamePhase::Start);
        assert_eq!(snapshot.paddle.width, state.paddle.width);
    }

    #[test]
    fn test_trail_hidden_when_disabled() {
        let settings = Settings {
            trails: false,
            ..Default::default()
        };
        let mut state = GameState::new(5, settings);
        state.ball.advance(0.0);
        assert!(Snapshot::capture(&state).ball.trail.is_empty());
    }

    #[test]
    fn test_json_has_phase_and_bricks() {
        let state = GameState::new(5, Settings::default());
        let json = Snapshot::capture(&state).to_json().unwrap();
        assert!(json.contains("\"phase\":\"Start\""));
        assert!(json.contains("\"bricks\":["));
    }
}

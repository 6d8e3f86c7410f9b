//! Per-tick simulation step
//!
//! Update order is fixed: paddle, ball integration, walls, paddle bounce,
//! bricks, level completion, then the loss boundary.

use super::collision::{ball_below_field, collide_bricks, collide_paddle, collide_walls};
use super::events::GameEvent;
use super::progression::{LifeLoss, advance_level, award, lose_life};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Movement intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left
    pub left: bool,
    /// Move paddle right
    pub right: bool,
}

impl TickInput {
    /// Horizontal direction: -1, 0 or 1 (both keys cancel out)
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance the game state by one tick and return what happened.
///
/// Does nothing outside the Playing phase.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;
    let field_width = state.settings.field_width;
    let field_height = state.settings.field_height;

    // Paddle
    let dx = input.direction() * state.paddle.speed;
    state.paddle.move_by(dx, field_width);

    // Ball
    state.ball.advance(dt);

    for wall in collide_walls(&mut state.ball, field_width) {
        events.push(GameEvent::WallHit {
            pos: state.ball.pos,
            wall,
        });
    }

    if let Some(hit) = collide_paddle(&mut state.ball, &state.paddle) {
        award(state, PADDLE_HIT_POINTS);
        log::debug!("Paddle hit at {:.2}! Score: {}", hit.hit_pos, state.score);
        events.push(GameEvent::PaddleHit {
            pos: hit.point,
            hit_pos: hit.hit_pos,
        });
    }

    let mut level_pos = state.ball.pos;
    if let Some(hit) = collide_bricks(&mut state.ball, &mut state.bricks) {
        award(state, hit.points);
        log::debug!("Brick {} destroyed (+{})", hit.index, hit.points);
        events.push(GameEvent::BrickDestroyed {
            pos: hit.center,
            color_class: hit.color_class,
            points: hit.points,
        });
        level_pos = hit.center;
    }

    if state.all_bricks_cleared() {
        let bonus = advance_level(state);
        events.push(GameEvent::LevelComplete {
            pos: level_pos,
            level: state.level,
            bonus,
        });
    }

    if ball_below_field(&state.ball, field_height) {
        let pos = glam::Vec2::new(state.ball.pos.x, field_height);
        match lose_life(state) {
            Some(LifeLoss::Continue { lives_left }) => {
                events.push(GameEvent::LifeLost { pos, lives_left });
            }
            Some(LifeLoss::GameOver) => {
                events.push(GameEvent::LifeLost { pos, lives_left: 0 });
                events.push(GameEvent::GameOver {
                    pos,
                    score: state.score,
                });
            }
            None => {}
        }
    }

    events
}

//! Score, lives and level progression
//!
//! Score only grows during a run. Lives drop once per ball loss, and the
//! level advances only when every brick is cleared.

use super::state::{GamePhase, GameState};
use crate::consts::*;
use crate::settings::Settings;

/// Ball speed for a level: `initial + (level - 1) * increment`, capped
pub fn level_speed(settings: &Settings, level: u32) -> f32 {
    let steps = level.saturating_sub(1) as f32;
    (settings.initial_ball_speed + steps * settings.speed_increment).min(settings.max_ball_speed)
}

/// Add points to the score
pub fn award(state: &mut GameState, points: u64) {
    state.score = state.score.saturating_add(points);
}

/// Result of processing a ball loss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeLoss {
    /// Lives remain; the ball should be served again after a delay
    Continue { lives_left: u8 },
    /// No lives left; the run is over
    GameOver,
}

/// Take one life for the current ball loss.
///
/// Returns `None` if this loss was already counted, so calling it every tick
/// while the ball stays below the field only deducts once.
pub fn lose_life(state: &mut GameState) -> Option<LifeLoss> {
    if state.ball_lost {
        return None;
    }
    state.ball_lost = true;
    state.lives = state.lives.saturating_sub(1);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over. Final score: {}", state.score);
        Some(LifeLoss::GameOver)
    } else {
        log::info!("Life lost! Lives remaining: {}", state.lives);
        Some(LifeLoss::Continue {
            lives_left: state.lives,
        })
    }
}

/// Move to the next level: faster ball, fresh bricks, new serve and a
/// level bonus. Returns the bonus awarded.
pub fn advance_level(state: &mut GameState) -> u64 {
    state.level += 1;
    let speed = level_speed(&state.settings, state.level);
    state.ball.set_speed(speed);
    state.rebuild_bricks();
    state.reset_ball();

    let bonus = LEVEL_BONUS_PER_LEVEL * state.level as u64;
    award(state, bonus);
    log::info!("Level up! Level: {}, Speed: {:.1}", state.level, state.ball.speed);
    bonus
}

//! Game lifecycle transitions
//!
//! `Start -> Playing <-> Paused`, `Playing -> GameOver` (from the tick),
//! and `restart` from any phase back to Playing with a full reset.
//! Each transition returns `false` when called from a phase it does not
//! apply to, leaving the state untouched.

use super::schedule::{DeferredAction, Scheduled};
use super::state::{GamePhase, GameState};
use crate::settings::Settings;

/// Begin play from the Start screen
pub fn start(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Start {
        log::debug!("Ignoring start in {:?}", state.phase);
        return false;
    }
    state.reset_ball();
    state.phase = GamePhase::Playing;
    log::info!("Game started");
    true
}

/// Freeze the simulation
pub fn pause(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        log::debug!("Ignoring pause in {:?}", state.phase);
        return false;
    }
    state.phase = GamePhase::Paused;
    log::info!("Game paused");
    true
}

/// Resume from pause. A ball loss still waiting for its deferred reset is
/// served immediately so the reset never happens unseen.
pub fn resume(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Paused {
        log::debug!("Ignoring resume in {:?}", state.phase);
        return false;
    }
    state.phase = GamePhase::Playing;
    if state.ball_lost {
        state.reset_ball();
    }
    log::info!("Game resumed");
    true
}

/// Toggle between Playing and Paused; other phases are unaffected
pub fn toggle_pause(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Playing => pause(state),
        GamePhase::Paused => resume(state),
        _ => false,
    }
}

/// Full reset: score, lives, level, paddle, bricks and ball, using the
/// given settings, then straight into Playing.
pub fn restart(state: &mut GameState, settings: Settings) {
    state.reset_run(settings);
    state.phase = GamePhase::Playing;
    log::info!("Game restarted");
}

/// Apply a deferred action that has come due.
///
/// Returns false, leaving the state unchanged, when the game has left the
/// action's required phase or the action no longer applies.
pub fn apply_deferred(state: &mut GameState, scheduled: &Scheduled) -> bool {
    if state.phase != scheduled.required_phase {
        log::debug!(
            "Discarding {:?}: phase is {:?}, needed {:?}",
            scheduled.action,
            state.phase,
            scheduled.required_phase
        );
        return false;
    }

    match scheduled.action {
        DeferredAction::ResetBall => {
            if !state.ball_lost {
                log::debug!("Discarding ball reset: ball already in play");
                return false;
            }
            state.reset_ball();
            true
        }
    }
}

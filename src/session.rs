//! Frame driver
//!
//! A `Session` is what the host talks to: it owns the game state, held-key
//! tracker, deferred-action scheduler, effect dispatcher and the settings
//! for the next run. The host calls [`Session::frame`] once per animation
//! frame and renders the returned [`FrameOutput`].

use serde::Serialize;

use crate::consts::*;
use crate::effects::{EffectDispatcher, RenderHint};
use crate::settings::Settings;
use crate::sim::{
    Command, DeferredAction, GameEvent, GamePhase, GameState, InputTracker, Scheduler, Snapshot,
    TickInput, lifecycle, tick,
};

/// Everything produced by one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameOutput {
    pub snapshot: Snapshot,
    pub events: Vec<GameEvent>,
    pub hints: Vec<RenderHint>,
    /// Screen shake magnitude in pixels
    pub shake: f32,
}

impl FrameOutput {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Paddle input that chases the ball, with a slowly wandering aim offset so
/// rallies do not settle into a loop
pub fn autopilot_input(state: &GameState) -> TickInput {
    let paddle = &state.paddle;
    let time_factor = state.time_ticks as f32 * 0.01;
    let offset = (time_factor.sin() * 0.3 + (time_factor * 0.7).sin() * 0.15) * paddle.width;
    let target = state.ball.pos.x - offset;
    let center = paddle.center_x();

    TickInput {
        left: target < center - paddle.speed,
        right: target > center + paddle.speed,
    }
}

/// A single-player game session
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    input: InputTracker,
    scheduler: Scheduler,
    effects: EffectDispatcher,
    /// Settings applied on the next start/restart
    settings: Settings,
    autopilot: bool,
    last_frame_ms: Option<f64>,
    /// Hints raised by lifecycle calls, delivered with the next frame
    pending_hints: Vec<RenderHint>,
}

impl Session {
    pub fn new(seed: u64, settings: Settings) -> Self {
        let settings = settings.sanitized();
        log::info!("Session created (seed {seed})");
        Self {
            state: GameState::new(seed, settings.clone()),
            input: InputTracker::new(),
            scheduler: Scheduler::new(),
            effects: EffectDispatcher::new(&settings),
            settings,
            autopilot: false,
            last_frame_ms: None,
            pending_hints: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Replace the settings used by the next start/restart. Effect toggles
    /// (sound, particles, shake, trails) take effect immediately.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings.sanitized();
        self.effects.configure(&self.settings);
        self.state.settings.apply_effects(&self.settings);
        log::info!("Settings updated");
    }

    /// Let the autopilot drive the paddle (attract mode)
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    fn queue_music(&mut self, playing: bool) {
        if let Some(hint) = self.effects.music(playing) {
            self.pending_hints.push(hint);
        }
    }

    pub fn start(&mut self) -> bool {
        if self.state.phase == GamePhase::Start && self.state.settings != self.settings {
            self.state.reset_run(self.settings.clone());
        }
        if !lifecycle::start(&mut self.state) {
            return false;
        }
        self.scheduler.cancel_all();
        self.effects.reset();
        self.queue_music(true);
        true
    }

    pub fn pause(&mut self) -> bool {
        if !lifecycle::pause(&mut self.state) {
            return false;
        }
        self.queue_music(false);
        true
    }

    pub fn resume(&mut self) -> bool {
        let reset_pending = self.state.ball_lost;
        if !lifecycle::resume(&mut self.state) {
            return false;
        }
        if reset_pending {
            // Ball was served on resume; the queued reset has nothing left to do
            self.scheduler.cancel_action(DeferredAction::ResetBall);
        }
        self.queue_music(true);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Full reset with the current settings, straight into Playing
    pub fn restart(&mut self) {
        self.scheduler.cancel_all();
        lifecycle::restart(&mut self.state, self.settings.clone());
        self.effects.reset();
        self.queue_music(true);
    }

    pub fn toggle_sound(&mut self) -> bool {
        let enabled = !self.effects.sound_enabled();
        self.effects.set_sound_enabled(enabled);
        self.settings.sound_enabled = enabled;
        self.state.settings.sound_enabled = enabled;
        if !enabled {
            self.queue_music(false);
        } else if self.state.phase == GamePhase::Playing {
            self.queue_music(true);
        }
        log::info!("Sound {}", if enabled { "enabled" } else { "disabled" });
        enabled
    }

    /// Host key press (`KeyboardEvent.key` or `.code`)
    pub fn key_down(&mut self, name: &str) {
        match self.input.key_down(name) {
            Some(Command::TogglePause) => {
                self.toggle_pause();
            }
            Some(Command::ToggleSound) => {
                self.toggle_sound();
            }
            Some(Command::Confirm) => match self.state.phase {
                GamePhase::Start => {
                    self.start();
                }
                GamePhase::GameOver => self.restart(),
                _ => {}
            },
            None => {}
        }
    }

    pub fn key_up(&mut self, name: &str) {
        self.input.key_up(name);
    }

    /// Host page/window hidden: drop held keys and pause
    pub fn visibility_hidden(&mut self) {
        self.input.release_all();
        if self.state.phase == GamePhase::Playing {
            self.pause();
        }
    }

    /// Run one frame at host time `now_ms`: fire due deferred actions,
    /// update the simulation if Playing, and collect output for rendering.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutput {
        let dt = match self.last_frame_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => FRAME_DT,
        };
        self.last_frame_ms = Some(now_ms);

        for scheduled in self.scheduler.take_due(now_ms) {
            lifecycle::apply_deferred(&mut self.state, &scheduled);
        }

        let mut events = Vec::new();
        if self.state.phase == GamePhase::Playing {
            let input = if self.autopilot {
                autopilot_input(&self.state)
            } else {
                self.input.intent()
            };
            events = tick(&mut self.state, &input, dt);
            self.effects.decay();

            for event in &events {
                if let GameEvent::LifeLost { lives_left, .. } = *event {
                    if lives_left > 0 {
                        self.scheduler.schedule(
                            now_ms,
                            BALL_RESET_DELAY_MS,
                            DeferredAction::ResetBall,
                            GamePhase::Playing,
                        );
                    }
                }
            }
        }

        let mut hints = std::mem::take(&mut self.pending_hints);
        hints.extend(self.effects.dispatch(&events));

        FrameOutput {
            snapshot: Snapshot::capture(&self.state),
            events,
            hints,
            shake: self.effects.shake(),
        }
    }
}

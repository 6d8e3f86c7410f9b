//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-based motion only
//! - Seeded RNG only
//! - Stable iteration order (grid order for bricks)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod events;
pub mod input;
pub mod lifecycle;
pub mod progression;
pub mod schedule;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Aabb, BrickHit, HitSide, PaddleHit, Wall};
pub use events::{EventKind, GameEvent};
pub use input::{Command, InputTracker, Key};
pub use lifecycle::{apply_deferred, pause, restart, resume, start, toggle_pause};
pub use progression::{LifeLoss, level_speed};
pub use schedule::{DeferredAction, Scheduled, Scheduler, TimerId};
pub use snapshot::Snapshot;
pub use state::{Ball, Brick, GamePhase, GameState, Paddle, build_bricks};
pub use tick::{TickInput, tick};

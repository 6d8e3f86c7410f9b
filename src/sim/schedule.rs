//! Deferred actions
//!
//! A deferred action is a message queued for the owning thread: it carries
//! the host time it becomes due and the phase the game must still be in for
//! it to apply. Stale actions are dropped when they come due.

use super::state::GamePhase;

/// Work to perform when a timer comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Serve the ball again after a life was lost
    ResetBall,
}

/// Handle returned when scheduling, used to cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A queued action
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled {
    pub id: TimerId,
    /// Host time (ms) at which the action becomes due
    pub due_ms: f64,
    pub action: DeferredAction,
    /// Phase the game must be in when the action fires
    pub required_phase: GamePhase,
}

/// Pending deferred actions, in scheduling order
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire `delay_ms` after `now_ms`
    pub fn schedule(
        &mut self,
        now_ms: f64,
        delay_ms: f64,
        action: DeferredAction,
        required_phase: GamePhase,
    ) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due_ms: now_ms + delay_ms,
            action,
            required_phase,
        });
        id
    }

    /// Cancel one action. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        self.pending.len() != before
    }

    /// Cancel every pending action of the given kind
    pub fn cancel_action(&mut self, action: DeferredAction) {
        self.pending.retain(|s| s.action != action);
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Remove and return every action due at `now_ms`, oldest first
    pub fn take_due(&mut self, now_ms: f64) -> Vec<Scheduled> {
        let (due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|s| s.due_ms <= now_ms);
        self.pending = pending;
        due
    }

    pub fn is_pending(&self, action: DeferredAction) -> bool {
        self.pending.iter().any(|s| s.action == action)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_only_returns_elapsed() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0.0, 1000.0, DeferredAction::ResetBall, GamePhase::Playing);
        scheduler.schedule(500.0, 1000.0, DeferredAction::ResetBall, GamePhase::Playing);

        assert!(scheduler.take_due(999.0).is_empty());
        let due = scheduler.take_due(1000.0);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].due_ms, 1000.0);
        assert_eq!(scheduler.len(), 1);

        assert_eq!(scheduler.take_due(5000.0).len(), 1);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule(0.0, 10.0, DeferredAction::ResetBall, GamePhase::Playing);
        assert!(scheduler.is_pending(DeferredAction::ResetBall));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.take_due(100.0).is_empty());
    }

    #[test]
    fn test_cancel_action_and_all() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0.0, 10.0, DeferredAction::ResetBall, GamePhase::Playing);
        scheduler.cancel_action(DeferredAction::ResetBall);
        assert!(scheduler.is_empty());

        scheduler.schedule(0.0, 10.0, DeferredAction::ResetBall, GamePhase::Playing);
        scheduler.cancel_all();
        assert!(scheduler.is_empty());
    }
}

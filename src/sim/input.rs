//! Keyboard state tracking
//!
//! Raw key names from the host (`KeyboardEvent.key` or `.code`) are folded
//! into a set of held keys. Movement is read from that set each tick;
//! pause/sound/confirm keys produce one-shot commands on press.

use std::collections::HashSet;

use super::tick::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Pause,
    Mute,
    Confirm,
}

impl Key {
    /// Map a host key name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "arrowleft" | "a" | "keya" => Some(Key::Left),
            "arrowright" | "d" | "keyd" => Some(Key::Right),
            "p" | "keyp" => Some(Key::Pause),
            "m" | "keym" => Some(Key::Mute),
            "enter" | " " | "space" => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// One-shot action triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    ToggleSound,
    /// Start from the title screen or restart after game over
    Confirm,
}

/// Tracks which keys are currently held
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashSet<Key>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns a command on the initial press only;
    /// auto-repeat presses of a held key return `None`.
    pub fn key_down(&mut self, name: &str) -> Option<Command> {
        let key = Key::from_name(name)?;
        if !self.held.insert(key) {
            return None;
        }
        match key {
            Key::Pause => Some(Command::TogglePause),
            Key::Mute => Some(Command::ToggleSound),
            Key::Confirm => Some(Command::Confirm),
            Key::Left | Key::Right => None,
        }
    }

    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.held.remove(&key);
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Forget all held keys (focus lost, key-ups will never arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Movement intent for the next tick
    pub fn intent(&self) -> TickInput {
        TickInput {
            left: self.is_held(Key::Left),
            right: self.is_held(Key::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("A"), Some(Key::Left));
        assert_eq!(Key::from_name("KeyD"), Some(Key::Right));
        assert_eq!(Key::from_name(" "), Some(Key::Confirm));
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_held_movement() {
        let mut input = InputTracker::new();
        input.key_down("ArrowLeft");
        assert_eq!(input.intent(), TickInput { left: true, right: false });

        // Key and code names fold to the same held key
        input.key_down("a");
        input.key_up("KeyA");
        assert_eq!(input.intent(), TickInput::default());
    }

    #[test]
    fn test_commands_fire_once_per_press() {
        let mut input = InputTracker::new();
        assert_eq!(input.key_down("p"), Some(Command::TogglePause));
        assert_eq!(input.key_down("p"), None);
        input.key_up("p");
        assert_eq!(input.key_down("P"), Some(Command::TogglePause));
        assert_eq!(input.key_down("m"), Some(Command::ToggleSound));
        assert_eq!(input.key_down("ArrowRight"), None);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputTracker::new();
        input.key_down("ArrowLeft");
        input.key_down("ArrowRight");
        input.release_all();
        assert_eq!(input.intent(), TickInput::default());
    }
}

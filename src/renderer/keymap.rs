//! Key bindings

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crate::sim::PaddleCommand;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Esc,
    Char(char),
    Other,
}

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Paddle(PaddleCommand),
    Quit,
}

/// Source of key presses (the terminal, or a script in tests)
pub trait KeySource {
    /// Wait up to `timeout` for the next key press
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<Key, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap
            .bind(Key::Left, Action::Paddle(PaddleCommand::Left))
            .bind(Key::Right, Action::Paddle(PaddleCommand::Right))
            .bind(Key::Esc, Action::Quit)
            .bind(Key::Char('q'), Action::Quit);
        keymap
    }
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Register a key press handler, replacing any previous binding
    pub fn bind(&mut self, key: Key, action: Action) -> &mut Self {
        self.bindings.insert(key, action);
        self
    }

    pub fn lookup(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

//! Keyboard shortcuts for the text area.
//!
//! Shortcuts only exist for file commands. Any key press that is not a
//! shortcut is an ordinary keystroke, which the status bar listens for.

use crate::menu::FileCommand;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Ctrl modifier.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
    };

    /// Ctrl+Shift.
    pub const CTRL_SHIFT: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: true,
    };
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key, reduced to what the keymap cares about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    /// Named keys (arrows, Enter, ...) and bare modifiers.
    Other,
}

impl Key {
    /// Builds a key from the text a toolkit reports for it.
    ///
    /// Shifted letters arrive uppercase on most platforms; they are folded
    /// to lowercase so `Ctrl+Shift+S` matches however it is reported.
    pub fn from_text(text: &str) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
            _ => Key::Other,
        }
    }
}

/// A single shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: char,
    pub modifiers: Modifiers,
    pub command: FileCommand,
}

impl KeyBinding {
    /// Returns the accelerator label, e.g. `Ctrl+Shift+S`.
    pub fn label(&self) -> String {
        format!("{}+{}", self.modifiers, self.key.to_ascii_uppercase())
    }
}

/// What a key press turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Command(FileCommand),
    Keystroke,
}

/// The shortcut table.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    /// Finds the command bound to a key press.
    ///
    /// Modifiers must match exactly, so `Ctrl+S` and `Ctrl+Shift+S` never
    /// shadow each other.
    pub fn lookup(&self, key: &Key, modifiers: Modifiers) -> Option<FileCommand> {
        let Key::Char(c) = key else {
            return None;
        };
        self.bindings
            .iter()
            .find(|b| b.key == *c && b.modifiers == modifiers)
            .map(|b| b.command)
    }

    /// Classifies a key press.
    pub fn dispatch(&self, key: &Key, modifiers: Modifiers) -> KeyOutcome {
        match self.lookup(key, modifiers) {
            Some(command) => {
                tracing::debug!("Shortcut {}+{:?} -> {:?}", modifiers, key, command);
                KeyOutcome::Command(command)
            }
            None => KeyOutcome::Keystroke,
        }
    }

    /// Returns the accelerator label for a command, if it has a shortcut.
    pub fn accelerator(&self, command: FileCommand) -> Option<String> {
        self.bindings
            .iter()
            .find(|b| b.command == command)
            .map(KeyBinding::label)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let bind = |key, modifiers, command| KeyBinding {
            key,
            modifiers,
            command,
        };
        Self {
            bindings: vec![
                bind('n', Modifiers::CTRL, FileCommand::New),
                bind('o', Modifiers::CTRL, FileCommand::Open),
                bind('s', Modifiers::CTRL, FileCommand::Save),
                bind('s', Modifiers::CTRL_SHIFT, FileCommand::SaveAs),
            ],
        }
    }
}

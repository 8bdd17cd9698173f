//! The one-line status banner at the bottom of the window.
//!
//! ## Learning: Tagged Events
//!
//! The banner flips between two messages. Instead of guessing what kind
//! of argument it was called with, the caller says what happened with a
//! [`StatusEvent`], and a `match` decides the new banner.

use crate::{APP_NAME, RELEASE};

/// Banner shown right after a successful write.
pub const SAVED_BANNER: &str = "Your File has been Saved!";

/// Something the status bar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// A save or save-as finished writing to disk.
    SaveCompleted,
    /// The user pressed a key in the text area.
    TextChanged,
}

/// Current banner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Banner {
    #[default]
    Idle,
    Saved,
}

/// Status line state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    banner: Banner,
}

impl StatusBar {
    /// Creates a status bar showing the idle banner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an event.
    pub fn update_status(&mut self, event: StatusEvent) {
        self.banner = match event {
            StatusEvent::SaveCompleted => Banner::Saved,
            StatusEvent::TextChanged => Banner::Idle,
        };
    }

    /// Returns true while the save confirmation is showing.
    pub fn is_saved(&self) -> bool {
        self.banner == Banner::Saved
    }

    /// Returns the text to display.
    pub fn text(&self) -> String {
        match self.banner {
            Banner::Idle => idle_banner(),
            Banner::Saved => SAVED_BANNER.to_string(),
        }
    }
}

/// The banner shown when nothing was just saved.
pub fn idle_banner() -> String {
    format!("{} - {}", APP_NAME, RELEASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_idle() {
        let status = StatusBar::new();
        assert_eq!(status.text(), "PyText - 0.1 Wilde");
        assert!(!status.is_saved());
    }

    #[test]
    fn test_save_then_keystroke() {
        let mut status = StatusBar::new();
        status.update_status(StatusEvent::SaveCompleted);
        assert_eq!(status.text(), "Your File has been Saved!");

        status.update_status(StatusEvent::TextChanged);
        assert_eq!(status.text(), "PyText - 0.1 Wilde");
    }

    fn event() -> impl Strategy<Value = StatusEvent> {
        prop_oneof![Just(StatusEvent::SaveCompleted), Just(StatusEvent::TextChanged)]
    }

    proptest! {
        #[test]
        fn prop_last_event_wins(events in proptest::collection::vec(event(), 1..32)) {
            let mut status = StatusBar::new();
            for event in &events {
                status.update_status(*event);
            }
            let expected = match events.last() {
                Some(StatusEvent::SaveCompleted) => SAVED_BANNER.to_string(),
                _ => idle_banner(),
            };
            prop_assert_eq!(status.text(), expected);
        }
    }
}

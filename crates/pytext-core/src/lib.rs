//! # PyText Core
//!
//! Editor state that does not depend on any GUI toolkit.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 EditorShell                   │
//! │  ┌──────────┐  ┌────────────┐  ┌───────────┐ │
//! │  │ Document │  │ TextBuffer │  │ StatusBar │ │
//! │  └──────────┘  └────────────┘  └───────────┘ │
//! └──────────────────────────────────────────────┘
//!          ▲                     ▲
//!          │ FileCommand         │ StatusEvent
//!   ┌──────┴──────┐        ┌─────┴─────┐
//!   │   Menubar   │        │  Keymap   │
//!   └─────────────┘        └───────────┘
//! ```
//!
//! The UI crate owns the window and the widgets. Everything it shows
//! (title, status text, menu entries) is derived from the types here.

pub mod buffer;
pub mod config;
pub mod dialog;
pub mod document;
pub mod keymap;
pub mod menu;
pub mod shell;
pub mod status;

pub use buffer::TextBuffer;
pub use config::{Config, ConfigError};
pub use dialog::{FileFilter, PickerOptions, FILE_FILTERS};
pub use document::{window_title, Document};
pub use keymap::{Key, KeyOutcome, Keymap, Modifiers};
pub use menu::{
    Activation, FileCommand, FileCommands, InfoDialog, Menu, MenuAction, MenuEntry, Menubar,
};
pub use shell::{EditorShell, OpenOutcome, SaveOutcome};
pub use status::{StatusBar, StatusEvent};

use std::path::PathBuf;

/// Application name shown in the title bar and the idle banner.
pub const APP_NAME: &str = "PyText";

/// Release label shown in the idle banner and the release notes.
pub const RELEASE: &str = "0.1 Wilde";

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a UTF-8 text file", path.display())]
    NotText { path: PathBuf },
}

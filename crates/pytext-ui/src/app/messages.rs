use iced::keyboard;
use iced::widget::text_editor;
use std::path::PathBuf;

use pytext_core::{FileCommand, MenuAction};

#[derive(Debug, Clone)]
pub enum Message {
    // File operations
    File(FileCommand),

    // Picker results
    OpenPicked(Option<PathBuf>),
    SavePicked(Option<PathBuf>),

    // Editor
    EditorAction(text_editor::Action),
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Menu bar
    ToggleMenu(usize),
    CloseMenu,
    MenuActivated(MenuAction),

    // Dialogs
    CloseDialog,

    // Window
    CloseRequested,
}

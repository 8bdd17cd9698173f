//! The menu bar model.
//!
//! ## Learning: Capabilities Instead of Back-References
//!
//! A menu item has to trigger editor operations, but the menu should not
//! own (or point back at) the editor. Items carry a [`FileCommand`] value
//! and the menu runs it against anything implementing [`FileCommands`].
//! Tests implement the trait with a recorder; the UI implements it on its
//! application state.

use crate::keymap::Keymap;

/// The file operations a menu (or shortcut) can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCommand {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
}

impl FileCommand {
    /// Runs the command against a capability provider.
    pub fn run<C: FileCommands + ?Sized>(self, target: &mut C) -> C::Output {
        match self {
            FileCommand::New => target.new_file(),
            FileCommand::Open => target.open_file(),
            FileCommand::Save => target.save(),
            FileCommand::SaveAs => target.save_as(),
            FileCommand::Exit => target.exit(),
        }
    }
}

/// The capability interface handed to the menu.
pub trait FileCommands {
    /// What running a command produces (e.g. a follow-up task in the UI).
    type Output;

    fn new_file(&mut self) -> Self::Output;
    fn open_file(&mut self) -> Self::Output;
    fn save(&mut self) -> Self::Output;
    fn save_as(&mut self) -> Self::Output;
    fn exit(&mut self) -> Self::Output;
}

/// A static informational popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoDialog {
    pub title: &'static str,
    pub message: &'static str,
}

impl InfoDialog {
    pub const ABOUT: InfoDialog = InfoDialog {
        title: "About PyText",
        message: "A simple Text Editor created with Rust and iced!",
    };

    pub const RELEASE_NOTES: InfoDialog = InfoDialog {
        title: "Release Notes",
        message: "Version 0.1 - Wilde",
    };
}

/// What a menu item does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    File(FileCommand),
    Show(InfoDialog),
}

impl MenuAction {
    /// Runs a file command against `target`, or hands back the dialog to show.
    pub fn activate<C: FileCommands + ?Sized>(self, target: &mut C) -> Activation<C::Output> {
        match self {
            MenuAction::File(command) => Activation::Ran(command.run(target)),
            MenuAction::Show(dialog) => Activation::Dialog(dialog),
        }
    }
}

/// An entry in a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        label: &'static str,
        accelerator: Option<String>,
        action: MenuAction,
    },
    Separator,
}

/// A top-level menu and its dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

/// Result of activating a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation<T> {
    /// A file command ran and produced this output.
    Ran(T),
    /// A dialog should be shown.
    Dialog(InfoDialog),
}

/// The whole menu bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menubar {
    menus: Vec<Menu>,
}

impl Menubar {
    /// Builds the File and About menus, labelling items with the keymap's
    /// accelerators.
    pub fn new(keymap: &Keymap) -> Self {
        let item = |label, action: MenuAction| {
            let accelerator = match action {
                MenuAction::File(command) => keymap.accelerator(command),
                MenuAction::Show(_) => None,
            };
            MenuEntry::Item {
                label,
                accelerator,
                action,
            }
        };

        let file = Menu {
            title: "File",
            entries: vec![
                item("New file", MenuAction::File(FileCommand::New)),
                item("Open file", MenuAction::File(FileCommand::Open)),
                item("Save", MenuAction::File(FileCommand::Save)),
                item("Save as", MenuAction::File(FileCommand::SaveAs)),
                MenuEntry::Separator,
                item("Exit", MenuAction::File(FileCommand::Exit)),
            ],
        };

        let about = Menu {
            title: "About",
            entries: vec![
                item("Release Notes", MenuAction::Show(InfoDialog::RELEASE_NOTES)),
                MenuEntry::Separator,
                item("About", MenuAction::Show(InfoDialog::ABOUT)),
            ],
        };

        let menus = vec![file, about];
        tracing::debug!("Built menu bar with {} menus", menus.len());
        Self { menus }
    }

    /// Returns the top-level menus in display order.
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Returns the menu at `index`.
    pub fn menu(&self, index: usize) -> Option<&Menu> {
        self.menus.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl FileCommands for Recorder {
        type Output = usize;

        fn new_file(&mut self) -> usize {
            self.calls.push("new");
            self.calls.len()
        }
        fn open_file(&mut self) -> usize {
            self.calls.push("open");
            self.calls.len()
        }
        fn save(&mut self) -> usize {
            self.calls.push("save");
            self.calls.len()
        }
        fn save_as(&mut self) -> usize {
            self.calls.push("save_as");
            self.calls.len()
        }
        fn exit(&mut self) -> usize {
            self.calls.push("exit");
            self.calls.len()
        }
    }

    fn labels(menu: &Menu) -> Vec<&'static str> {
        menu.entries
            .iter()
            .map(|e| match e {
                MenuEntry::Item { label, .. } => *label,
                MenuEntry::Separator => "---",
            })
            .collect()
    }

    #[test]
    fn test_menu_layout() {
        let menubar = Menubar::new(&Keymap::default());
        let titles: Vec<_> = menubar.menus().iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["File", "About"]);

        assert_eq!(
            labels(&menubar.menus()[0]),
            vec!["New file", "Open file", "Save", "Save as", "---", "Exit"]
        );
        assert_eq!(
            labels(&menubar.menus()[1]),
            vec!["Release Notes", "---", "About"]
        );
    }

    #[test]
    fn test_file_items_carry_accelerators() {
        let menubar = Menubar::new(&Keymap::default());
        let accelerators: Vec<Option<String>> = menubar.menus()[0]
            .entries
            .iter()
            .filter_map(|e| match e {
                MenuEntry::Item { accelerator, .. } => Some(accelerator.clone()),
                MenuEntry::Separator => None,
            })
            .collect();
        assert_eq!(
            accelerators,
            vec![
                Some("Ctrl+N".to_string()),
                Some("Ctrl+O".to_string()),
                Some("Ctrl+S".to_string()),
                Some("Ctrl+Shift+S".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_activate_routes_commands() {
        let menubar = Menubar::new(&Keymap::default());
        let mut recorder = Recorder::default();

        let actions: Vec<MenuAction> = menubar.menus()[0]
            .entries
            .iter()
            .filter_map(|e| match e {
                MenuEntry::Item { action, .. } => Some(*action),
                MenuEntry::Separator => None,
            })
            .collect();
        for action in actions {
            action.activate(&mut recorder);
        }

        assert_eq!(recorder.calls, vec!["new", "open", "save", "save_as", "exit"]);
    }

    #[test]
    fn test_activate_dialogs_run_nothing() {
        let mut recorder = Recorder::default();

        let result = MenuAction::Show(InfoDialog::ABOUT).activate(&mut recorder);
        assert_eq!(result, Activation::Dialog(InfoDialog::ABOUT));
        assert!(recorder.calls.is_empty());

        let result = MenuAction::File(FileCommand::Save).activate(&mut recorder);
        assert_eq!(result, Activation::Ran(1));
    }

    #[test]
    fn test_dialog_text() {
        assert_eq!(InfoDialog::ABOUT.title, "About PyText");
        assert_eq!(InfoDialog::RELEASE_NOTES.message, "Version 0.1 - Wilde");
    }
}

use iced::widget::text_editor;
use iced::{keyboard, Task};

use pytext_core::{Activation, Key, KeyOutcome, Modifiers};

use super::{App, Dialog, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::File(command) => {
                self.active_menu = None;
                return command.run(self);
            }

            Message::OpenPicked(picked) => {
                self.finish_open(picked);
            }

            Message::SavePicked(picked) => {
                self.finish_save_as(picked);
            }

            Message::EditorAction(action) => {
                // The focused editor still receives keys under a modal.
                if self.dialog.is_some() {
                    if matches!(action, text_editor::Action::Edit(_)) {
                        tracing::debug!("Ignoring edit while a dialog is open");
                    }
                    return Task::none();
                }
                self.active_menu = None;
                if is_keystroke(&action) {
                    self.shell.keystroke();
                }
                self.shell.buffer_mut().0.perform(action);
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::ToggleMenu(index) => {
                if self.active_menu == Some(index) {
                    self.active_menu = None;
                } else {
                    self.active_menu = Some(index);
                }
            }

            Message::CloseMenu => {
                self.active_menu = None;
            }

            Message::MenuActivated(action) => {
                self.active_menu = None;
                match action.activate(self) {
                    Activation::Ran(task) => return task,
                    Activation::Dialog(info) => self.dialog = Some(Dialog::Info(info)),
                }
            }

            Message::CloseDialog => {
                self.dialog = None;
            }

            Message::CloseRequested => {
                return self.teardown();
            }
        }
        Task::none()
    }

    pub fn handle_key_pressed(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        // Modals swallow shortcuts; Escape dismisses them.
        if self.dialog.is_some() {
            if matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape)) {
                self.dialog = None;
            }
            return Task::none();
        }

        let key = match &key {
            keyboard::Key::Character(c) => Key::from_text(c.as_str()),
            _ => Key::Other,
        };
        let modifiers = Modifiers {
            ctrl: modifiers.control(),
            alt: modifiers.alt(),
            shift: modifiers.shift(),
        };

        match self.keymap.dispatch(&key, modifiers) {
            KeyOutcome::Command(command) => self.update(Message::File(command)),
            KeyOutcome::Keystroke => {
                self.shell.keystroke();
                Task::none()
            }
        }
    }
}

/// Editor actions that come from the keyboard rather than the mouse.
fn is_keystroke(action: &text_editor::Action) -> bool {
    matches!(
        action,
        text_editor::Action::Edit(_)
            | text_editor::Action::Move(_)
            | text_editor::Action::Select(_)
            | text_editor::Action::SelectAll
    )
}

use std::path::PathBuf;

use iced::Task;
use pytext_core::{CoreError, FileCommands, OpenOutcome, PickerOptions, SaveOutcome};

use super::{App, Dialog, Message};

/// Builds a native picker from the shared options.
fn file_dialog(options: &PickerOptions) -> rfd::AsyncFileDialog {
    let mut dialog = rfd::AsyncFileDialog::new().set_title(options.title);
    if let Some(name) = options.file_name {
        dialog = dialog.set_file_name(name);
    }
    for filter in options.filters {
        dialog = dialog.add_filter(filter.label(), filter.extensions);
    }
    dialog
}

pub async fn pick_open() -> Option<PathBuf> {
    file_dialog(&PickerOptions::open())
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

pub async fn pick_save() -> Option<PathBuf> {
    file_dialog(&PickerOptions::save())
        .save_file()
        .await
        .map(|file| file.path().to_path_buf())
}

impl App {
    /// Logs an I/O failure and puts it in front of the user.
    pub fn report(&mut self, title: &str, error: &CoreError) {
        match error {
            CoreError::NotText { .. } => tracing::warn!("{}: {}", title, error),
            _ => tracing::error!("{}: {}", title, error),
        }
        self.dialog = Some(Dialog::Error {
            title: title.to_string(),
            message: error.to_string(),
        });
    }

    pub fn finish_open(&mut self, picked: Option<PathBuf>) {
        match self.shell.open_file(picked) {
            Ok(OpenOutcome::Opened(path)) => {
                tracing::debug!("Title is now {:?} after opening {}", self.shell.title(), path.display());
            }
            Ok(OpenOutcome::Cancelled) => {}
            Err(e) => self.report("Open failed", &e),
        }
    }

    pub fn finish_save_as(&mut self, picked: Option<PathBuf>) {
        match self.shell.save_as(picked) {
            Ok(SaveOutcome::Saved(path)) => {
                tracing::debug!("Title is now {:?} after saving {}", self.shell.title(), path.display());
            }
            Ok(SaveOutcome::Cancelled | SaveOutcome::NeedsPath) => {}
            Err(e) => self.report("Save failed", &e),
        }
    }
}

impl FileCommands for App {
    type Output = Task<Message>;

    fn new_file(&mut self) -> Task<Message> {
        self.shell.new_file();
        Task::none()
    }

    fn open_file(&mut self) -> Task<Message> {
        Task::perform(pick_open(), Message::OpenPicked)
    }

    fn save(&mut self) -> Task<Message> {
        match self.shell.save() {
            Ok(SaveOutcome::NeedsPath) => self.save_as(),
            Ok(_) => Task::none(),
            Err(e) => {
                self.report("Save failed", &e);
                Task::none()
            }
        }
    }

    fn save_as(&mut self) -> Task<Message> {
        Task::perform(pick_save(), Message::SavePicked)
    }

    fn exit(&mut self) -> Task<Message> {
        self.teardown()
    }
}

//! The editor shell: file operations over a document and its buffer.
//!
//! Pickers are the UI's business. Each operation here receives what the
//! picker returned (`None` when the user cancelled) and performs the
//! blocking I/O itself. State only changes after the I/O succeeded, so a
//! failed or cancelled operation leaves the document exactly as it was.

use std::path::{Path, PathBuf};

use crate::buffer::TextBuffer;
use crate::dialog::PickerOptions;
use crate::document::{self, Document};
use crate::status::{StatusBar, StatusEvent};
use crate::CoreResult;

/// Result of [`EditorShell::open_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened(PathBuf),
    Cancelled,
}

/// Result of [`EditorShell::save`] and [`EditorShell::save_as`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The document has no path yet; the caller should run Save As.
    NeedsPath,
    Cancelled,
}

/// Owns the document state and the status bar, and borrows the text
/// widget through [`TextBuffer`].
#[derive(Debug)]
pub struct EditorShell<B> {
    document: Document,
    buffer: B,
    status: StatusBar,
}

impl<B: TextBuffer> EditorShell<B> {
    /// Creates a shell around an empty, untitled buffer.
    pub fn new(mut buffer: B) -> Self {
        buffer.clear();
        Self {
            document: Document::new(),
            buffer,
            status: StatusBar::new(),
        }
    }

    // ==================== Getters ====================

    /// Returns the current file path.
    pub fn path(&self) -> Option<&Path> {
        self.document.path()
    }

    /// Returns the text buffer.
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Returns a mutable reference to the buffer.
    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    /// Returns the status bar.
    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    /// Returns the window title.
    pub fn title(&self) -> String {
        self.document.title()
    }

    // ==================== File Operations ====================

    /// Clears the buffer and forgets the file path.
    pub fn new_file(&mut self) {
        self.buffer.clear();
        self.document.reset();
        tracing::info!("New untitled document");
    }

    /// Loads the picked file into the buffer.
    pub fn open_file(&mut self, picked: Option<PathBuf>) -> CoreResult<OpenOutcome> {
        let Some(path) = Self::chosen(picked) else {
            tracing::debug!("Open cancelled");
            return Ok(OpenOutcome::Cancelled);
        };

        let text = document::read_text(&path)?;
        self.buffer.replace(&text);
        self.document.set_path(path.clone());
        tracing::info!("Opened {} ({} bytes)", path.display(), text.len());
        Ok(OpenOutcome::Opened(path))
    }

    /// Writes the buffer to the current path.
    ///
    /// Returns [`SaveOutcome::NeedsPath`] for untitled documents without
    /// touching the disk.
    pub fn save(&mut self) -> CoreResult<SaveOutcome> {
        let Some(path) = self.document.path().map(Path::to_path_buf) else {
            return Ok(SaveOutcome::NeedsPath);
        };

        self.write_to(&path)?;
        Ok(SaveOutcome::Saved(path))
    }

    /// Writes the buffer to the picked path and adopts it.
    pub fn save_as(&mut self, picked: Option<PathBuf>) -> CoreResult<SaveOutcome> {
        let Some(path) = Self::chosen(picked) else {
            tracing::debug!("Save As cancelled");
            return Ok(SaveOutcome::Cancelled);
        };

        let path = PickerOptions::save().apply_default_extension(&path);
        self.write_to(&path)?;
        self.document.set_path(path.clone());
        Ok(SaveOutcome::Saved(path))
    }

    /// Records an ordinary keystroke in the text area.
    pub fn keystroke(&mut self) {
        self.status.update_status(StatusEvent::TextChanged);
    }

    fn write_to(&mut self, path: &Path) -> CoreResult<()> {
        let text = self.buffer.contents();
        document::write_text(path, &text)?;
        self.status.update_status(StatusEvent::SaveCompleted);
        tracing::info!("Saved {} ({} bytes)", path.display(), text.len());
        Ok(())
    }

    /// Some pickers report cancellation as an empty path.
    fn chosen(picked: Option<PathBuf>) -> Option<PathBuf> {
        picked.filter(|p| !p.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    fn shell_with(text: &str) -> EditorShell<String> {
        let mut shell = EditorShell::new(String::new());
        TextBuffer::replace(shell.buffer_mut(), text);
        shell
    }

    #[test]
    fn test_new_shell_is_untitled() {
        let shell = EditorShell::new(String::from("leftover"));
        assert_eq!(shell.title(), "Untitled - PyText");
        assert_eq!(shell.path(), None);
        assert!(shell.buffer().is_empty());
        assert_eq!(shell.status().text(), "PyText - 0.1 Wilde");
    }

    #[test]
    fn test_save_untitled_needs_path() {
        let mut shell = shell_with("draft");
        assert_eq!(shell.save().unwrap(), SaveOutcome::NeedsPath);
        assert!(!shell.status().is_saved());
    }

    #[test]
    fn test_save_as_then_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");

        let mut shell = shell_with("line one\nline two\n");
        let outcome = shell.save_as(Some(path.clone())).unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(path.clone()));
        assert_eq!(shell.title(), "notes.md - PyText");

        shell.new_file();
        assert_eq!(shell.buffer(), "");
        assert_eq!(shell.title(), "Untitled - PyText");

        shell.open_file(Some(path.clone())).unwrap();
        assert_eq!(shell.buffer(), "line one\nline two\n");
        assert_eq!(shell.path(), Some(path.as_path()));
    }

    #[test]
    fn test_save_twice_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("same.txt");

        let mut shell = shell_with("unchanged");
        shell.save_as(Some(path.clone())).unwrap();
        let first = std::fs::read(&path).unwrap();

        assert_eq!(shell.save().unwrap(), SaveOutcome::Saved(path.clone()));
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_as_appends_default_extension() {
        let dir = tempfile::tempdir().unwrap();

        let mut shell = shell_with("x");
        shell.save_as(Some(dir.path().join("README"))).unwrap();
        assert_eq!(shell.path(), Some(dir.path().join("README.txt").as_path()));
        assert_eq!(shell.title(), "README.txt - PyText");
    }

    #[test]
    fn test_cancel_leaves_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kept.txt");

        let mut shell = shell_with("keep me");
        shell.save_as(Some(path.clone())).unwrap();

        assert_eq!(shell.open_file(None).unwrap(), OpenOutcome::Cancelled);
        assert_eq!(shell.save_as(None).unwrap(), SaveOutcome::Cancelled);
        assert_eq!(
            shell.save_as(Some(PathBuf::new())).unwrap(),
            SaveOutcome::Cancelled
        );

        assert_eq!(shell.buffer(), "keep me");
        assert_eq!(shell.path(), Some(path.as_path()));
    }

    #[test]
    fn test_failed_open_leaves_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_with("still here");

        let err = shell
            .open_file(Some(dir.path().join("missing.txt")))
            .unwrap_err();
        assert!(matches!(err, CoreError::Read { .. }));
        assert_eq!(shell.buffer(), "still here");
        assert_eq!(shell.path(), None);
    }

    #[test]
    fn test_failed_save_shows_no_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no_such_dir").join("file.txt");

        let mut shell = shell_with("lost");
        let err = shell.save_as(Some(target)).unwrap_err();
        assert!(matches!(err, CoreError::Write { .. }));
        assert!(!shell.status().is_saved());
        assert_eq!(shell.path(), None);
        assert_eq!(shell.title(), "Untitled - PyText");
    }

    #[test]
    fn test_status_flashes_until_keystroke() {
        let dir = tempfile::tempdir().unwrap();

        let mut shell = shell_with("typed");
        shell.save_as(Some(dir.path().join("s.txt"))).unwrap();
        assert_eq!(shell.status().text(), "Your File has been Saved!");

        shell.keystroke();
        assert_eq!(shell.status().text(), "PyText - 0.1 Wilde");
    }
}

//! Document state and whole-file I/O.
//!
//! A document is nothing more than the path it was last opened from or
//! saved to. The text itself lives in the widget (see [`TextBuffer`]),
//! so this type never holds a copy of it.
//!
//! [`TextBuffer`]: crate::TextBuffer

use std::path::{Path, PathBuf};

use crate::{CoreError, CoreResult, APP_NAME};

/// Name shown for a document that was never saved.
pub const UNTITLED: &str = "Untitled";

/// Builds the window title for a document name.
///
/// `None` (and the empty string) fall back to [`UNTITLED`].
pub fn window_title(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{} - {}", name, APP_NAME),
        _ => format!("{} - {}", UNTITLED, APP_NAME),
    }
}

/// The on-disk identity of the text being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// File path (None for untitled documents)
    path: Option<PathBuf>,
}

impl Document {
    /// Creates an untitled document.
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Returns the file path.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the base name of the file, if there is one.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
    }

    /// Returns the window title for this document.
    pub fn title(&self) -> String {
        window_title(self.file_name().as_deref())
    }

    /// Points the document at `path`.
    ///
    /// Callers only do this after a read or write on `path` succeeded.
    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    /// Forgets the file path.
    pub(crate) fn reset(&mut self) {
        self.path = None;
    }
}

/// Reads a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> CoreResult<String> {
    let bytes = std::fs::read(path).map_err(|source| CoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| CoreError::NotText {
        path: path.to_path_buf(),
    })
}

/// Writes `text` over the whole file at `path`.
pub fn write_text(path: &Path, text: &str) -> CoreResult<()> {
    std::fs::write(path, text).map_err(|source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_untitled_title() {
        assert_eq!(Document::new().title(), "Untitled - PyText");
        assert_eq!(window_title(None), "Untitled - PyText");
        assert_eq!(window_title(Some("")), "Untitled - PyText");
    }

    #[test]
    fn test_title_uses_base_name() {
        let mut doc = Document::new();
        doc.set_path(PathBuf::from("/home/user/notes/todo.md"));
        assert_eq!(doc.title(), "todo.md - PyText");

        doc.reset();
        assert_eq!(doc.path(), None);
        assert_eq!(doc.title(), "Untitled - PyText");
    }

    #[test]
    fn test_read_rejects_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, CoreError::NotText { .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, CoreError::Read { .. }));
    }

    proptest! {
        #[test]
        fn prop_title_is_base_name(dir in "[a-z]{1,8}", stem in "[a-zA-Z0-9_]{1,12}", ext in "(txt|py|md|js|html|css)") {
            let mut doc = Document::new();
            let name = format!("{}.{}", stem, ext);
            doc.set_path(PathBuf::from("/").join(&dir).join(&name));
            prop_assert_eq!(doc.title(), format!("{} - PyText", name));
        }
    }
}

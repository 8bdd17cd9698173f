//! File picker options shared by the open and save dialogs.

use std::path::{Path, PathBuf};

/// A named group of file extensions offered by a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    /// Extensions without the leading dot. `*` matches anything.
    pub extensions: &'static [&'static str],
}

impl FileFilter {
    /// Returns the label shown in the picker, e.g. `Text File (*.txt)`.
    pub fn label(&self) -> String {
        let patterns: Vec<String> = self
            .extensions
            .iter()
            .map(|ext| if *ext == "*" { "*.*".to_string() } else { format!("*.{}", ext) })
            .collect();
        format!("{} ({})", self.name, patterns.join(", "))
    }
}

/// Filters offered by both pickers, in display order.
pub const FILE_FILTERS: [FileFilter; 7] = [
    FileFilter { name: "All Files", extensions: &["*"] },
    FileFilter { name: "Text File", extensions: &["txt"] },
    FileFilter { name: "Script Python", extensions: &["py"] },
    FileFilter { name: "Markdown Text", extensions: &["md"] },
    FileFilter { name: "File JavaScript", extensions: &["js"] },
    FileFilter { name: "Html Documents", extensions: &["html"] },
    FileFilter { name: "CSS Documents", extensions: &["css"] },
];

/// Extension appended to saved files chosen without one.
pub const DEFAULT_EXTENSION: &str = "txt";

/// File name pre-filled in the save picker.
pub const DEFAULT_FILE_NAME: &str = "Untitled.txt";

/// Everything a picker needs to present itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOptions {
    pub title: &'static str,
    pub file_name: Option<&'static str>,
    pub default_extension: &'static str,
    pub filters: &'static [FileFilter],
}

impl PickerOptions {
    /// Options for the Open picker.
    pub const fn open() -> Self {
        Self {
            title: "Open",
            file_name: None,
            default_extension: DEFAULT_EXTENSION,
            filters: &FILE_FILTERS,
        }
    }

    /// Options for the Save As picker.
    pub const fn save() -> Self {
        Self {
            title: "Save As",
            file_name: Some(DEFAULT_FILE_NAME),
            default_extension: DEFAULT_EXTENSION,
            filters: &FILE_FILTERS,
        }
    }

    /// Appends the default extension when `path` has none.
    pub fn apply_default_extension(&self, path: &Path) -> PathBuf {
        if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(self.default_extension)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_order() {
        let labels: Vec<String> = FILE_FILTERS.iter().map(FileFilter::label).collect();
        assert_eq!(
            labels,
            vec![
                "All Files (*.*)",
                "Text File (*.txt)",
                "Script Python (*.py)",
                "Markdown Text (*.md)",
                "File JavaScript (*.js)",
                "Html Documents (*.html)",
                "CSS Documents (*.css)",
            ]
        );
    }

    #[test]
    fn test_pickers_share_filters() {
        assert_eq!(PickerOptions::open().filters, PickerOptions::save().filters);
        assert_eq!(PickerOptions::save().file_name, Some("Untitled.txt"));
        assert_eq!(PickerOptions::open().file_name, None);
    }

    #[test]
    fn test_default_extension() {
        let options = PickerOptions::save();
        assert_eq!(
            options.apply_default_extension(Path::new("/tmp/notes")),
            PathBuf::from("/tmp/notes.txt")
        );
        assert_eq!(
            options.apply_default_extension(Path::new("/tmp/script.py")),
            PathBuf::from("/tmp/script.py")
        );
    }
}

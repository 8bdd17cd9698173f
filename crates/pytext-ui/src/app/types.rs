use std::path::PathBuf;

use iced::widget::text_editor;
use pytext_core::{Config, InfoDialog, TextBuffer};

#[derive(Debug, Default)]
pub struct Flags {
    pub file: Option<PathBuf>,
    pub config: Config,
}

/// The modal currently covering the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Info(InfoDialog),
    Error { title: String, message: String },
}

impl Dialog {
    pub fn title(&self) -> &str {
        match self {
            Dialog::Info(info) => info.title,
            Dialog::Error { title, .. } => title,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Dialog::Info(info) => info.message,
            Dialog::Error { message, .. } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Dialog::Error { .. })
    }
}

/// The editor widget's content, used as the document buffer.
///
/// `Content::text` always ends with a newline, the same convention the
/// text area applies when reading its contents out for saving.
pub struct EditorBuffer(pub text_editor::Content);

impl Default for EditorBuffer {
    fn default() -> Self {
        Self(text_editor::Content::new())
    }
}

impl TextBuffer for EditorBuffer {
    fn contents(&self) -> String {
        self.0.text()
    }

    fn replace(&mut self, text: &str) {
        self.0 = text_editor::Content::with_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_buffer_replace() {
        let mut buffer = EditorBuffer::default();
        buffer.replace("one\ntwo");
        assert_eq!(buffer.contents().trim_end(), "one\ntwo");

        buffer.clear();
        assert_eq!(buffer.contents().trim_end(), "");
    }
}

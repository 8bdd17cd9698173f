//! The editable text seam between the shell and the widget.
//!
//! ## Learning: Traits at the Boundary
//!
//! The live text belongs to whatever widget renders it. The shell only
//! needs to read it out when saving and replace it when opening, so it
//! talks to the widget through this trait. The UI crate implements it
//! for its editor widget; tests use a plain `String`.

/// Whole-text access to the buffer owned by the text widget.
pub trait TextBuffer {
    /// Returns the full contents as they would be written to disk.
    fn contents(&self) -> String;

    /// Replaces the full contents.
    fn replace(&mut self, text: &str);

    /// Empties the buffer.
    fn clear(&mut self) {
        self.replace("");
    }
}

impl TextBuffer for String {
    fn contents(&self) -> String {
        self.clone()
    }

    fn replace(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }

    fn clear(&mut self) {
        String::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_buffer_replace() {
        let mut buffer = String::from("old");
        TextBuffer::replace(&mut buffer, "new text");
        assert_eq!(buffer.contents(), "new text");

        TextBuffer::clear(&mut buffer);
        assert!(buffer.contents().is_empty());
    }
}

use std::borrow::Cow;

use xi_rope::Rope;

/// Read-only, 1-indexed view of a line-oriented text buffer.
///
/// Queries validate line numbers before calling [`TextBuffer::line_text`],
/// so implementations may assume `1 <= line <= line_count()`.
pub trait TextBuffer {
    /// Number of lines in the buffer.
    fn line_count(&self) -> usize;

    /// Text of the 1-based `line`, without its line terminator.
    fn line_text(&self, line: usize) -> Cow<'_, str>;
}

impl<S: AsRef<str>> TextBuffer for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        Cow::Borrowed(self[line - 1].as_ref())
    }
}

impl<S: AsRef<str>> TextBuffer for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        self.as_slice().line_text(line)
    }
}

/// A rope always has at least one line; a trailing newline opens an empty last line.
impl TextBuffer for Rope {
    fn line_count(&self) -> usize {
        self.line_of_offset(self.len()) + 1
    }

    fn line_text(&self, line: usize) -> Cow<'_, str> {
        let start = self.offset_of_line(line - 1);
        let end = self.offset_of_line(line);
        match self.slice_to_cow(start..end) {
            Cow::Borrowed(text) => Cow::Borrowed(strip_terminator(text)),
            Cow::Owned(text) => Cow::Owned(strip_terminator(&text).to_string()),
        }
    }
}

fn strip_terminator(text: &str) -> &str {
    text.trim_end_matches(['\r', '\n'])
}

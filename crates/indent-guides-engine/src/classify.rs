use crate::tab_size::TabSize;

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to surrounding
/// context; whitespace lines are resolved later from their neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// The line has non-whitespace content starting at column `indent`.
    Content { indent: usize },
    /// The line is empty or holds only spaces and tabs.
    Whitespace,
}

impl LineClass {
    /// Indent column, if the line has content.
    #[must_use]
    pub fn indent(self) -> Option<usize> {
        match self {
            LineClass::Content { indent } => Some(indent),
            LineClass::Whitespace => None,
        }
    }
}

/// Classifies lines by their leading whitespace for a fixed tab size.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentClassifier {
    tab_size: TabSize,
}

impl IndentClassifier {
    pub fn new(tab_size: TabSize) -> Self {
        Self { tab_size }
    }

    pub fn tab_size(&self) -> TabSize {
        self.tab_size
    }

    /// Classifies a line into a [`LineClass`].
    ///
    /// Spaces advance the indent by one column; tabs advance it to the next
    /// multiple of the tab size. The first other character ends the scan.
    pub fn classify(&self, line: &str) -> LineClass {
        let tab = self.tab_size.get();
        let mut indent = 0;
        for byte in line.bytes() {
            match byte {
                b' ' => indent += 1,
                b'\t' => indent = indent - indent % tab + tab,
                _ => return LineClass::Content { indent },
            }
        }
        LineClass::Whitespace
    }
}

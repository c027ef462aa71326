//! Nearest-content-line lookups shared by the guide queries.
//!
//! Whitespace lines take their level from the closest content lines around
//! them. The queries cache those lines as [`ContentAnchor`]s and only search
//! again once the cached anchor no longer sits on the right side of the line
//! being resolved.

use crate::{
    buffer::TextBuffer,
    classify::{IndentClassifier, LineClass},
    tab_size::TabSize,
};

/// Cached result of searching for the nearest content line in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentAnchor {
    /// No search has run yet.
    #[default]
    Unknown,
    /// The search reached the buffer boundary without finding content.
    NotFound,
    /// Nearest content line and its indent column.
    Found { line: usize, indent: usize },
}

impl ContentAnchor {
    #[must_use]
    pub fn indent(self) -> Option<usize> {
        match self {
            ContentAnchor::Found { indent, .. } => Some(indent),
            ContentAnchor::Unknown | ContentAnchor::NotFound => None,
        }
    }

    /// Whether a cached "below" anchor has to be searched again for `line`.
    ///
    /// `NotFound` is final: nothing below a line can appear further down.
    #[must_use]
    pub fn needs_search_below(self, line: usize) -> bool {
        match self {
            ContentAnchor::Unknown => true,
            ContentAnchor::NotFound => false,
            ContentAnchor::Found { line: found, .. } => found < line,
        }
    }

    /// Whether a cached "above" anchor has to be searched again for `line`.
    #[must_use]
    pub fn needs_search_above(self, line: usize) -> bool {
        match self {
            ContentAnchor::Unknown => true,
            ContentAnchor::NotFound => false,
            ContentAnchor::Found { line: found, .. } => found >= line,
        }
    }
}

/// Classifies buffer lines and searches outward for content.
pub struct LineScanner<'a, B: TextBuffer + ?Sized> {
    buffer: &'a B,
    classifier: IndentClassifier,
}

impl<'a, B: TextBuffer + ?Sized> LineScanner<'a, B> {
    pub fn new(buffer: &'a B, tab_size: TabSize) -> Self {
        Self {
            buffer,
            classifier: IndentClassifier::new(tab_size),
        }
    }

    pub fn tab_size(&self) -> TabSize {
        self.classifier.tab_size()
    }

    pub fn classify(&self, line: usize) -> LineClass {
        self.classifier.classify(&self.buffer.line_text(line))
    }

    /// Nearest content line strictly above `line`.
    pub fn search_above(&self, line: usize) -> ContentAnchor {
        let anchor = (1..line)
            .rev()
            .find_map(|candidate| self.anchor_at(candidate))
            .unwrap_or(ContentAnchor::NotFound);
        log::trace!("content above line {line}: {anchor:?}");
        anchor
    }

    /// Nearest content line strictly below `line`.
    pub fn search_below(&self, line: usize) -> ContentAnchor {
        let anchor = (line + 1..=self.buffer.line_count())
            .find_map(|candidate| self.anchor_at(candidate))
            .unwrap_or(ContentAnchor::NotFound);
        log::trace!("content below line {line}: {anchor:?}");
        anchor
    }

    fn anchor_at(&self, line: usize) -> Option<ContentAnchor> {
        self.classify(line)
            .indent()
            .map(|indent| ContentAnchor::Found { line, indent })
    }
}

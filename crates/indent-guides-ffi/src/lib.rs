//! UniFFI bindings for indent-guides
//!
//! Lets a mobile editor host keep a text buffer on the Rust side and ask for
//! guide levels of the visible lines and the active guide around the cursor.
//! Line numbers are 1-based on both sides of the boundary.

use indent_guides_engine::{
    GuideError, GuideRange, TabSize, TextBuffer, compute_range, find_active_guide,
};
use std::sync::Mutex;
use xi_rope::Rope;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Fields avoid the name `message` to prevent a clash with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Line {line} is out of range (buffer has {line_count} lines)")]
    OutOfRange { line: u32, line_count: u32 },
    #[error("Invalid tab size: {tab_size}")]
    InvalidTabSize { tab_size: u32 },
}

impl From<GuideError> for FfiError {
    fn from(err: GuideError) -> Self {
        match err {
            GuideError::OutOfRange { line, line_count } => FfiError::OutOfRange {
                line: to_u32(line),
                line_count: to_u32(line_count),
            },
            GuideError::InvalidTabSize(tab_size) => FfiError::InvalidTabSize {
                tab_size: to_u32(tab_size),
            },
        }
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

// ============ Buffer Handle ============

struct BufferState {
    rope: Rope,
    tab_size: TabSize,
}

/// A handle to a text buffer owned by the Rust side.
///
/// The host pushes the full text after edits; every query runs against the
/// text as of the last `set_text`.
#[derive(uniffi::Object)]
pub struct BufferHandle {
    inner: Mutex<BufferState>,
}

impl BufferHandle {
    fn state(&self) -> std::sync::MutexGuard<'_, BufferState> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl BufferHandle {
    /// Create a buffer from text and a tab size in columns.
    #[uniffi::constructor]
    pub fn from_string(content: String, tab_size: u32) -> Result<Self, FfiError> {
        let tab_size = TabSize::new(tab_size as usize)?;
        Ok(Self {
            inner: Mutex::new(BufferState {
                rope: Rope::from(content),
                tab_size,
            }),
        })
    }

    /// Replace the buffer text.
    pub fn set_text(&self, content: String) {
        self.state().rope = Rope::from(content);
    }

    /// Change the tab size used by later queries.
    pub fn set_tab_size(&self, tab_size: u32) -> Result<(), FfiError> {
        let tab_size = TabSize::new(tab_size as usize)?;
        self.state().tab_size = tab_size;
        Ok(())
    }

    /// Number of lines in the buffer (always at least 1).
    pub fn line_count(&self) -> u32 {
        to_u32(self.state().rope.line_count())
    }

    /// Guide levels for lines `start_line..=end_line`.
    pub fn line_guides(&self, start_line: u32, end_line: u32) -> Result<Vec<u32>, FfiError> {
        let state = self.state();
        let levels = compute_range(
            &state.rope,
            start_line as usize,
            end_line as usize,
            state.tab_size,
        )?;
        Ok(levels.into_iter().map(to_u32).collect())
    }

    /// Active guide around `line`, limited to `min_line..=max_line`.
    pub fn active_guide(
        &self,
        line: u32,
        min_line: u32,
        max_line: u32,
    ) -> Result<ActiveGuideDto, FfiError> {
        let state = self.state();
        let guide = find_active_guide(
            &state.rope,
            line as usize,
            min_line as usize,
            max_line as usize,
            state.tab_size,
        )?;
        Ok(ActiveGuideDto::from_engine(guide))
    }
}

// ============ DTOs ============

/// Lines covered by the active guide, 1-based and inclusive.
#[derive(Debug, PartialEq, Eq, uniffi::Record)]
pub struct ActiveGuideDto {
    pub start_line: u32,
    pub end_line: u32,
    /// Guide level; 0 means no guide should be drawn
    pub indent_level: u32,
}

impl ActiveGuideDto {
    fn from_engine(guide: GuideRange) -> Self {
        Self {
            start_line: to_u32(guide.start_line),
            end_line: to_u32(guide.end_line),
            indent_level: to_u32(guide.indent_level),
        }
    }
}

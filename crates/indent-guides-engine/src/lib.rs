//! Indent guide computation for line-oriented text buffers.
//!
//! Given a buffer and a tab size, the engine answers two questions:
//!
//! - [`compute_range`]: the guide level of every line in a range, with
//!   whitespace-only lines resolved from the nearest content lines around them.
//! - [`find_active_guide`]: the block of lines around an anchor line that
//!   share (or exceed) its guide level, for highlighting the current scope.
//!
//! Both queries are pure functions of the buffer snapshot and tab size.

pub mod active;
pub mod anchor;
pub mod buffer;
pub mod classify;
pub mod error;
pub mod range;
pub mod resolve;
pub mod tab_size;

// Re-export key types for easier usage
pub use active::{GuideRange, MAX_SCAN_DISTANCE, find_active_guide};
pub use anchor::ContentAnchor;
pub use buffer::TextBuffer;
pub use classify::{IndentClassifier, LineClass};
pub use error::GuideError;
pub use range::{compute_all, compute_range};
pub use resolve::resolve_whitespace_level;
pub use tab_size::TabSize;

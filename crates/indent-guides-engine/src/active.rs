//! Active indent guide: the block of lines around a cursor that share its
//! guide level.
//!
//! The search starts at the anchor line and walks outward one line at a time
//! in both directions. Each direction stops for good at the first line whose
//! level drops below the anchor's, at the window or buffer edge, or after
//! [`MAX_SCAN_DISTANCE`] steps.

use crate::{
    anchor::{ContentAnchor, LineScanner},
    buffer::TextBuffer,
    classify::LineClass,
    error::{GuideError, check_line},
    resolve::resolve_whitespace_level,
    tab_size::TabSize,
};

/// Upper bound on how far either direction walks from the anchor line.
pub const MAX_SCAN_DISTANCE: usize = 50_000;

/// Contiguous lines covered by the active guide, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideRange {
    pub start_line: usize,
    pub end_line: usize,
    /// Guide level of the anchor line. `0` means there is no guide to show.
    pub indent_level: usize,
}

impl GuideRange {
    fn single(line: usize, indent_level: usize) -> Self {
        Self {
            start_line: line,
            end_line: line,
            indent_level,
        }
    }

    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Active,
    Stopped,
}

/// Walk state for one direction, with its own content-line cache.
///
/// Going up, each content line passed is the nearest content *below* the
/// next frontier; going down, it is the nearest content *above*. The other
/// side is looked up lazily.
#[derive(Debug)]
struct DirectionScan {
    direction: Direction,
    above: ContentAnchor,
    below: ContentAnchor,
    state: ScanState,
}

impl DirectionScan {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            above: ContentAnchor::Unknown,
            below: ContentAnchor::Unknown,
            state: ScanState::Active,
        }
    }

    fn is_active(&self) -> bool {
        self.state == ScanState::Active
    }

    fn stop(&mut self) {
        self.state = ScanState::Stopped;
    }

    /// Guide level of `line`, updating this direction's anchor cache.
    fn level_at<B: TextBuffer + ?Sized>(
        &mut self,
        scanner: &LineScanner<'_, B>,
        line: usize,
    ) -> usize {
        let tab_size = scanner.tab_size();
        if let LineClass::Content { indent } = scanner.classify(line) {
            let anchor = ContentAnchor::Found { line, indent };
            match self.direction {
                Direction::Up => self.below = anchor,
                Direction::Down => self.above = anchor,
            }
            return tab_size.level_of(indent);
        }

        match self.direction {
            Direction::Up => {
                if self.above.needs_search_above(line) {
                    self.above = scanner.search_above(line);
                }
                if self.below == ContentAnchor::Unknown {
                    self.below = scanner.search_below(line);
                }
            }
            Direction::Down => {
                if self.above == ContentAnchor::Unknown {
                    self.above = scanner.search_above(line);
                }
                if self.below.needs_search_below(line) {
                    self.below = scanner.search_below(line);
                }
            }
        }
        resolve_whitespace_level(self.above.indent(), self.below.indent(), tab_size)
    }

    /// Examines `frontier` and reports whether it belongs to the guide.
    /// `None` means the frontier left the allowed window.
    fn advance<B: TextBuffer + ?Sized>(
        &mut self,
        scanner: &LineScanner<'_, B>,
        frontier: Option<usize>,
        anchor_level: usize,
    ) -> Option<usize> {
        let Some(line) = frontier else {
            self.stop();
            return None;
        };
        if self.level_at(scanner, line) >= anchor_level {
            Some(line)
        } else {
            self.stop();
            None
        }
    }
}

/// Finds the block of lines around `line` whose guide level is at least the
/// level of `line` itself, restricted to `min_line..=max_line`.
///
/// Lines are 1-based. If `line` resolves to level `0` the result is just that
/// line with level `0`.
pub fn find_active_guide<B: TextBuffer + ?Sized>(
    buffer: &B,
    line: usize,
    min_line: usize,
    max_line: usize,
    tab_size: TabSize,
) -> Result<GuideRange, GuideError> {
    let line_count = buffer.line_count();
    check_line(line, line_count)?;

    let scanner = LineScanner::new(buffer, tab_size);
    let mut up = DirectionScan::new(Direction::Up);
    let mut down = DirectionScan::new(Direction::Down);

    let indent_level = up.level_at(&scanner, line);
    let mut range = GuideRange::single(line, indent_level);
    if indent_level == 0 {
        return Ok(range);
    }

    for distance in 1..=MAX_SCAN_DISTANCE {
        if up.is_active() {
            let frontier = line
                .checked_sub(distance)
                .filter(|&up_line| up_line >= 1 && up_line >= min_line);
            if let Some(up_line) = up.advance(&scanner, frontier, indent_level) {
                range.start_line = up_line;
            }
        }
        if down.is_active() {
            let frontier = Some(line + distance)
                .filter(|&down_line| down_line <= line_count && down_line <= max_line);
            if let Some(down_line) = down.advance(&scanner, frontier, indent_level) {
                range.end_line = down_line;
            }
        }
        if !up.is_active() && !down.is_active() {
            return Ok(range);
        }
    }

    log::debug!(
        "active guide scan from line {line} stopped after {MAX_SCAN_DISTANCE} lines: {range:?}"
    );
    Ok(range)
}

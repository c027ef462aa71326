use crate::{
    anchor::{ContentAnchor, LineScanner},
    buffer::TextBuffer,
    classify::LineClass,
    error::{GuideError, check_line},
    resolve::resolve_whitespace_level,
    tab_size::TabSize,
};

/// Computes the guide level of every line in `start_line..=end_line`.
///
/// Lines are 1-based. Returns one level per line, in order; an inverted range
/// yields no levels. Content anchors found while resolving one whitespace
/// line are reused for the rest of its run, so each blank run is scanned
/// forward at most once.
pub fn compute_range<B: TextBuffer + ?Sized>(
    buffer: &B,
    start_line: usize,
    end_line: usize,
    tab_size: TabSize,
) -> Result<Vec<usize>, GuideError> {
    let line_count = buffer.line_count();
    check_line(start_line, line_count)?;
    check_line(end_line, line_count)?;
    if start_line > end_line {
        return Ok(Vec::new());
    }

    let scanner = LineScanner::new(buffer, tab_size);
    let mut above = ContentAnchor::Unknown;
    let mut below = ContentAnchor::Unknown;
    let mut levels = Vec::with_capacity(end_line - start_line + 1);

    for line in start_line..=end_line {
        if let LineClass::Content { indent } = scanner.classify(line) {
            above = ContentAnchor::Found { line, indent };
            levels.push(tab_size.level_of(indent));
            continue;
        }
        if above == ContentAnchor::Unknown {
            above = scanner.search_above(line);
        }
        if below.needs_search_below(line) {
            below = scanner.search_below(line);
        }
        levels.push(resolve_whitespace_level(
            above.indent(),
            below.indent(),
            tab_size,
        ));
    }

    Ok(levels)
}

/// Guide levels for the whole buffer. An empty buffer has no levels.
pub fn compute_all<B: TextBuffer + ?Sized>(
    buffer: &B,
    tab_size: TabSize,
) -> Result<Vec<usize>, GuideError> {
    match buffer.line_count() {
        0 => Ok(Vec::new()),
        line_count => compute_range(buffer, 1, line_count, tab_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tab(n: usize) -> TabSize {
        TabSize::new(n).unwrap()
    }

    #[test]
    fn python_function_with_trailing_blank() {
        let lines = ["def f():", "    x = 1", "    y = 2", "", "print(x)"];
        let levels = compute_range(&lines[..], 1, 5, tab(4)).unwrap();
        assert_eq!(levels, vec![0, 1, 1, 0, 0]);
    }

    #[test]
    fn blank_inside_block_takes_block_level() {
        let lines = [
            "fn main() {",
            "    let a = 1;",
            "",
            "    let b = 2;",
            "}",
        ];
        let levels = compute_range(&lines[..], 1, 5, tab(4)).unwrap();
        assert_eq!(levels, vec![0, 1, 1, 1, 0]);
    }

    #[test]
    fn blank_after_opener_is_inside_new_block() {
        let lines = ["if x:", "", "", "        deep()"];
        let levels = compute_range(&lines[..], 1, 4, tab(4)).unwrap();
        assert_eq!(levels, vec![0, 1, 1, 2]);
    }

    #[test]
    fn blank_runs_at_buffer_edges_are_zero() {
        let lines = ["", "  ", "    x", "", "\t"];
        let levels = compute_range(&lines[..], 1, 5, tab(4)).unwrap();
        assert_eq!(levels, vec![0, 0, 1, 0, 0]);
    }

    #[test]
    fn window_starting_in_blank_run_searches_outward() {
        let lines = ["a:", "    b:", "", "", "        c", "d"];
        let window = compute_range(&lines[..], 3, 4, tab(4)).unwrap();
        assert_eq!(window, vec![2, 2]);
    }

    #[test]
    fn consecutive_blank_runs_refresh_below_anchor() {
        let lines = ["a", "", "    b", "", "        c", "", "d"];
        let levels = compute_range(&lines[..], 1, 7, tab(4)).unwrap();
        assert_eq!(levels, vec![0, 1, 1, 2, 2, 0, 0]);
    }

    #[test]
    fn range_matches_single_line_queries() {
        let lines = [
            "class A:",
            "",
            "    def f(self):",
            "\t\treturn 1",
            "  ",
            "",
            "    def g(self):",
            "        pass",
            "",
            "x = A()",
            "",
        ];
        for tab_size in [1, 2, 4, 8] {
            let full = compute_range(&lines[..], 1, lines.len(), tab(tab_size)).unwrap();
            for (offset, level) in full.iter().enumerate() {
                let line = offset + 1;
                let single = compute_range(&lines[..], line, line, tab(tab_size)).unwrap();
                assert_eq!(single, vec![*level], "line {line}, tab {tab_size}");
            }
        }
    }

    #[test]
    fn every_window_matches_full_computation() {
        let lines = ["a", "  b", "", "    c", "", "", "  d", "", "e"];
        let full = compute_range(&lines[..], 1, lines.len(), tab(2)).unwrap();
        for start in 1..=lines.len() {
            for end in start..=lines.len() {
                let window = compute_range(&lines[..], start, end, tab(2)).unwrap();
                assert_eq!(window.len(), end - start + 1);
                assert_eq!(window, full[start - 1..end].to_vec());
            }
        }
    }

    #[test]
    fn whitespace_only_buffer_is_all_zero() {
        let lines = ["", "   ", "\t", ""];
        let levels = compute_all(&lines[..], tab(4)).unwrap();
        assert_eq!(levels, vec![0; 4]);
    }

    #[test]
    fn out_of_range_lines_fail() {
        let lines = ["a", "b"];
        assert_eq!(
            compute_range(&lines[..], 1, 3, tab(4)),
            Err(GuideError::OutOfRange {
                line: 3,
                line_count: 2
            })
        );
        assert_eq!(
            compute_range(&lines[..], 3, 3, tab(4)),
            Err(GuideError::OutOfRange {
                line: 3,
                line_count: 2
            })
        );
        assert!(compute_range(&lines[..], 0, 1, tab(4)).is_err());
    }

    #[test]
    fn inverted_range_is_empty() {
        let lines = ["a", "b", "c"];
        assert!(compute_range(&lines[..], 3, 1, tab(4)).unwrap().is_empty());
    }

    #[test]
    fn empty_buffer_has_no_levels() {
        let lines: Vec<String> = Vec::new();
        assert!(compute_all(&lines, tab(4)).unwrap().is_empty());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuideError {
    #[error("Line {line} is out of range (buffer has {line_count} lines)")]
    OutOfRange { line: usize, line_count: usize },
    #[error("Invalid tab size: {0} (must be at least 1)")]
    InvalidTabSize(usize),
}

/// Rejects line numbers outside `1..=line_count`.
pub(crate) fn check_line(line: usize, line_count: usize) -> Result<(), GuideError> {
    if line == 0 || line > line_count {
        return Err(GuideError::OutOfRange { line, line_count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_zero_is_out_of_range() {
        assert_eq!(
            check_line(0, 3),
            Err(GuideError::OutOfRange {
                line: 0,
                line_count: 3
            })
        );
        assert!(check_line(3, 3).is_ok());
        assert!(check_line(4, 3).is_err());
    }
}

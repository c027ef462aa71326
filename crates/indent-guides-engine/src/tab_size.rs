use std::num::NonZeroUsize;

use crate::error::GuideError;

/// Width of a tab stop in columns. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabSize(NonZeroUsize);

impl TabSize {
    pub fn new(columns: usize) -> Result<Self, GuideError> {
        NonZeroUsize::new(columns)
            .map(Self)
            .ok_or(GuideError::InvalidTabSize(columns))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Guide depth for an indent column, rounding partial tab stops up.
    #[must_use]
    pub fn level_of(self, indent: usize) -> usize {
        indent.div_ceil(self.get())
    }
}

impl Default for TabSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(3))
    }
}

impl TryFrom<usize> for TabSize {
    type Error = GuideError;

    fn try_from(columns: usize) -> Result<Self, Self::Error> {
        Self::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tab_size_is_rejected() {
        assert_eq!(TabSize::new(0), Err(GuideError::InvalidTabSize(0)));
    }

    #[test]
    fn default_tab_size_is_four() {
        assert_eq!(TabSize::default().get(), 4);
    }

    #[test]
    fn level_rounds_partial_stops_up() {
        let tab = TabSize::new(4).unwrap();
        assert_eq!(tab.level_of(0), 0);
        assert_eq!(tab.level_of(1), 1);
        assert_eq!(tab.level_of(4), 1);
        assert_eq!(tab.level_of(5), 2);
    }
}

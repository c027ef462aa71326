use crate::tab_size::TabSize;

/// Resolves the guide level of a whitespace-only line from the indent columns
/// of the nearest content lines above and below it.
///
/// Indentation is treated as significant (off-side): a blank line between a
/// deeper block and a shallower one belongs to the shallower one.
pub fn resolve_whitespace_level(
    above_indent: Option<usize>,
    below_indent: Option<usize>,
    tab_size: TabSize,
) -> usize {
    let (Some(above), Some(below)) = (above_indent, below_indent) else {
        // top or bottom of the buffer
        return 0;
    };
    if above < below {
        // inside the block opened by the line above
        1 + above / tab_size.get()
    } else {
        // between siblings, or closing down to the block below
        tab_size.level_of(below)
    }
}

use indent_guides_engine::{
    GuideError, GuideRange, TabSize, TextBuffer, compute_all, find_active_guide,
};
use xi_rope::Rope;

/// Renders one row per line: line number, guide level, then the line text.
pub fn render_levels<B: TextBuffer + ?Sized>(buffer: &B, levels: &[usize]) -> String {
    levels
        .iter()
        .zip(1..)
        .map(|(level, line)| format!("{line}\t{level}\t{}\n", buffer.line_text(line)))
        .collect()
}

pub fn render_active(guide: &GuideRange) -> String {
    format!(
        "active: {}-{} level {}\n",
        guide.start_line, guide.end_line, guide.indent_level
    )
}

/// Builds the full report for `text`, optionally including the active guide
/// around `active_line` searched across the whole file.
pub fn build(
    text: &str,
    tab_size: TabSize,
    active_line: Option<usize>,
) -> Result<String, GuideError> {
    let rope = Rope::from(text);
    let levels = compute_all(&rope, tab_size)?;
    let mut output = render_levels(&rope, &levels);

    if let Some(line) = active_line {
        let guide = find_active_guide(&rope, line, 1, rope.line_count(), tab_size)?;
        log::info!("active guide for line {line}: {guide:?}");
        output.push_str(&render_active(&guide));
    }

    Ok(output)
}

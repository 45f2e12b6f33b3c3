//! Log lines as main content rows.
//!
//! One `LogLine` becomes exactly one row: no wrapping, so the document
//! height is the line count and a sidebar toggle never reflows the body.
//! The first line after a manifest switch gets a bold prefix.

use crate::model::LogLine;
use crate::view::constants::PREFIX_SEPARATOR;
use crate::view::HudStyles;
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

/// Display width of the widest manifest prefix among `lines`.
pub fn prefix_width(lines: &[LogLine]) -> usize {
    lines
        .iter()
        .filter(|line| line.has_prefix())
        .map(|line| line.manifest_name.width())
        .max()
        .unwrap_or(0)
}

/// Render one log line as a row.
pub fn log_line_row<'a>(line: &'a LogLine, prefix_width: usize, styles: &HudStyles) -> Line<'a> {
    let mut spans = Vec::with_capacity(3);

    if line.has_prefix() {
        let padding = prefix_width.saturating_sub(line.manifest_name.width());
        let mut prefix_style = styles.style_for_level(line.level);
        if line.is_context_change {
            prefix_style = prefix_style.patch(styles.context_change);
        }
        spans.push(Span::styled(
            format!("{}{}", line.manifest_name, " ".repeat(padding)),
            prefix_style,
        ));
        spans.push(Span::styled(PREFIX_SEPARATOR, styles.prefix));
    }

    let text_style = if line.should_highlight {
        styles.highlight
    } else {
        ratatui::style::Style::default()
    };
    spans.push(Span::styled(line.text.as_str(), text_style));

    Line::from(spans)
}

/// Render all lines as main content.
pub fn log_text<'a>(lines: &'a [LogLine], styles: &HudStyles) -> Text<'a> {
    let width = prefix_width(lines);
    Text::from(
        lines
            .iter()
            .map(|line| log_line_row(line, width, styles))
            .collect::<Vec<_>>(),
    )
}

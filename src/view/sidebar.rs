//! Sidebar panel: manifest list when expanded, a glyph rail when collapsed.

use crate::model::{ManifestSummary, SidebarState};
use crate::view::constants::{SIDEBAR_HEADING, SIDEBAR_RAIL_GLYPH, SIDEBAR_RAIL_HEADING};
use crate::view::HudStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Rows of sidebar content: one heading plus one per manifest.
pub fn sidebar_content_rows(manifests: &[ManifestSummary]) -> usize {
    manifests.len() + 1
}

/// Sidebar content for a collapse state.
pub fn sidebar_text(
    manifests: &[ManifestSummary],
    state: SidebarState,
    styles: &HudStyles,
) -> Text<'static> {
    let mut lines = Vec::with_capacity(sidebar_content_rows(manifests));

    match state {
        SidebarState::Expanded => {
            lines.push(Line::from(format!(" {SIDEBAR_HEADING}")));
            lines.extend(manifests.iter().map(|m| manifest_row(m, styles)));
        }
        SidebarState::Collapsed => {
            lines.push(Line::from(format!(" {SIDEBAR_RAIL_HEADING}")));
            lines.extend(manifests.iter().map(|m| {
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(SIDEBAR_RAIL_GLYPH, marker_style(m, styles)),
                ])
            }));
        }
    }

    Text::from(lines).style(styles.sidebar)
}

fn manifest_row(manifest: &ManifestSummary, styles: &HudStyles) -> Line<'static> {
    let mut spans = vec![
        Span::raw(format!(" {} ", manifest.name)),
        Span::styled(manifest.lines.to_string(), styles.prefix),
    ];
    if manifest.errors > 0 {
        spans.push(Span::styled(format!(" E{}", manifest.errors), styles.error));
    }
    if manifest.warnings > 0 {
        spans.push(Span::styled(format!(" W{}", manifest.warnings), styles.warn));
    }
    Line::from(spans)
}

fn marker_style(manifest: &ManifestSummary, styles: &HudStyles) -> Style {
    if manifest.errors > 0 {
        styles.error
    } else if manifest.warnings > 0 {
        styles.warn
    } else {
        styles.prefix
    }
}

/// The sidebar overlay: a left-bordered, independently scrolled panel.
#[derive(Debug, Clone)]
pub struct SidebarPanel<'a> {
    content: Text<'a>,
    scroll: usize,
    style: Style,
    border_style: Style,
}

impl<'a> SidebarPanel<'a> {
    /// Panel showing `content` from its first row.
    pub fn new(content: impl Into<Text<'a>>) -> Self {
        Self {
            content: content.into(),
            scroll: 0,
            style: Style::default(),
            border_style: Style::default(),
        }
    }

    /// Sidebar scroll offset, in content rows.
    #[must_use]
    pub fn scroll(mut self, offset: usize) -> Self {
        self.scroll = offset;
        self
    }

    /// Panel background style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style of the left border.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

impl Widget for SidebarPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        if area.is_empty() {
            return;
        }

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(self.border_style)
            .style(self.style);

        // Offsets past the last page show the last page.
        let inner_height = block.inner(area).height;
        let max_scroll = self
            .content
            .lines
            .len()
            .saturating_sub(usize::from(inner_height))
            .min(usize::from(u16::MAX - inner_height));
        let offset = u16::try_from(self.scroll.min(max_scroll)).unwrap_or(0);

        Paragraph::new(self.content)
            .block(block)
            .scroll((offset, 0))
            .render(area, buf);
    }
}

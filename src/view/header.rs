//! Header band.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Widget},
};

/// Title row with an optional right-aligned detail, ruled off from the
/// body when the band is at least two rows tall.
///
/// Rendered into the header's content area, so the detail sits flush
/// against the sidebar's left edge and follows it during a transition.
#[derive(Debug, Clone)]
pub struct HeaderBar<'a> {
    title: Line<'a>,
    detail: Option<Line<'a>>,
    style: Style,
}

impl<'a> HeaderBar<'a> {
    /// Header with just a title.
    pub fn new(title: impl Into<Line<'a>>) -> Self {
        Self {
            title: title.into(),
            detail: None,
            style: Style::default(),
        }
    }

    /// Right-aligned text on the title row.
    #[must_use]
    pub fn detail(mut self, detail: impl Into<Line<'a>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Background and rule style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.style);

        let block = if area.height >= 2 {
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(self.style)
        } else {
            Block::default()
        };
        let inner = block.inner(area);
        block.render(area, buf);

        let row = Rect {
            height: inner.height.min(1),
            ..inner
        };
        if row.is_empty() {
            return;
        }

        self.title.render(row, buf);
        if let Some(detail) = self.detail {
            detail.alignment(Alignment::Right).render(row, buf);
        }
    }
}

//! The layout coordinator widget.
//!
//! `HudLayout` takes the parent's `is_sidebar_closed` flag, a header widget
//! and the main content, and paints four layers: the scrolling body and the
//! three fixed overlays. Every size comes from
//! [`crate::view_state::derive_hud_style`] and [`HudAreas`]; nothing here
//! picks a number of its own.

use crate::model::{GeometryTable, HudStyle, SidebarState};
use crate::view::{SidebarPanel, StatusBar};
use crate::view_state::{derive_hud_style, DocumentMetrics, HudAreas};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Clear, Widget},
};

/// Paint layers, in tie-break order for equal z-indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Main,
    Sidebar,
    Statusbar,
    Header,
}

/// Fixed header, collapsible sidebar and status bar around a scrolling body.
///
/// # Example
///
/// ```
/// use hudview::model::GeometryTable;
/// use hudview::view::{HeaderBar, HudLayout};
/// use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
///
/// let geometry = GeometryTable::default();
/// let area = Rect::new(0, 0, 40, 10);
/// let mut buf = Buffer::empty(area);
///
/// HudLayout::new(&geometry, HeaderBar::new("title"), "first line", false).render(area, &mut buf);
///
/// // The first content row sits just below the two header rows.
/// assert_eq!(buf[(0, 2)].symbol(), "f");
/// ```
#[derive(Debug, Clone)]
pub struct HudLayout<'a, H> {
    geometry: &'a GeometryTable,
    header: H,
    children: Text<'a>,
    is_sidebar_closed: bool,
    sidebar_footprint: Option<u16>,
    document_scroll: usize,
    sidebar: Option<SidebarPanel<'a>>,
    statusbar: Option<StatusBar<'a>>,
}

impl<'a, H: Widget> HudLayout<'a, H> {
    /// Lay out `children` as main content under `header`.
    pub fn new(
        geometry: &'a GeometryTable,
        header: H,
        children: impl Into<Text<'a>>,
        is_sidebar_closed: bool,
    ) -> Self {
        Self {
            geometry,
            header,
            children: children.into(),
            is_sidebar_closed,
            sidebar_footprint: None,
            document_scroll: 0,
            sidebar: None,
            statusbar: None,
        }
    }

    /// Use a footprint sampled from a running transition instead of the
    /// settled width for the current state.
    #[must_use]
    pub fn sidebar_footprint(mut self, footprint: u16) -> Self {
        self.sidebar_footprint = Some(footprint);
        self
    }

    /// Document scroll offset. Clamped to the document when rendering.
    #[must_use]
    pub fn document_scroll(mut self, offset: usize) -> Self {
        self.document_scroll = offset;
        self
    }

    /// Sidebar overlay content. Without one the band is left blank.
    #[must_use]
    pub fn sidebar(mut self, panel: SidebarPanel<'a>) -> Self {
        self.sidebar = Some(panel);
        self
    }

    /// Status bar overlay content. Without one the band is left blank.
    #[must_use]
    pub fn statusbar(mut self, bar: StatusBar<'a>) -> Self {
        self.statusbar = Some(bar);
        self
    }

    /// Style derived for the current collapse state.
    pub fn style(&self) -> HudStyle {
        derive_hud_style(SidebarState::from_closed(self.is_sidebar_closed), self.geometry)
    }

    fn footprint(&self, style: &HudStyle) -> u16 {
        self.sidebar_footprint.unwrap_or(style.sidebar.width)
    }

    /// Areas this layout would paint into `area`.
    pub fn areas(&self, area: Rect) -> HudAreas {
        HudAreas::compute(area, self.geometry, self.footprint(&self.style()))
    }
}

impl<H: Widget> Widget for HudLayout<'_, H> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let areas = HudAreas::compute(area, self.geometry, self.footprint(&style));

        let mut layers = [
            (style.root.z_index, Layer::Main),
            (style.sidebar.z_index, Layer::Sidebar),
            (style.statusbar.z_index, Layer::Statusbar),
            (style.header.z_index, Layer::Header),
        ];
        layers.sort_by_key(|(z_index, _)| *z_index);

        let Self {
            header,
            children,
            document_scroll,
            sidebar,
            statusbar,
            ..
        } = self;
        let mut header = Some(header);
        let mut children = Some(children);
        let mut sidebar = sidebar;
        let mut statusbar = statusbar;

        for (_, layer) in layers {
            match layer {
                Layer::Main => {
                    if let Some(children) = children.take() {
                        render_body(children, &areas, document_scroll, buf);
                    }
                }
                Layer::Sidebar => match sidebar.take() {
                    Some(panel) => panel.render(areas.sidebar, buf),
                    None => Clear.render(areas.sidebar, buf),
                },
                Layer::Statusbar => match statusbar.take() {
                    Some(bar) => bar.render(areas.statusbar, buf),
                    None => Clear.render(areas.statusbar, buf),
                },
                Layer::Header => {
                    if let Some(header) = header.take() {
                        Clear.render(areas.header_content, buf);
                        header.render(areas.header_content, buf);
                    }
                }
            }
        }
    }
}

/// Paint content rows at their document positions within the body columns.
fn render_body(children: Text<'_>, areas: &HudAreas, scroll: usize, buf: &mut Buffer) {
    let metrics = DocumentMetrics::new(areas.padding, children.lines.len(), areas.viewport.height);
    let scroll = metrics.clamp_scroll(scroll);
    let first = scroll.saturating_sub(usize::from(areas.padding.top));
    let base_style = children.style;

    for (index, line) in children.lines.into_iter().enumerate().skip(first) {
        let Some(row) = metrics.screen_row(index, scroll) else {
            break;
        };
        let rect = Rect::new(areas.body.x, areas.viewport.y + row, areas.body.width, 1);
        buf.set_style(rect, base_style);
        line.render(rect, buf);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "hud_tests.rs"]
mod tests;

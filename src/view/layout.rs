//! Frame composition.
//!
//! Builds the header, log body, sidebar and status bar from [`HudState`]
//! and hands them to [`HudLayout`] with the footprint sampled at `now`.

use crate::model::GeometryTable;
use crate::state::HudState;
use crate::view::{
    log_pane, sidebar, statusbar, HeaderBar, HudLayout, HudStyles, SidebarPanel, StatusBar,
};
use crate::view_state::{DocumentMetrics, HudAreas};
use ratatui::Frame;
use std::time::Instant;

/// Render one frame and return the areas it was laid out in.
pub fn render_layout(
    frame: &mut Frame,
    state: &HudState,
    geometry: &GeometryTable,
    styles: &HudStyles,
    title: &str,
    now: Instant,
) -> HudAreas {
    let area = frame.area();
    let footprint = state.sidebar_footprint(now);
    let areas = HudAreas::compute(area, geometry, footprint);
    let document = DocumentMetrics::new(areas.padding, state.lines().len(), area.height);

    let header = HeaderBar::new(title)
        .detail(format!("{} lines ", state.lines().len()))
        .style(styles.header);
    let sidebar_content = sidebar::sidebar_text(state.manifests(), state.sidebar(), styles);
    let status = statusbar::status_line(state, &document);

    let layout = HudLayout::new(
        geometry,
        header,
        log_pane::log_text(state.lines(), styles),
        state.is_sidebar_closed(),
    )
    .sidebar_footprint(footprint)
    .document_scroll(state.document_scroll)
    .sidebar(
        SidebarPanel::new(sidebar_content)
            .scroll(state.sidebar_scroll)
            .style(styles.sidebar)
            .border_style(styles.sidebar_border),
    )
    .statusbar(StatusBar::new(status).style(styles.statusbar));

    frame.render_widget(layout, area);
    areas
}

//! HUD layout coordination.
//!
//! Everything the renderer needs to keep the scrollable body clear of the
//! fixed overlays is derived here, from two inputs: the collapse state (or
//! the sidebar footprint sampled mid-transition) and the geometry table.
//!
//! The body is laid out in a virtual document:
//!
//! ```text
//!   document row 0          ┐
//!   ...                     │ padding.top    (under the header at scroll 0)
//!   document row top-1      ┘
//!   content row 0
//!   ...
//!   content row n-1
//!   ...                     ┐ padding.bottom (under the status bar at max scroll)
//! ```
//!
//! and the viewport scrolls that document. Body columns stop
//! `padding.right` short of the right edge, exactly where the sidebar
//! begins.

use crate::model::{
    Easing, GeometryTable, HeaderStyle, HudStyle, Overflow, PaddingVector, RootStyle,
    SidebarState, SidebarStyle, StatusbarStyle, StyledProperty, TransitionSpec,
};
use ratatui::layout::Rect;
use std::ops::Range;

/// Derive the complete HUD style for a collapse state.
///
/// Pure: the same inputs always give the same style. Body padding, header
/// padding and sidebar width all come from the one footprint computed
/// here, and all three carry identical transition timing.
pub fn derive_hud_style(state: SidebarState, geometry: &GeometryTable) -> HudStyle {
    let padding = PaddingVector::settled(geometry, state);
    let transition = |property| TransitionSpec {
        property,
        duration: geometry.transition_duration,
        easing: Easing::Ease,
    };

    HudStyle {
        root: RootStyle {
            padding,
            transition: transition(StyledProperty::PaddingRight),
            z_index: geometry.z_index.main,
            overflow: Overflow::Visible,
        },
        header: HeaderStyle {
            height: geometry.header_height,
            padding_right: padding.right,
            z_index: geometry.z_index.header,
            transition: transition(StyledProperty::PaddingRight),
        },
        sidebar: SidebarStyle {
            width: padding.right,
            z_index: geometry.z_index.sidebar,
            overflow: Overflow::Auto,
            transition: transition(StyledProperty::Width),
        },
        statusbar: StatusbarStyle {
            height: geometry.statusbar_height,
            z_index: geometry.z_index.statusbar,
        },
    }
}

/// Screen rectangles of every HUD part for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudAreas {
    /// The whole viewport.
    pub viewport: Rect,
    /// Full-width header band.
    pub header: Rect,
    /// Header band minus its right padding; header content is drawn here only.
    pub header_content: Rect,
    /// Sidebar band, from the top edge down to the status bar.
    pub sidebar: Rect,
    /// Full-width status bar band.
    pub statusbar: Rect,
    /// Columns the body occupies, over the full viewport height.
    pub body: Rect,
    /// Part of `body` not covered by header or status bar.
    pub exposed: Rect,
    /// Padding the body applies, equal to the overlays' footprints.
    pub padding: PaddingVector,
}

impl HudAreas {
    /// Lay out the viewport for a sidebar footprint.
    ///
    /// `sidebar_footprint` is either a settled width from the geometry
    /// table or a value sampled from a running transition. It is clamped to
    /// the viewport width; band heights are clamped to the viewport height.
    pub fn compute(area: Rect, geometry: &GeometryTable, sidebar_footprint: u16) -> Self {
        let footprint = sidebar_footprint.min(area.width);
        let header_height = geometry.header_height.min(area.height);
        let statusbar_height = geometry.statusbar_height.min(area.height);
        let body_width = area.width - footprint;

        let header = Rect::new(area.x, area.y, area.width, header_height);
        let header_content = Rect::new(area.x, area.y, body_width, header_height);
        let statusbar = Rect::new(
            area.x,
            area.bottom() - statusbar_height,
            area.width,
            statusbar_height,
        );
        let sidebar = Rect::new(
            area.right() - footprint,
            area.y,
            footprint,
            area.height - statusbar_height,
        );
        let body = Rect::new(area.x, area.y, body_width, area.height);
        let exposed = Rect::new(
            area.x,
            area.y + header_height,
            body_width,
            area.height
                .saturating_sub(header_height.saturating_add(statusbar_height)),
        );

        Self {
            viewport: area,
            header,
            header_content,
            sidebar,
            statusbar,
            body,
            exposed,
            padding: PaddingVector {
                top: header_height,
                right: footprint,
                bottom: statusbar_height,
            },
        }
    }

    /// Whether a screen cell falls inside the sidebar band.
    pub fn sidebar_contains(&self, column: u16, row: u16) -> bool {
        contains(self.sidebar, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Scroll geometry of the virtual document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMetrics {
    /// Rows reserved above the content.
    pub padding_top: u16,
    /// Rows reserved below the content.
    pub padding_bottom: u16,
    /// Number of content rows.
    pub content_rows: usize,
    /// Viewport height in rows.
    pub viewport_height: u16,
}

impl DocumentMetrics {
    /// Metrics for `content_rows` rows padded by `padding`.
    pub fn new(padding: PaddingVector, content_rows: usize, viewport_height: u16) -> Self {
        Self {
            padding_top: padding.top,
            padding_bottom: padding.bottom,
            content_rows,
            viewport_height,
        }
    }

    /// Total document height including padding.
    pub fn document_height(&self) -> usize {
        usize::from(self.padding_top) + self.content_rows + usize::from(self.padding_bottom)
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> usize {
        self.document_height()
            .saturating_sub(usize::from(self.viewport_height))
    }

    /// Clamp a scroll offset into `[0, max_scroll]`.
    pub fn clamp_scroll(&self, offset: usize) -> usize {
        offset.min(self.max_scroll())
    }

    /// Rows between the header and the status bar.
    pub fn exposed_rows(&self) -> usize {
        usize::from(self.viewport_height)
            .saturating_sub(usize::from(self.padding_top) + usize::from(self.padding_bottom))
    }

    /// Rows moved by one page; never zero.
    pub fn page_size(&self) -> usize {
        self.exposed_rows().max(1)
    }

    /// Viewport row of a content row, if it is on screen at all
    /// (possibly under an overlay).
    pub fn screen_row(&self, content_row: usize, scroll: usize) -> Option<u16> {
        let document_row = usize::from(self.padding_top) + content_row;
        let row = document_row.checked_sub(scroll)?;
        if row < usize::from(self.viewport_height) {
            u16::try_from(row).ok()
        } else {
            None
        }
    }

    /// Content rows fully exposed (not under header or status bar) at `scroll`.
    pub fn exposed_content_rows(&self, scroll: usize) -> Range<usize> {
        let start = scroll.min(self.content_rows);
        let end = (scroll + self.exposed_rows()).min(self.content_rows);
        start..end
    }

    /// Whether a content row is on screen and uncovered at `scroll`.
    pub fn is_exposed(&self, content_row: usize, scroll: usize) -> bool {
        self.exposed_content_rows(scroll).contains(&content_row)
    }

    /// Smallest scroll change that exposes `content_row`.
    ///
    /// Returns `scroll` unchanged when the row is already exposed.
    pub fn reveal(&self, content_row: usize, scroll: usize) -> usize {
        let exposed = self.exposed_rows();
        let target = if content_row < scroll || exposed == 0 {
            content_row
        } else if content_row >= scroll + exposed {
            content_row + 1 - exposed
        } else {
            scroll
        };
        self.clamp_scroll(target)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "hud_layout_tests.rs"]
mod tests;

//! Body padding derived from overlay coverage.

use crate::model::geometry::GeometryTable;
use crate::model::layout_state::SidebarState;

/// Edge padding of the scrollable body.
///
/// Always derived, never stored: `top` is the header height, `bottom` the
/// status bar height, and `right` the sidebar footprint currently on screen.
/// The body has no left overlay, so there is no `left` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaddingVector {
    /// Rows reserved under the header.
    pub top: u16,
    /// Columns reserved under the sidebar.
    pub right: u16,
    /// Rows reserved under the status bar.
    pub bottom: u16,
}

impl PaddingVector {
    /// Padding matching an arbitrary sidebar footprint, such as one sampled
    /// mid-transition.
    pub fn coverage(geometry: &GeometryTable, sidebar_footprint: u16) -> Self {
        Self {
            top: geometry.header_height,
            right: sidebar_footprint,
            bottom: geometry.statusbar_height,
        }
    }

    /// Settled padding for a collapse state.
    pub fn settled(geometry: &GeometryTable, state: SidebarState) -> Self {
        Self::coverage(geometry, geometry.sidebar_footprint(state))
    }

    /// Rows reserved vertically (top + bottom).
    pub fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

//! Overlay region descriptors.

use crate::model::geometry::GeometryTable;
use crate::model::layout_state::SidebarState;

/// Viewport edge an overlay region is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top edge, spanning horizontally.
    Top,
    /// Right edge, spanning vertically.
    Right,
    /// Bottom edge, spanning horizontally.
    Bottom,
}

/// The three fixed regions drawn over the scrollable body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Title band at the top.
    Header,
    /// Collapsible band on the right.
    Sidebar,
    /// Status band at the bottom.
    Statusbar,
}

impl RegionKind {
    /// All regions in declaration order.
    pub const ALL: [RegionKind; 3] = [Self::Header, Self::Sidebar, Self::Statusbar];

    /// Edge the region is pinned to.
    pub fn edge(self) -> Edge {
        match self {
            Self::Header => Edge::Top,
            Self::Sidebar => Edge::Right,
            Self::Statusbar => Edge::Bottom,
        }
    }

    /// Only the sidebar changes size with the collapse state.
    pub fn is_collapsible(self) -> bool {
        matches!(self, Self::Sidebar)
    }
}

/// Footprint of one region for a given collapse state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDescriptor {
    /// Which region.
    pub kind: RegionKind,
    /// Pinned edge.
    pub edge: Edge,
    /// Extent perpendicular to the edge: rows for top/bottom, columns for right.
    pub size: u16,
    /// Stacking order.
    pub z_index: u16,
    /// Whether `size` depends on the collapse state.
    pub collapsible: bool,
}

impl RegionDescriptor {
    /// Describe a region at its settled size for `state`.
    pub fn describe(kind: RegionKind, geometry: &GeometryTable, state: SidebarState) -> Self {
        let size = match kind {
            RegionKind::Header => geometry.header_height,
            RegionKind::Sidebar => geometry.sidebar_footprint(state),
            RegionKind::Statusbar => geometry.statusbar_height,
        };

        Self {
            kind,
            edge: kind.edge(),
            size,
            z_index: geometry.z_index.for_region(kind),
            collapsible: kind.is_collapsible(),
        }
    }
}

/// Descriptors for all three regions.
pub fn region_descriptors(geometry: &GeometryTable, state: SidebarState) -> [RegionDescriptor; 3] {
    RegionKind::ALL.map(|kind| RegionDescriptor::describe(kind, geometry, state))
}

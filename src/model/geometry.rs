//! Geometry table for the HUD shell.
//!
//! One immutable table of cell dimensions, built once at startup from
//! configuration and handed by reference to every region that needs it.
//! Widths are terminal columns, heights are terminal rows.

use crate::model::layout_state::SidebarState;
use crate::model::region::RegionKind;
use std::time::Duration;
use thiserror::Error;

/// Default header band height in rows.
pub const DEFAULT_HEADER_HEIGHT: u16 = 2;

/// Default status bar height in rows.
pub const DEFAULT_STATUSBAR_HEIGHT: u16 = 1;

/// Default expanded sidebar width in columns.
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 28;

/// Default collapsed sidebar width in columns (a thin rail).
pub const DEFAULT_SIDEBAR_WIDTH_COLLAPSED: u16 = 3;

/// Default duration of the sidebar collapse/expand animation.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Rejected geometry configurations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Collapsed sidebar would be wider than the expanded one.
    #[error("collapsed sidebar width {collapsed} exceeds expanded width {expanded}")]
    CollapsedWiderThanExpanded {
        /// Configured collapsed width.
        collapsed: u16,
        /// Configured expanded width.
        expanded: u16,
    },

    /// An overlay region would be stacked at or below the scrollable body.
    #[error("{region:?} z-index {z_index} must be greater than main z-index {main}")]
    OverlayBelowBody {
        /// Offending region.
        region: RegionKind,
        /// Its configured z-index.
        z_index: u16,
        /// The body's z-index.
        main: u16,
    },
}

/// Stacking order per layer. Higher values paint later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZIndexTable {
    /// Scrollable body.
    pub main: u16,
    /// Header band.
    pub header: u16,
    /// Sidebar band.
    pub sidebar: u16,
    /// Status bar band.
    pub statusbar: u16,
}

impl ZIndexTable {
    /// Z-index of one overlay region.
    pub fn for_region(&self, kind: RegionKind) -> u16 {
        match kind {
            RegionKind::Header => self.header,
            RegionKind::Sidebar => self.sidebar,
            RegionKind::Statusbar => self.statusbar,
        }
    }
}

impl Default for ZIndexTable {
    fn default() -> Self {
        Self {
            main: 0,
            header: 1000,
            sidebar: 900,
            statusbar: 1000,
        }
    }
}

/// Read-only dimensions shared by every part of the HUD.
///
/// Never mutated after construction. Pass `&GeometryTable` into whatever
/// needs it; there is deliberately no global instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryTable {
    /// Header band height (rows).
    pub header_height: u16,
    /// Status bar height (rows).
    pub statusbar_height: u16,
    /// Sidebar width when expanded (columns).
    pub sidebar_width: u16,
    /// Sidebar width when collapsed (columns).
    pub sidebar_width_collapsed: u16,
    /// Duration of the collapse/expand animation.
    pub transition_duration: Duration,
    /// Stacking order of the body and the three overlay regions.
    pub z_index: ZIndexTable,
}

impl Default for GeometryTable {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
            statusbar_height: DEFAULT_STATUSBAR_HEIGHT,
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            sidebar_width_collapsed: DEFAULT_SIDEBAR_WIDTH_COLLAPSED,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            z_index: ZIndexTable::default(),
        }
    }
}

impl GeometryTable {
    /// Check the relations the layout relies on.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the collapsed sidebar is wider than the
    /// expanded one, or if any overlay is not stacked above the body.
    pub fn validate(self) -> Result<Self, GeometryError> {
        if self.sidebar_width_collapsed > self.sidebar_width {
            return Err(GeometryError::CollapsedWiderThanExpanded {
                collapsed: self.sidebar_width_collapsed,
                expanded: self.sidebar_width,
            });
        }

        for region in RegionKind::ALL {
            let z_index = self.z_index.for_region(region);
            if z_index <= self.z_index.main {
                return Err(GeometryError::OverlayBelowBody {
                    region,
                    z_index,
                    main: self.z_index.main,
                });
            }
        }

        Ok(self)
    }

    /// Settled sidebar width for a collapse state.
    pub fn sidebar_footprint(&self, state: SidebarState) -> u16 {
        match state {
            SidebarState::Expanded => self.sidebar_width,
            SidebarState::Collapsed => self.sidebar_width_collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert_eq!(GeometryTable::default().validate(), Ok(GeometryTable::default()));
    }

    #[test]
    fn footprint_follows_sidebar_state() {
        let geometry = GeometryTable::default();
        assert_eq!(
            geometry.sidebar_footprint(SidebarState::Expanded),
            DEFAULT_SIDEBAR_WIDTH
        );
        assert_eq!(
            geometry.sidebar_footprint(SidebarState::Collapsed),
            DEFAULT_SIDEBAR_WIDTH_COLLAPSED
        );
    }

    #[test]
    fn validate_rejects_collapsed_wider_than_expanded() {
        let geometry = GeometryTable {
            sidebar_width: 4,
            sidebar_width_collapsed: 10,
            ..GeometryTable::default()
        };
        assert_eq!(
            geometry.validate(),
            Err(GeometryError::CollapsedWiderThanExpanded {
                collapsed: 10,
                expanded: 4
            })
        );
    }

    #[test]
    fn validate_accepts_equal_widths() {
        let geometry = GeometryTable {
            sidebar_width: 5,
            sidebar_width_collapsed: 5,
            ..GeometryTable::default()
        };
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn validate_rejects_header_not_above_body() {
        let geometry = GeometryTable {
            z_index: ZIndexTable {
                main: 10,
                header: 10,
                ..ZIndexTable::default()
            },
            ..GeometryTable::default()
        };
        assert!(matches!(
            geometry.validate(),
            Err(GeometryError::OverlayBelowBody {
                region: RegionKind::Header,
                ..
            })
        ));
    }

    #[test]
    fn header_stacks_strictly_above_body_by_default() {
        let z = ZIndexTable::default();
        assert!(z.header > z.main);
        assert!(z.sidebar > z.main);
        assert!(z.statusbar > z.main);
    }
}

//! Engine-independent style description of the HUD.
//!
//! These are plain values produced by
//! [`crate::view_state::derive_hud_style`]. Nothing here knows about
//! ratatui; the view layer turns them into rectangles and widgets.

use crate::model::easing::Easing;
use crate::model::padding::PaddingVector;
use std::time::Duration;

/// Property animated by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyledProperty {
    /// Right padding of the body and the header.
    PaddingRight,
    /// Width of the sidebar.
    Width,
}

/// Declarative transition attached to a styled property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// What moves.
    pub property: StyledProperty,
    /// How long it takes.
    pub duration: Duration,
    /// Timing curve.
    pub easing: Easing,
}

impl TransitionSpec {
    /// Whether two specs animate at the same pace, whatever property they drive.
    pub fn in_lockstep_with(&self, other: &TransitionSpec) -> bool {
        self.duration == other.duration && self.easing == other.easing
    }
}

/// Scrolling behaviour of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Content is not scrolled by the region itself.
    Visible,
    /// The region scrolls its own content.
    Auto,
}

/// Root container (the scrollable body's padded box).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootStyle {
    /// Edge padding reserving the overlays' footprints.
    pub padding: PaddingVector,
    /// Transition on `padding.right`.
    pub transition: TransitionSpec,
    /// Stacking order of body content.
    pub z_index: u16,
    /// The body never scrolls internally; the document does.
    pub overflow: Overflow,
}

/// Header band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    /// Band height.
    pub height: u16,
    /// Right padding keeping header content off the sidebar.
    pub padding_right: u16,
    /// Stacking order.
    pub z_index: u16,
    /// Transition on `padding_right`.
    pub transition: TransitionSpec,
}

/// Sidebar band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarStyle {
    /// Band width.
    pub width: u16,
    /// Stacking order.
    pub z_index: u16,
    /// Sidebar content scrolls on its own.
    pub overflow: Overflow,
    /// Transition on `width`.
    pub transition: TransitionSpec,
}

/// Status bar band.
///
/// No horizontal field: the status bar spans the full viewport width and
/// does not follow the sidebar, unlike the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusbarStyle {
    /// Band height.
    pub height: u16,
    /// Stacking order.
    pub z_index: u16,
}

/// Complete style of the HUD for one collapse state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStyle {
    /// Padded root container.
    pub root: RootStyle,
    /// Header band.
    pub header: HeaderStyle,
    /// Sidebar band.
    pub sidebar: SidebarStyle,
    /// Status bar band.
    pub statusbar: StatusbarStyle,
}

//! Sidebar collapse state.

/// The two states of the sidebar.
///
/// The owning view holds a plain `is_sidebar_closed` flag; this enum is the
/// explicit form every derivation matches on. There is no intermediate
/// state: the animation between the two is a rendering concern handled by
/// [`crate::state::SidebarTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SidebarState {
    /// Full-width sidebar.
    #[default]
    Expanded,
    /// Narrow rail.
    Collapsed,
}

impl SidebarState {
    /// Build from the `is_sidebar_closed` prop.
    pub fn from_closed(is_sidebar_closed: bool) -> Self {
        if is_sidebar_closed {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }

    /// Whether the sidebar is collapsed.
    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }

    /// The other state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// Short label for logs and the status bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }
}

impl From<bool> for SidebarState {
    fn from(is_sidebar_closed: bool) -> Self {
        Self::from_closed(is_sidebar_closed)
    }
}

//! Domain-level keyboard actions independent of key bindings.

/// Actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Document scrolling
    /// Scroll the document up one row. Default: k/↑
    ScrollUp,
    /// Scroll the document down one row. Default: j/↓
    ScrollDown,
    /// Scroll up by the uncovered body height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by the uncovered body height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the document. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the document. Default: G/End
    ScrollToBottom,

    // Sidebar
    /// Scroll the sidebar's own content up. Default: K
    SidebarScrollUp,
    /// Scroll the sidebar's own content down. Default: J
    SidebarScrollDown,
    /// Collapse or expand the sidebar. Default: b
    ToggleSidebar,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action scrolls the document.
    pub fn is_document_scroll(self) -> bool {
        matches!(
            self,
            Self::ScrollUp
                | Self::ScrollDown
                | Self::PageUp
                | Self::PageDown
                | Self::ScrollToTop
                | Self::ScrollToBottom
        )
    }
}

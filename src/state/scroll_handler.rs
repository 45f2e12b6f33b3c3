//! Scrolling for the document and the sidebar.
//!
//! The document is the one scrolling surface for main content; the sidebar
//! is the only other region with its own offset. All functions clamp, so
//! offsets stay valid after any sequence of actions.

use crate::model::KeyAction;
use crate::state::HudState;
use crate::view_state::DocumentMetrics;

/// Scroll geometry of the sidebar's own content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarMetrics {
    /// Rows of sidebar content.
    pub content_rows: usize,
    /// Visible sidebar height in rows.
    pub height: u16,
}

impl SidebarMetrics {
    /// Largest valid sidebar offset.
    pub fn max_scroll(&self) -> usize {
        self.content_rows.saturating_sub(usize::from(self.height))
    }
}

/// Apply a keyboard scroll action.
///
/// Document actions use `document`; sidebar actions use `sidebar`. Other
/// actions are ignored.
pub fn handle_scroll_action(
    state: &mut HudState,
    action: KeyAction,
    document: DocumentMetrics,
    sidebar: SidebarMetrics,
) {
    let current = document.clamp_scroll(state.document_scroll);
    let page = document.page_size();

    let next = match action {
        KeyAction::ScrollUp => current.saturating_sub(1),
        KeyAction::ScrollDown => current.saturating_add(1),
        KeyAction::PageUp => current.saturating_sub(page),
        KeyAction::PageDown => current.saturating_add(page),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => document.max_scroll(),
        KeyAction::SidebarScrollUp => {
            scroll_sidebar_by(state, -1, sidebar);
            return;
        }
        KeyAction::SidebarScrollDown => {
            scroll_sidebar_by(state, 1, sidebar);
            return;
        }
        KeyAction::ToggleSidebar | KeyAction::Quit => return,
    };

    state.document_scroll = document.clamp_scroll(next);
}

/// Scroll the document by a signed number of rows (mouse wheel).
pub fn scroll_document_by(state: &mut HudState, delta: isize, document: DocumentMetrics) {
    let next = offset_by(document.clamp_scroll(state.document_scroll), delta);
    state.document_scroll = document.clamp_scroll(next);
}

/// Scroll the sidebar by a signed number of rows.
pub fn scroll_sidebar_by(state: &mut HudState, delta: isize, sidebar: SidebarMetrics) {
    let next = offset_by(state.sidebar_scroll.min(sidebar.max_scroll()), delta);
    state.sidebar_scroll = next.min(sidebar.max_scroll());
}

/// Scroll the document just enough to expose a main content row.
pub fn reveal_line(state: &mut HudState, content_row: usize, document: DocumentMetrics) {
    state.document_scroll = document.reveal(content_row, state.document_scroll);
}

/// Re-clamp both offsets, e.g. after a resize.
pub fn clamp_scrolls(state: &mut HudState, document: DocumentMetrics, sidebar: SidebarMetrics) {
    state.document_scroll = document.clamp_scroll(state.document_scroll);
    state.sidebar_scroll = state.sidebar_scroll.min(sidebar.max_scroll());
}

fn offset_by(current: usize, delta: isize) -> usize {
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta.unsigned_abs())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;

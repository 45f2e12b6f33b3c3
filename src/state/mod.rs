//! UI state (pure).
//!
//! All state transitions are functions of explicit inputs, including time,
//! so they are testable without a terminal.

pub mod hud_state;
pub mod scroll_handler;
pub mod sidebar_transition;

// Re-export for convenience
pub use hud_state::HudState;
pub use scroll_handler::{
    clamp_scrolls, handle_scroll_action, reveal_line, scroll_document_by, scroll_sidebar_by,
    SidebarMetrics,
};
pub use sidebar_transition::SidebarTransition;

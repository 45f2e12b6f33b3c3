//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Vim-style scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::ScrollToBottom,
        );

        // Arrow and navigation keys
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::ScrollToBottom,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );

        // Sidebar
        bindings.insert(
            KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE),
            KeyAction::ToggleSidebar,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT),
            KeyAction::SidebarScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT),
            KeyAction::SidebarScrollUp,
        );

        // Application
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn lookup(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        KeyBindings::default().get(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn b_toggles_sidebar() {
        assert_eq!(
            lookup(KeyCode::Char('b'), KeyModifiers::NONE),
            Some(KeyAction::ToggleSidebar)
        );
    }

    #[test]
    fn vim_and_arrow_keys_scroll_document() {
        assert_eq!(
            lookup(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(KeyAction::ScrollDown)
        );
        assert_eq!(lookup(KeyCode::Up, KeyModifiers::NONE), Some(KeyAction::ScrollUp));
        assert_eq!(
            lookup(KeyCode::Char('G'), KeyModifiers::SHIFT),
            Some(KeyAction::ScrollToBottom)
        );
        assert_eq!(
            lookup(KeyCode::Char('d'), KeyModifiers::CONTROL),
            Some(KeyAction::PageDown)
        );
    }

    #[test]
    fn shifted_j_and_k_scroll_sidebar() {
        assert_eq!(
            lookup(KeyCode::Char('J'), KeyModifiers::SHIFT),
            Some(KeyAction::SidebarScrollDown)
        );
        assert_eq!(
            lookup(KeyCode::Char('K'), KeyModifiers::SHIFT),
            Some(KeyAction::SidebarScrollUp)
        );
    }

    #[test]
    fn unbound_key_has_no_action() {
        assert_eq!(lookup(KeyCode::Char('z'), KeyModifiers::NONE), None);
    }
}

//! Rendering constants for the TUI shell.
//!
//! Region sizes live in [`crate::model::GeometryTable`]; these are the
//! event-loop and glyph values that are not part of the layout contract.

use std::time::Duration;

/// Poll interval while a sidebar transition is running (~60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll interval when nothing is animating.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Rows moved per mouse wheel notch.
pub const WHEEL_SCROLL_LINES: isize = 3;

/// Separator between the manifest prefix column and the line text.
pub const PREFIX_SEPARATOR: &str = " ┊ ";

/// Heading of the expanded sidebar.
pub const SIDEBAR_HEADING: &str = "MANIFESTS";

/// Heading of the collapsed sidebar rail.
pub const SIDEBAR_RAIL_HEADING: &str = "≡";

/// One rail glyph per manifest when collapsed.
pub const SIDEBAR_RAIL_GLYPH: &str = "•";

/// Fallback viewport when the terminal size cannot be read.
pub const FALLBACK_VIEWPORT: (u16, u16) = (80, 24);

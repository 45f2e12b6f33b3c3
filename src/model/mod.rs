//! Domain model types (pure).
//!
//! Geometry, collapse state, region descriptors and the style values
//! derived from them, plus the log lines the body displays. Nothing here
//! depends on the terminal.

pub mod easing;
pub mod error;
pub mod fixtures;
pub mod geometry;
pub mod key_action;
pub mod layout_state;
pub mod log_line;
pub mod padding;
pub mod region;
pub mod style;

// Re-export for convenience
pub use easing::Easing;
pub use error::{InputError, ParseError};
pub use geometry::{GeometryError, GeometryTable, ZIndexTable};
pub use key_action::KeyAction;
pub use layout_state::SidebarState;
pub use log_line::{summarize_manifests, LogLevel, LogLine, ManifestSummary};
pub use padding::PaddingVector;
pub use region::{region_descriptors, Edge, RegionDescriptor, RegionKind};
pub use style::{
    HeaderStyle, HudStyle, Overflow, RootStyle, SidebarStyle, StatusbarStyle, StyledProperty,
    TransitionSpec,
};

//! Derived layout state (pure).
//!
//! Functions from application state and geometry to rectangles and scroll
//! metrics. No rendering happens here.

pub mod hud_layout;

pub use hud_layout::{derive_hud_style, DocumentMetrics, HudAreas};

//! hudview
//!
//! Terminal log viewer built around a heads-up-display layout: a fixed
//! header, a collapsible right sidebar and a fixed status bar frame one
//! scrolling log body, which pads itself so no line is ever hidden
//! under an overlay.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `view_state` and
//! `state` are pure and take time as an explicit input; `view`, `source`
//! and `logging` own the terminal, files and subscriber.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

//! Application state owning the collapse flag.
//!
//! `HudState` plays the parent-view role: it owns `is_sidebar_closed`, the
//! log lines shown as main content, and both scroll offsets. The layout
//! coordinator only ever reads from it.

use crate::model::{summarize_manifests, GeometryTable, LogLine, ManifestSummary, SidebarState};
use crate::state::SidebarTransition;
use crate::view_state::derive_hud_style;
use std::time::Instant;
use tracing::debug;

/// Application state. Pure data plus explicit-time transitions.
///
/// # State Machine
///
/// The sidebar is either `Expanded` or `Collapsed`; toggling flips the
/// flag immediately and retargets the footprint animation. Readers of
/// [`HudState::sidebar`] never see an in-between value.
#[derive(Debug, Clone)]
pub struct HudState {
    lines: Vec<LogLine>,
    manifests: Vec<ManifestSummary>,
    sidebar: SidebarState,
    transition: SidebarTransition,

    /// Scroll offset of the document (the single main scrolling surface),
    /// in document rows.
    pub document_scroll: usize,

    /// Scroll offset of the sidebar's own content, in rows.
    pub sidebar_scroll: usize,
}

impl HudState {
    /// Create state showing `lines`, with the sidebar settled in `sidebar`.
    pub fn new(lines: Vec<LogLine>, sidebar: SidebarState, geometry: &GeometryTable) -> Self {
        let manifests = summarize_manifests(&lines);
        Self {
            lines,
            manifests,
            sidebar,
            transition: SidebarTransition::settled(geometry.sidebar_footprint(sidebar)),
            document_scroll: 0,
            sidebar_scroll: 0,
        }
    }

    /// Main content lines.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Manifests seen in the lines, for the sidebar.
    pub fn manifests(&self) -> &[ManifestSummary] {
        &self.manifests
    }

    /// Current collapse state.
    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    /// The `is_sidebar_closed` prop handed to the layout.
    pub fn is_sidebar_closed(&self) -> bool {
        self.sidebar.is_collapsed()
    }

    /// The footprint animation.
    pub fn transition(&self) -> &SidebarTransition {
        &self.transition
    }

    /// Sidebar footprint to lay out at `now`.
    pub fn sidebar_footprint(&self, now: Instant) -> u16 {
        self.transition.footprint_at(now)
    }

    /// Whether a frame drawn at `now` would differ from one drawn later.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_running(now)
    }

    /// Whether a final frame is still owed for an animation.
    pub fn needs_frame(&self) -> bool {
        !self.transition.is_settled()
    }

    /// Set the collapse state, animating the footprint from where it is at `now`.
    pub fn set_sidebar(&mut self, state: SidebarState, geometry: &GeometryTable, now: Instant) {
        if state == self.sidebar {
            return;
        }

        let style = derive_hud_style(state, geometry);
        self.sidebar = state;
        self.transition
            .retarget(style.sidebar.width, &style.sidebar.transition, now);

        debug!(
            sidebar = state.label(),
            target = style.sidebar.width,
            "Sidebar state changed"
        );
    }

    /// Flip the collapse state.
    pub fn toggle_sidebar(&mut self, geometry: &GeometryTable, now: Instant) {
        self.set_sidebar(self.sidebar.toggled(), geometry, now);
    }

    /// Housekeeping after a frame: forget finished animations.
    pub fn tick(&mut self, now: Instant) {
        self.transition.settle_if_finished(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;
    use std::time::Duration;

    fn geometry() -> GeometryTable {
        GeometryTable::default()
    }

    #[test]
    fn new_state_is_settled() {
        let g = geometry();
        let now = Instant::now();
        let state = HudState::new(fixtures::three_lines(), SidebarState::Collapsed, &g);

        assert!(state.is_sidebar_closed());
        assert_eq!(state.sidebar_footprint(now), g.sidebar_width_collapsed);
        assert!(!state.is_animating(now));
        assert_eq!(state.document_scroll, 0);
    }

    #[test]
    fn toggle_flips_flag_immediately_and_animates_footprint() {
        let g = geometry();
        let now = Instant::now();
        let mut state = HudState::new(fixtures::demo(), SidebarState::Expanded, &g);

        state.toggle_sidebar(&g, now);

        assert!(state.is_sidebar_closed(), "flag flips without waiting for animation");
        assert!(state.is_animating(now));
        assert_eq!(state.sidebar_footprint(now), g.sidebar_width);
        assert_eq!(
            state.sidebar_footprint(now + g.transition_duration),
            g.sidebar_width_collapsed
        );
    }

    #[test]
    fn setting_same_state_does_not_restart_animation() {
        let g = geometry();
        let now = Instant::now();
        let mut state = HudState::new(Vec::new(), SidebarState::Expanded, &g);

        state.set_sidebar(SidebarState::Expanded, &g, now);
        assert!(!state.is_animating(now));
    }

    #[test]
    fn round_trip_restores_footprint() {
        let g = geometry();
        let start = Instant::now();
        let mut state = HudState::new(Vec::new(), SidebarState::Expanded, &g);

        state.toggle_sidebar(&g, start);
        let later = start + g.transition_duration * 2;
        state.toggle_sidebar(&g, later);
        let settled = later + g.transition_duration;

        assert!(!state.is_sidebar_closed());
        assert_eq!(state.sidebar_footprint(settled), g.sidebar_width);
    }

    #[test]
    fn tick_settles_finished_transition() {
        let g = geometry();
        let start = Instant::now();
        let mut state = HudState::new(Vec::new(), SidebarState::Expanded, &g);
        state.toggle_sidebar(&g, start);

        let end = start + g.transition_duration + Duration::from_millis(1);
        state.tick(end);
        assert!(!state.is_animating(end));
        assert_eq!(state.transition().target(), g.sidebar_width_collapsed);
    }

    #[test]
    fn manifests_are_summarized_from_lines() {
        let state = HudState::new(fixtures::demo(), SidebarState::Expanded, &geometry());
        let names: Vec<&str> = state.manifests().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["frontend", "backend", "postgres", "redis"]);
    }
}

//! Tests for HUD layout derivation.

use super::*;
use std::time::Duration;

fn geometry() -> GeometryTable {
    GeometryTable {
        header_height: 2,
        statusbar_height: 1,
        sidebar_width: 20,
        sidebar_width_collapsed: 3,
        transition_duration: Duration::from_millis(300),
        ..GeometryTable::default()
    }
}

// ===== derive_hud_style =====

#[test]
fn padding_right_follows_collapse_flag() {
    let g = geometry();
    for closed in [false, true] {
        let style = derive_hud_style(SidebarState::from_closed(closed), &g);
        let expected = if closed {
            g.sidebar_width_collapsed
        } else {
            g.sidebar_width
        };
        assert_eq!(style.root.padding.right, expected);
        assert_eq!(
            style.header.padding_right, expected,
            "header padding must mirror body padding"
        );
        assert_eq!(style.sidebar.width, expected);
    }
}

#[test]
fn vertical_padding_is_invariant() {
    let g = geometry();
    let expanded = derive_hud_style(SidebarState::Expanded, &g);
    let collapsed = derive_hud_style(SidebarState::Collapsed, &g);

    assert_eq!(expanded.root.padding.top, g.header_height);
    assert_eq!(expanded.root.padding.bottom, g.statusbar_height);
    assert_eq!(expanded.root.padding.top, collapsed.root.padding.top);
    assert_eq!(expanded.root.padding.bottom, collapsed.root.padding.bottom);
}

#[test]
fn toggle_round_trip_restores_style() {
    let g = geometry();
    let start = SidebarState::Expanded;
    let original = derive_hud_style(start, &g);
    let round_trip = derive_hud_style(start.toggled().toggled(), &g);
    assert_eq!(original, round_trip);
}

#[test]
fn only_sidebar_dependent_fields_change() {
    let g = geometry();
    let expanded = derive_hud_style(SidebarState::Expanded, &g);
    let collapsed = derive_hud_style(SidebarState::Collapsed, &g);

    assert_eq!(expanded.root.transition, collapsed.root.transition);
    assert_eq!(expanded.root.z_index, collapsed.root.z_index);
    assert_eq!(expanded.header.height, collapsed.header.height);
    assert_eq!(expanded.statusbar, collapsed.statusbar);
}

#[test]
fn transitions_are_in_lockstep() {
    let style = derive_hud_style(SidebarState::Collapsed, &geometry());

    assert!(style.root.transition.in_lockstep_with(&style.header.transition));
    assert!(style.root.transition.in_lockstep_with(&style.sidebar.transition));
    assert_eq!(style.root.transition.easing, Easing::Ease);
    assert_eq!(style.root.transition.duration, Duration::from_millis(300));
    assert_eq!(style.root.transition.property, StyledProperty::PaddingRight);
    assert_eq!(style.sidebar.transition.property, StyledProperty::Width);
}

#[test]
fn header_stacks_above_body_and_sidebar_scrolls() {
    let style = derive_hud_style(SidebarState::Expanded, &geometry());
    assert!(style.header.z_index > style.root.z_index);
    assert_eq!(style.sidebar.overflow, Overflow::Auto);
    assert_eq!(style.root.overflow, Overflow::Visible);
}

// ===== HudAreas =====

#[test]
fn areas_partition_the_viewport() {
    let g = geometry();
    let areas = HudAreas::compute(Rect::new(0, 0, 80, 24), &g, g.sidebar_width);

    assert_eq!(areas.header, Rect::new(0, 0, 80, 2));
    assert_eq!(areas.header_content, Rect::new(0, 0, 60, 2));
    assert_eq!(areas.sidebar, Rect::new(60, 0, 20, 23));
    assert_eq!(areas.statusbar, Rect::new(0, 23, 80, 1));
    assert_eq!(areas.body, Rect::new(0, 0, 60, 24));
    assert_eq!(areas.exposed, Rect::new(0, 2, 60, 21));
}

#[test]
fn header_content_stops_at_sidebar_edge() {
    let g = geometry();
    for footprint in [g.sidebar_width, g.sidebar_width_collapsed, 11] {
        let areas = HudAreas::compute(Rect::new(0, 0, 80, 24), &g, footprint);
        assert_eq!(areas.header_content.right(), areas.sidebar.left());
        assert_eq!(areas.body.right(), areas.sidebar.left());
        assert!(areas.header_content.intersection(areas.sidebar).is_empty());
    }
}

#[test]
fn statusbar_spans_full_width_regardless_of_sidebar() {
    // The status bar does not follow the sidebar the way the header does.
    let g = geometry();
    let expanded = HudAreas::compute(Rect::new(0, 0, 80, 24), &g, g.sidebar_width);
    let collapsed = HudAreas::compute(Rect::new(0, 0, 80, 24), &g, g.sidebar_width_collapsed);

    assert_eq!(expanded.statusbar, collapsed.statusbar);
    assert_eq!(expanded.statusbar.width, 80);
}

#[test]
fn sidebar_never_overlaps_statusbar() {
    let g = geometry();
    let areas = HudAreas::compute(Rect::new(0, 0, 80, 24), &g, g.sidebar_width);
    assert!(areas.sidebar.intersection(areas.statusbar).is_empty());
    assert_eq!(areas.sidebar.bottom(), areas.statusbar.top());
}

#[test]
fn padding_matches_overlay_footprints() {
    let g = geometry();
    let areas = HudAreas::compute(Rect::new(0, 0, 80, 24), &g, 9);
    assert_eq!(areas.padding.top, areas.header.height);
    assert_eq!(areas.padding.right, areas.sidebar.width);
    assert_eq!(areas.padding.bottom, areas.statusbar.height);
}

#[test]
fn footprint_is_clamped_to_viewport_width() {
    let g = geometry();
    let areas = HudAreas::compute(Rect::new(0, 0, 10, 24), &g, g.sidebar_width);
    assert_eq!(areas.sidebar.width, 10);
    assert_eq!(areas.body.width, 0);
    assert_eq!(areas.padding.right, 10);
}

#[test]
fn tiny_viewport_does_not_underflow() {
    let g = geometry();
    let areas = HudAreas::compute(Rect::new(0, 0, 5, 1), &g, 3);
    assert_eq!(areas.exposed.height, 0);
    assert_eq!(areas.header.height, 1);
}

#[test]
fn offset_viewport_is_respected() {
    let g = geometry();
    let areas = HudAreas::compute(Rect::new(5, 3, 50, 20), &g, 10);
    assert_eq!(areas.sidebar, Rect::new(45, 3, 10, 19));
    assert_eq!(areas.statusbar, Rect::new(5, 22, 50, 1));
    assert!(areas.sidebar_contains(45, 3));
    assert!(!areas.sidebar_contains(44, 3));
    assert!(!areas.sidebar_contains(45, 22));
}

// ===== DocumentMetrics =====

fn metrics(rows: usize, viewport_height: u16) -> DocumentMetrics {
    DocumentMetrics::new(PaddingVector::settled(&geometry(), SidebarState::Expanded), rows, viewport_height)
}

#[test]
fn document_height_includes_padding() {
    assert_eq!(metrics(100, 24).document_height(), 103);
    assert_eq!(metrics(0, 24).document_height(), 3);
}

#[test]
fn max_scroll_exposes_last_row_above_statusbar() {
    let m = metrics(100, 24);
    let max = m.max_scroll();
    assert_eq!(max, 79);
    // Last row lands on the row right above the 1-row status bar.
    assert_eq!(m.screen_row(99, max), Some(22));
    assert!(m.is_exposed(99, max));
}

#[test]
fn scroll_zero_exposes_first_row_below_header() {
    let m = metrics(100, 24);
    assert_eq!(m.screen_row(0, 0), Some(2));
    assert!(m.is_exposed(0, 0));
}

#[test]
fn short_documents_do_not_scroll() {
    let m = metrics(5, 24);
    assert_eq!(m.max_scroll(), 0);
    assert_eq!(m.clamp_scroll(40), 0);
    assert_eq!(m.exposed_content_rows(0), 0..5);
}

#[test]
fn empty_document_is_valid() {
    let m = metrics(0, 24);
    assert_eq!(m.max_scroll(), 0);
    assert!(m.exposed_content_rows(0).is_empty());
}

#[test]
fn rows_under_header_are_on_screen_but_not_exposed() {
    let m = metrics(100, 24);
    // At scroll 1, content row 0 sits at screen row 1: under the header.
    assert_eq!(m.screen_row(0, 1), Some(1));
    assert!(!m.is_exposed(0, 1));
}

#[test]
fn screen_row_is_none_off_screen() {
    let m = metrics(100, 24);
    assert_eq!(m.screen_row(0, 3), None);
    assert_eq!(m.screen_row(50, 0), None);
}

#[test]
fn page_size_is_exposed_band() {
    assert_eq!(metrics(100, 24).page_size(), 21);
    assert_eq!(metrics(100, 2).page_size(), 1);
}

#[test]
fn reveal_scrolls_minimally() {
    let m = metrics(100, 24);
    // Already exposed: unchanged.
    assert_eq!(m.reveal(10, 0), 0);
    // Below the band: scroll so the row sits just above the status bar.
    let scroll = m.reveal(40, 0);
    assert_eq!(scroll, 20);
    assert!(m.is_exposed(40, scroll));
    assert!(!m.is_exposed(40, scroll - 1));
    // Above the band: scroll so the row sits just below the header.
    assert_eq!(m.reveal(5, 30), 5);
}

#[test]
fn reveal_is_clamped_near_the_end() {
    let m = metrics(100, 24);
    let scroll = m.reveal(99, 0);
    assert_eq!(scroll, m.max_scroll());
    assert!(m.is_exposed(99, scroll));
}

//! End-to-end HUD scenarios rendered through a TestBackend.
//!
//! Each scenario drives `HudState` with explicit instants and checks the
//! painted frame, so sidebar animations are reproducible.

use hudview::model::{fixtures, GeometryTable, KeyAction, LogLine, SidebarState};
use hudview::state::{handle_scroll_action, HudState, SidebarMetrics};
use hudview::view::{render_layout, sidebar, ColorConfig, HudStyles};
use hudview::view_state::{DocumentMetrics, HudAreas};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::time::{Duration, Instant};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

struct Harness {
    terminal: Terminal<TestBackend>,
    geometry: GeometryTable,
    styles: HudStyles,
    state: HudState,
}

impl Harness {
    fn new(lines: Vec<LogLine>, sidebar: SidebarState) -> Self {
        let geometry = GeometryTable::default();
        Self {
            terminal: Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap(),
            state: HudState::new(lines, sidebar, &geometry),
            styles: HudStyles::with_color_config(ColorConfig::new(false)),
            geometry,
        }
    }

    fn draw(&mut self, now: Instant) -> HudAreas {
        let mut areas = None;
        let state = &self.state;
        let geometry = &self.geometry;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| {
                areas = Some(render_layout(frame, state, geometry, styles, "hudview", now));
            })
            .unwrap();
        self.state.tick(now);
        areas.unwrap()
    }

    fn press(&mut self, action: KeyAction, now: Instant) {
        let footprint = self.state.sidebar_footprint(now);
        let areas = HudAreas::compute(Rect::new(0, 0, WIDTH, HEIGHT), &self.geometry, footprint);
        let document = DocumentMetrics::new(areas.padding, self.state.lines().len(), HEIGHT);
        let sidebar = SidebarMetrics {
            content_rows: sidebar::sidebar_content_rows(self.state.manifests()),
            height: areas.sidebar.height,
        };
        handle_scroll_action(&mut self.state, action, document, sidebar);
    }

    fn row(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }
}

#[test]
fn collapse_animation_keeps_regions_in_lockstep() {
    let mut hud = Harness::new(fixtures::demo(), SidebarState::Expanded);
    let t0 = Instant::now();
    hud.draw(t0);

    hud.state.toggle_sidebar(&hud.geometry, t0);

    let mut widths = Vec::new();
    for ms in (0..=300).step_by(30) {
        let areas = hud.draw(t0 + Duration::from_millis(ms));
        assert_eq!(areas.padding.right, areas.sidebar.width);
        assert_eq!(areas.header_content.width, areas.body.width);

        // The header detail ends right where the sidebar border begins.
        let header = hud.row(0);
        let border = usize::from(areas.sidebar.x);
        let before_border: String = header.chars().take(border).collect();
        assert!(before_border.ends_with("120 lines "), "{header:?}");
        assert_eq!(header.chars().nth(border), Some('│'));

        widths.push(areas.sidebar.width);
    }

    assert_eq!(widths.first(), Some(&hud.geometry.sidebar_width));
    assert_eq!(widths.last(), Some(&hud.geometry.sidebar_width_collapsed));
    assert!(widths.windows(2).all(|pair| pair[0] >= pair[1]), "{widths:?}");
}

#[test]
fn last_line_stays_exposed_through_expand() {
    let mut hud = Harness::new(fixtures::demo(), SidebarState::Collapsed);
    let t0 = Instant::now();
    hud.press(KeyAction::ScrollToBottom, t0);
    hud.draw(t0);
    assert!(hud.row(HEIGHT - 2).contains("step 119"));

    hud.state.toggle_sidebar(&hud.geometry, t0);
    for ms in (0..=300).step_by(50) {
        hud.draw(t0 + Duration::from_millis(ms));
        assert!(hud.row(HEIGHT - 2).contains("step 119"), "frame at {ms}ms");
        assert!(hud.row(HEIGHT - 1).starts_with(" lines 100-120 of 120"));
    }
}

#[test]
fn statusbar_spans_full_width_while_sidebar_stops_above_it() {
    let mut hud = Harness::new(fixtures::demo(), SidebarState::Expanded);
    let areas = hud.draw(Instant::now());

    assert_eq!(areas.statusbar.width, WIDTH);
    assert_eq!(areas.sidebar.bottom(), areas.statusbar.y);
    assert_eq!(hud.row(HEIGHT - 2).chars().nth(usize::from(areas.sidebar.x)), Some('│'));
    assert!(!hud.row(HEIGHT - 1).contains('│'));
}

#[test]
fn first_line_sits_just_below_header() {
    let mut hud = Harness::new(fixtures::demo(), SidebarState::Expanded);
    hud.draw(Instant::now());

    assert!(hud.row(0).starts_with("hudview"));
    assert!(hud.row(2).contains("step 0: ok"));
}

#[test]
fn page_down_moves_one_exposed_band() {
    let mut hud = Harness::new(fixtures::demo(), SidebarState::Expanded);
    let now = Instant::now();

    hud.press(KeyAction::PageDown, now);
    hud.draw(now);

    // 24 rows minus header and status bar.
    assert_eq!(hud.state.document_scroll, 21);
    assert!(hud.row(2).contains("step 21"));
}

#[test]
fn empty_log_renders_chrome_only() {
    let mut hud = Harness::new(Vec::new(), SidebarState::Expanded);
    hud.draw(Instant::now());

    assert!(hud.row(0).contains("0 lines"));
    assert!(hud.row(HEIGHT - 1).starts_with(" no lines"));
}

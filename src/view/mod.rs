//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod header;
mod hud;
mod layout;
pub mod log_pane;
pub mod sidebar;
pub mod statusbar;
mod styles;

pub use header::HeaderBar;
pub use hud::HudLayout;
pub use layout::render_layout;
pub use sidebar::SidebarPanel;
pub use statusbar::StatusBar;
pub use styles::{ColorConfig, HudStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{GeometryTable, KeyAction};
use crate::state::{
    clamp_scrolls, handle_scroll_action, reveal_line, scroll_document_by, scroll_sidebar_by,
    HudState, SidebarMetrics,
};
use crate::view::constants::{
    FALLBACK_VIEWPORT, FRAME_INTERVAL, IDLE_POLL_INTERVAL, WHEEL_SCROLL_LINES,
};
use crate::view_state::{DocumentMetrics, HudAreas};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: HudState,
    geometry: GeometryTable,
    key_bindings: KeyBindings,
    styles: HudStyles,
    title: String,
    /// Areas of the last drawn frame (for mouse hit testing)
    last_areas: Option<HudAreas>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        state: HudState,
        geometry: GeometryTable,
        args: CliArgs,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        info!(
            lines = state.lines().len(),
            manifests = state.manifests().len(),
            sidebar = state.sidebar().label(),
            "Starting HUD"
        );

        Ok(Self {
            terminal,
            state,
            geometry,
            key_bindings: KeyBindings::default(),
            styles: HudStyles::with_color_config(args.color),
            title: args.title,
            last_areas: None,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Polls at frame rate while a
    /// sidebar transition is pending and at the idle interval otherwise.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw(Instant::now())?;

        loop {
            let timeout = if self.state.needs_frame() {
                FRAME_INTERVAL
            } else {
                IDLE_POLL_INTERVAL
            };

            if event::poll(timeout)? {
                let now = Instant::now();
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, now) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => {
                        if !self.handle_mouse(mouse, now) && !self.state.needs_frame() {
                            continue;
                        }
                    }
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => continue,
                }
                self.draw(now)?;
            } else if self.state.needs_frame() {
                // Timer elapsed mid-transition: paint the next animation frame
                self.draw(Instant::now())?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn viewport(&self) -> Rect {
        match self.terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width, size.height),
            Err(_) => Rect::new(0, 0, FALLBACK_VIEWPORT.0, FALLBACK_VIEWPORT.1),
        }
    }

    fn areas_at(&self, now: Instant) -> HudAreas {
        HudAreas::compute(
            self.viewport(),
            &self.geometry,
            self.state.sidebar_footprint(now),
        )
    }

    fn document_metrics(&self, areas: &HudAreas) -> DocumentMetrics {
        DocumentMetrics::new(
            areas.padding,
            self.state.lines().len(),
            areas.viewport.height,
        )
    }

    fn sidebar_metrics(&self, areas: &HudAreas) -> SidebarMetrics {
        SidebarMetrics {
            content_rows: sidebar::sidebar_content_rows(self.state.manifests()),
            height: areas.sidebar.height,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::ToggleSidebar => {
                self.state.toggle_sidebar(&self.geometry, now);
            }
            _ => {
                let areas = self.areas_at(now);
                let document = self.document_metrics(&areas);
                let sidebar = self.sidebar_metrics(&areas);
                handle_scroll_action(&mut self.state, action, document, sidebar);
            }
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// The wheel scrolls whichever surface is under the pointer. Returns true
    /// if the event changed anything.
    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        let delta = match mouse.kind {
            MouseEventKind::ScrollDown => WHEEL_SCROLL_LINES,
            MouseEventKind::ScrollUp => -WHEEL_SCROLL_LINES,
            _ => return false,
        };

        let areas = self.last_areas.unwrap_or_else(|| self.areas_at(now));
        if areas.sidebar_contains(mouse.column, mouse.row) {
            let sidebar = self.sidebar_metrics(&areas);
            scroll_sidebar_by(&mut self.state, delta, sidebar);
        } else {
            let document = self.document_metrics(&areas);
            scroll_document_by(&mut self.state, delta, document);
        }
        true
    }

    /// Scroll the least amount that uncovers content row `row`
    fn reveal(&mut self, row: usize, now: Instant) {
        let areas = self.areas_at(now);
        let document = self.document_metrics(&areas);
        reveal_line(&mut self.state, row, document);
    }

    /// Handle terminal resize: re-clamp both scroll offsets to the new size
    fn handle_resize(&mut self, width: u16, height: u16) {
        let footprint = self.state.sidebar_footprint(Instant::now());
        let areas = HudAreas::compute(Rect::new(0, 0, width, height), &self.geometry, footprint);
        let document = self.document_metrics(&areas);
        let sidebar = self.sidebar_metrics(&areas);
        clamp_scrolls(&mut self.state, document, sidebar);

        debug!(width, height, "Terminal resized");
    }

    /// Draw one frame with the sidebar footprint sampled at `now`
    fn draw(&mut self, now: Instant) -> Result<(), TuiError> {
        let areas = self.areas_at(now);
        let document = self.document_metrics(&areas);
        let sidebar = self.sidebar_metrics(&areas);
        clamp_scrolls(&mut self.state, document, sidebar);

        let state = &self.state;
        let geometry = &self.geometry;
        let styles = &self.styles;
        let title = self.title.as_str();
        let mut drawn = None;

        self.terminal.draw(|frame| {
            drawn = Some(render_layout(frame, state, geometry, styles, title, now));
        })?;

        self.last_areas = drawn;
        self.state.tick(now);
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp with a pre-built terminal (test-only constructor)
    ///
    /// **WARNING**: This is for testing only. Do not use in production code.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        state: HudState,
        geometry: GeometryTable,
    ) -> Self {
        Self {
            terminal,
            state,
            geometry,
            key_bindings: KeyBindings::default(),
            styles: HudStyles::with_color_config(ColorConfig::new(false)),
            title: "hudview".to_string(),
            last_areas: None,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn state(&self) -> &HudState {
        &self.state
    }

    /// Reveal a content row at an explicit time (test-only accessor)
    pub(crate) fn reveal_at(&mut self, row: usize, now: Instant) {
        self.reveal(row, now)
    }

    /// Handle a keyboard event at an explicit time (test-only accessor)
    pub(crate) fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    /// Render a single frame at an explicit time (test-only accessor)
    pub(crate) fn draw_at(&mut self, now: Instant) -> Result<(), TuiError> {
        self.draw(now)
    }

    /// Areas of the last drawn frame (test-only accessor)
    pub(crate) fn last_areas(&self) -> Option<HudAreas> {
        self.last_areas
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of command-line arguments that affect rendering rather than
/// the loaded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Title shown at the left of the header
    pub title: String,

    /// Color output, from `--no-color` and `NO_COLOR`
    pub color: ColorConfig,

    /// 1-based log line to bring into view on startup
    pub start_line: Option<usize>,
}

impl CliArgs {
    /// Args with a title and color setting, starting at the top.
    pub fn new(title: impl Into<String>, color: ColorConfig) -> Self {
        Self {
            title: title.into(),
            color,
            start_line: None,
        }
    }

    /// Start with the given 1-based line revealed.
    #[must_use]
    pub fn with_start_line(mut self, line: Option<usize>) -> Self {
        self.start_line = line;
        self
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(
    state: HudState,
    geometry: GeometryTable,
    args: CliArgs,
) -> Result<(), TuiError> {
    let start_line = args.start_line;
    let mut app = TuiApp::new(state, geometry, args)?;
    if let Some(line) = start_line {
        app.reveal(line.saturating_sub(1), Instant::now());
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

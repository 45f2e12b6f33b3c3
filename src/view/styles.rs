//! Region and log-level styling.

use crate::model::LogLevel;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicitly enabled or disabled colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== HudStyles =====

/// Styles for the HUD regions and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStyles {
    /// Header band background and text.
    pub header: Style,
    /// Sidebar content.
    pub sidebar: Style,
    /// Sidebar left border.
    pub sidebar_border: Style,
    /// Status bar band.
    pub statusbar: Style,
    /// Manifest prefix column for INFO lines.
    pub prefix: Style,
    /// Prefix and rail marker for WARN lines.
    pub warn: Style,
    /// Prefix and rail marker for ERROR lines.
    pub error: Style,
    /// Highlighted line text.
    pub highlight: Style,
    /// Patched over the prefix of the first line after a manifest switch.
    pub context_change: Style,
}

impl HudStyles {
    /// Styles with colors enabled unless `NO_COLOR` is set.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Styles for a color configuration.
    ///
    /// Without colors every style is plain except highlighting, which uses
    /// reverse video, and the bold context-change prefix.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let highlight = Style::default().add_modifier(Modifier::REVERSED);
        let context_change = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                header: Style::default().fg(Color::White).bg(Color::Black),
                sidebar: Style::default().fg(Color::Gray),
                sidebar_border: Style::default().fg(Color::DarkGray),
                statusbar: Style::default().fg(Color::Black).bg(Color::Gray),
                prefix: Style::default().fg(Color::DarkGray),
                warn: Style::default().fg(Color::Yellow),
                error: Style::default().fg(Color::Red),
                highlight,
                context_change,
            }
        } else {
            Self {
                header: Style::default(),
                sidebar: Style::default(),
                sidebar_border: Style::default(),
                statusbar: Style::default(),
                prefix: Style::default(),
                warn: Style::default(),
                error: Style::default(),
                highlight,
                context_change,
            }
        }
    }

    /// Prefix style for a log level.
    pub fn style_for_level(&self, level: LogLevel) -> Style {
        match level {
            LogLevel::Info => self.prefix,
            LogLevel::Warn => self.warn,
            LogLevel::Error => self.error,
        }
    }
}

impl Default for HudStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

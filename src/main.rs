//! hudview - Entry Point

use clap::Parser;
use hudview::model::{fixtures, SidebarState};
use hudview::state::HudState;
use hudview::view::{CliArgs, ColorConfig};
use std::path::PathBuf;
use tracing::info;

/// hudview - log viewer with a fixed header, collapsible sidebar and status bar
#[derive(Parser, Debug)]
#[command(name = "hudview")]
#[command(version)]
#[command(about = "Terminal log viewer with a collapsible manifest sidebar")]
pub struct Args {
    /// Log file to display (.jsonl for structured lines, anything else as plain text)
    pub file: Option<PathBuf>,

    /// Start with the sidebar collapsed
    #[arg(long)]
    pub collapsed: bool,

    /// Bring this line into view on startup (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub line: Option<u32>,

    /// Built-in log to show when no file is given
    #[arg(long, default_value = "demo", value_parser = fixtures::STORY_NAMES)]
    pub story: String,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = hudview::config::load_config_with_precedence(args.config.clone())?;
    let merged = hudview::config::merge_config(config_file)?;

    // The log path only comes from the file, so logging can start before
    // env overrides and their warnings.
    hudview::logging::init(&merged.log_file_path)?;

    let config = {
        let with_env = hudview::config::apply_env_overrides(merged);

        // Only override if the flag was explicitly set
        let collapsed_override = if args.collapsed { Some(true) } else { None };

        hudview::config::apply_cli_overrides(with_env, collapsed_override)
    };

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let (lines, title) = match &args.file {
        Some(path) => (
            hudview::source::load_log_lines(path)?,
            path.display().to_string(),
        ),
        None => (
            fixtures::story(&args.story).unwrap_or_else(fixtures::demo),
            format!("hudview · {}", args.story),
        ),
    };

    let sidebar = SidebarState::from_closed(config.sidebar_collapsed);
    let state = HudState::new(lines, sidebar, &config.geometry);

    let cli_args = CliArgs::new(title, ColorConfig::from_env_and_args(args.no_color))
        .with_start_line(args.line.map(|line| line as usize));

    hudview::view::run_with_state(state, config.geometry, cli_args)?;

    Ok(())
}

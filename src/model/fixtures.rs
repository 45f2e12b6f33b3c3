//! Canned log content for demos and tests.
//!
//! The three small stories mirror the log-line component's gallery; the
//! demo story is long enough to scroll in any terminal.

use crate::model::log_line::{mark_context_changes, LogLevel, LogLine};

/// Names accepted by [`story`].
pub const STORY_NAMES: [&str; 4] = ["info-line", "warn-line", "three-lines", "demo"];

/// One INFO line from `fe`.
pub fn info_line() -> Vec<LogLine> {
    vec![LogLine::new("Hello world", "fe", LogLevel::Info).with_line_id(1)]
}

/// One WARN line from `fe`.
pub fn warn_line() -> Vec<LogLine> {
    vec![LogLine::new("Hello world", "fe", LogLevel::Warn).with_line_id(1)]
}

/// Three INFO lines from `fe`.
pub fn three_lines() -> Vec<LogLine> {
    (1..=3)
        .map(|n| LogLine::new(format!("line {n}"), "fe", LogLevel::Info).with_line_id(1))
        .collect()
}

/// A longer interleaved log from several manifests.
pub fn demo() -> Vec<LogLine> {
    const MANIFESTS: [&str; 4] = ["frontend", "backend", "postgres", "redis"];

    let mut lines: Vec<LogLine> = (0..120u64)
        .map(|i| {
            let manifest = MANIFESTS[(i as usize / 5) % MANIFESTS.len()];
            let level = match i % 17 {
                7 => LogLevel::Warn,
                13 => LogLevel::Error,
                _ => LogLevel::Info,
            };
            let text = match level {
                LogLevel::Info => format!("step {i}: ok"),
                LogLevel::Warn => format!("step {i}: slow response, retrying"),
                LogLevel::Error => format!("step {i}: connection refused"),
            };
            LogLine::new(text, manifest, level).with_line_id(i + 1)
        })
        .collect();

    mark_context_changes(&mut lines);
    lines
}

/// Look up a story by name.
pub fn story(name: &str) -> Option<Vec<LogLine>> {
    match name {
        "info-line" => Some(info_line()),
        "warn-line" => Some(warn_line()),
        "three-lines" => Some(three_lines()),
        "demo" => Some(demo()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_story_name_resolves() {
        for name in STORY_NAMES {
            assert!(story(name).is_some(), "story {name} should exist");
        }
        assert!(story("nope").is_none());
    }

    #[test]
    fn three_lines_story_contents() {
        let texts: Vec<String> = three_lines().into_iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["line 1", "line 2", "line 3"]);
    }

    #[test]
    fn warn_line_is_warn_level() {
        assert_eq!(warn_line()[0].level, LogLevel::Warn);
        assert_eq!(info_line()[0].level, LogLevel::Info);
    }

    #[test]
    fn demo_is_taller_than_a_terminal() {
        let lines = demo();
        assert!(lines.len() > 100);
        assert!(lines.iter().any(|l| l.is_context_change));
    }
}

//! Log input sources.
//!
//! Files are read once at startup:
//! - `.jsonl` files hold one `LogLine` JSON object per line
//! - anything else is plain text, one unattributed line per line
//!
//! Parsing happens at this boundary; the rest of the crate only sees
//! `LogLine` values.

use crate::model::error::{InputError, ParseError};
use crate::model::log_line::{mark_context_changes, LogLine};
use std::path::Path;
use tracing::{debug, warn};

/// How a log file's lines are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON `LogLine` per line.
    Jsonl,
    /// Raw text lines.
    Plain,
}

impl LogFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") => Self::Jsonl,
            _ => Self::Plain,
        }
    }
}

/// Parse one `.jsonl` line. `line_number` is 1-based, for error reporting.
///
/// # Errors
///
/// Returns [`ParseError::InvalidJson`] if the line is not a `LogLine` object.
pub fn parse_jsonl_line(line: &str, line_number: usize) -> Result<LogLine, ParseError> {
    serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
        line: line_number,
        message: e.to_string(),
    })
}

/// Parse file contents into log lines.
///
/// Blank lines are skipped. Malformed JSONL lines are logged and skipped.
/// Lines without a `lineId` get their 1-based position in the file, and
/// context changes are recomputed over the result.
pub fn parse_contents(contents: &str, format: LogFormat) -> Vec<LogLine> {
    let mut lines = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line_number = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let mut line = match format {
            LogFormat::Plain => LogLine::plain(raw),
            LogFormat::Jsonl => match parse_jsonl_line(raw, line_number) {
                Ok(line) => line,
                Err(e) => {
                    warn!("Skipping malformed line: {}", e);
                    continue;
                }
            },
        };

        if line.line_id == 0 {
            line.line_id = line_number as u64;
        }
        lines.push(line);
    }

    mark_context_changes(&mut lines);
    lines
}

/// Read a log file.
///
/// # Errors
///
/// Returns [`InputError::FileNotFound`] if the file does not exist and
/// [`InputError::Io`] for any other read failure.
pub fn load_log_lines(path: &Path) -> Result<Vec<LogLine>, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let format = LogFormat::from_path(path);
    let lines = parse_contents(&contents, format);

    debug!(
        path = %path.display(),
        ?format,
        lines = lines.len(),
        "Loaded log file"
    );

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogLevel;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn format_follows_extension() {
        assert_eq!(LogFormat::from_path(Path::new("a.jsonl")), LogFormat::Jsonl);
        assert_eq!(LogFormat::from_path(Path::new("a.JSONL")), LogFormat::Jsonl);
        assert_eq!(LogFormat::from_path(Path::new("a.log")), LogFormat::Plain);
        assert_eq!(LogFormat::from_path(Path::new("noext")), LogFormat::Plain);
    }

    #[test]
    fn parse_jsonl_line_reads_wire_shape() {
        let line = parse_jsonl_line(
            r#"{"text":"Hello world","manifestName":"fe","level":"WARN","lineId":7}"#,
            1,
        )
        .unwrap();

        assert_eq!(line.text, "Hello world");
        assert_eq!(line.manifest_name, "fe");
        assert_eq!(line.level, LogLevel::Warn);
        assert_eq!(line.line_id, 7);
        assert!(line.show_manifest_prefix);
    }

    #[test]
    fn parse_jsonl_line_reports_line_number() {
        let err = parse_jsonl_line("{not json", 42).unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { line: 42, .. }));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let contents = concat!(
            r#"{"text":"one","manifestName":"fe"}"#,
            "\n",
            "garbage\n",
            "\n",
            r#"{"text":"two","manifestName":"be"}"#,
            "\n",
        );
        let lines = parse_contents(contents, LogFormat::Jsonl);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line_id, 1);
        assert_eq!(lines[1].line_id, 4);
        assert!(lines[1].is_context_change);
    }

    #[test]
    fn plain_lines_have_no_manifest() {
        let lines = parse_contents("alpha\nbeta\n", LogFormat::Plain);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "alpha");
        assert!(!lines[0].has_prefix());
        assert!(!lines[1].is_context_change);
    }

    #[test]
    fn load_log_lines_missing_file() {
        let path = PathBuf::from("/nonexistent/hudview/missing.jsonl");
        assert!(matches!(
            load_log_lines(&path),
            Err(InputError::FileNotFound { path: p }) if p == path
        ));
    }

    #[test]
    fn load_log_lines_reads_jsonl_file() {
        let path = std::env::temp_dir().join("hudview_test_source.jsonl");
        fs::write(
            &path,
            "{\"text\":\"a\",\"manifestName\":\"fe\",\"level\":\"ERROR\"}\n",
        )
        .unwrap();

        let lines = load_log_lines(&path).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, LogLevel::Error);

        fs::remove_file(path).ok();
    }
}

//! Log lines shown in the scrollable body.

use serde::{Deserialize, Serialize};

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Regular output.
    #[default]
    Info,
    /// Warning output.
    Warn,
    /// Error output.
    Error,
}

/// One line of log output attributed to a manifest.
///
/// Field names follow the JSON wire shape (`manifestName`, `lineId`, ...)
/// so `.jsonl` files can be deserialized directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogLine {
    /// Line text, without trailing newline.
    pub text: String,
    /// Manifest (resource) that produced the line. Empty when unknown.
    #[serde(default)]
    pub manifest_name: String,
    /// Severity.
    #[serde(default)]
    pub level: LogLevel,
    /// Position in the source stream.
    #[serde(default)]
    pub line_id: u64,
    /// Whether the line is currently highlighted.
    #[serde(default)]
    pub should_highlight: bool,
    /// Whether to draw the manifest prefix column.
    #[serde(default = "default_show_manifest_prefix")]
    pub show_manifest_prefix: bool,
    /// Whether this line starts output from a different manifest than the previous one.
    #[serde(default)]
    pub is_context_change: bool,
}

fn default_show_manifest_prefix() -> bool {
    true
}

impl LogLine {
    /// Line attributed to a manifest, prefix shown.
    pub fn new(text: impl Into<String>, manifest_name: impl Into<String>, level: LogLevel) -> Self {
        Self {
            text: text.into(),
            manifest_name: manifest_name.into(),
            level,
            line_id: 0,
            should_highlight: false,
            show_manifest_prefix: true,
            is_context_change: false,
        }
    }

    /// Unattributed plain-text line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            show_manifest_prefix: false,
            ..Self::new(text, "", LogLevel::Info)
        }
    }

    /// Set the line id.
    #[must_use]
    pub fn with_line_id(mut self, line_id: u64) -> Self {
        self.line_id = line_id;
        self
    }

    /// Whether a prefix column is drawn for this line.
    pub fn has_prefix(&self) -> bool {
        self.show_manifest_prefix && !self.manifest_name.is_empty()
    }
}

/// Mark context changes: a line is one when its manifest differs from the
/// previous line's.
pub fn mark_context_changes(lines: &mut [LogLine]) {
    let mut previous: Option<String> = None;
    for line in lines.iter_mut() {
        line.is_context_change = previous
            .as_deref()
            .is_some_and(|name| name != line.manifest_name);
        previous = Some(line.manifest_name.clone());
    }
}

/// Per-manifest line counts, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
    /// Manifest name.
    pub name: String,
    /// Lines from this manifest.
    pub lines: usize,
    /// WARN lines from this manifest.
    pub warnings: usize,
    /// ERROR lines from this manifest.
    pub errors: usize,
}

/// Group lines by manifest. Unattributed lines are left out.
pub fn summarize_manifests(lines: &[LogLine]) -> Vec<ManifestSummary> {
    let mut summaries: Vec<ManifestSummary> = Vec::new();
    for line in lines.iter().filter(|l| !l.manifest_name.is_empty()) {
        let index = match summaries.iter().position(|s| s.name == line.manifest_name) {
            Some(index) => index,
            None => {
                summaries.push(ManifestSummary {
                    name: line.manifest_name.clone(),
                    lines: 0,
                    warnings: 0,
                    errors: 0,
                });
                summaries.len() - 1
            }
        };

        let summary = &mut summaries[index];
        summary.lines += 1;
        match line.level {
            LogLevel::Info => {}
            LogLevel::Warn => summary.warnings += 1,
            LogLevel::Error => summary.errors += 1,
        }
    }
    summaries
}

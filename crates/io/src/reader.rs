//! Date-file reading and batch parsing with per-line diagnostics.

use std::fmt;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tahara_rules::EventRecord;
use tracing::{debug, info, warn};

use crate::error::{IoError, ParseError};
use crate::parse::parse_line;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for parsing a batch of input lines.
///
/// The [`Default`] implementation resolves `today` from the local clock and
/// reports skipped lines at `warn` level.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Date substituted for the `today` keyword.
    today: NaiveDate,
    /// Whether skipped lines are logged at `warn` (otherwise `debug`).
    show_parsing_errors: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            today: Local::now().date_naive(),
            show_parsing_errors: true,
        }
    }
}

impl ReaderConfig {
    /// Set the date used for the `today` keyword.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Enable or disable `warn`-level reporting of skipped lines.
    pub fn with_show_parsing_errors(mut self, show: bool) -> Self {
        self.show_parsing_errors = show;
        self
    }

    /// Returns the date used for the `today` keyword.
    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

// ---------------------------------------------------------------------------
// Batch types
// ---------------------------------------------------------------------------

/// A skipped input line and the reason it was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDiagnostic {
    /// 1-based line number.
    pub line_no: usize,
    /// The raw line text.
    pub line: String,
    /// Why the line was rejected.
    pub error: ParseError,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line_no, self.error, self.line.trim())
    }
}

/// Events parsed from a batch of lines, plus the lines that were skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    events: Vec<EventRecord>,
    diagnostics: Vec<LineDiagnostic>,
}

impl ParsedBatch {
    /// Returns the parsed events in input order.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Returns the diagnostics for skipped lines.
    pub fn diagnostics(&self) -> &[LineDiagnostic] {
        &self.diagnostics
    }

    /// Consumes the batch and returns the events.
    pub fn into_events(self) -> Vec<EventRecord> {
        self.events
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Read every line of a date file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist, or
/// [`IoError::Io`] if it cannot be read as UTF-8 text.
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| IoError::io(path, &e))?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Parse a batch of lines, skipping malformed ones.
///
/// Blank and comment lines are dropped silently; every other rejected line
/// yields a [`LineDiagnostic`] and the batch continues.
pub fn parse_events<'a, I>(lines: I, config: &ReaderConfig) -> ParsedBatch
where
    I: IntoIterator<Item = &'a str>,
{
    let mut batch = ParsedBatch::default();

    for (idx, line) in lines.into_iter().enumerate() {
        match parse_line(line, config.today) {
            Ok(Some(event)) => batch.events.push(event),
            Ok(None) => {}
            Err(error) => {
                let diagnostic = LineDiagnostic {
                    line_no: idx + 1,
                    line: line.to_string(),
                    error,
                };
                if config.show_parsing_errors {
                    warn!(%diagnostic, "skipping line");
                } else {
                    debug!(%diagnostic, "skipping line");
                }
                batch.diagnostics.push(diagnostic);
            }
        }
    }

    batch
}

/// Read a date file and parse its events.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing or unreadable. Malformed
/// lines are not errors; they are reported in
/// [`ParsedBatch::diagnostics`].
pub fn read_events(path: &Path, config: &ReaderConfig) -> Result<ParsedBatch, IoError> {
    let lines = read_lines(path)?;
    let batch = parse_events(lines.iter().map(String::as_str), config);
    info!(
        path = %path.display(),
        n_events = batch.events.len(),
        n_skipped = batch.diagnostics.len(),
        "read date file"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tahara_calendar::HebrewDate;

    fn config() -> ReaderConfig {
        ReaderConfig::default().with_today(NaiveDate::from_ymd_opt(2024, 10, 3).unwrap())
    }

    #[test]
    fn default_config_values() {
        let config = ReaderConfig::default();
        assert!(config.show_parsing_errors);
    }

    #[test]
    fn builder_methods() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let config = ReaderConfig::default()
            .with_today(today)
            .with_show_parsing_errors(false);
        assert_eq!(config.today(), today);
        assert!(!config.show_parsing_errors);
    }

    #[test]
    fn batch_skips_bad_lines() {
        let lines = ["1/7/5785 1", "", "# note", "bogus 1", "29/7/5785 2", "today 0"];
        let batch = parse_events(lines, &config());

        assert_eq!(batch.events().len(), 2);
        assert_eq!(
            batch.events()[0].date(),
            HebrewDate::new(5785, 7, 1).unwrap()
        );
        assert_eq!(batch.diagnostics().len(), 2);
        assert_eq!(batch.diagnostics()[0].line_no, 4);
        assert_eq!(batch.diagnostics()[1].line_no, 5);
        assert!(matches!(
            batch.diagnostics()[1].error,
            ParseError::InvalidQualifier { .. }
        ));
    }

    #[test]
    fn diagnostic_display() {
        let diagnostic = LineDiagnostic {
            line_no: 3,
            line: " 1/7 1 ".to_string(),
            error: ParseError::UnrecognisedDate {
                value: "1/7".to_string(),
            },
        };
        assert_eq!(
            diagnostic.to_string(),
            "line 3: unrecognised date '1/7' (1/7 1)"
        );
    }
}

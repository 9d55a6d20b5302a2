//! Date-file appends and result export.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tahara_calendar::HebrewDate;
use tahara_rules::Qualifier;
use tracing::info;

use crate::error::IoError;
use crate::parse::format_entry;

/// What [`append_entry`] did to the date file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The file did not exist and was created with the entry.
    Created,
    /// The entry was appended to an existing file.
    Appended,
}

/// Append the canonical entry for `date` / `qualifier` to a date file.
///
/// The file is created if missing. Existing content is kept; a missing
/// trailing newline is added before the new entry.
///
/// # Errors
///
/// Returns [`IoError::DuplicateEntry`] if the same canonical line is already
/// present, or [`IoError::Io`] on read/write failure.
pub fn append_entry(
    path: &Path,
    date: HebrewDate,
    qualifier: Qualifier,
) -> Result<AppendOutcome, IoError> {
    let entry = format_entry(date, qualifier);

    if !path.exists() {
        std::fs::write(path, format!("{entry}\n")).map_err(|e| IoError::io(path, &e))?;
        info!(path = %path.display(), %entry, "created date file");
        return Ok(AppendOutcome::Created);
    }

    let existing = std::fs::read_to_string(path).map_err(|e| IoError::io(path, &e))?;
    if existing.lines().any(|line| line.trim() == entry) {
        return Err(IoError::DuplicateEntry {
            entry,
            path: path.to_path_buf(),
        });
    }

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| IoError::io(path, &e))?;
    let prefix = if existing.is_empty() || existing.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    writeln!(file, "{prefix}{entry}").map_err(|e| IoError::io(path, &e))?;

    info!(path = %path.display(), %entry, "appended entry");
    Ok(AppendOutcome::Appended)
}

/// Write rendered results to `path`, replacing any existing content.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be written.
pub fn export_results(path: &Path, content: &str) -> Result<(), IoError> {
    std::fs::write(path, content).map_err(|e| IoError::io(path, &e))?;
    info!(path = %path.display(), bytes = content.len(), "exported results");
    Ok(())
}

//! Error types for tahara-io.

use std::path::PathBuf;

use tahara_calendar::CalendarError;

/// Error type for file and rendering operations in the tahara-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O failure while reading or writing a file.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when an entry is already present in a date file.
    #[error("entry '{entry}' already exists in {}", path.display())]
    DuplicateEntry {
        /// The canonical entry line.
        entry: String,
        /// Path to the date file.
        path: PathBuf,
    },

    /// Wraps a JSON serialization failure.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying failure.
        reason: String,
    },
}

impl IoError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        IoError::Io {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

/// Why a single input line could not be turned into an event.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The line has fewer than the two required fields.
    #[error("missing {field} field")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// The qualifier token is not exactly `0` or `1`.
    #[error("invalid qualifier '{value}' (expected 0 or 1)")]
    InvalidQualifier {
        /// The offending token.
        value: String,
    },

    /// A date component is not a number.
    #[error("invalid number '{value}'")]
    InvalidNumber {
        /// The offending component.
        value: String,
    },

    /// The date token matches none of the accepted forms.
    #[error("unrecognised date '{value}'")]
    UnrecognisedDate {
        /// The offending token.
        value: String,
    },

    /// A Hebrew date with out-of-range components.
    #[error("invalid hebrew date: {0}")]
    Calendar(#[from] CalendarError),

    /// A Gregorian date that does not exist.
    #[error("invalid gregorian date '{value}'")]
    InvalidGregorian {
        /// The offending token.
        value: String,
    },
}

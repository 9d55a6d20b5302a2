//! Error types for the tahara-rules crate.

use tahara_calendar::{CalendarError, HebrewDate};

/// Errors that halt a rule-engine run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    /// An event is dated before the event preceding it.
    #[error("event {index} on {current} precedes the previous event on {previous}")]
    OutOfOrder {
        /// Position of the offending event in the input sequence.
        index: usize,
        /// Date of the preceding event.
        previous: HebrewDate,
        /// Date of the offending event.
        current: HebrewDate,
    },

    /// The span between two events does not fit an interval count.
    #[error("interval of {days} days ending at event {index} is too long")]
    IntervalOverflow {
        /// Position of the event that closes the interval.
        index: usize,
        /// Inclusive day count that failed to convert.
        days: i64,
    },

    /// A restricted day falls outside the supported calendar range.
    #[error("restricted day out of range: {0}")]
    Calendar(#[from] CalendarError),
}

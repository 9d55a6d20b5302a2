//! Error types for the tahara-calendar crate.

/// Error type for all fallible operations in the tahara-calendar crate.
///
/// The first three variants describe a year/month/day combination that does
/// not exist in the Hebrew calendar. They are never corrected silently: the
/// caller decides whether an invalid date is fatal or skippable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a year is outside `1..=MAX_YEAR`.
    #[error("invalid year: {year} (must be 1..={max})", max = crate::year::MAX_YEAR)]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number does not exist in the given year.
    #[error("invalid month: {month} for year {year} (must be 1..={max_month})")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
        /// The year the month was looked up in.
        year: i32,
        /// Number of months in that year (12, or 13 in a leap year).
        max_month: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year of that month.
        year: i32,
        /// The length of the month (29 or 30).
        max_day: u8,
    },

    /// Returned when a date cannot be represented as a Gregorian `NaiveDate`.
    #[error("day {rata_die} is outside the supported gregorian range")]
    GregorianOutOfRange {
        /// Linear day number that failed to convert.
        rata_die: i64,
    },
}

//! Hebrew date with linear day arithmetic.

use std::fmt;

use icu_calendar::Date;
use icu_calendar::hebrew::Hebrew;

use crate::error::CalendarError;
use crate::gregorian::rata_die_of;
use crate::month::{hebrew_month_name_unchecked, month_name_unchecked};
use crate::numeral::hebrew_numeral;
use crate::year::{is_leap_year, month_from_ordinal, month_start, months_in_year};

/// A date in the Hebrew calendar.
///
/// Months are numbered from Nisan (1) to Adar (12), with Adar II (13) in
/// leap years; the year itself begins on 1 Tishrei (month 7). The calendar
/// rules come from `icu_calendar`; the linear day number and the month
/// length are cached so ordering and differences are cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
    month_length: u8,
    rata_die: i64,
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rata_die.cmp(&other.rata_die)
    }
}

impl HebrewDate {
    /// Creates a new `HebrewDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside `1..=MAX_YEAR`, the
    /// month does not exist in that year, or the day exceeds the month's
    /// length.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let start = month_start(year, month)?;
        let max_day = start.days_in_month();
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            month_length: max_day,
            rata_die: rata_die_of(&start)? + i64::from(day) - 1,
        })
    }

    /// Wraps an icu date whose linear day number is already known.
    pub(crate) fn from_icu(date: &Date<Hebrew>, rata_die: i64) -> Self {
        let leap = date.months_in_year() == 13;
        // Ordinals never exceed 13 and days never exceed 30.
        let ordinal = date.month().ordinal as u8;
        Self {
            year: date.year().number,
            month: month_from_ordinal(ordinal, leap),
            day: date.day_of_month().0 as u8,
            month_length: date.days_in_month(),
            rata_die,
        }
    }

    /// Creates a `HebrewDate` from a linear day number (Rata Die, where day 1
    /// is Monday 1 January of year 1 in the proleptic Gregorian calendar).
    ///
    /// Days before 1 Tishrei of year 1 yield years below 1.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::GregorianOutOfRange`] if the day lies outside
    /// the range chrono can represent.
    pub fn from_rata_die(rata_die: i64) -> Result<Self, CalendarError> {
        let gregorian = i32::try_from(rata_die)
            .ok()
            .and_then(chrono::NaiveDate::from_num_days_from_ce_opt)
            .ok_or(CalendarError::GregorianOutOfRange { rata_die })?;
        Self::from_gregorian(gregorian)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1 = Nisan ..= 12 or 13).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the linear day number of this date.
    pub fn rata_die(self) -> i64 {
        self.rata_die
    }

    /// Returns the number of days in this date's month (29 or 30).
    pub fn month_length(self) -> u8 {
        self.month_length
    }

    /// Returns `true` if this date falls in a thirteen-month year.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the number of months in this date's year.
    pub fn months_in_year(self) -> u8 {
        months_in_year(self.year)
    }

    /// Returns the weekday, 1 = Sunday ..= 7 = Saturday.
    pub fn weekday(self) -> u8 {
        (self.rata_die.rem_euclid(7) + 1) as u8
    }

    /// Returns the date `n` days later (earlier for negative `n`).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::GregorianOutOfRange`] if the result lies
    /// outside the range chrono can represent.
    pub fn add_days(self, n: i64) -> Result<Self, CalendarError> {
        Self::from_rata_die(self.rata_die.saturating_add(n))
    }

    /// Returns the signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        other.rata_die - self.rata_die
    }

    /// Returns the English month name ("Adar I" in a leap year's month 12).
    pub fn month_name(self) -> &'static str {
        month_name_unchecked(self.year, self.month)
    }

    /// Returns the Hebrew month name.
    pub fn hebrew_month_name(self) -> &'static str {
        hebrew_month_name_unchecked(self.year, self.month)
    }

    /// Formats the date in Hebrew letters, e.g. `ח׳ אדר תשפ״ה`.
    pub fn hebrew_date_string(self) -> String {
        format!(
            "{} {} {}",
            hebrew_numeral(u32::from(self.day)),
            self.hebrew_month_name(),
            hebrew_numeral(self.year.unsigned_abs())
        )
    }

    /// Formats the date with the English month name, e.g. `8 Adar 5785`.
    pub fn english_date_string(self) -> String {
        format!("{} {} {}", self.day, self.month_name(), self.year)
    }
}

/// Returns the signed number of days from `a` to `b`.
pub fn days_between(a: HebrewDate, b: HebrewDate) -> i64 {
    a.days_until(b)
}

/// Formats as `day/month/year`, the lunar form of the input grammar.
impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = HebrewDate::new(5785, 12, 8).unwrap();
        assert_eq!(date.year(), 5785);
        assert_eq!(date.month(), 12);
        assert_eq!(date.day(), 8);
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            HebrewDate::new(5785, 2, 30).unwrap_err(),
            CalendarError::InvalidDay {
                day: 30,
                month: 2,
                year: 5785,
                max_day: 29,
            }
        );
    }

    #[test]
    fn new_day_zero() {
        assert!(matches!(
            HebrewDate::new(5785, 1, 0),
            Err(CalendarError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn new_invalid_month() {
        assert!(matches!(
            HebrewDate::new(5785, 13, 1),
            Err(CalendarError::InvalidMonth { month: 13, .. })
        ));
    }

    #[test]
    fn rata_die_round_trip() {
        let date = HebrewDate::new(5784, 13, 29).unwrap();
        let back = HebrewDate::from_rata_die(date.rata_die()).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn add_within_month() {
        let date = HebrewDate::new(5785, 7, 1).unwrap();
        assert_eq!(date.add_days(9).unwrap(), HebrewDate::new(5785, 7, 10).unwrap());
    }

    #[test]
    fn add_crosses_month() {
        // Tishrei always has 30 days.
        let date = HebrewDate::new(5785, 7, 30).unwrap();
        assert_eq!(date.add_days(1).unwrap(), HebrewDate::new(5785, 8, 1).unwrap());
    }

    #[test]
    fn add_crosses_year_at_elul() {
        let date = HebrewDate::new(5784, 6, 29).unwrap();
        assert_eq!(date.add_days(1).unwrap(), HebrewDate::new(5785, 7, 1).unwrap());
    }

    #[test]
    fn add_from_adar_i_to_adar_ii() {
        let date = HebrewDate::new(5784, 12, 30).unwrap();
        assert_eq!(date.add_days(1).unwrap(), HebrewDate::new(5784, 13, 1).unwrap());
    }

    #[test]
    fn add_from_adar_to_nisan_in_common_year() {
        let date = HebrewDate::new(5785, 12, 29).unwrap();
        assert_eq!(date.add_days(1).unwrap(), HebrewDate::new(5785, 1, 1).unwrap());
    }

    #[test]
    fn subtract_days() {
        let date = HebrewDate::new(5785, 7, 1).unwrap();
        assert_eq!(date.add_days(-1).unwrap(), HebrewDate::new(5784, 6, 29).unwrap());
    }

    #[test]
    fn difference_between_dates() {
        let a = HebrewDate::new(5785, 7, 1).unwrap();
        let b = HebrewDate::new(5786, 7, 1).unwrap();
        assert_eq!(a.days_until(b), 355);
        assert_eq!(days_between(a, b), 355);
        assert_eq!(days_between(b, a), -355);
    }

    #[test]
    fn ordering_follows_days_not_month_numbers() {
        // Tishrei (7) precedes Nisan (1) within the same year.
        let tishrei = HebrewDate::new(5785, 7, 1).unwrap();
        let nisan = HebrewDate::new(5785, 1, 1).unwrap();
        assert!(tishrei < nisan);
    }

    #[test]
    fn weekday_of_rosh_hashanah_5785() {
        // Thursday.
        let date = HebrewDate::new(5785, 7, 1).unwrap();
        assert_eq!(date.weekday(), 5);
    }

    #[test]
    fn month_length_of_date() {
        assert_eq!(HebrewDate::new(5785, 7, 5).unwrap().month_length(), 30);
        assert_eq!(HebrewDate::new(5785, 10, 5).unwrap().month_length(), 29);
    }

    #[test]
    fn display_is_input_form() {
        let date = HebrewDate::new(5785, 12, 8).unwrap();
        assert_eq!(date.to_string(), "8/12/5785");
    }

    #[test]
    fn hebrew_date_string() {
        let date = HebrewDate::new(5785, 12, 8).unwrap();
        assert_eq!(date.hebrew_date_string(), "ח׳ אדר תשפ״ה");
    }

    #[test]
    fn english_date_string() {
        let date = HebrewDate::new(5784, 13, 14).unwrap();
        assert_eq!(date.english_date_string(), "14 Adar II 5784");
    }

    #[test]
    fn new_rejects_year_past_max() {
        assert_eq!(
            HebrewDate::new(i32::MAX, 7, 1).unwrap_err(),
            CalendarError::InvalidYear { year: i32::MAX }
        );
        let last = HebrewDate::new(crate::MAX_YEAR, 6, 29).unwrap();
        assert_eq!(last.add_days(1).unwrap().year(), crate::MAX_YEAR + 1);
    }

    #[test]
    fn add_days_beyond_chrono_range_fails() {
        let date = HebrewDate::new(5785, 7, 1).unwrap();
        assert!(matches!(
            date.add_days(i64::MAX),
            Err(CalendarError::GregorianOutOfRange { .. })
        ));
        assert!(matches!(
            date.add_days(-1_000_000_000),
            Err(CalendarError::GregorianOutOfRange { .. })
        ));
    }

    #[test]
    fn from_rata_die_caches_month_length() {
        let date = HebrewDate::new(5784, 8, 10).unwrap();
        let rebuilt = HebrewDate::from_rata_die(date.rata_die()).unwrap();
        assert_eq!(rebuilt.month_length(), 29);
        assert_eq!(rebuilt, date);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<HebrewDate>();
    }
}

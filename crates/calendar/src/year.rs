//! Year-level queries: leap years, year lengths and month lengths.
//!
//! Months here count from Nisan (1 = Nisan ..= 12 = Adar or Adar I,
//! 13 = Adar II). `icu_calendar` numbers ordinal months from Tishrei and
//! puts Adar I and Adar II at 6 and 7 in a leap year; [`ordinal_month`] and
//! [`month_from_ordinal`] translate between the two.

use icu_calendar::Date;
use icu_calendar::hebrew::Hebrew;

use crate::error::CalendarError;

/// Last year accepted by [`HebrewDate::new`](crate::HebrewDate::new).
///
/// Every day up to the end of this year has a chrono `NaiveDate`, and any
/// two such days are fewer than `u32::MAX` days apart.
pub const MAX_YEAR: i32 = 9999;

/// Returns `true` if `year` has thirteen months (Adar I and Adar II).
///
/// Years 3, 6, 8, 11, 14, 17 and 19 of each 19-year cycle are leap years.
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Returns the number of months in `year` (12, or 13 in a leap year).
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Returns the number of days in `year`: 353..=355 for a common year,
/// 383..=385 for a leap year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is outside
/// `1..=MAX_YEAR`.
pub fn days_in_year(year: i32) -> Result<u16, CalendarError> {
    Ok(month_start(year, 7)?.days_in_year())
}

/// Returns the number of days in `month` of `year` (29 or 30).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is outside
/// `1..=MAX_YEAR` and [`CalendarError::InvalidMonth`] if the month does not
/// exist in that year.
pub fn month_length(year: i32, month: u8) -> Result<u8, CalendarError> {
    Ok(month_start(year, month)?.days_in_month())
}

/// The first day of `month` in `year`.
pub(crate) fn month_start(year: i32, month: u8) -> Result<Date<Hebrew>, CalendarError> {
    validate_month(year, month)?;
    let max_month = months_in_year(year);
    Date::try_new_hebrew_date(year, ordinal_month(month, max_month == 13), 1).map_err(|_| {
        CalendarError::InvalidMonth {
            month,
            year,
            max_month,
        }
    })
}

/// Maps a Nisan-based month to icu's Tishrei-based ordinal.
pub(crate) fn ordinal_month(month: u8, leap: bool) -> u8 {
    match month {
        7..=12 => month - 6,
        13 => 7,
        _ if leap => month + 7,
        _ => month + 6,
    }
}

/// Maps icu's Tishrei-based ordinal back to a Nisan-based month.
pub(crate) fn month_from_ordinal(ordinal: u8, leap: bool) -> u8 {
    match ordinal {
        1..=6 => ordinal + 6,
        7 if leap => 13,
        _ if leap => ordinal - 7,
        _ => ordinal - 6,
    }
}

pub(crate) fn validate_year(year: i32) -> Result<(), CalendarError> {
    if !(1..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::InvalidYear { year });
    }
    Ok(())
}

pub(crate) fn validate_month(year: i32, month: u8) -> Result<(), CalendarError> {
    validate_year(year)?;
    let max_month = months_in_year(year);
    if !(1..=max_month).contains(&month) {
        return Err(CalendarError::InvalidMonth {
            month,
            year,
            max_month,
        });
    }
    Ok(())
}

/// Months of `year` in calendar order, starting from Tishrei.
#[cfg(test)]
fn months_from_tishrei(year: i32) -> impl Iterator<Item = u8> {
    (7..=months_in_year(year)).chain(1..=6)
}

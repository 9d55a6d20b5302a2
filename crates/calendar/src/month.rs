//! Month names in English transliteration and in Hebrew.

use crate::error::CalendarError;
use crate::year::{is_leap_year, validate_month};

/// English names indexed by month number (index 0 unused, 1 = Nisan).
const ENGLISH_NAMES: [&str; 14] = [
    "", "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Cheshvan", "Kislev",
    "Teves", "Shevat", "Adar", "Adar II",
];

/// Hebrew names indexed by month number (index 0 unused, 1 = Nisan).
const HEBREW_NAMES: [&str; 14] = [
    "", "ניסן", "אייר", "סיון", "תמוז", "אב", "אלול", "תשרי", "חשון", "כסלו", "טבת", "שבט",
    "אדר", "אדר ב׳",
];

/// Returns the English name of `month` in `year`.
///
/// Month 12 is "Adar" in a common year and "Adar I" in a leap year.
///
/// # Errors
///
/// Returns [`CalendarError`] if the month does not exist in that year.
pub fn month_name(year: i32, month: u8) -> Result<&'static str, CalendarError> {
    validate_month(year, month)?;
    Ok(month_name_unchecked(year, month))
}

/// Returns the Hebrew name of `month` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the month does not exist in that year.
pub fn hebrew_month_name(year: i32, month: u8) -> Result<&'static str, CalendarError> {
    validate_month(year, month)?;
    Ok(hebrew_month_name_unchecked(year, month))
}

pub(crate) fn month_name_unchecked(year: i32, month: u8) -> &'static str {
    if month == 12 && is_leap_year(year) {
        return "Adar I";
    }
    ENGLISH_NAMES[month as usize]
}

pub(crate) fn hebrew_month_name_unchecked(year: i32, month: u8) -> &'static str {
    if month == 12 && is_leap_year(year) {
        return "אדר א׳";
    }
    HEBREW_NAMES[month as usize]
}

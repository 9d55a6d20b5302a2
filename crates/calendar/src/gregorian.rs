//! Conversion between Hebrew dates and chrono's Gregorian `NaiveDate`.
//!
//! `icu_calendar` does the calendar conversion through its ISO date; chrono
//! supplies the linear day count.

use chrono::{Datelike, NaiveDate};
use icu_calendar::hebrew::Hebrew;
use icu_calendar::{Date, Iso};

use crate::date::HebrewDate;
use crate::error::CalendarError;

impl HebrewDate {
    /// Converts a Gregorian date.
    ///
    /// chrono's day count from the common era is the same Rata Die numbering
    /// used for [`HebrewDate::rata_die`], so the conversion is exact.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::GregorianOutOfRange`] if the date cannot be
    /// expressed as an ISO date.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let rata_die = i64::from(date.num_days_from_ce());
        let iso = Date::try_new_iso_date(date.year(), date.month() as u8, date.day() as u8)
            .map_err(|_| CalendarError::GregorianOutOfRange { rata_die })?;
        let hebrew = iso.to_calendar(Hebrew::new());
        Ok(Self::from_icu(&hebrew, rata_die))
    }

    /// Converts to a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::GregorianOutOfRange`] if the day falls outside
    /// the range chrono can represent.
    pub fn to_gregorian(self) -> Result<NaiveDate, CalendarError> {
        let rata_die = self.rata_die();
        i32::try_from(rata_die)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(CalendarError::GregorianOutOfRange { rata_die })
    }
}

/// Linear day number of an icu Hebrew date.
pub(crate) fn rata_die_of(date: &Date<Hebrew>) -> Result<i64, CalendarError> {
    naive_from_iso(&date.to_iso())
        .map(|d| i64::from(d.num_days_from_ce()))
        .ok_or(CalendarError::InvalidYear {
            year: date.year().number,
        })
}

fn naive_from_iso(iso: &Date<Iso>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        iso.year().number,
        iso.month().ordinal,
        iso.day_of_month().0,
    )
}

//! # tahara-calendar
//!
//! Hebrew (lunisolar) calendar dates on top of `icu_calendar`, with the
//! Nisan-based month numbering and linear day arithmetic the rule engine
//! works in.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"HebrewDate::new()"| B["HebrewDate"]
//!     B -->|".rata_die()"| C["linear day number"]
//!     C -->|"HebrewDate::from_rata_die()"| B
//!     B -->|".add_days(n)"| B
//!     D["NaiveDate"] -->|"from_gregorian()"| B
//!     B -->|".hebrew_date_string()"| E["ח׳ אדר תשפ״ה"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tahara_calendar::{HebrewDate, days_between, month_length};
//!
//! // 8 Adar 5785
//! let date = HebrewDate::new(5785, 12, 8).unwrap();
//! assert_eq!(date.weekday(), 7); // Saturday
//!
//! // Month lengths vary with the year
//! assert_eq!(month_length(5785, 8).unwrap(), 30);
//! assert_eq!(month_length(5784, 8).unwrap(), 29);
//!
//! // Day arithmetic rolls over months and years
//! let later = date.add_days(29).unwrap();
//! assert_eq!(days_between(date, later), 29);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | Leap years, year and month lengths, icu month ordinals |
//! | `date` | `HebrewDate` and day arithmetic |
//! | `gregorian` | Conversion to and from chrono's `NaiveDate` |
//! | `month` | English and Hebrew month names |
//! | `numeral` | Hebrew numerals |
//! | `error` | Error types |

mod date;
mod error;
mod gregorian;
mod month;
mod numeral;
mod year;

pub use date::{HebrewDate, days_between};
pub use error::CalendarError;
pub use month::{hebrew_month_name, month_name};
pub use numeral::hebrew_numeral;
pub use year::{MAX_YEAR, days_in_year, is_leap_year, month_length, months_in_year};

//! Input line grammar: `date qualifier [ignored...]`.
//!
//! Accepted date forms:
//!
//! | Form          | Calendar  | Example      |
//! |---------------|-----------|--------------|
//! | `today`       | (current) | `today`      |
//! | `d/m/y`, y > 5000 | Hebrew | `8/12/5785` |
//! | `DD/MM/YYYY`  | Gregorian | `15/03/2024` |
//! | `DD-MM-YYYY`  | Gregorian | `15-03-2024` |
//! | `YYYY-MM-DD`  | Gregorian | `2024-03-15` |

use chrono::NaiveDate;
use tahara_calendar::HebrewDate;
use tahara_rules::{EventRecord, Qualifier};

use crate::error::ParseError;

/// Years above this in a slash-separated date are read as Hebrew years.
const HEBREW_YEAR_THRESHOLD: i32 = 5000;

/// Parses one input line into an event.
///
/// Returns `Ok(None)` for blank lines and `#` comments. Tokens after the
/// qualifier are ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first problem found on the line.
pub fn parse_line(line: &str, today: NaiveDate) -> Result<Option<EventRecord>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut fields = trimmed.split_whitespace();
    let date_token = fields
        .next()
        .ok_or(ParseError::MissingField { field: "date" })?;
    let qualifier_token = fields
        .next()
        .ok_or(ParseError::MissingField { field: "qualifier" })?;

    let qualifier = parse_qualifier(qualifier_token)?;
    let date = parse_date(date_token, today)?;
    Ok(Some(EventRecord::new(date, qualifier)))
}

/// Parses a qualifier token: exactly `0` (night) or `1` (day).
///
/// # Errors
///
/// Returns [`ParseError::InvalidQualifier`] for any other token.
pub fn parse_qualifier(token: &str) -> Result<Qualifier, ParseError> {
    match token {
        "0" => Ok(Qualifier::Night),
        "1" => Ok(Qualifier::Day),
        _ => Err(ParseError::InvalidQualifier {
            value: token.to_string(),
        }),
    }
}

/// Parses a date token in any accepted form into a Hebrew date.
///
/// # Errors
///
/// Returns [`ParseError::Calendar`] for out-of-range Hebrew dates,
/// [`ParseError::InvalidGregorian`] for impossible Gregorian dates, and
/// [`ParseError::InvalidNumber`] / [`ParseError::UnrecognisedDate`] for
/// malformed tokens.
pub fn parse_date(token: &str, today: NaiveDate) -> Result<HebrewDate, ParseError> {
    if token.eq_ignore_ascii_case("today") {
        return Ok(HebrewDate::from_gregorian(today)?);
    }

    let separator = if token.contains('/') {
        '/'
    } else if token.contains('-') {
        '-'
    } else {
        return Err(unrecognised(token));
    };

    let parts: Vec<&str> = token.split(separator).collect();
    if parts.len() != 3 {
        return Err(unrecognised(token));
    }

    if separator == '/' {
        let year = parse_number::<i32>(parts[2])?;
        if year > HEBREW_YEAR_THRESHOLD {
            let day = parse_number::<u8>(parts[0])?;
            let month = parse_number::<u8>(parts[1])?;
            return Ok(HebrewDate::new(year, month, day)?);
        }
    }

    parse_gregorian(token, &parts)
}

/// Renders the canonical input line for an event: `d/m/y q`.
///
/// ```
/// use tahara_calendar::HebrewDate;
/// use tahara_io::format_entry;
/// use tahara_rules::Qualifier;
///
/// let date = HebrewDate::new(5785, 12, 8).unwrap();
/// assert_eq!(format_entry(date, Qualifier::Night), "8/12/5785 0");
/// ```
pub fn format_entry(date: HebrewDate, qualifier: Qualifier) -> String {
    format!("{date} {}", qualifier.as_digit())
}

fn parse_gregorian(token: &str, parts: &[&str]) -> Result<HebrewDate, ParseError> {
    // A four-character first field selects year-first ordering.
    let (y, m, d) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else {
        (parts[2], parts[1], parts[0])
    };
    let year = parse_number::<i32>(y)?;
    let month = parse_number::<u32>(m)?;
    let day = parse_number::<u32>(d)?;

    let gregorian =
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ParseError::InvalidGregorian {
            value: token.to_string(),
        })?;
    Ok(HebrewDate::from_gregorian(gregorian)?)
}

fn parse_number<T: std::str::FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidNumber {
        value: s.to_string(),
    })
}

fn unrecognised(token: &str) -> ParseError {
    ParseError::UnrecognisedDate {
        value: token.to_string(),
    }
}

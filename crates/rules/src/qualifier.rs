//! Day/night qualifier of events and restricted days.

use std::fmt;

/// Whether an event (or a restriction) falls in the night or the day half of
/// a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Qualifier {
    /// Night (digit `0`).
    Night = 0,
    /// Day (digit `1`).
    Day = 1,
}

impl Qualifier {
    /// Returns the qualifier for a digit, or `None` for anything but 0 and 1.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Night),
            1 => Some(Self::Day),
            _ => None,
        }
    }

    /// Returns the digit used in the input grammar.
    pub fn as_digit(self) -> u8 {
        self as u8
    }

    /// Returns the other half of the day.
    pub fn opposite(self) -> Self {
        match self {
            Self::Night => Self::Day,
            Self::Day => Self::Night,
        }
    }

    /// Returns the Hebrew word used in rendered output ("ליל" / "יום").
    pub fn hebrew_name(self) -> &'static str {
        match self {
            Self::Night => "ליל",
            Self::Day => "יום",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Night => f.write_str("night"),
            Self::Day => f.write_str("day"),
        }
    }
}

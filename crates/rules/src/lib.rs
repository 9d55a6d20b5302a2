//! Restricted-day rule engine over observed Hebrew-calendar events.
//!
//! Each observed event (a date with a day/night qualifier) yields a list of
//! follow-on restricted days: fixed 30- and 31-day cycles, the same day of
//! the next month, the event's own interval, the adjacent-onah adjustments,
//! and a group of historical intervals that have not been uprooted.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────────┐     ┌──────────────────┐
//!  │  events      │────▶│  intervals       │────▶│  rule table      │
//!  │  (in order)  │     │  (b - a + 1)     │     │  (per event)     │
//!  └──────────────┘     └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use tahara_calendar::HebrewDate;
//! use tahara_rules::{EventRecord, Qualifier, RuleKind, RuleSet, process_events};
//!
//! let events = vec![
//!     EventRecord::new(HebrewDate::new(5785, 7, 1).unwrap(), Qualifier::Day),
//!     EventRecord::new(HebrewDate::new(5785, 7, 29).unwrap(), Qualifier::Day),
//! ];
//! let schedule = process_events(events, &RuleSet::new()).unwrap();
//!
//! let second = &schedule.events()[1];
//! assert_eq!(second.interval(), Some(29));
//! let personal = second.find(RuleKind::PersonalInterval).unwrap();
//! assert_eq!(personal.date(), second.date().add_days(28).unwrap());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod qualifier;
pub mod restricted;
pub mod schedule;
pub mod stability;

pub use config::RuleSet;
pub use engine::restricted_days_for;
pub use error::RuleError;
pub use event::EventRecord;
pub use qualifier::Qualifier;
pub use restricted::{RestrictedDay, RestrictedEntry, RuleKind, STABLE_GROUP_LABEL};
pub use schedule::{Schedule, compute_intervals, process_events};
pub use stability::stable_intervals;

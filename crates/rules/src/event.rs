//! Observed events and their computed restricted days.

use tahara_calendar::HebrewDate;

use crate::qualifier::Qualifier;
use crate::restricted::{RestrictedDay, RestrictedEntry, RuleKind};

/// One observed event: a date, its day/night qualifier, the interval since
/// the previous event, and the restricted days derived from it.
///
/// The restricted-day list is written only by the engine; once an event has
/// been handed back inside a [`Schedule`](crate::Schedule) it is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    date: HebrewDate,
    qualifier: Qualifier,
    interval: Option<u32>,
    pub(crate) restricted_days: Vec<RestrictedEntry>,
}

impl EventRecord {
    /// Creates an event with no interval and no restricted days.
    pub fn new(date: HebrewDate, qualifier: Qualifier) -> Self {
        Self {
            date,
            qualifier,
            interval: None,
            restricted_days: Vec::new(),
        }
    }

    /// Sets the interval since the previous event (inclusive day count).
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    pub(crate) fn set_interval(&mut self, interval: Option<u32>) {
        self.interval = interval;
    }

    /// Returns the event date.
    pub fn date(&self) -> HebrewDate {
        self.date
    }

    /// Returns the day/night qualifier.
    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    /// Returns the interval since the previous event, `None` for the first.
    pub fn interval(&self) -> Option<u32> {
        self.interval
    }

    /// Returns the event's weekday (1 = Sunday).
    pub fn weekday(&self) -> u8 {
        self.date.weekday()
    }

    /// Returns the computed restricted days in rule order.
    pub fn restricted_days(&self) -> &[RestrictedEntry] {
        &self.restricted_days
    }

    /// Returns the first single restricted day produced by `rule`.
    pub fn find(&self, rule: RuleKind) -> Option<&RestrictedDay> {
        self.restricted_days
            .iter()
            .filter_map(RestrictedEntry::as_single)
            .find(|day| day.rule() == rule)
    }

    /// Returns the stable-interval group, if one was produced.
    pub fn stable_group(&self) -> Option<&[RestrictedDay]> {
        self.restricted_days.iter().find_map(|entry| match entry {
            RestrictedEntry::Group { days, .. } => Some(days.as_slice()),
            RestrictedEntry::Single(_) => None,
        })
    }
}

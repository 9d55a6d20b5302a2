//! JSON output structures for a schedule.

use serde::Serialize;
use tahara_calendar::HebrewDate;
use tahara_rules::{EventRecord, RestrictedDay, RestrictedEntry, Schedule};

use crate::error::IoError;

/// Top-level JSON document.
#[derive(Debug, Serialize)]
pub struct ScheduleOutput {
    pub intervals: Vec<u32>,
    pub events: Vec<EventOutput>,
}

/// One event and its restricted days.
#[derive(Debug, Serialize)]
pub struct EventOutput {
    /// Hebrew date in input form (`d/m/y`).
    pub date: String,
    /// ISO Gregorian date, when representable.
    pub gregorian: Option<String>,
    pub qualifier: String,
    /// 1 = Sunday.
    pub weekday: u8,
    pub interval: Option<u32>,
    pub restricted_days: Vec<EntryOutput>,
}

/// A flat restricted day or the stable-interval group.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntryOutput {
    Single(DayOutput),
    Group { label: String, days: Vec<DayOutput> },
}

/// One restricted day.
#[derive(Debug, Serialize)]
pub struct DayOutput {
    pub rule: String,
    pub date: String,
    pub gregorian: Option<String>,
    pub qualifier: String,
    pub weekday: u8,
}

fn gregorian(date: HebrewDate) -> Option<String> {
    date.to_gregorian().ok().map(|d| d.to_string())
}

impl From<&RestrictedDay> for DayOutput {
    fn from(day: &RestrictedDay) -> Self {
        Self {
            rule: day.label().into_owned(),
            date: day.date().to_string(),
            gregorian: gregorian(day.date()),
            qualifier: day.qualifier().to_string(),
            weekday: day.weekday(),
        }
    }
}

impl From<&RestrictedEntry> for EntryOutput {
    fn from(entry: &RestrictedEntry) -> Self {
        match entry {
            RestrictedEntry::Single(day) => Self::Single(day.into()),
            RestrictedEntry::Group { label, days } => Self::Group {
                label: label.clone(),
                days: days.iter().map(DayOutput::from).collect(),
            },
        }
    }
}

impl From<&EventRecord> for EventOutput {
    fn from(event: &EventRecord) -> Self {
        Self {
            date: event.date().to_string(),
            gregorian: gregorian(event.date()),
            qualifier: event.qualifier().to_string(),
            weekday: event.weekday(),
            interval: event.interval(),
            restricted_days: event
                .restricted_days()
                .iter()
                .map(EntryOutput::from)
                .collect(),
        }
    }
}

impl From<&Schedule> for ScheduleOutput {
    fn from(schedule: &Schedule) -> Self {
        Self {
            intervals: schedule.intervals().to_vec(),
            events: schedule.events().iter().map(EventOutput::from).collect(),
        }
    }
}

/// Serialize a schedule to a pretty-printed JSON string.
pub fn to_json(schedule: &Schedule) -> Result<String, IoError> {
    serde_json::to_string_pretty(&ScheduleOutput::from(schedule)).map_err(|e| {
        IoError::Serialization {
            reason: e.to_string(),
        }
    })
}

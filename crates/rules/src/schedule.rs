//! Sequence driver: intervals across events and the per-run result.

use tracing::{debug, info};

use crate::config::RuleSet;
use crate::engine::restricted_days_for;
use crate::error::RuleError;
use crate::event::EventRecord;

/// Result of one run: the events with their restricted days, and the
/// interval list (one entry per event after the first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    events: Vec<EventRecord>,
    intervals: Vec<u32>,
}

impl Schedule {
    /// Returns the processed events in chronological order.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Returns the intervals; `intervals()[i]` closes at `events()[i + 1]`.
    pub fn intervals(&self) -> &[u32] {
        &self.intervals
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the run had no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the schedule and returns the events.
    pub fn into_events(self) -> Vec<EventRecord> {
        self.events
    }
}

/// Sets each event's interval from its predecessor and returns the list.
///
/// The interval counts both endpoints: `date_i - date_(i-1) + 1`. The first
/// event's interval is cleared.
///
/// # Errors
///
/// Returns [`RuleError::OutOfOrder`] if any event is dated before its
/// predecessor and [`RuleError::IntervalOverflow`] if a span does not fit a
/// `u32`. No event is modified in either case.
pub fn compute_intervals(events: &mut [EventRecord]) -> Result<Vec<u32>, RuleError> {
    for (index, pair) in events.windows(2).enumerate() {
        let (previous, current) = (pair[0].date(), pair[1].date());
        if current < previous {
            return Err(RuleError::OutOfOrder {
                index: index + 1,
                previous,
                current,
            });
        }
    }

    let intervals = events
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            inclusive_interval(index + 1, pair[0].date().days_until(pair[1].date()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(first) = events.first_mut() {
        first.set_interval(None);
    }
    for (event, &interval) in events.iter_mut().skip(1).zip(&intervals) {
        event.set_interval(Some(interval));
    }
    Ok(intervals)
}

/// Counts both ends of a span `days_apart` days long.
fn inclusive_interval(index: usize, days_apart: i64) -> Result<u32, RuleError> {
    let days = days_apart.saturating_add(1);
    u32::try_from(days).map_err(|_| RuleError::IntervalOverflow { index, days })
}

/// Runs the rule engine over a chronological sequence of events.
///
/// Intervals are computed first; then each event receives its restricted
/// days from its own data and the intervals up to and including its own.
/// Output for an event never depends on later events.
///
/// # Errors
///
/// Returns [`RuleError::OutOfOrder`] if the events are not in
/// non-decreasing date order; nothing is computed in that case. Returns
/// [`RuleError::Calendar`] if a restricted day leaves the supported range.
pub fn process_events(
    mut events: Vec<EventRecord>,
    rules: &RuleSet,
) -> Result<Schedule, RuleError> {
    let intervals = compute_intervals(&mut events)?;

    for (index, event) in events.iter_mut().enumerate() {
        let days = restricted_days_for(event, &intervals[..index], rules)?;
        debug!(
            index,
            date = %event.date(),
            interval = ?event.interval(),
            n_entries = days.len(),
            "restricted days computed"
        );
        event.restricted_days = days;
    }

    info!(
        n_events = events.len(),
        n_intervals = intervals.len(),
        "schedule computed"
    );
    Ok(Schedule { events, intervals })
}
